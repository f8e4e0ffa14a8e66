use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid dimension: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("pixel index {index} out of range for {len} pixels")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("pixel ({x}, {y}) out of range for {width}x{height} image")]
    CoordOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },
    #[error("unsupported channel count {0}")]
    InvalidChannelCount(usize),
}

/// Returns `width * height`, rejecting zero-sized and overflowing dimensions.
pub fn checked_area(width: usize, height: usize) -> Result<usize, Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Same as [`checked_area`], additionally multiplied by `bytes_per_pixel`.
pub fn checked_byte_len(width: usize, height: usize, bytes_per_pixel: usize) -> Result<usize, Error> {
    checked_area(width, height)?
        .checked_mul(bytes_per_pixel)
        .ok_or(Error::InvalidDimension { width, height })
}
