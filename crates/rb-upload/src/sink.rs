use rb_core::{Error, PixelSource, checked_byte_len};

use crate::pack::pack_rgb_with_alpha_pad_into;
use crate::pool::{BufferPool, PooledBuffer};

/// Receiver of 4-byte-per-pixel `A, R, G, B` buffers, typically a GPU texture.
///
/// `pixels.len()` is always `4 * width * height`. With `check_redundancy`
/// set the sink may skip the upload when the content is unchanged.
pub trait UploadSink {
    type Error;

    fn upload(
        &mut self,
        width: usize,
        height: usize,
        pixels: &[u8],
        check_redundancy: bool,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError<E> {
    #[error(transparent)]
    Pixel(#[from] Error),
    #[error("upload sink rejected buffer: {0}")]
    Sink(E),
}

/// Packs tightly packed RGB bytes through a pooled staging buffer and hands
/// the result to `sink`. The staging buffer goes back to `pool` on every path.
pub fn upload_rgb<S, P>(
    sink: &mut S,
    pool: &P,
    width: usize,
    height: usize,
    rgb: &[u8],
    check_redundancy: bool,
) -> Result<(), UploadError<S::Error>>
where
    S: UploadSink + ?Sized,
    P: BufferPool + ?Sized,
{
    let len = checked_byte_len(width, height, 4)?;
    let rgb_len = checked_byte_len(width, height, 3)?;
    if rgb.len() != rgb_len {
        return Err(Error::BufferLengthMismatch {
            expected: rgb_len,
            actual: rgb.len(),
        }
        .into());
    }

    let mut staging = PooledBuffer::acquire(pool, len);
    pack_rgb_with_alpha_pad_into(width, height, rgb, &mut staging)?;
    hand_off(sink, width, height, &staging, check_redundancy)
}

/// Exports every pixel of `src` as `A, R, G, B` bytes and hands them to `sink`.
pub fn upload_source<S, P, I>(
    sink: &mut S,
    pool: &P,
    src: &I,
    check_redundancy: bool,
) -> Result<(), UploadError<S::Error>>
where
    S: UploadSink + ?Sized,
    P: BufferPool + ?Sized,
    I: PixelSource + ?Sized,
{
    let (width, height) = (src.width(), src.height());
    let len = checked_byte_len(width, height, 4)?;

    let mut staging = PooledBuffer::acquire(pool, len);
    for (i, out) in staging.chunks_exact_mut(4).enumerate() {
        out.copy_from_slice(&src.argb(i).to_be_bytes());
    }
    hand_off(sink, width, height, &staging, check_redundancy)
}

fn hand_off<S>(
    sink: &mut S,
    width: usize,
    height: usize,
    pixels: &[u8],
    check_redundancy: bool,
) -> Result<(), UploadError<S::Error>>
where
    S: UploadSink + ?Sized,
{
    let expected = checked_byte_len(width, height, 4)?;
    if pixels.len() != expected {
        return Err(Error::BufferLengthMismatch {
            expected,
            actual: pixels.len(),
        }
        .into());
    }

    tracing::debug!(
        width,
        height,
        bytes = pixels.len(),
        check_redundancy,
        "uploading pixel buffer"
    );
    sink.upload(width, height, pixels, check_redundancy)
        .map_err(UploadError::Sink)
}
