use rb_core::argb::OPAQUE;
use rb_core::{Error, checked_byte_len};

/// Expands tightly packed `R, G, B` bytes to `A, R, G, B` with `A = 255`.
///
/// `rgb` must hold exactly `3 * width * height` bytes.
pub fn pack_rgb_with_alpha_pad(width: usize, height: usize, rgb: &[u8]) -> Result<Vec<u8>, Error> {
    let len = checked_byte_len(width, height, 4)?;
    check_rgb_len(width, height, rgb)?;
    let mut out = vec![0u8; len];
    pad_rows(rgb, &mut out);
    Ok(out)
}

/// Same as [`pack_rgb_with_alpha_pad`], writing into `dst` which must hold
/// exactly `4 * width * height` bytes.
pub fn pack_rgb_with_alpha_pad_into(
    width: usize,
    height: usize,
    rgb: &[u8],
    dst: &mut [u8],
) -> Result<(), Error> {
    let expected = checked_byte_len(width, height, 4)?;
    check_rgb_len(width, height, rgb)?;
    if dst.len() != expected {
        return Err(Error::BufferLengthMismatch {
            expected,
            actual: dst.len(),
        });
    }
    pad_rows(rgb, dst);
    Ok(())
}

fn check_rgb_len(width: usize, height: usize, rgb: &[u8]) -> Result<(), Error> {
    let expected = checked_byte_len(width, height, 3)?;
    if rgb.len() != expected {
        return Err(Error::BufferLengthMismatch {
            expected,
            actual: rgb.len(),
        });
    }
    Ok(())
}

fn pad_rows(rgb: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(rgb.len() / 3, dst.len() / 4);
    for (out, px) in dst.chunks_exact_mut(4).zip(rgb.chunks_exact(3)) {
        out[0] = OPAQUE as u8;
        out[1..].copy_from_slice(px);
    }
}
