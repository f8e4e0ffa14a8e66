//! Packed 32-bit ARGB helpers.
//!
//! Layout is `A:24-31, R:16-23, G:8-15, B:0-7`.

pub const OPAQUE: u32 = 255;

/// Packs four 8-bit channels. Inputs above 255 are masked.
#[inline]
pub fn argb(a: u32, r: u32, g: u32, b: u32) -> u32 {
    ((a & 255) << 24) | ((r & 255) << 16) | ((g & 255) << 8) | (b & 255)
}

/// Opaque pixel from three 8-bit channels.
#[inline]
pub fn rgb(r: u8, g: u8, b: u8) -> u32 {
    argb(OPAQUE, r as u32, g as u32, b as u32)
}

/// Splits a packed pixel into `[a, r, g, b]`.
#[inline]
pub fn unpack_argb(color: u32) -> [u32; 4] {
    [alpha(color), red(color), green(color), blue(color)]
}

#[inline]
pub fn alpha(color: u32) -> u32 {
    (color >> 24) & 255
}

#[inline]
pub fn red(color: u32) -> u32 {
    (color >> 16) & 255
}

#[inline]
pub fn green(color: u32) -> u32 {
    (color >> 8) & 255
}

#[inline]
pub fn blue(color: u32) -> u32 {
    color & 255
}
