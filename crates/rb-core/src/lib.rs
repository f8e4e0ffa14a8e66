//! Pixel-addressable image model.
//!
//! ## Packed ARGB
//! Every source exposes pixels as 32-bit values laid out
//! `A:24-31, R:16-23, G:8-15, B:0-7`. Storage without alpha data reports
//! `a = 255`.
//!
//! ## Indexing
//! Pixels are addressed by linear index `i = x + y * width` in
//! `[0, width * height)`. [`PixelSource::argb`] is the only required
//! accessor; bounds-checked access, `(x, y)` access and full-resolution
//! export are derived from it.
//!
//! ## Dimensions
//! Width and height are non-zero and fixed after construction. The alpha
//! flag is the only mutable piece of metadata and requires `&mut` access.

pub mod argb;
mod bytes;
mod error;
mod image;
mod procedural;
mod raster;
mod source;

pub use bytes::ByteImage;
pub use error::{Error, checked_area, checked_byte_len};
pub use image::Image;
pub use procedural::{ProceduralImage, solid_color};
pub use raster::Raster;
pub use source::{ImageInfo, PixelSource};
