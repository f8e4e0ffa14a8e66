//! Umbrella crate for the `rasterbox` workspace.
//!
//! Re-exports the image model, the box-filter resampler and the upload
//! packing crates.

pub use rb_core::*;
pub use rb_resize::*;
pub use rb_upload::*;
