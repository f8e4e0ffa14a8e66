//! GPU upload staging for pixel data.
//!
//! Upload targets want 4 bytes per pixel in `A, R, G, B` order. Tightly
//! packed RGB input is padded with an opaque alpha byte per pixel; any
//! [`rb_core::PixelSource`] can be staged directly from its packed ARGB values.
//!
//! Staging buffers come from an injected [`BufferPool`] and are held by a
//! [`PooledBuffer`] lease, which returns them on drop, including when the
//! sink fails or a precondition check rejects the input.

mod pack;
mod pool;
mod sink;

pub use pack::{pack_rgb_with_alpha_pad, pack_rgb_with_alpha_pad_into};
pub use pool::{BufferPool, NoPool, PooledBuffer, VecPool};
pub use sink::{UploadError, UploadSink, upload_rgb, upload_source};
