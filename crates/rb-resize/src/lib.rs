//! Box-filter resampling of pixel sources.
//!
//! Clamp policy:
//! - The output never exceeds the source in either axis.
//! - A requested width above the source width rescales the requested height
//!   by `src_w / dst_w` (truncating) and pins the width to `src_w`; the height
//!   axis is then treated the same way.
//!
//! Representational meaning:
//! - The source is split into `dst_h x dst_w` non-overlapping bins whose
//!   edges sit at `(i * src_len) / dst_len`. Bin sizes differ by at most one
//!   pixel per axis.
//! - Each destination pixel is the truncated per-channel mean of its bin.

mod resize;

pub use resize::{bin_edges, clamp_dims, resize};
