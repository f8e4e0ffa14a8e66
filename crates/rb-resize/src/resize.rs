use rb_core::argb::{argb, unpack_argb};
use rb_core::{Error, Image, PixelSource, Raster};

/// Applies the clamp rule to a requested size. Never grows either axis.
pub fn clamp_dims(src_w: usize, src_h: usize, dst_w: usize, dst_h: usize) -> (usize, usize) {
    let (mut dst_w, mut dst_h) = (dst_w, dst_h);
    if dst_w > src_w {
        dst_h = scale_down(dst_h, src_w, dst_w);
        dst_w = src_w;
    }
    if dst_h > src_h {
        dst_w = scale_down(dst_w, src_h, dst_h);
        dst_h = src_h;
    }
    (dst_w, dst_h)
}

/// `value * num / den` with a widened intermediate; requires `num < den`,
/// so the result is below `value` and fits in `usize`.
#[inline]
fn scale_down(value: usize, num: usize, den: usize) -> usize {
    debug_assert!(num < den);
    (value as u128 * num as u128 / den as u128) as usize
}

/// Bin boundaries partitioning `src_len` pixels into `dst_len` bins.
///
/// Returns `dst_len + 1` non-decreasing edges from `0` to `src_len`; bin `i`
/// covers `[edges[i], edges[i + 1])`.
pub fn bin_edges(src_len: usize, dst_len: usize) -> Vec<usize> {
    debug_assert!(dst_len > 0);
    (0..=dst_len).map(|i| (i * src_len) / dst_len).collect()
}

/// Resizes `src` within its own bounds using box-filter averaging.
///
/// The requested size is clamped first (see [`clamp_dims`]). When the
/// clamped size equals the source size the pixels are exported verbatim.
pub fn resize<S: PixelSource + ?Sized>(src: &S, dst_w: usize, dst_h: usize) -> Result<Raster, Error> {
    if dst_w == 0 || dst_h == 0 {
        return Err(Error::InvalidDimension {
            width: dst_w,
            height: dst_h,
        });
    }

    let (src_w, src_h) = (src.width(), src.height());
    let (eff_w, eff_h) = clamp_dims(src_w, src_h, dst_w, dst_h);
    let identity = eff_w == src_w && eff_h == src_h;
    tracing::debug!(
        src_w,
        src_h,
        dst_w,
        dst_h,
        eff_w,
        eff_h,
        identity,
        "resizing pixel source"
    );

    if identity {
        return Ok(src.to_raster());
    }

    let mut dst = Image::new_fill(eff_w, eff_h, 0u32)?;
    box_filter_into(src, &mut dst);
    Ok(Raster::from_image(dst, src.has_alpha_channel()))
}

fn box_filter_into<S: PixelSource + ?Sized>(src: &S, dst: &mut Image<u32>) {
    let src_w = src.width();
    let x_edges = bin_edges(src_w, dst.width());
    let y_edges = bin_edges(src.height(), dst.height());

    for (dst_y, ys) in y_edges.windows(2).enumerate() {
        let (src_y0, src_y1) = (ys[0], ys[1]);
        let dst_row = dst.row_mut(dst_y);
        for (out, xs) in dst_row.iter_mut().zip(x_edges.windows(2)) {
            let (src_x0, src_x1) = (xs[0], xs[1]);
            let mut sum = [0u64; 4];
            for y in src_y0..src_y1 {
                let row_start = y * src_w;
                for i in row_start + src_x0..row_start + src_x1 {
                    for (acc, ch) in sum.iter_mut().zip(unpack_argb(src.argb(i))) {
                        *acc += ch as u64;
                    }
                }
            }

            let count = ((src_x1 - src_x0) * (src_y1 - src_y0)) as u64;
            if count > 1 {
                for acc in &mut sum {
                    *acc /= count;
                }
            }
            let [a, r, g, b] = sum.map(|v| v as u32);
            *out = argb(a, r, g, b);
        }
    }
}
