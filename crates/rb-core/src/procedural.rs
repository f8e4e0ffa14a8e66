use crate::source::{ImageInfo, PixelSource};
use crate::Error;

/// Pixels computed on demand from `(x, y)`.
///
/// The closure must be pure; consumers may read a pixel any number of times.
pub struct ProceduralImage<F> {
    info: ImageInfo,
    pixel: F,
}

impl<F> ProceduralImage<F>
where
    F: Fn(usize, usize) -> u32,
{
    pub fn new(width: usize, height: usize, has_alpha: bool, pixel: F) -> Result<Self, Error> {
        Ok(Self {
            info: ImageInfo::new(width, height, 4, has_alpha)?,
            pixel,
        })
    }

    pub fn set_has_alpha_channel(&mut self, alpha: bool) {
        self.info.set_has_alpha_channel(alpha);
    }
}

/// Single-color image. The alpha flag is set unless `color` is opaque.
pub fn solid_color(
    width: usize,
    height: usize,
    color: u32,
) -> Result<ProceduralImage<impl Fn(usize, usize) -> u32>, Error> {
    ProceduralImage::new(width, height, (color >> 24) != 255, move |_, _| color)
}

impl<F> PixelSource for ProceduralImage<F>
where
    F: Fn(usize, usize) -> u32,
{
    fn info(&self) -> &ImageInfo {
        &self.info
    }

    fn argb(&self, index: usize) -> u32 {
        let width = self.info.width();
        (self.pixel)(index % width, index / width)
    }
}

#[cfg(test)]
mod tests {
    use super::{ProceduralImage, solid_color};
    use crate::PixelSource;

    #[test]
    fn closure_sees_coordinates() {
        let img = ProceduralImage::new(3, 2, false, |x, y| (y * 16 + x) as u32).expect("valid image");
        assert_eq!(img.get(4), Ok(0x11));
        assert_eq!(img.get_xy(2, 1), Ok(0x12));
    }

    #[test]
    fn solid_alpha_flag_follows_color() {
        let opaque = solid_color(2, 2, 0xFF12_3456).expect("valid image");
        assert!(!opaque.has_alpha_channel());
        assert_eq!(opaque.to_raster().pixels(), &[0xFF12_3456; 4]);

        let translucent = solid_color(1, 1, 0x7F00_0000).expect("valid image");
        assert!(translucent.has_alpha_channel());
    }
}
