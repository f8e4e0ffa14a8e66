use crate::image::Image;
use crate::source::{ImageInfo, PixelSource};
use crate::{Error, argb};

/// Row-major buffer of packed ARGB pixels plus an alpha flag.
///
/// Produced by export and resampling; also readable as a [`PixelSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    info: ImageInfo,
    pixels: Image<u32>,
}

impl Raster {
    pub fn new(width: usize, height: usize, pixels: Vec<u32>, has_alpha: bool) -> Result<Self, Error> {
        let pixels = Image::from_vec(width, height, pixels)?;
        Ok(Self::from_image(pixels, has_alpha))
    }

    pub fn filled(width: usize, height: usize, color: u32, has_alpha: bool) -> Result<Self, Error> {
        let pixels = Image::new_fill(width, height, color)?;
        Ok(Self::from_image(pixels, has_alpha))
    }

    pub fn from_image(pixels: Image<u32>, has_alpha: bool) -> Self {
        let info = ImageInfo::from_valid(pixels.width(), pixels.height(), 4, has_alpha);
        Self { info, pixels }
    }

    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<u32>, has_alpha: bool) -> Self {
        Self::from_image(Image::from_raw_parts(width, height, pixels), has_alpha)
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn has_alpha(&self) -> bool {
        self.info.has_alpha_channel()
    }

    pub fn set_has_alpha(&mut self, alpha: bool) {
        self.info.set_has_alpha_channel(alpha);
    }

    pub fn pixels(&self) -> &[u32] {
        self.pixels.data()
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        self.pixels.data_mut()
    }

    pub fn as_image(&self) -> &Image<u32> {
        &self.pixels
    }

    pub fn into_image(self) -> Image<u32> {
        self.pixels
    }

    /// Flattens to `A, R, G, B` bytes, four per pixel.
    pub fn to_argb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels().len() * 4);
        for &px in self.pixels() {
            out.extend_from_slice(&px.to_be_bytes());
        }
        out
    }

    /// Flattens to `R, G, B, A` bytes, the order most encoders expect.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels().len() * 4);
        for &px in self.pixels() {
            let [a, r, g, b] = argb::unpack_argb(px);
            out.extend_from_slice(&[r as u8, g as u8, b as u8, a as u8]);
        }
        out
    }
}

impl PixelSource for Raster {
    fn info(&self) -> &ImageInfo {
        &self.info
    }

    fn argb(&self, index: usize) -> u32 {
        self.pixels.data()[index]
    }

    fn to_raster(&self) -> Raster {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::Raster;
    use crate::{Error, PixelSource};

    #[test]
    fn new_validates_pixel_count() {
        let err = Raster::new(2, 2, vec![0; 3], true).expect_err("short raster");
        assert_eq!(
            err,
            Error::BufferLengthMismatch {
                expected: 4,
                actual: 3
            }
        );
        assert!(Raster::new(0, 1, Vec::new(), true).is_err());
    }

    #[test]
    fn raster_reads_back_as_a_source() {
        let raster = Raster::new(2, 1, vec![0x1122_3344, 0xFF00_00FF], false).expect("valid raster");
        assert_eq!(raster.num_channels(), 4);
        assert_eq!(raster.get_xy(1, 0), Ok(0xFF00_00FF));
        assert_eq!(raster.to_raster(), raster);
    }

    #[test]
    fn byte_flattening_orders() {
        let raster = Raster::new(2, 1, vec![0x1122_3344, 0xFFAA_BBCC], true).expect("valid raster");
        assert_eq!(
            raster.to_argb_bytes(),
            vec![0x11, 0x22, 0x33, 0x44, 0xFF, 0xAA, 0xBB, 0xCC]
        );
        assert_eq!(
            raster.to_rgba_bytes(),
            vec![0x22, 0x33, 0x44, 0x11, 0xAA, 0xBB, 0xCC, 0xFF]
        );
    }

    #[test]
    fn alpha_flag_toggles_without_touching_pixels() {
        let mut raster = Raster::filled(3, 3, 0x80FF_FFFF, true).expect("valid raster");
        raster.set_has_alpha(false);
        assert!(!raster.has_alpha());
        assert!(raster.pixels().iter().all(|&p| p == 0x80FF_FFFF));
    }
}
