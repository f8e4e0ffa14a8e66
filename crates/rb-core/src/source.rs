use crate::Error;
use crate::error::checked_area;
use crate::raster::Raster;

/// Dimensions and channel layout of a pixel source.
///
/// `num_channels` describes the backing storage, not the packed output.
/// `has_alpha_channel` is the only mutable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    width: usize,
    height: usize,
    num_channels: usize,
    has_alpha_channel: bool,
}

impl ImageInfo {
    pub fn new(
        width: usize,
        height: usize,
        num_channels: usize,
        has_alpha_channel: bool,
    ) -> Result<Self, Error> {
        checked_area(width, height)?;
        if num_channels == 0 {
            return Err(Error::InvalidChannelCount(num_channels));
        }

        Ok(Self {
            width,
            height,
            num_channels,
            has_alpha_channel,
        })
    }

    /// Caller guarantees non-zero dimensions and channel count.
    pub(crate) fn from_valid(
        width: usize,
        height: usize,
        num_channels: usize,
        has_alpha_channel: bool,
    ) -> Self {
        debug_assert!(width > 0 && height > 0 && num_channels > 0);
        Self {
            width,
            height,
            num_channels,
            has_alpha_channel,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    pub fn has_alpha_channel(&self) -> bool {
        self.has_alpha_channel
    }

    pub fn set_has_alpha_channel(&mut self, alpha: bool) {
        self.has_alpha_channel = alpha;
    }
}

/// Random access to packed ARGB pixels by linear index `x + y * width`.
///
/// Implementors provide [`PixelSource::argb`]; everything else is derived
/// from it. Reads are side-effect free.
pub trait PixelSource {
    fn info(&self) -> &ImageInfo;

    /// Packed ARGB value of pixel `index`.
    ///
    /// Callers guarantee `index < self.len()`; implementations may panic
    /// otherwise. Sources without alpha data report `a = 255`.
    fn argb(&self, index: usize) -> u32;

    fn width(&self) -> usize {
        self.info().width()
    }

    fn height(&self) -> usize {
        self.info().height()
    }

    fn len(&self) -> usize {
        self.info().len()
    }

    fn is_empty(&self) -> bool {
        self.info().is_empty()
    }

    fn num_channels(&self) -> usize {
        self.info().num_channels()
    }

    fn has_alpha_channel(&self) -> bool {
        self.info().has_alpha_channel()
    }

    fn get(&self, index: usize) -> Result<u32, Error> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(self.argb(index))
    }

    fn get_xy(&self, x: usize, y: usize) -> Result<u32, Error> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::CoordOutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        Ok(self.argb(x + y * width))
    }

    /// Full-resolution export: every index visited once, copied verbatim.
    fn to_raster(&self) -> Raster {
        let pixels = (0..self.len()).map(|i| self.argb(i)).collect();
        Raster::from_parts(self.width(), self.height(), pixels, self.has_alpha_channel())
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn info(&self) -> &ImageInfo {
        (**self).info()
    }

    fn argb(&self, index: usize) -> u32 {
        (**self).argb(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageInfo, PixelSource};
    use crate::Error;

    struct Ramp {
        info: ImageInfo,
    }

    impl PixelSource for Ramp {
        fn info(&self) -> &ImageInfo {
            &self.info
        }

        fn argb(&self, index: usize) -> u32 {
            0xFF00_0000 | index as u32
        }
    }

    fn ramp(width: usize, height: usize) -> Ramp {
        Ramp {
            info: ImageInfo::new(width, height, 3, false).expect("valid info"),
        }
    }

    #[test]
    fn info_rejects_degenerate_layouts() {
        assert!(matches!(
            ImageInfo::new(0, 3, 3, false),
            Err(Error::InvalidDimension { .. })
        ));
        assert_eq!(
            ImageInfo::new(2, 2, 0, false),
            Err(Error::InvalidChannelCount(0))
        );
    }

    #[test]
    fn alpha_flag_is_mutable_dimensions_are_not() {
        let mut info = ImageInfo::new(4, 3, 4, true).expect("valid info");
        info.set_has_alpha_channel(false);
        assert!(!info.has_alpha_channel());
        assert_eq!((info.width(), info.height(), info.len()), (4, 3, 12));
        assert_eq!(info.num_channels(), 4);
    }

    #[test]
    fn xy_access_maps_to_linear_index() {
        let src = ramp(4, 3);
        assert_eq!(src.get_xy(1, 2), Ok(0xFF00_0009));
        assert_eq!(src.get_xy(3, 0), src.get(3));
    }

    #[test]
    fn out_of_range_access_is_an_error() {
        let src = ramp(4, 3);
        assert_eq!(
            src.get(12),
            Err(Error::IndexOutOfRange { index: 12, len: 12 })
        );
        assert_eq!(
            src.get_xy(4, 0),
            Err(Error::CoordOutOfRange {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(src.get_xy(0, 3).is_err());
    }

    #[test]
    fn export_copies_every_pixel_in_order() {
        let src = ramp(3, 2);
        let raster = src.to_raster();
        assert_eq!((raster.width(), raster.height()), (3, 2));
        assert!(!raster.has_alpha());
        let expected: Vec<u32> = (0..6).map(|i| 0xFF00_0000 | i).collect();
        assert_eq!(raster.pixels(), expected.as_slice());
    }

    fn last_pixel<S: PixelSource>(src: S) -> u32 {
        src.argb(src.len() - 1)
    }

    #[test]
    fn references_are_sources() {
        let src = ramp(2, 2);
        let by_ref: &dyn PixelSource = &src;
        assert_eq!(last_pixel(by_ref), 0xFF00_0003);
        assert_eq!(last_pixel(&src), 0xFF00_0003);
    }
}
