use crate::argb::{OPAQUE, argb};
use crate::error::checked_byte_len;
use crate::source::{ImageInfo, PixelSource};
use crate::Error;

/// Interleaved 8-bit pixel storage.
///
/// Channel layouts by count: 1 = gray, 2 = gray + alpha, 3 = RGB, 4 = RGBA.
/// Layouts without alpha data report `a = 255`. Stored alpha is only used
/// while `has_alpha_channel` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ByteImage {
    info: ImageInfo,
    data: Vec<u8>,
}

impl ByteImage {
    pub fn new(width: usize, height: usize, num_channels: usize, data: Vec<u8>) -> Result<Self, Error> {
        if !(1..=4).contains(&num_channels) {
            return Err(Error::InvalidChannelCount(num_channels));
        }
        let expected = checked_byte_len(width, height, num_channels)?;
        if data.len() != expected {
            return Err(Error::BufferLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        let has_alpha = num_channels == 2 || num_channels == 4;
        Ok(Self {
            info: ImageInfo::new(width, height, num_channels, has_alpha)?,
            data,
        })
    }

    pub fn from_gray8(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        Self::new(width, height, 1, data)
    }

    pub fn from_rgb8(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        Self::new(width, height, 3, data)
    }

    pub fn from_rgba8(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        Self::new(width, height, 4, data)
    }

    pub fn set_has_alpha_channel(&mut self, alpha: bool) {
        self.info.set_has_alpha_channel(alpha);
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn stored_alpha(&self, a: u8) -> u32 {
        if self.info.has_alpha_channel() { a as u32 } else { OPAQUE }
    }
}

impl PixelSource for ByteImage {
    fn info(&self) -> &ImageInfo {
        &self.info
    }

    fn argb(&self, index: usize) -> u32 {
        let n = self.info.num_channels();
        let px = &self.data[index * n..index * n + n];
        match *px {
            [v] => argb(OPAQUE, v as u32, v as u32, v as u32),
            [v, a] => argb(self.stored_alpha(a), v as u32, v as u32, v as u32),
            [r, g, b] => argb(OPAQUE, r as u32, g as u32, b as u32),
            [r, g, b, a] => argb(self.stored_alpha(a), r as u32, g as u32, b as u32),
            _ => unreachable!("channel count is validated at construction"),
        }
    }
}
