use crate::Error;
use crate::error::checked_area;

/// Owned row-major 2D buffer.
///
/// Dimensions are fixed at construction and always non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = checked_area(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Caller guarantees `data.len() == width * height` with both non-zero.
    pub(crate) fn from_raw_parts(width: usize, height: usize, data: Vec<T>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Result<Self, Error> {
        let len = checked_area(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Image;
    use crate::Error;

    #[test]
    fn from_vec_checks_length() {
        let err = Image::from_vec(3, 2, vec![0u8; 5]).expect_err("short buffer");
        assert_eq!(
            err,
            Error::BufferLengthMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn zero_sized_images_are_rejected() {
        assert!(Image::from_vec(0, 2, Vec::<u8>::new()).is_err());
        assert!(Image::new_fill(4, 0, 0u32).is_err());
    }

    #[test]
    fn rows_and_pixels_are_row_major() {
        let mut img = Image::from_vec(3, 2, vec![1u32, 2, 3, 4, 5, 6]).expect("valid image");

        assert_eq!(img.row(0), &[1, 2, 3]);
        assert_eq!(img.row(1), &[4, 5, 6]);
        assert_eq!(img.get(2, 1), Some(&6));
        assert_eq!(img.get(3, 0), None);

        img.row_mut(1)[0] = 40;
        *img.get_mut(1, 0).expect("in bounds") = 20;
        assert_eq!(img.data(), &[1, 20, 3, 40, 5, 6]);
    }
}
