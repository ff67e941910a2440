use crate::convert::assemble;
use crate::{ConvertError, ImageBuffer, Interleaved, Layout, PixelDepth};

/// A borrowed view of an externally owned bitmap.
///
/// The data is row-major 8-bit samples with 3 (RGB) or 4 (RGBA) channels per
/// pixel and no row padding. The converter only reads through the reference;
/// ownership and lifetime of the underlying allocation stay with the caller.
#[derive(Debug, Clone, Copy)]
pub struct BitmapRef<'a> {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub data: &'a [u8],
}

impl<'a> BitmapRef<'a> {
    pub fn new(width: usize, height: usize, channels: usize, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    fn validate(&self) -> Result<(), ConvertError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::UnreadableSource("zero dimensions"));
        }
        if self.data.is_empty() {
            return Err(ConvertError::UnreadableSource("no pixel data"));
        }
        if self.channels != 3 && self.channels != 4 {
            return Err(ConvertError::UnreadableSource(
                "channel count is not 3 (RGB) or 4 (RGBA)",
            ));
        }
        if self.data.len() != self.width * self.height * self.channels {
            return Err(ConvertError::UnreadableSource(
                "data length disagrees with dimensions",
            ));
        }
        Ok(())
    }
}

/// Converts an external bitmap into a buffer with the requested layout and
/// depth, applying [`convert_to_gray`](crate::convert::convert_to_gray)'s
/// weighting rule when the target layout is gray.
///
/// Fails with [`ConvertError::UnreadableSource`] when the bitmap cannot be
/// interpreted; nothing is read past validation in that case.
pub fn convert_from_bitmap(
    bitmap: &BitmapRef<'_>,
    layout: Layout,
    depth: PixelDepth,
    weighted: bool,
) -> Result<ImageBuffer, ConvertError> {
    bitmap.validate()?;
    let interleaved = Interleaved::from_raw(
        bitmap.width,
        bitmap.height,
        bitmap.channels,
        bitmap.data.to_vec(),
    )
    .expect("validated bitmap dimensions");
    assemble(interleaved, layout, depth, weighted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Gray;

    const RGB: [u8; 12] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];

    #[test]
    fn rgb_bitmap_to_interleaved() {
        let bitmap = BitmapRef::new(2, 2, 3, &RGB);
        let buffer =
            convert_from_bitmap(&bitmap, Layout::Interleaved, PixelDepth::U8, false).unwrap();
        match buffer {
            ImageBuffer::InterleavedU8(image) => {
                assert_eq!(image.bands(), 3);
                assert_eq!(image.data(), &RGB);
            }
            other => panic!("expected interleaved u8, got {:?}", other),
        }
    }

    #[test]
    fn rgb_bitmap_to_gray_mean() {
        let bitmap = BitmapRef::new(2, 2, 3, &RGB);
        let buffer = convert_from_bitmap(&bitmap, Layout::Gray, PixelDepth::U8, false).unwrap();
        assert_eq!(
            buffer,
            ImageBuffer::from(Gray::from_raw(2, 2, vec![20u8, 50, 80, 110]).unwrap())
        );
    }

    #[test]
    fn rgba_bitmap_keeps_four_bands_until_gray_drops_them() {
        let rgba = [255u8, 255, 255, 9, 0, 0, 0, 9];
        let bitmap = BitmapRef::new(2, 1, 4, &rgba);

        let buffer = convert_from_bitmap(&bitmap, Layout::Planar, PixelDepth::U8, false).unwrap();
        assert_eq!(buffer.bands(), 4);

        // Weighted luma reads only R, G, B; the alpha band does not skew it.
        let gray = convert_from_bitmap(&bitmap, Layout::Gray, PixelDepth::U8, true).unwrap();
        assert_eq!(
            gray,
            ImageBuffer::from(Gray::from_raw(2, 1, vec![255u8, 0]).unwrap())
        );
    }

    #[test]
    fn float_target_is_unit_range() {
        let bitmap = BitmapRef::new(2, 1, 3, &[255u8, 255, 255, 0, 0, 0]);
        let buffer = convert_from_bitmap(&bitmap, Layout::Gray, PixelDepth::F32, true).unwrap();
        match buffer {
            ImageBuffer::GrayF32(image) => {
                assert!((image.get(0, 0) - 1.0).abs() < 1e-6);
                assert_eq!(image.get(1, 0), 0.0);
            }
            other => panic!("expected gray f32, got {:?}", other),
        }
    }

    #[test]
    fn unreadable_bitmaps_are_rejected() {
        let data = [0u8; 12];
        for bitmap in [
            BitmapRef::new(0, 2, 3, &data),
            BitmapRef::new(2, 0, 3, &data),
            BitmapRef::new(2, 2, 3, &[]),
            BitmapRef::new(2, 2, 2, &data),
            BitmapRef::new(3, 3, 3, &data),
        ] {
            assert!(matches!(
                convert_from_bitmap(&bitmap, Layout::Interleaved, PixelDepth::U8, false),
                Err(ConvertError::UnreadableSource(_))
            ));
        }
    }
}
