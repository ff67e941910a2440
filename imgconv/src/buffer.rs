use crate::{ConvertError, Pixel, PixelDepth};
use derive_more::From;

/// ITU-R BT.601 luma coefficients, the fixed convention for weighted gray
/// reduction. Applied to the first three bands, assumed to be R, G, B.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// The pixel layout family of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Band values packed per pixel (`RGBRGB…`).
    Interleaved,
    /// One contiguous region per band (all R, then all G, …).
    Planar,
    /// A single band.
    Gray,
}

/// A single-band image over a contiguous row-major buffer.
///
/// This is a plain wrapper around a `Vec` rather than a pixel-container
/// abstraction; conversions read and write the raw buffer directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Gray<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Pixel> Gray<T> {
    /// Creates a zero-filled image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::zero(); width * height],
        }
    }

    /// Wraps an existing buffer. Returns `None` when the buffer length does
    /// not match the dimensions.
    pub fn from_raw(width: usize, height: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.width + x]
    }

    pub fn put(&mut self, x: usize, y: usize, value: T) {
        self.data[y * self.width + x] = value;
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Reinterprets the image as a one-band planar buffer. The pixel data is
    /// identical; only the layout tag changes.
    pub fn to_planar(&self) -> Planar<T> {
        Planar {
            width: self.width,
            height: self.height,
            bands: 1,
            data: self.data.clone(),
        }
    }

    /// Reinterprets the image as a one-band interleaved buffer.
    pub fn to_interleaved(&self) -> Interleaved<T> {
        Interleaved {
            width: self.width,
            height: self.height,
            bands: 1,
            data: self.data.clone(),
        }
    }

    /// Converts to another component depth through the unit interval.
    pub fn map_depth<U: Pixel>(&self) -> Gray<U> {
        Gray {
            width: self.width,
            height: self.height,
            data: map_components(&self.data),
        }
    }
}

/// A multi-band image with band values packed per pixel (`RGBRGB…`).
#[derive(Debug, Clone, PartialEq)]
pub struct Interleaved<T> {
    width: usize,
    height: usize,
    bands: usize,
    data: Vec<T>,
}

impl<T: Pixel> Interleaved<T> {
    /// Creates a zero-filled image.
    pub fn new(width: usize, height: usize, bands: usize) -> Self {
        Self {
            width,
            height,
            bands,
            data: vec![T::zero(); width * height * bands],
        }
    }

    /// Wraps an existing buffer. Returns `None` when the buffer length does
    /// not match the dimensions.
    pub fn from_raw(width: usize, height: usize, bands: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == width * height * bands).then_some(Self {
            width,
            height,
            bands,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bands(&self) -> usize {
        self.bands
    }

    /// The band values of one pixel.
    pub fn pixel(&self, x: usize, y: usize) -> &[T] {
        let start = (y * self.width + x) * self.bands;
        &self.data[start..start + self.bands]
    }

    pub fn put_pixel(&mut self, x: usize, y: usize, values: &[T]) {
        let start = (y * self.width + x) * self.bands;
        self.data[start..start + self.bands].copy_from_slice(values);
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Splits the per-pixel packed bands into one contiguous plane per band.
    /// Band order, dimensions and depth are preserved.
    pub fn to_planar(&self) -> Planar<T> {
        let mut planar = Planar::new(self.width, self.height, self.bands);
        // A zero-band image has no data to re-lay-out, and a zero chunk size
        // is not a valid iteration step.
        if self.bands == 0 {
            return planar;
        }
        let plane = self.width * self.height;
        for (index, values) in self.data.chunks_exact(self.bands).enumerate() {
            for (band, &value) in values.iter().enumerate() {
                planar.data[band * plane + index] = value;
            }
        }
        planar
    }

    /// Reduces all bands to a single gray band. See
    /// [`convert_to_gray`](crate::convert::convert_to_gray) for the exact
    /// averaging and weighting rules.
    pub fn to_gray(&self, weighted: bool) -> Result<Gray<T>, ConvertError> {
        check_gray_bands(self.bands, weighted)?;
        let mut gray = Gray::new(self.width, self.height);
        for (out, values) in gray.data.iter_mut().zip(self.data.chunks_exact(self.bands)) {
            *out = if weighted {
                weighted_luma(values[0], values[1], values[2])
            } else {
                band_mean(values.iter().copied())
            };
        }
        Ok(gray)
    }

    /// Converts to another component depth through the unit interval.
    pub fn map_depth<U: Pixel>(&self) -> Interleaved<U> {
        Interleaved {
            width: self.width,
            height: self.height,
            bands: self.bands,
            data: map_components(&self.data),
        }
    }
}

/// A multi-band image with one contiguous plane per band.
#[derive(Debug, Clone, PartialEq)]
pub struct Planar<T> {
    width: usize,
    height: usize,
    bands: usize,
    data: Vec<T>,
}

impl<T: Pixel> Planar<T> {
    /// Creates a zero-filled image.
    pub fn new(width: usize, height: usize, bands: usize) -> Self {
        Self {
            width,
            height,
            bands,
            data: vec![T::zero(); width * height * bands],
        }
    }

    /// Wraps an existing plane-major buffer. Returns `None` when the buffer
    /// length does not match the dimensions.
    pub fn from_raw(width: usize, height: usize, bands: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == width * height * bands).then_some(Self {
            width,
            height,
            bands,
            data,
        })
    }

    /// Assembles a planar image from individual gray bands.
    ///
    /// Fails with [`ConvertError::BandCountMismatch`] when the bands disagree
    /// in width or height, and with [`ConvertError::InvalidBandCount`] when no
    /// bands are supplied.
    pub fn from_bands(bands: &[Gray<T>]) -> Result<Self, ConvertError> {
        let first = bands.first().ok_or(ConvertError::InvalidBandCount(0))?;
        for (index, band) in bands.iter().enumerate() {
            if band.width != first.width || band.height != first.height {
                return Err(ConvertError::BandCountMismatch {
                    band: index,
                    width: first.width,
                    height: first.height,
                    actual_width: band.width,
                    actual_height: band.height,
                });
            }
        }
        let mut data = Vec::with_capacity(first.width * first.height * bands.len());
        for band in bands {
            data.extend_from_slice(&band.data);
        }
        Ok(Self {
            width: first.width,
            height: first.height,
            bands: bands.len(),
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bands(&self) -> usize {
        self.bands
    }

    /// The contiguous plane of one band.
    pub fn band(&self, band: usize) -> &[T] {
        let plane = self.width * self.height;
        &self.data[band * plane..(band + 1) * plane]
    }

    pub fn band_mut(&mut self, band: usize) -> &mut [T] {
        let plane = self.width * self.height;
        &mut self.data[band * plane..(band + 1) * plane]
    }

    /// Merges the per-band planes back into per-pixel packed bands. This is
    /// the exact inverse of [`Interleaved::to_planar`].
    pub fn to_interleaved(&self) -> Interleaved<T> {
        let mut interleaved = Interleaved::new(self.width, self.height, self.bands);
        if self.bands == 0 {
            return interleaved;
        }
        let plane = self.width * self.height;
        for (index, values) in interleaved.data.chunks_exact_mut(self.bands).enumerate() {
            for (band, value) in values.iter_mut().enumerate() {
                *value = self.data[band * plane + index];
            }
        }
        interleaved
    }

    /// Reduces all bands to a single gray band. See
    /// [`convert_to_gray`](crate::convert::convert_to_gray) for the exact
    /// averaging and weighting rules.
    pub fn to_gray(&self, weighted: bool) -> Result<Gray<T>, ConvertError> {
        check_gray_bands(self.bands, weighted)?;
        let plane = self.width * self.height;
        let mut gray = Gray::new(self.width, self.height);
        for (index, out) in gray.data.iter_mut().enumerate() {
            *out = if weighted {
                weighted_luma(
                    self.data[index],
                    self.data[plane + index],
                    self.data[2 * plane + index],
                )
            } else {
                band_mean((0..self.bands).map(|band| self.data[band * plane + index]))
            };
        }
        Ok(gray)
    }

    /// Converts to another component depth through the unit interval.
    pub fn map_depth<U: Pixel>(&self) -> Planar<U> {
        Planar {
            width: self.width,
            height: self.height,
            bands: self.bands,
            data: map_components(&self.data),
        }
    }
}

fn check_gray_bands(bands: usize, weighted: bool) -> Result<(), ConvertError> {
    if bands == 0 || (weighted && bands < 3) {
        return Err(ConvertError::InvalidBandCount(bands));
    }
    Ok(())
}

/// The unweighted band mean, accumulated in `f64` and narrowed through the
/// fixed per-type rounding policy (u8: round half away from zero).
fn band_mean<T: Pixel>(values: impl ExactSizeIterator<Item = T>) -> T {
    let count = values.len();
    let sum: f64 = values.map(Pixel::to_f64).sum();
    T::from_f64(sum / count as f64)
}

/// BT.601 luma over the first three bands. Any further bands (alpha) are
/// ignored.
fn weighted_luma<T: Pixel>(r: T, g: T, b: T) -> T {
    T::from_f64(LUMA_R * r.to_f64() + LUMA_G * g.to_f64() + LUMA_B * b.to_f64())
}

fn map_components<T: Pixel, U: Pixel>(data: &[T]) -> Vec<U> {
    data.iter()
        .map(|&value| U::from_unit_f64(value.to_unit_f64()))
        .collect()
}

/// An image buffer tagged with its (layout, depth) pair.
///
/// This is the dynamic counterpart of the typed buffers: code that handles
/// arbitrary images carries one of these, and the conversion entry points in
/// [`crate::convert`] check the tag pair and dispatch to the typed routines.
#[derive(Debug, Clone, PartialEq, From)]
pub enum ImageBuffer {
    InterleavedU8(Interleaved<u8>),
    InterleavedF32(Interleaved<f32>),
    PlanarU8(Planar<u8>),
    PlanarF32(Planar<f32>),
    GrayU8(Gray<u8>),
    GrayF32(Gray<f32>),
}

impl ImageBuffer {
    pub fn width(&self) -> usize {
        match self {
            Self::InterleavedU8(buffer) => buffer.width(),
            Self::InterleavedF32(buffer) => buffer.width(),
            Self::PlanarU8(buffer) => buffer.width(),
            Self::PlanarF32(buffer) => buffer.width(),
            Self::GrayU8(buffer) => buffer.width(),
            Self::GrayF32(buffer) => buffer.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::InterleavedU8(buffer) => buffer.height(),
            Self::InterleavedF32(buffer) => buffer.height(),
            Self::PlanarU8(buffer) => buffer.height(),
            Self::PlanarF32(buffer) => buffer.height(),
            Self::GrayU8(buffer) => buffer.height(),
            Self::GrayF32(buffer) => buffer.height(),
        }
    }

    pub fn bands(&self) -> usize {
        match self {
            Self::InterleavedU8(buffer) => buffer.bands(),
            Self::InterleavedF32(buffer) => buffer.bands(),
            Self::PlanarU8(buffer) => buffer.bands(),
            Self::PlanarF32(buffer) => buffer.bands(),
            Self::GrayU8(_) | Self::GrayF32(_) => 1,
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Self::InterleavedU8(_) | Self::InterleavedF32(_) => Layout::Interleaved,
            Self::PlanarU8(_) | Self::PlanarF32(_) => Layout::Planar,
            Self::GrayU8(_) | Self::GrayF32(_) => Layout::Gray,
        }
    }

    pub fn depth(&self) -> PixelDepth {
        match self {
            Self::InterleavedU8(_) | Self::PlanarU8(_) | Self::GrayU8(_) => PixelDepth::U8,
            Self::InterleavedF32(_) | Self::PlanarF32(_) | Self::GrayF32(_) => PixelDepth::F32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_bands_are_contiguous() {
        let interleaved =
            Interleaved::from_raw(2, 1, 3, vec![1u8, 2, 3, 4, 5, 6]).unwrap();
        let planar = interleaved.to_planar();
        assert_eq!(planar.band(0), &[1, 4]);
        assert_eq!(planar.band(1), &[2, 5]);
        assert_eq!(planar.band(2), &[3, 6]);
    }

    #[test]
    fn from_bands_assembles_planes_in_order() {
        let r = Gray::from_raw(2, 2, vec![1u8, 2, 3, 4]).unwrap();
        let g = Gray::from_raw(2, 2, vec![5u8, 6, 7, 8]).unwrap();
        let planar = Planar::from_bands(&[r, g]).unwrap();
        assert_eq!(planar.bands(), 2);
        assert_eq!(planar.band(0), &[1, 2, 3, 4]);
        assert_eq!(planar.band(1), &[5, 6, 7, 8]);
    }

    #[test]
    fn from_bands_rejects_mismatched_dimensions() {
        let a = Gray::<u8>::new(2, 2);
        let b = Gray::<u8>::new(3, 2);
        match Planar::from_bands(&[a, b]) {
            Err(ConvertError::BandCountMismatch { band, .. }) => assert_eq!(band, 1),
            other => panic!("expected BandCountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn from_bands_rejects_empty_input() {
        assert!(matches!(
            Planar::<u8>::from_bands(&[]),
            Err(ConvertError::InvalidBandCount(0))
        ));
    }

    #[test]
    fn from_raw_rejects_short_buffers() {
        assert!(Interleaved::<u8>::from_raw(2, 2, 3, vec![0; 11]).is_none());
        assert!(Planar::<u8>::from_raw(2, 2, 3, vec![0; 11]).is_none());
        assert!(Gray::<u8>::from_raw(2, 2, vec![0; 3]).is_none());
    }

    #[test]
    fn tag_accessors() {
        let buffer = ImageBuffer::from(Interleaved::<f32>::new(4, 3, 2));
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.bands(), 2);
        assert_eq!(buffer.layout(), Layout::Interleaved);
        assert_eq!(buffer.depth(), PixelDepth::F32);

        let buffer = ImageBuffer::from(Gray::<u8>::new(4, 3));
        assert_eq!(buffer.bands(), 1);
        assert_eq!(buffer.layout(), Layout::Gray);
        assert_eq!(buffer.depth(), PixelDepth::U8);
    }
}
