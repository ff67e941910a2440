//! Layout, depth and gray conversions over [`ImageBuffer`] values.
//!
//! These entry points inspect the (layout, depth) tag of the input and
//! dispatch to the typed conversion routines on the buffers themselves. Every
//! conversion preserves width × height; the band count changes only when
//! reducing to gray (to 1) or re-tagging a gray image as a one-band
//! planar/interleaved buffer.

use crate::{ConvertError, Gray, ImageBuffer, Interleaved, Layout, Pixel, PixelDepth, Planar};

/// Reduces a buffer of any layout to a single gray band of the same depth.
///
/// With `weighted` unset, each output pixel is the arithmetic mean of all
/// bands, accumulated in `f64`; 8-bit output rounds half away from zero.
/// With `weighted` set, the output is ITU-R BT.601 luma
/// (`0.299·R + 0.587·G + 0.114·B`) over the first three bands, which are
/// assumed to be R, G and B; any further bands (alpha) are ignored.
///
/// A gray input passes through unchanged in unweighted mode. Errors with
/// [`ConvertError::InvalidBandCount`] for zero-band images, and for weighted
/// reduction of images with fewer than three bands (a gray input included).
pub fn convert_to_gray(source: &ImageBuffer, weighted: bool) -> Result<ImageBuffer, ConvertError> {
    Ok(match source {
        ImageBuffer::InterleavedU8(buffer) => buffer.to_gray(weighted)?.into(),
        ImageBuffer::InterleavedF32(buffer) => buffer.to_gray(weighted)?.into(),
        ImageBuffer::PlanarU8(buffer) => buffer.to_gray(weighted)?.into(),
        ImageBuffer::PlanarF32(buffer) => buffer.to_gray(weighted)?.into(),
        ImageBuffer::GrayU8(buffer) if !weighted => buffer.clone().into(),
        ImageBuffer::GrayF32(buffer) if !weighted => buffer.clone().into(),
        ImageBuffer::GrayU8(_) | ImageBuffer::GrayF32(_) => {
            return Err(ConvertError::InvalidBandCount(1))
        }
    })
}

/// Re-lays a buffer out as planar. Interleaved input is split band by band,
/// gray input is re-tagged as a one-band planar image, planar input is
/// cloned. Infallible: every (layout, depth) combination has a planar form.
pub fn convert_to_planar(source: &ImageBuffer) -> ImageBuffer {
    match source {
        ImageBuffer::InterleavedU8(buffer) => buffer.to_planar().into(),
        ImageBuffer::InterleavedF32(buffer) => buffer.to_planar().into(),
        ImageBuffer::PlanarU8(buffer) => buffer.clone().into(),
        ImageBuffer::PlanarF32(buffer) => buffer.clone().into(),
        ImageBuffer::GrayU8(buffer) => buffer.to_planar().into(),
        ImageBuffer::GrayF32(buffer) => buffer.to_planar().into(),
    }
}

/// Re-lays a buffer out as interleaved. The exact inverse of
/// [`convert_to_planar`] for planar input.
pub fn convert_to_interleaved(source: &ImageBuffer) -> ImageBuffer {
    match source {
        ImageBuffer::InterleavedU8(buffer) => buffer.clone().into(),
        ImageBuffer::InterleavedF32(buffer) => buffer.clone().into(),
        ImageBuffer::PlanarU8(buffer) => buffer.to_interleaved().into(),
        ImageBuffer::PlanarF32(buffer) => buffer.to_interleaved().into(),
        ImageBuffer::GrayU8(buffer) => buffer.to_interleaved().into(),
        ImageBuffer::GrayF32(buffer) => buffer.to_interleaved().into(),
    }
}

/// Converts a buffer to the given component depth, preserving its layout.
///
/// Depth changes map through the unit interval: 8-bit 255 corresponds to
/// float 1.0. Converting to the depth the buffer already has clones it.
pub fn convert_to_depth(source: &ImageBuffer, depth: PixelDepth) -> ImageBuffer {
    match depth {
        PixelDepth::U8 => match source {
            ImageBuffer::InterleavedU8(buffer) => buffer.clone().into(),
            ImageBuffer::InterleavedF32(buffer) => buffer.map_depth::<u8>().into(),
            ImageBuffer::PlanarU8(buffer) => buffer.clone().into(),
            ImageBuffer::PlanarF32(buffer) => buffer.map_depth::<u8>().into(),
            ImageBuffer::GrayU8(buffer) => buffer.clone().into(),
            ImageBuffer::GrayF32(buffer) => buffer.map_depth::<u8>().into(),
        },
        PixelDepth::F32 => match source {
            ImageBuffer::InterleavedU8(buffer) => buffer.map_depth::<f32>().into(),
            ImageBuffer::InterleavedF32(buffer) => buffer.clone().into(),
            ImageBuffer::PlanarU8(buffer) => buffer.map_depth::<f32>().into(),
            ImageBuffer::PlanarF32(buffer) => buffer.clone().into(),
            ImageBuffer::GrayU8(buffer) => buffer.map_depth::<f32>().into(),
            ImageBuffer::GrayF32(buffer) => buffer.clone().into(),
        },
    }
}

/// Takes a freshly ingested interleaved image to the requested depth and
/// layout. The shared tail of bitmap ingestion and file loading.
pub(crate) fn assemble<T: Pixel>(
    source: Interleaved<T>,
    layout: Layout,
    depth: PixelDepth,
    weighted: bool,
) -> Result<ImageBuffer, ConvertError> {
    match depth {
        PixelDepth::U8 => lay_out(source.map_depth::<u8>(), layout, weighted),
        PixelDepth::F32 => lay_out(source.map_depth::<f32>(), layout, weighted),
    }
}

fn lay_out<T: Pixel>(
    source: Interleaved<T>,
    layout: Layout,
    weighted: bool,
) -> Result<ImageBuffer, ConvertError>
where
    ImageBuffer: From<Interleaved<T>> + From<Planar<T>> + From<Gray<T>>,
{
    Ok(match layout {
        Layout::Interleaved => source.into(),
        Layout::Planar => source.to_planar().into(),
        Layout::Gray => source.to_gray(weighted)?.into(),
    })
}
