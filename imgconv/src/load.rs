use crate::convert::assemble;
use crate::{ConvertError, ImageBuffer, Interleaved, Layout, PixelDepth};
use image::DynamicImage;
use log::info;
use std::io::ErrorKind;
use std::path::Path;

/// Opens, decodes and converts a raster image file in one scoped call.
///
/// The file handle lives only inside the decoder; it is released on every
/// path, success or failure. Decoding is delegated to the [`image`] crate, so
/// format support is whatever that codec stack was compiled with.
///
/// Errors with [`ConvertError::FileNotFound`] when the path does not resolve,
/// [`ConvertError::DecodeError`] when the content cannot be decoded, and
/// [`ConvertError::UnsupportedDataType`] when the decoded samples are neither
/// 8-bit nor 32-bit float (a 16-bit PNG, for example). Conversion failures
/// pass through unchanged from [`convert_from_dynamic`].
pub fn load_from_path(
    path: impl AsRef<Path>,
    layout: Layout,
    depth: PixelDepth,
    weighted: bool,
) -> Result<ImageBuffer, ConvertError> {
    let path = path.as_ref();
    let dynamic = image::open(path).map_err(|error| match error {
        image::ImageError::IoError(ref io) if io.kind() == ErrorKind::NotFound => {
            ConvertError::FileNotFound(path.to_path_buf())
        }
        other => ConvertError::DecodeError(other),
    })?;
    info!(
        "loaded a {} x {} image with {} bands from {}",
        dynamic.width(),
        dynamic.height(),
        dynamic.color().channel_count(),
        path.display()
    );
    convert_from_dynamic(&dynamic, layout, depth, weighted)
}

/// Converts an already decoded [`DynamicImage`] into a buffer with the
/// requested layout and depth.
///
/// 8-bit and 32-bit float sources are supported in their gray, gray+alpha,
/// RGB and RGBA forms; anything else (16-bit samples) errors with
/// [`ConvertError::UnsupportedDataType`].
pub fn convert_from_dynamic(
    image: &DynamicImage,
    layout: Layout,
    depth: PixelDepth,
    weighted: bool,
) -> Result<ImageBuffer, ConvertError> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    match image {
        DynamicImage::ImageLuma8(buffer) => {
            let source = Interleaved::from_raw(width, height, 1, buffer.as_raw().clone())
                .expect("decoded image container size");
            assemble(source, layout, depth, weighted)
        }
        DynamicImage::ImageLumaA8(buffer) => {
            let source = Interleaved::from_raw(width, height, 2, buffer.as_raw().clone())
                .expect("decoded image container size");
            assemble(source, layout, depth, weighted)
        }
        DynamicImage::ImageRgb8(buffer) => {
            let source = Interleaved::from_raw(width, height, 3, buffer.as_raw().clone())
                .expect("decoded image container size");
            assemble(source, layout, depth, weighted)
        }
        DynamicImage::ImageRgba8(buffer) => {
            let source = Interleaved::from_raw(width, height, 4, buffer.as_raw().clone())
                .expect("decoded image container size");
            assemble(source, layout, depth, weighted)
        }
        DynamicImage::ImageRgb32F(buffer) => {
            let source = Interleaved::from_raw(width, height, 3, buffer.as_raw().clone())
                .expect("decoded image container size");
            assemble(source, layout, depth, weighted)
        }
        DynamicImage::ImageRgba32F(buffer) => {
            let source = Interleaved::from_raw(width, height, 4, buffer.as_raw().clone())
                .expect("decoded image container size");
            assemble(source, layout, depth, weighted)
        }
        _ => Err(ConvertError::UnsupportedDataType(
            "only 8-bit and 32-bit float samples are supported",
        )),
    }
}
