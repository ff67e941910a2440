use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while converting or loading an image.
///
/// All failures surface synchronously to the caller; nothing is retried
/// internally and no partial output survives an error.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The pixel data type is not one of the two supported depths
    /// (8-bit unsigned or 32-bit float).
    #[error("unsupported pixel data type: {0}")]
    UnsupportedDataType(&'static str),

    /// A conversion was asked to operate on a band count it cannot handle,
    /// such as an image with zero bands or a weighted gray reduction of an
    /// image without an R, G and B band.
    #[error("invalid band count: {0}")]
    InvalidBandCount(usize),

    /// Per-band buffers assembled into one image disagree in size.
    #[error("band {band} is {actual_width}x{actual_height} but band 0 is {width}x{height}")]
    BandCountMismatch {
        band: usize,
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// The external bitmap cannot be interpreted (zero dimensions, missing
    /// pixel data, or a data length inconsistent with its metadata).
    #[error("unreadable source bitmap: {0}")]
    UnreadableSource(&'static str),

    /// The path given to a load does not resolve to a readable file.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but its content cannot be decoded as a raster image.
    #[error("failed to decode image")]
    DecodeError(#[source] image::ImageError),
}
