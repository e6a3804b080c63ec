//! Error types for mosaic loading, assembly and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to load the source image from the filesystem
    SourceLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// No usable tiles remained after skipping undecodable sources
    EmptyTileLibrary {
        /// Number of tile sources that were offered to the loader
        candidates: usize,
    },

    /// A pixel region was empty or fell outside its canvas
    ///
    /// Block generation never produces such regions, so this indicates a
    /// defect rather than bad input
    InvalidRegion {
        /// Left edge of the region
        x: u32,
        /// Top edge of the region
        y: u32,
        /// Region width
        width: u32,
        /// Region height
        height: u32,
        /// Dimensions (width, height) of the buffer the region was taken from
        canvas: (u32, u32),
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::EmptyTileLibrary { candidates } => {
                write!(
                    f,
                    "Tile library is empty: none of {candidates} tile sources could be used"
                )
            }
            Self::InvalidRegion {
                x,
                y,
                width,
                height,
                canvas,
            } => {
                write!(
                    f,
                    "Invalid region {width}x{height} at ({x}, {y}) on {}x{} canvas",
                    canvas.0, canvas.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid region error for a region taken from a `canvas`-sized buffer
pub const fn invalid_region(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    canvas: (u32, u32),
) -> MosaicError {
    MosaicError::InvalidRegion {
        x,
        y,
        width,
        height,
        canvas,
    }
}
