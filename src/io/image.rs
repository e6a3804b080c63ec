//! Image decoding and encoding at the filesystem boundary

use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use std::path::Path;

/// Decode any supported image format into an 8-bit RGB buffer
///
/// Alpha is discarded.
///
/// # Errors
///
/// Returns `SourceLoad` if the file cannot be read or decoded
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| MosaicError::SourceLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Encode the buffer to `path`, choosing the format from its extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn encode_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
