//! Tile directory enumeration and library loading

use crate::io::error::{MosaicError, Result};
use crate::io::image::decode_image;
use crate::io::progress::ProgressManager;
use crate::library::tiles::TileLibrary;
use std::path::{Path, PathBuf};

/// Regular files in `directory`, sorted by path
///
/// Files are not filtered by extension; anything that fails to decode is
/// skipped later.
///
/// # Errors
///
/// Returns `FileSystem` if the directory is missing or cannot be read
pub fn list_tile_sources<P: AsRef<Path>>(directory: P) -> Result<Vec<PathBuf>> {
    let directory = directory.as_ref();
    let read_error = |operation: &'static str, source: std::io::Error| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation,
        source,
    };

    if !directory.is_dir() {
        return Err(read_error(
            "open tiles directory",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(|e| read_error("read directory", e))? {
        let path = entry.map_err(|e| read_error("read directory entry", e))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Decode every source in `directory` and build a tile library
///
/// Undecodable files are logged and skipped.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - No file in it could be decoded
/// - `tile_size` is zero
pub fn load_tile_library<P: AsRef<Path>>(
    directory: P,
    tile_size: u32,
    mut progress: Option<&mut ProgressManager>,
) -> Result<TileLibrary> {
    let paths = list_tile_sources(&directory)?;
    let total = paths.len();

    if let Some(pm) = progress.as_deref_mut() {
        pm.start_stage("Loading tiles", total);
    }

    // Decoding lazily keeps only one full-size source in memory at a time
    let mut skipped = 0usize;
    let decoded = paths.iter().enumerate().filter_map(|(index, path)| {
        let image = decode_image(path)
            .inspect_err(|error| {
                skipped += 1;
                log::warn!("Skipping tile: {error}");
            })
            .ok();
        if let Some(pm) = progress.as_deref_mut() {
            pm.update(index + 1, total);
        }
        image
    });
    let library = TileLibrary::load(decoded, tile_size);

    if let Some(pm) = progress.as_deref_mut() {
        pm.complete_stage();
    }
    if skipped > 0 {
        log::info!("Skipped {skipped} of {total} tile sources");
    }

    library.map_err(|error| match error {
        MosaicError::EmptyTileLibrary { .. } => {
            MosaicError::EmptyTileLibrary { candidates: total }
        }
        other => other,
    })
}
