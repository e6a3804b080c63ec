//! Resampling, tile stamping and the translucent source overlay

use crate::assembly::grid::Block;
use crate::io::configuration::{MAX_TARGET_WIDTH, RESAMPLE_FILTER};
use crate::io::error::{MosaicError, Result, invalid_parameter, invalid_region};
use crate::library::tiles::Tile;
use image::{GenericImage, RgbImage, SubImage, imageops};

/// Resample `image` to exactly `width` x `height`
///
/// An image already at the requested size is copied unchanged.
pub fn resize_exact(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    imageops::resize(image, width, height, RESAMPLE_FILTER)
}

/// Width that keeps the aspect ratio of `source` at `target_height`
///
/// # Errors
///
/// Returns `InvalidParameter` if the source has no rows or the rounded
/// width would be zero or wider than `MAX_TARGET_WIDTH`
pub fn scaled_width(source: (u32, u32), target_height: u32) -> Result<u32> {
    let (width, height) = source;
    if height == 0 {
        return Err(invalid_parameter(
            "source_height",
            &height,
            &"source image has no rows",
        ));
    }

    let scale = f64::from(target_height) / f64::from(height);
    let scaled = (f64::from(width) * scale).round();
    if scaled < 1.0 || scaled > f64::from(MAX_TARGET_WIDTH) {
        return Err(invalid_parameter(
            "target_height",
            &target_height,
            &format!("scaling a {width}x{height} source gives an unusable width"),
        ));
    }

    Ok(scaled as u32)
}

/// Resize the source so its height is `target_height`, keeping aspect ratio
///
/// # Errors
///
/// Returns `InvalidParameter` if the scaled width would be zero
pub fn resize_to_height(source: &RgbImage, target_height: u32) -> Result<RgbImage> {
    let width = scaled_width(source.dimensions(), target_height)?;
    Ok(resize_exact(source, width, target_height))
}

/// View of the pixels under `block`
///
/// # Errors
///
/// Returns `InvalidRegion` if the block is empty or extends past the buffer
pub fn crop_region<'a>(buffer: &'a RgbImage, block: &Block) -> Result<SubImage<&'a RgbImage>> {
    let canvas = buffer.dimensions();
    let inside = block
        .x
        .checked_add(block.width)
        .is_some_and(|right| right <= canvas.0)
        && block
            .y
            .checked_add(block.height)
            .is_some_and(|bottom| bottom <= canvas.1);

    if block.width == 0 || block.height == 0 || !inside {
        return Err(region_error(block, canvas));
    }

    Ok(imageops::crop_imm(
        buffer,
        block.x,
        block.y,
        block.width,
        block.height,
    ))
}

/// Copy the top-left `block`-sized part of `tile` onto the canvas
///
/// Tiles are cropped, never scaled, when the block was clipped at an edge.
///
/// # Errors
///
/// Returns `InvalidRegion` if the block lies outside the canvas or is
/// larger than the tile
pub fn stamp_tile(canvas: &mut RgbImage, tile: &Tile, block: &Block) -> Result<()> {
    let (tile_width, tile_height) = tile.pixels().dimensions();
    if block.width > tile_width || block.height > tile_height {
        return Err(region_error(block, (tile_width, tile_height)));
    }

    let canvas_size = canvas.dimensions();
    let visible = imageops::crop_imm(tile.pixels(), 0, 0, block.width, block.height);
    canvas
        .copy_from(&*visible, block.x, block.y)
        .map_err(|_out_of_bounds| region_error(block, canvas_size))
}

/// Blend one channel: `canvas * (1 - opacity) + source * opacity`, rounded
pub fn blend_channel(canvas: u8, source: u8, opacity: f64) -> u8 {
    f64::from(source)
        .mul_add(opacity, f64::from(canvas) * (1.0 - opacity))
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Composite `source` over every canvas pixel at the given opacity
///
/// # Errors
///
/// Returns `InvalidRegion` if the two buffers differ in size
pub fn overlay(canvas: &mut RgbImage, source: &RgbImage, opacity: f64) -> Result<()> {
    let canvas_size = canvas.dimensions();
    if source.dimensions() != canvas_size {
        let (width, height) = source.dimensions();
        return Err(invalid_region(0, 0, width, height, canvas_size));
    }

    if opacity <= 0.0 {
        return Ok(());
    }

    for (target, over) in canvas.pixels_mut().zip(source.pixels()) {
        for (channel, &source_channel) in target.0.iter_mut().zip(over.0.iter()) {
            *channel = blend_channel(*channel, source_channel, opacity);
        }
    }

    Ok(())
}

const fn region_error(block: &Block, canvas: (u32, u32)) -> MosaicError {
    invalid_region(block.x, block.y, block.width, block.height, canvas)
}
