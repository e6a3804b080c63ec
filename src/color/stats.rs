//! Average colour, luma brightness and RGB distance

use crate::io::error::{Result, invalid_region};
use image::{GenericImageView, Rgb};

/// Luma weight of the red channel
pub const RED_LUMA: f64 = 0.299;
/// Luma weight of the green channel
pub const GREEN_LUMA: f64 = 0.587;
/// Luma weight of the blue channel
pub const BLUE_LUMA: f64 = 0.114;

/// An 8-bit RGB colour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `image` pixel
    pub const fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    /// Luma-weighted brightness in `[0, 255]`
    pub fn brightness(self) -> f64 {
        brightness(self)
    }

    /// Euclidean distance to another colour in the RGB cube
    pub fn distance(self, other: Self) -> f64 {
        color_distance(self, other)
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self { r, g, b }
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

/// Mean colour of every pixel in a region, truncated per channel
///
/// # Errors
///
/// Returns `InvalidRegion` if the region contains no pixels
pub fn average_color<V>(region: &V) -> Result<Color>
where
    V: GenericImageView<Pixel = Rgb<u8>>,
{
    let (width, height) = region.dimensions();
    let count = u64::from(width) * u64::from(height);
    if count == 0 {
        return Err(invalid_region(0, 0, width, height, (width, height)));
    }

    let mut sums = [0u64; 3];
    for (_, _, pixel) in region.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += u64::from(channel);
        }
    }

    // Each quotient is a mean of u8 values, so it always fits
    let [r, g, b] = sums.map(|sum| (sum / count) as u8);
    Ok(Color::new(r, g, b))
}

// Both feed the selection score, so they round as plain sums like it does

/// Luma-weighted brightness `0.299 R + 0.587 G + 0.114 B`
#[allow(clippy::suboptimal_flops)]
pub fn brightness(color: Color) -> f64 {
    RED_LUMA * f64::from(color.r)
        + GREEN_LUMA * f64::from(color.g)
        + BLUE_LUMA * f64::from(color.b)
}

/// Euclidean distance between two colours in RGB space
#[allow(clippy::suboptimal_flops)]
pub fn color_distance(a: Color, b: Color) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}
