//! Downscaling with glyph aspect correction
//!
//! Terminal glyphs are roughly twice as tall as they are wide, so the height
//! divisor is always double the width divisor.

use crate::error::{AsciiError, Result};
use image::RgbImage;
use image::imageops::{self, FilterType};
use std::fmt;
use std::str::FromStr;

/// Integer shrink factor in [1, 10]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DownscaleFactor(u32);

impl DownscaleFactor {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 10;
    pub const DEFAULT: u32 = 5;

    pub fn new(value: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AsciiError::InvalidDownscale(value.to_string()))
        }
    }

    /// Parse user text into a factor
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let value: u32 = trimmed
            .parse()
            .map_err(|_| AsciiError::InvalidDownscale(trimmed.to_string()))?;
        Self::new(value)
    }

    /// Parse user text, substituting the default for anything invalid
    pub fn parse_or_default(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|e| {
            log::warn!("{}; using default {}", e, Self::DEFAULT);
            Self::default()
        })
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for DownscaleFactor {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl FromStr for DownscaleFactor {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DownscaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Target size for a `width` x `height` source
///
/// Returns `(width / F, height / (2F))`, rounded down.
pub fn downscaled_dimensions(width: u32, height: u32, factor: DownscaleFactor) -> (u32, u32) {
    let f = factor.get();
    (width / f, height / (f * 2))
}

/// Shrink an image by `factor`, halving height again for glyph aspect
///
/// Either output dimension may be zero for tiny sources; the result is then
/// an empty buffer of that shape rather than a resampled one.
pub fn downscale(input: &RgbImage, factor: DownscaleFactor, filter: FilterType) -> RgbImage {
    let (width, height) = input.dimensions();
    let (target_width, target_height) = downscaled_dimensions(width, height, factor);
    log::debug!(
        "downscaling {}x{} by {} to {}x{}",
        width,
        height,
        factor,
        target_width,
        target_height
    );

    if target_width == 0 || target_height == 0 {
        return RgbImage::new(target_width, target_height);
    }

    if target_width == width && target_height == height {
        return input.clone();
    }

    imageops::resize(input, target_width, target_height, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_factor_bounds() {
        assert!(DownscaleFactor::new(0).is_err());
        assert!(DownscaleFactor::new(1).is_ok());
        assert!(DownscaleFactor::new(10).is_ok());
        assert!(DownscaleFactor::new(11).is_err());
    }

    #[test]
    fn test_parse_trims_input() {
        assert_eq!(DownscaleFactor::parse(" 3\n").unwrap().get(), 3);
    }

    #[test]
    fn test_parse_or_default_falls_back() {
        for input in ["", "abc", "0", "11", "-2", "2.5"] {
            assert_eq!(DownscaleFactor::parse_or_default(input).get(), 5, "{:?}", input);
        }
        assert_eq!(DownscaleFactor::parse_or_default("7").get(), 7);
    }

    #[test]
    fn test_downscaled_dimensions() {
        let f = |v| DownscaleFactor::new(v).unwrap();
        assert_eq!(downscaled_dimensions(100, 100, f(1)), (100, 50));
        assert_eq!(downscaled_dimensions(100, 100, f(5)), (20, 10));
        assert_eq!(downscaled_dimensions(127, 85, f(3)), (42, 14));
        assert_eq!(downscaled_dimensions(9, 19, f(10)), (0, 0));
    }

    #[test]
    fn test_downscale_dimensions_for_every_factor() {
        let img = RgbImage::from_pixel(123, 77, Rgb([10, 20, 30]));
        for value in DownscaleFactor::MIN..=DownscaleFactor::MAX {
            let factor = DownscaleFactor::new(value).unwrap();
            let out = downscale(&img, factor, FilterType::Lanczos3);
            assert_eq!(out.dimensions(), (123 / value, 77 / (2 * value)));
        }
    }

    #[test]
    fn test_invalid_factor_matches_default() {
        let img = RgbImage::from_pixel(64, 64, Rgb([200, 100, 50]));
        let fallback = downscale(&img, DownscaleFactor::parse_or_default("banana"), FilterType::Nearest);
        let five = downscale(&img, DownscaleFactor::new(5).unwrap(), FilterType::Nearest);
        assert_eq!(fallback, five);
    }

    #[test]
    fn test_downscale_tiny_image_is_empty() {
        let img = RgbImage::from_pixel(3, 3, Rgb([255, 255, 255]));
        let out = downscale(&img, DownscaleFactor::new(10).unwrap(), FilterType::Lanczos3);
        assert_eq!(out.dimensions(), (0, 0));

        let wide = RgbImage::from_pixel(40, 3, Rgb([255, 255, 255]));
        let out = downscale(&wide, DownscaleFactor::new(2).unwrap(), FilterType::Lanczos3);
        assert_eq!(out.dimensions(), (20, 0));
    }
}
