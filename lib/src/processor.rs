use crate::ascii::{AsciiArt, render_ascii};
use crate::config::ConvertConfig;
use crate::resize::downscale;
use image::RgbImage;

/// Converts an input image to ASCII art
///
/// Pipeline:
/// 1. Downscale by the configured factor (height by twice the factor)
/// 2. Apply palette reversal if requested
/// 3. Map each pixel's brightness to a palette character
///
/// The factor and palette bounds are enforced when
/// [`DownscaleFactor`](crate::resize::DownscaleFactor) and
/// [`Palette`](crate::palette::Palette) are built, so every `ConvertConfig`
/// renders.
///
/// # Arguments
/// * `input` - The full-resolution RGB image
/// * `config` - Configuration parameters for the conversion
///
/// # Returns
/// The rendered text, one line per downscaled row
pub fn process_image(input: &RgbImage, config: &ConvertConfig) -> AsciiArt {
    let small = downscale(input, config.downscale, config.filter);
    let palette = config.effective_palette();
    let art = render_ascii(&small, &palette);

    log::debug!("rendered {}x{} characters", art.width(), art.height());
    art
}
