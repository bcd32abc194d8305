use crate::error::AsciiError;
use image::imageops::{self, FilterType};
use image::RgbImage;
use imageproc::map::{
    from_blue_channel, from_green_channel, from_red_channel, into_blue_channel,
    into_green_channel, into_red_channel,
};
use std::fmt;
use std::str::FromStr;

/// Single color channel kept by [`isolate_channel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    /// Case-insensitive lookup; `None` for anything but red, green or blue
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "red" => Some(ColorChannel::Red),
            "green" => Some(ColorChannel::Green),
            "blue" => Some(ColorChannel::Blue),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorChannel::Red => "red",
            ColorChannel::Green => "green",
            ColorChannel::Blue => "blue",
        }
    }
}

impl FromStr for ColorChannel {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AsciiError::UnknownChannel(s.trim().to_string()))
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keep one channel's intensities and zero the other two
///
/// Splits out the selected plane and rebuilds an RGB image from it alone;
/// the two unselected planes come back as zero.
pub fn isolate_channel(img: &RgbImage, channel: ColorChannel) -> RgbImage {
    match channel {
        ColorChannel::Red => from_red_channel(&into_red_channel(img)),
        ColorChannel::Green => from_green_channel(&into_green_channel(img)),
        ColorChannel::Blue => from_blue_channel(&into_blue_channel(img)),
    }
}

/// Isolate a channel by user-supplied name
///
/// Unknown names pass the image through unchanged; a warning is logged so
/// the caller can tell a typo from a deliberate passthrough.
pub fn filter_by_name(img: &RgbImage, name: &str) -> RgbImage {
    match ColorChannel::parse(name) {
        Some(channel) => isolate_channel(img, channel),
        None => {
            log::warn!("unrecognized color channel '{}', leaving image unfiltered", name.trim());
            img.clone()
        }
    }
}

/// Double the height, keeping the width
///
/// Roughly matches the aspect the text rendering was corrected for.
pub fn stretch_height(img: &RgbImage, filter: FilterType) -> RgbImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return RgbImage::new(width, height * 2);
    }
    imageops::resize(img, width, height * 2, filter)
}

/// Produce the preview image for a user-typed channel name
///
/// # Arguments
/// * `img` - Original, full-resolution image
/// * `name` - Channel name; unknown names skip isolation
///
/// # Returns
/// The (possibly filtered) image stretched to double height
pub fn apply_color_filter(img: &RgbImage, name: &str) -> RgbImage {
    stretch_height(&filter_by_name(img, name), FilterType::CatmullRom)
}
