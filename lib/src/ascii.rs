use crate::palette::Palette;
use image::{Rgb, RgbImage};
use rayon::prelude::*;
use std::fmt;

/// Rendered text block, one newline-terminated line per pixel row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    text: String,
    width: u32,
    height: u32,
}

impl AsciiArt {
    /// Characters per line (excluding the newline)
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of lines
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Integer mean of the three channels, in [0, 255]
pub fn brightness(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Render one pixel row
fn render_row(img: &RgbImage, y: u32, palette: &Palette) -> String {
    let mut line = String::with_capacity(img.width() as usize + 1);
    for x in 0..img.width() {
        line.push(palette.char_for(brightness(img.get_pixel(x, y))));
    }
    line.push('\n');
    line
}

/// Map every pixel of `img` to a palette character
///
/// Rows are rendered in parallel and joined in order. A grid with a zero
/// dimension renders as empty text.
///
/// # Arguments
/// * `img` - Grid to render, usually already downscaled
/// * `palette` - Characters ordered from lowest to highest brightness
pub fn render_ascii(img: &RgbImage, palette: &Palette) -> AsciiArt {
    let (width, height) = img.dimensions();

    if width == 0 || height == 0 {
        return AsciiArt {
            text: String::new(),
            width,
            height: 0,
        };
    }

    let rows: Vec<String> = (0..height)
        .into_par_iter()
        .map(|y| render_row(img, y, palette))
        .collect();

    AsciiArt {
        text: rows.concat(),
        width,
        height,
    }
}
