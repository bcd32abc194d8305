//! ASCII Generator - turn an image at a URL into ASCII art
//!
//! Images are downscaled with a doubled height divisor (terminal glyphs are
//! about twice as tall as wide) and each pixel's average brightness picks a
//! character from an ordered palette.
//!
//! # Example
//! ```no_run
//! use ascii_gen::{ConvertConfig, ImageFetcher, process_image, save_art};
//! use std::path::Path;
//!
//! let fetcher = ImageFetcher::new(None).unwrap();
//! let img = fetcher.fetch("https://example.com/cat.png").unwrap().to_rgb8();
//! let art = process_image(&img, &ConvertConfig::default());
//! println!("{}", art);
//! save_art(&art, Path::new("outputs"), "cat").unwrap();
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filters;
pub mod output;
pub mod palette;
pub mod processor;
pub mod resize;

// Re-export main types for convenience
pub use ascii::{AsciiArt, render_ascii};
pub use config::ConvertConfig;
pub use error::{AsciiError, Result};
pub use fetch::{ImageFetcher, ImageSource};
pub use filters::{ColorChannel, apply_color_filter};
pub use output::{DEFAULT_OUTPUT_DIR, save_art};
pub use palette::{DEFAULT_PALETTE, Palette};
pub use processor::process_image;
pub use resize::DownscaleFactor;
