//! Brightness palettes
//!
//! A palette is an ordered run of characters, lowest brightness first.
//! Brightness values are bucketed evenly across the palette.

use crate::error::{AsciiError, Result};
use std::fmt;

/// Default character ramp, from blank to dense
///
/// 12 levels; reads best as light text on a dark terminal
pub const DEFAULT_PALETTE: [char; 12] = [
    ' ', // 0: lowest brightness
    '.', // 1
    ',', // 2
    ':', // 3
    ';', // 4
    '+', // 5
    '*', // 6
    '?', // 7
    '%', // 8
    'S', // 9
    '#', // 10
    '@', // 11: highest brightness
];

/// Minimum number of characters a palette must hold
pub const MIN_PALETTE_LEN: usize = 2;

/// Ordered set of characters mapping brightness buckets to glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Build a palette from a character sequence
    ///
    /// Repeats and whitespace are accepted. Fails if fewer than
    /// [`MIN_PALETTE_LEN`] characters are supplied.
    pub fn new(chars: Vec<char>) -> Result<Self> {
        if chars.len() < MIN_PALETTE_LEN {
            return Err(AsciiError::PaletteTooShort(chars.len()));
        }
        Ok(Self { chars })
    }

    /// Build a palette from user text, one character per `char`
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(text.chars().collect())
    }

    /// Same characters in the opposite order
    pub fn reversed(&self) -> Self {
        let mut chars = self.chars.clone();
        chars.reverse();
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; a palette holds at least two characters
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Bucket index for a brightness value in [0, 255]
    ///
    /// `floor(brightness / (255 / N))`, clamped to `N - 1` so that full
    /// brightness never indexes past the end.
    pub fn index_for(&self, brightness: u8) -> usize {
        let n = self.chars.len();
        let bucket = 255.0 / n as f64;
        let index = (brightness as f64 / bucket).floor() as usize;
        index.min(n - 1)
    }

    /// Character for a brightness value in [0, 255]
    pub fn char_for(&self, brightness: u8) -> char {
        self.chars[self.index_for(brightness)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            chars: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_order() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 12);
        assert_eq!(palette.to_string(), " .,:;+*?%S#@");
    }

    #[test]
    fn test_char_for_darkest() {
        assert_eq!(Palette::default().char_for(0), ' ');
    }

    #[test]
    fn test_char_for_brightest_clamps() {
        assert_eq!(Palette::default().char_for(255), '@');
    }

    #[test]
    fn test_index_in_range_for_all_sizes() {
        for n in MIN_PALETTE_LEN..=64 {
            let palette = Palette::new(vec!['x'; n]).unwrap();
            for b in 0..=255u8 {
                assert!(palette.index_for(b) < n, "n={} b={}", n, b);
            }
        }
    }

    #[test]
    fn test_index_monotonic() {
        for n in [2, 3, 7, 12, 100, 300] {
            let palette = Palette::new(vec!['x'; n]).unwrap();
            let mut last = 0;
            for b in 0..=255u8 {
                let idx = palette.index_for(b);
                assert!(idx >= last);
                last = idx;
            }
        }
    }

    #[test]
    fn test_two_char_palette_splits_at_midpoint() {
        let palette = Palette::parse("ab").unwrap();
        assert_eq!(palette.char_for(127), 'a');
        assert_eq!(palette.char_for(128), 'b');
    }

    #[test]
    fn test_rejects_short_palette() {
        assert!(matches!(
            Palette::parse("x"),
            Err(AsciiError::PaletteTooShort(1))
        ));
        assert!(matches!(
            Palette::parse(""),
            Err(AsciiError::PaletteTooShort(0))
        ));
    }

    #[test]
    fn test_accepts_whitespace_and_repeats() {
        let palette = Palette::parse("  ##").unwrap();
        assert_eq!(palette.chars(), &[' ', ' ', '#', '#']);
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let palette = Palette::parse("abcdef").unwrap();
        assert_eq!(palette.reversed().to_string(), "fedcba");
        assert_eq!(palette.reversed().reversed(), palette);
        assert_eq!(Palette::default().reversed().reversed(), Palette::default());
    }

    #[test]
    fn test_reversed_maps_black_to_dense() {
        let palette = Palette::default().reversed();
        assert_eq!(palette.char_for(0), '@');
        assert_eq!(palette.char_for(255), ' ');
    }
}
