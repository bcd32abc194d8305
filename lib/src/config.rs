use crate::palette::Palette;
use crate::resize::DownscaleFactor;
use image::imageops::FilterType;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Shrink factor, 1-10, default 5
    pub downscale: DownscaleFactor,

    /// Characters from lowest to highest brightness
    pub palette: Palette,
    /// Render with the palette reversed, default false
    pub reverse_palette: bool,

    /// Resampling filter used when downscaling, default Lanczos3
    pub filter: FilterType,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            downscale: DownscaleFactor::default(),

            palette: Palette::default(),
            reverse_palette: false,

            filter: FilterType::Lanczos3,
        }
    }
}

impl ConvertConfig {
    /// Palette actually used for rendering, with reversal applied
    pub fn effective_palette(&self) -> Palette {
        if self.reverse_palette {
            self.palette.reversed()
        } else {
            self.palette.clone()
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConvertConfig::default();
        assert_eq!(config.downscale.get(), 5);
        assert!(!config.reverse_palette);
        assert_eq!(config.filter, FilterType::Lanczos3);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_effective_palette_reverses() {
        let config = ConvertConfig {
            palette: Palette::parse("abc").unwrap(),
            reverse_palette: true,
            ..Default::default()
        };
        assert_eq!(config.effective_palette().to_string(), "cba");
        assert_eq!(config.palette.to_string(), "abc");
    }

    #[test]
    fn test_effective_palette_untouched_without_reverse() {
        let config = ConvertConfig::default();
        assert_eq!(config.effective_palette(), Palette::default());
    }
}
