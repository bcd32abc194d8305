use crate::prompt::Prompter;
use crate::viewer::Viewer;
use anyhow::{Context, Result};
use ascii_gen::{
    ColorChannel, ConvertConfig, ImageSource, Palette, apply_color_filter, process_image,
    save_art,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Settings that come from the command line rather than the prompts
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Directory the `.txt` file is written to
    pub output_dir: PathBuf,
    /// Bad URLs tolerated before giving up
    pub max_url_attempts: u32,
    /// Whether a viewer is launched for the color-filter preview
    pub preview: bool,
}

/// Run one interactive conversion from URL to saved text file
///
/// Steps, in order: acquire the image, ask for the downscale factor and
/// palette, render and print the art, optionally preview a color-filtered
/// copy of the original image, then save the art.
///
/// # Returns
/// Path of the written text file
pub fn run<R, W, S, V>(
    prompter: &mut Prompter<R, W>,
    source: &S,
    viewer: &mut V,
    options: &SessionOptions,
) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
    S: ImageSource,
    V: Viewer,
{
    // Step 1: Acquire
    let url = prompter.ask_url(options.max_url_attempts)?;
    let image = match source.load(&url) {
        Ok(image) => image.to_rgb8(),
        Err(e) => {
            log::error!("{}", e);
            prompter.say("Invalid URL, please try again.")?;
            return Err(e).with_context(|| format!("could not load an image from {}", url));
        }
    };

    // Step 2: Conversion settings
    let downscale = prompter.ask_downscale()?;
    let palette = prompter.ask_custom_palette(&Palette::default())?;
    let reverse_palette = prompter.ask_reverse()?;
    let config = ConvertConfig {
        downscale,
        palette,
        reverse_palette,
        ..Default::default()
    };

    // Step 3: Render
    let art = process_image(&image, &config);
    prompter.show_art(&art)?;

    // Step 4: Optional color-filter preview of the original image
    if let Some(name) = prompter.ask_color_filter()? {
        // filter_by_name already logs unknown names
        if ColorChannel::parse(&name).is_none() {
            prompter.say(&format!(
                "Unrecognized color filter '{}', showing the image without a filter.",
                name
            ))?;
        }
        let filtered = apply_color_filter(&image, &name);
        match viewer.show(&filtered) {
            Ok(path) if !options.preview => {
                prompter.say(&format!("Filtered image written to {}", path.display()))?
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("{:#}", e);
                prompter.say(&format!("Could not display the filtered image: {:#}", e))?;
            }
        }
    }

    // Step 5: Save
    let name = prompter.ask_filename()?;
    let path = save_art(&art, &options.output_dir, &name)
        .with_context(|| format!("could not save the ASCII art as '{}'", name))?;
    prompter.say(&format!("The ASCII art has been saved to {}.", path.display()))?;

    Ok(path)
}
