//! Line-oriented prompts for the interactive session.
//!
//! Every question loops until it gets an answer it can use, except the
//! URL prompt which gives up after a fixed number of attempts. Reading past
//! the end of input is an error so a closed stdin never spins forever.

use ascii_gen::fetch::validate_url;
use ascii_gen::output::sanitize_filename;
use ascii_gen::{AsciiArt, AsciiError, DownscaleFactor, Palette, Result};
use std::io::{self, BufRead, Write};

pub const URL_PROMPT: &str = "Enter the URL of the image you want to convert: ";
pub const DOWNSCALE_PROMPT: &str = "Enter the downscale factor (1 ~ 10, 5 for default.): ";
pub const CUSTOMIZE_PROMPT: &str = "Do you want to customize the ASCII character set? (y/n)";
pub const PALETTE_PROMPT: &str = "Enter the new set of ASCII characters: ";
pub const REVERSE_PROMPT: &str = "Do you want to reverse the ASCII character set? (y/n)";
pub const FILTER_PROMPT: &str = "Do you want to apply a color filter to the image? (y/n)";
pub const CHANNEL_PROMPT: &str = "Which color filter do you want to apply? (red/green/blue)";
pub const FILENAME_PROMPT: &str = "Enter the filename to save the ASCII art: ";

/// Prompt reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a full line to the user
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print the rendered art followed by a blank line
    pub fn show_art(&mut self, art: &AsciiArt) -> Result<()> {
        writeln!(self.output, "{}", art)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line with the trailing line ending removed
    ///
    /// Leading and inner whitespace is kept; it is meaningful for palettes.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AsciiError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the session finished",
            )));
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Show `question` inline and read the answer
    fn ask_inline(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Show `question` on its own line and read the answer
    fn ask_line(&mut self, question: &str) -> Result<String> {
        self.say(question)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask until the answer is `y` or `n` (any case)
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            match self.ask_line(question)?.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Invalid response, please try again.")?,
            }
        }
    }

    /// Ask for an image URL, giving up after `max_attempts` bad answers
    pub fn ask_url(&mut self, max_attempts: u32) -> Result<String> {
        let max_attempts = max_attempts.max(1);
        for attempt in 1..=max_attempts {
            let answer = self.ask_inline(URL_PROMPT)?;
            match validate_url(&answer) {
                Ok(url) => return Ok(url.to_string()),
                Err(e) => {
                    log::debug!("attempt {}/{}: {}", attempt, max_attempts, e);
                    self.say(
                        "Invalid URL, please include 'http://' or 'https://' in the beginning of the URL.",
                    )?;
                }
            }
        }
        Err(AsciiError::ValidationFailed {
            attempts: max_attempts,
        })
    }

    /// Ask for the downscale factor; anything invalid becomes the default
    pub fn ask_downscale(&mut self) -> Result<DownscaleFactor> {
        let answer = self.ask_line(DOWNSCALE_PROMPT)?;
        if DownscaleFactor::parse(&answer).is_err() {
            self.say(&format!(
                "Invalid downscale factor, using the default value ({}).",
                DownscaleFactor::DEFAULT
            ))?;
        }
        Ok(DownscaleFactor::parse_or_default(&answer))
    }

    /// Offer to replace `default` with a user-typed palette
    ///
    /// Inputs shorter than two characters are rejected and the question is
    /// asked again; `default` is returned untouched on "n".
    pub fn ask_custom_palette(&mut self, default: &Palette) -> Result<Palette> {
        loop {
            if !self.ask_yes_no(CUSTOMIZE_PROMPT)? {
                return Ok(default.clone());
            }
            let answer = self.ask_inline(PALETTE_PROMPT)?;
            match Palette::parse(&answer) {
                Ok(palette) => return Ok(palette),
                Err(e) => {
                    log::debug!("{}", e);
                    self.say("The ASCII character set must have at least 2 characters.")?;
                }
            }
        }
    }

    pub fn ask_reverse(&mut self) -> Result<bool> {
        self.ask_yes_no(REVERSE_PROMPT)
    }

    /// Ask whether to filter and, if so, which channel name was typed
    ///
    /// The name is returned raw; deciding what an unknown name means is
    /// left to the caller.
    pub fn ask_color_filter(&mut self) -> Result<Option<String>> {
        if !self.ask_yes_no(FILTER_PROMPT)? {
            return Ok(None);
        }
        let name = self.ask_line(CHANNEL_PROMPT)?;
        Ok(Some(name.trim().to_lowercase()))
    }

    /// Ask for an output name until one survives sanitizing
    pub fn ask_filename(&mut self) -> Result<String> {
        loop {
            let answer = self.ask_inline(FILENAME_PROMPT)?;
            match sanitize_filename(&answer) {
                Ok(name) => {
                    if name != answer.trim() {
                        log::warn!("filename '{}' sanitized to '{}'", answer, name);
                    }
                    return Ok(name);
                }
                Err(e) => self.say(&format!("{}, please try again.", e))?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
