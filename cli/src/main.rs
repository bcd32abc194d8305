mod prompt;
mod session;
mod viewer;

use anyhow::{Context, Result};
use ascii_gen::{DEFAULT_OUTPUT_DIR, ImageFetcher};
use clap::Parser;
use prompt::Prompter;
use session::SessionOptions;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use viewer::OsViewer;

/// Convert an image at a URL into ASCII art, interactively
#[derive(Parser, Debug)]
#[command(name = "ascii-gen")]
#[command(version, about = "Turn an image from a URL into ASCII art", long_about = None)]
struct Args {
    /// Directory the ASCII art is saved to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Invalid URLs accepted before giving up
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    max_url_attempts: u32,

    /// HTTP timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Write the color-filtered image to a temp file instead of opening a viewer
    #[arg(long)]
    no_preview: bool,
}

fn main() -> Result<()> {
    // Configure logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    let fetcher = ImageFetcher::new(args.timeout_secs.map(Duration::from_secs))
        .context("failed to build HTTP client")?;
    let mut viewer = OsViewer::new(!args.no_preview);
    let options = SessionOptions {
        output_dir: args.output_dir,
        max_url_attempts: args.max_url_attempts,
        preview: !args.no_preview,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    session::run(&mut prompter, &fetcher, &mut viewer, &options)?;
    Ok(())
}
