//! Showing filtered images in the host OS image viewer.

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Something that can display an image to the user
pub trait Viewer {
    /// Display `img`, returning where it was written
    fn show(&mut self, img: &RgbImage) -> Result<PathBuf>;
}

/// File name used for previews in the system temp directory
pub const PREVIEW_FILE_NAME: &str = "ascii-gen-preview.png";

/// Writes a PNG preview and hands it to the system viewer
///
/// Every preview goes to the same file, so each one replaces the last and
/// repeated runs leave a single PNG in the temp directory. The file is not
/// removed on exit because the viewer may still be reading it.
pub struct OsViewer {
    path: PathBuf,
    launch: bool,
}

impl OsViewer {
    /// Preview in `$TMPDIR/ascii-gen-preview.png`; with `launch` false the
    /// PNG is written but no viewer is started
    pub fn new(launch: bool) -> Self {
        Self::with_path(std::env::temp_dir().join(PREVIEW_FILE_NAME), launch)
    }

    pub fn with_path(path: impl Into<PathBuf>, launch: bool) -> Self {
        Self {
            path: path.into(),
            launch,
        }
    }
}

impl Viewer for OsViewer {
    fn show(&mut self, img: &RgbImage) -> Result<PathBuf> {
        img.save_with_format(&self.path, ImageFormat::Png)
            .with_context(|| format!("failed to write preview to {}", self.path.display()))?;
        log::debug!("preview written to {}", self.path.display());

        if self.launch {
            open_in_viewer(&self.path)?;
        }
        Ok(self.path.clone())
    }
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// Launch the default viewer without waiting for it
fn open_in_viewer(path: &Path) -> Result<()> {
    let child = viewer_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to launch image viewer")?;
    log::info!("opened {} in viewer (pid {})", path.display(), child.id());
    Ok(())
}
