use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// The PPM comes out at one pixel per cell, far too small to look at.
/// ImageMagick's mogrify enlarges it in place.
const MOGRIFY: &str = "/usr/bin/mogrify";
const SCALE: &str = "1600%";

/// Runs mogrify on the image, waiting for it to finish. This is the final
/// stage; a missing tool or a failed resize leaves the unscaled image behind.
pub fn scale_in_place(path: &Path) -> Result<()> {
    let status = Command::new(MOGRIFY)
        .arg("-scale")
        .arg(SCALE)
        .arg(path)
        .status()
        .map_err(|e| Error::ExternalTool(format!("Failed to run {}: {}", MOGRIFY, e)))?;

    if !status.success() {
        return Err(Error::ExternalTool(format!(
            "{} exited with {} while scaling {}",
            MOGRIFY,
            status,
            path.display()
        )));
    }

    Ok(())
}
