//! Optional store logo, co-located with the executable.

use std::path::{Path, PathBuf};

use image::DynamicImage;

/// Location of the logo asset, if the executable's directory is knowable.
///
/// The logo is strictly optional; a missing file is not an error and the
/// bill simply renders without it.
pub fn discover() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let path = exe.parent()?.join("logo.png");
    path.exists().then_some(path)
}

/// Decode the logo. Undecodable files are skipped with a log line rather
/// than failing the whole bill.
pub fn load(path: &Path) -> Option<DynamicImage> {
    match image::open(path) {
        Ok(img) => Some(img),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "skipping undecodable logo");
            None
        }
    }
}

/// Discover and decode in one step.
pub fn load_default() -> Option<DynamicImage> {
    discover().and_then(|path| load(&path))
}
