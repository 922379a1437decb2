//! Print-path exports: persistent temp PDFs handed to the host viewer.
//!
//! "Print Bill" renders into a file under a dedicated spool directory in
//! the OS temp dir and opens it with the platform's default PDF handler.
//! Exported files outlive the process so the viewer can read them; the
//! startup sweep removes anything older than [`STALE_EXPORT_AGE`].

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use quickbill_invoice::{Invoice, Recalculation};

use crate::error::RenderError;
use crate::pdf;

/// Exports older than this are deleted by the startup sweep.
pub const STALE_EXPORT_AGE: Duration = Duration::from_secs(5 * 60);

/// Spool directory for print exports, shared by all invocations.
pub fn print_spool_dir() -> PathBuf {
    env::temp_dir().join("quickbill-prints")
}

/// Render the bill into the spool directory and open it with the default
/// PDF viewer. Returns the exported path; the file is left in place for the
/// sweep to reclaim.
pub fn export_for_print(
    invoice: &Invoice,
    calc: &Recalculation,
) -> Result<PathBuf, RenderError> {
    let dir = print_spool_dir();
    std::fs::create_dir_all(&dir).map_err(|e| RenderError::io(&dir, e))?;

    let mut file = tempfile::Builder::new()
        .prefix("bill-")
        .suffix(".pdf")
        .tempfile_in(&dir)
        .map_err(|e| RenderError::io(&dir, e))?;
    pdf::render(invoice, calc, file.as_file_mut())?;

    let path = file
        .keep()
        .map_err(|e| RenderError::io(&dir, e.error))?
        .1;
    tracing::info!(path = %path.display(), "exported bill for printing");

    open_with_default_viewer(&path)?;
    Ok(path)
}

fn open_with_default_viewer(path: &Path) -> Result<(), RenderError> {
    let mut command = viewer_command(path)?;
    command.spawn().map_err(RenderError::Viewer)?;
    Ok(())
}

#[cfg(target_os = "linux")]
fn viewer_command(path: &Path) -> Result<Command, RenderError> {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    Ok(command)
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Result<Command, RenderError> {
    let mut command = Command::new("open");
    command.arg(path);
    Ok(command)
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Result<Command, RenderError> {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("start").arg("").arg(path);
    Ok(command)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn viewer_command(_path: &Path) -> Result<Command, RenderError> {
    Err(RenderError::UnsupportedPlatform)
}

/// Delete spool files older than `max_age`. Returns how many were removed.
///
/// Runs at every CLI startup, replacing the original's per-export delayed
/// delete. A missing spool directory counts as nothing to do.
pub fn sweep_stale_exports(max_age: Duration) -> io::Result<usize> {
    sweep_dir(&print_spool_dir(), max_age)
}

fn sweep_dir(dir: &Path, max_age: Duration) -> io::Result<usize> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        let age = modified.elapsed().unwrap_or(Duration::ZERO);
        if age >= max_age {
            std::fs::remove_file(&path)?;
            tracing::debug!(path = %path.display(), "removed stale export");
            removed += 1;
        }
    }
    Ok(removed)
}
