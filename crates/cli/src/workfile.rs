//! The invoice working file.
//!
//! One JSON file holds the invoice currently being edited; every command
//! reads it fresh and `new` replaces it wholesale.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quickbill_invoice::Invoice;

pub const DEFAULT_FILE: &str = "invoice.json";

pub fn load(path: &Path) -> Result<Invoice> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading invoice file {}", path.display()))?;
    let invoice = serde_json::from_str(&raw)
        .with_context(|| format!("parsing invoice file {}", path.display()))?;
    Ok(invoice)
}

pub fn store(path: &Path, invoice: &Invoice) -> Result<()> {
    let raw = serde_json::to_string_pretty(invoice).context("serializing invoice")?;
    fs::write(path, raw).with_context(|| format!("writing invoice file {}", path.display()))?;
    Ok(())
}
