//! Timestamp-derived invoice number.

use core::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Invoice number in the `INV-YYYYMMDDHHMM` shape.
///
/// Assigned once per billing session (form creation or explicit clear) and
/// read-only afterwards. Minute resolution matches the original numbering
/// scheme; prefer [`InvoiceNumber::from_datetime`] in tests for determinism.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// Derive a number from an explicit instant.
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        Self(format!("INV-{}", at.format("%Y%m%d%H%M")))
    }

    /// Derive a number from the current local wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(chrono::Local::now().naive_local())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
