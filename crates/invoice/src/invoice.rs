//! Invoice value object: customer fields, line-item slots, discount.

use serde::{Deserialize, Deserializer, Serialize};

use quickbill_core::{BillingError, InvoiceNumber};

/// Number of line-item slots on the billing form. Fixed; slots are
/// positional and never reordered.
pub const LINE_SLOTS: usize = 10;

/// One row of the invoice.
///
/// Fields hold the raw text exactly as entered; parsing happens in the
/// calculator so malformed input can be surfaced per line instead of
/// rejected at the model boundary. An empty description marks the row as
/// unused.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub warranty: String,
}

impl LineItem {
    /// Unused rows are skipped at render time.
    pub fn is_unused(&self) -> bool {
        self.description.is_empty()
    }
}

/// The full state of one billing session.
///
/// Subtotal and total are never stored; they are re-derived on demand by
/// [`crate::recalculate`]. "Clear" is modeled as constructing a fresh empty
/// invoice with a newly generated number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer_name: String,
    pub customer_id: String,
    pub phone: String,
    number: InvoiceNumber,
    #[serde(deserialize_with = "line_slots")]
    pub lines: [LineItem; LINE_SLOTS],
    pub discount: String,
}

impl Invoice {
    /// Create an empty invoice carrying the given number.
    ///
    /// The discount field starts at `"0"`, mirroring the form's prefilled
    /// discount entry.
    pub fn empty(number: InvoiceNumber) -> Self {
        Self {
            customer_name: String::new(),
            customer_id: String::new(),
            phone: String::new(),
            number,
            lines: std::array::from_fn(|_| LineItem::default()),
            discount: "0".to_string(),
        }
    }

    /// The session's invoice number; assigned at creation, read-only after.
    pub fn number(&self) -> &InvoiceNumber {
        &self.number
    }

    /// Rows that should appear in the rendered document.
    pub fn populated_lines(&self) -> impl Iterator<Item = (usize, &LineItem)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_unused())
    }
}

/// Accept up to [`LINE_SLOTS`] rows from a working file and pad the rest
/// with empty slots, so hand-edited files don't have to spell out unused
/// rows. More rows than slots is an error, not a truncation.
fn line_slots<'de, D>(deserializer: D) -> Result<[LineItem; LINE_SLOTS], D::Error>
where
    D: Deserializer<'de>,
{
    let rows = Vec::<LineItem>::deserialize(deserializer)?;
    if rows.len() > LINE_SLOTS {
        return Err(serde::de::Error::custom(BillingError::TooManyLines {
            got: rows.len(),
            max: LINE_SLOTS,
        }));
    }
    let mut slots: [LineItem; LINE_SLOTS] = std::array::from_fn(|_| LineItem::default());
    for (slot, row) in slots.iter_mut().zip(rows) {
        *slot = row;
    }
    Ok(slots)
}
