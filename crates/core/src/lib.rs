//! `quickbill-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no UI concerns):
//! the billing error model, currency parsing/formatting, and the
//! timestamp-derived invoice number value object.

pub mod error;
pub mod money;
pub mod number;

pub use error::BillingError;
pub use money::{format_amount, parse_amount, parse_discount};
pub use number::InvoiceNumber;
