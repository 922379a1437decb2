//! Invoice model and calculator.
//!
//! This crate contains the billing session's state (one invoice, ten
//! positional line-item slots) and the pure arithmetic that derives line
//! amounts, the subtotal, and the total from raw field text. No IO and no
//! rendering concerns live here.

pub mod calculator;
pub mod invoice;

pub use calculator::{LineAmount, Recalculation, recalculate};
pub use invoice::{Invoice, LINE_SLOTS, LineItem};
