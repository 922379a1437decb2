//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Keep this focused on deterministic billing failures. Rendering and host
/// interaction failures live in `quickbill-render`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// The discount field does not parse as a decimal amount.
    #[error("invalid discount amount: {0:?}")]
    DiscountFormat(String),

    /// An invoice working file carried more line rows than the form has slots.
    #[error("invoice holds at most {max} line items (got {got})")]
    TooManyLines { got: usize, max: usize },
}

impl BillingError {
    pub fn discount_format(raw: impl Into<String>) -> Self {
        Self::DiscountFormat(raw.into())
    }
}
