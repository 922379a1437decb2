//! Pure total arithmetic over an [`Invoice`].

use core::fmt;

use quickbill_core::{BillingError, format_amount, parse_amount, parse_discount};

use crate::invoice::{Invoice, LINE_SLOTS};

/// Derived amount for one line slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineAmount {
    /// Quantity or unit price not entered; the slot shows the form's resting
    /// "0.00" text and contributes nothing.
    Blank,
    /// Both fields parsed; amount = quantity x unit price.
    Value(f64),
    /// Either field present but not a non-negative decimal. Shown verbatim
    /// as the error marker and excluded from the subtotal.
    Invalid,
}

impl LineAmount {
    /// Marker text shown for unparsable lines, on screen and in the
    /// rendered document alike.
    pub const INVALID_MARKER: &'static str = "Error";

    pub fn is_invalid(&self) -> bool {
        matches!(self, LineAmount::Invalid)
    }
}

impl fmt::Display for LineAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineAmount::Blank => f.write_str("0.00"),
            LineAmount::Value(v) => f.write_str(&format_amount(*v)),
            LineAmount::Invalid => f.write_str(Self::INVALID_MARKER),
        }
    }
}

/// Result of one "Calculate Total" pass.
///
/// `subtotal` is always valid, even when the discount fails to parse; the
/// discount error only withholds `total`.
#[derive(Debug, Clone, PartialEq)]
pub struct Recalculation {
    pub amounts: [LineAmount; LINE_SLOTS],
    pub subtotal: f64,
    pub total: Result<f64, BillingError>,
}

impl Recalculation {
    /// Formatted text for one slot's amount cell.
    pub fn amount_text(&self, slot: usize) -> String {
        self.amounts[slot].to_string()
    }

    pub fn subtotal_text(&self) -> String {
        format_amount(self.subtotal)
    }

    /// Formatted total, or the resting "0.00" while the discount is bad.
    pub fn total_text(&self) -> String {
        match &self.total {
            Ok(total) => format_amount(*total),
            Err(_) => "0.00".to_string(),
        }
    }
}

/// Derive per-line amounts, the subtotal, and the total.
///
/// Idempotent and side-effect free: nothing is retained between calls and
/// the invoice itself is untouched. A malformed line never aborts the
/// remaining lines.
pub fn recalculate(invoice: &Invoice) -> Recalculation {
    let mut amounts = [LineAmount::Blank; LINE_SLOTS];
    let mut subtotal = 0.0_f64;

    for (slot, line) in invoice.lines.iter().enumerate() {
        if line.quantity.is_empty() || line.unit_price.is_empty() {
            continue;
        }
        amounts[slot] = match (parse_amount(&line.quantity), parse_amount(&line.unit_price)) {
            (Some(quantity), Some(unit_price)) => {
                let amount = quantity * unit_price;
                subtotal += amount;
                LineAmount::Value(amount)
            }
            _ => LineAmount::Invalid,
        };
    }

    let total = match parse_discount(&invoice.discount) {
        Some(discount) => Ok(subtotal - discount),
        None => Err(BillingError::discount_format(invoice.discount.clone())),
    };

    Recalculation {
        amounts,
        subtotal,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::LineItem;
    use chrono::NaiveDate;
    use quickbill_core::InvoiceNumber;

    fn test_invoice() -> Invoice {
        Invoice::empty(InvoiceNumber::from_datetime(
            NaiveDate::from_ymd_opt(2026, 8, 27)
                .unwrap()
                .and_hms_opt(11, 0, 0)
                .unwrap(),
        ))
    }

    fn line(description: &str, quantity: &str, unit_price: &str) -> LineItem {
        LineItem {
            description: description.to_string(),
            quantity: quantity.to_string(),
            unit_price: unit_price.to_string(),
            warranty: String::new(),
        }
    }

    #[test]
    fn worked_example_matches_the_form() {
        let mut invoice = test_invoice();
        invoice.lines[0] = line("Fan", "3", "150.00");
        invoice.lines[1] = line("Heater", "3", "150.00");
        invoice.discount = "50".to_string();

        let calc = recalculate(&invoice);
        assert_eq!(calc.amount_text(0), "450.00");
        assert_eq!(calc.amount_text(1), "450.00");
        assert_eq!(calc.subtotal_text(), "900.00");
        assert_eq!(calc.total, Ok(850.0));
        assert_eq!(calc.total_text(), "850.00");
    }

    #[test]
    fn malformed_quantity_marks_the_line_and_spares_the_rest() {
        let mut invoice = test_invoice();
        invoice.lines[0] = line("Bulb", "abc", "10");
        invoice.lines[1] = line("Socket", "2", "25");

        let calc = recalculate(&invoice);
        assert_eq!(calc.amounts[0], LineAmount::Invalid);
        assert_eq!(calc.amount_text(0), "Error");
        assert_eq!(calc.amounts[1], LineAmount::Value(50.0));
        assert_eq!(calc.subtotal, 50.0);
    }

    #[test]
    fn negative_quantity_is_invalid_not_a_credit() {
        let mut invoice = test_invoice();
        invoice.lines[0] = line("Return", "-1", "100");

        let calc = recalculate(&invoice);
        assert_eq!(calc.amounts[0], LineAmount::Invalid);
        assert_eq!(calc.subtotal, 0.0);
    }

    #[test]
    fn half_filled_line_stays_blank() {
        let mut invoice = test_invoice();
        invoice.lines[0] = line("Cable", "4", "");
        invoice.lines[1] = line("Plug", "", "15");

        let calc = recalculate(&invoice);
        assert_eq!(calc.amounts[0], LineAmount::Blank);
        assert_eq!(calc.amounts[1], LineAmount::Blank);
        assert_eq!(calc.amount_text(0), "0.00");
        assert_eq!(calc.subtotal, 0.0);
    }

    #[test]
    fn subtotal_ignores_row_positions_and_gaps() {
        let mut front = test_invoice();
        front.lines[0] = line("A", "2", "10");
        front.lines[1] = line("B", "1", "5");

        let mut scattered = test_invoice();
        scattered.lines[3] = line("B", "1", "5");
        scattered.lines[9] = line("A", "2", "10");

        assert_eq!(recalculate(&front).subtotal, recalculate(&scattered).subtotal);
    }

    #[test]
    fn bad_discount_withholds_total_but_not_subtotal() {
        let mut invoice = test_invoice();
        invoice.lines[0] = line("Iron", "1", "800");
        invoice.discount = "ten".to_string();

        let calc = recalculate(&invoice);
        assert_eq!(calc.subtotal, 800.0);
        assert_eq!(
            calc.total,
            Err(BillingError::DiscountFormat("ten".to_string()))
        );
        assert_eq!(calc.total_text(), "0.00");
    }

    #[test]
    fn discount_may_exceed_subtotal() {
        let mut invoice = test_invoice();
        invoice.lines[0] = line("Pen", "1", "10");
        invoice.discount = "25".to_string();

        let calc = recalculate(&invoice);
        assert_eq!(calc.total, Ok(-15.0));
        assert_eq!(calc.total_text(), "-15.00");
    }

    #[test]
    fn recalculation_is_idempotent() {
        let mut invoice = test_invoice();
        invoice.lines[2] = line("Lamp", "2", "75.5");
        invoice.discount = "1".to_string();

        let first = recalculate(&invoice);
        let second = recalculate(&invoice);
        assert_eq!(first, second);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: for any pair of in-range decimals, the line amount
            /// is their product formatted to two decimals and the subtotal
            /// equals that amount.
            #[test]
            fn amount_is_quantity_times_price(
                quantity in 0.0_f64..10_000.0,
                unit_price in 0.0_f64..10_000.0,
            ) {
                let mut invoice = test_invoice();
                invoice.lines[0] = line(
                    "item",
                    &format!("{quantity}"),
                    &format!("{unit_price}"),
                );

                let calc = recalculate(&invoice);
                let expected = quantity * unit_price;
                prop_assert_eq!(calc.amount_text(0), format!("{expected:.2}"));
                prop_assert!((calc.subtotal - expected).abs() < 1e-9);
            }

            /// Property: a non-numeric quantity never leaks into the
            /// subtotal, whatever the price field holds.
            #[test]
            fn invalid_lines_contribute_nothing(
                garbage in "[a-zA-Z]{1,8}",
                unit_price in 0.0_f64..1_000.0,
                valid_amount in 0.0_f64..1_000.0,
            ) {
                let mut invoice = test_invoice();
                invoice.lines[0] = line("bad", &garbage, &format!("{unit_price}"));
                invoice.lines[1] = line("good", "1", &format!("{valid_amount}"));

                let calc = recalculate(&invoice);
                prop_assert!(calc.amounts[0].is_invalid());
                prop_assert!((calc.subtotal - valid_amount).abs() < 1e-9);
            }
        }
    }
}
