//! Fixed page geometry and letterhead text.
//!
//! Coordinates are PDF points on a US letter page, origin bottom-left. The
//! layout is intentionally static; there is no pagination because the form
//! caps out at ten line rows, far short of the ~20 that would overflow.

/// US letter, in points.
pub const PAGE_WIDTH_PT: f32 = 612.0;
pub const PAGE_HEIGHT_PT: f32 = 792.0;

pub const COMPANY_NAME: &str = "AR ENTERPRISES";
pub const STORE_NAME: &str = "AR MINIMART, BHIWANDI";
pub const CONTACT_LINE: &str = "Contact: +9188303-74199";

pub const TERMS_LINE: &str = "Terms: NO RETURN OF STOCK";
pub const THANKS_LINE: &str = "Thank you for your business!";

/// Left margin shared by the header, customer block, and table.
pub const LEFT_X: f32 = 100.0;

/// Item table column positions.
pub const COL_DESCRIPTION_X: f32 = 100.0;
pub const COL_QUANTITY_X: f32 = 250.0;
pub const COL_UNIT_PRICE_X: f32 = 300.0;
pub const COL_WARRANTY_X: f32 = 380.0;
pub const COL_AMOUNT_X: f32 = 480.0;

pub const TABLE_HEADER_Y: f32 = 540.0;
pub const FIRST_ROW_Y: f32 = 520.0;
/// Vertical step per populated row.
pub const ROW_STEP: f32 = 20.0;

/// Totals block: labels left, values aligned with the amount column.
pub const TOTALS_LABEL_X: f32 = 400.0;
pub const TOTALS_VALUE_X: f32 = 480.0;

/// Signature label position and the empty box below it.
pub const SIGNATURE_LABEL_Y: f32 = 100.0;
pub const SIGNATURE_BOX_X: f32 = 100.0;
pub const SIGNATURE_BOX_Y: f32 = 50.0;
pub const SIGNATURE_BOX_WIDTH: f32 = 200.0;
pub const SIGNATURE_BOX_HEIGHT: f32 = 40.0;

/// Logo box: bottom-left corner and square size (2 inches).
pub const LOGO_X: f32 = 430.0;
pub const LOGO_Y: f32 = 680.0;
pub const LOGO_BOX_PT: f32 = 144.0;
