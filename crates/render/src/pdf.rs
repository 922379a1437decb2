//! Fixed-layout bill drawing.
//!
//! One letter-size page, absolute coordinates from [`crate::layout`]. The
//! renderer consumes the same invoice model the calculator saw, so every
//! amount in the document is byte-identical to the on-screen text,
//! including the error marker for unparsable lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use image::{DynamicImage, Rgba, RgbImage};
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Pt, Px, Rgb,
};

use quickbill_invoice::{Invoice, Recalculation};

use crate::error::RenderError;
use crate::layout;
use crate::logo;

fn pt(value: f32) -> Mm {
    Mm::from(Pt(value))
}

fn pdf_err(err: impl std::fmt::Display) -> RenderError {
    RenderError::Pdf(err.to_string())
}

/// Render the bill, picking up the optional logo next to the executable.
pub fn render<W: Write>(
    invoice: &Invoice,
    calc: &Recalculation,
    writer: &mut W,
) -> Result<(), RenderError> {
    render_with_logo(invoice, calc, logo::load_default().as_ref(), writer)
}

/// Render the bill into `path` (the "Generate Bill" action).
pub fn render_to_file(
    invoice: &Invoice,
    calc: &Recalculation,
    path: &Path,
) -> Result<(), RenderError> {
    let mut file = File::create(path).map_err(|e| RenderError::io(path, e))?;
    render(invoice, calc, &mut file)
}

/// Render the bill with an explicit logo (or none).
///
/// Pure with respect to the invoice: the only ambient input is the current
/// date printed under the invoice number.
pub fn render_with_logo<W: Write>(
    invoice: &Invoice,
    calc: &Recalculation,
    logo: Option<&DynamicImage>,
    writer: &mut W,
) -> Result<(), RenderError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Bill {}", invoice.number()),
        pt(layout::PAGE_WIDTH_PT),
        pt(layout::PAGE_HEIGHT_PT),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    if let Some(logo) = logo {
        embed_logo(&layer, logo);
    }

    // Letterhead.
    text(&layer, &bold, layout::COMPANY_NAME, 20.0, layout::LEFT_X, 750.0);
    text(&layer, &regular, layout::STORE_NAME, 14.0, layout::LEFT_X, 730.0);
    text(&layer, &regular, layout::CONTACT_LINE, 12.0, layout::LEFT_X, 710.0);

    // Invoice number and date.
    text(
        &layer,
        &bold,
        &format!("Invoice #{}", invoice.number()),
        16.0,
        layout::LEFT_X,
        670.0,
    );
    text(
        &layer,
        &regular,
        &format!("Date: {}", Local::now().format("%Y-%m-%d")),
        12.0,
        layout::LEFT_X,
        650.0,
    );

    // Customer block.
    text(
        &layer,
        &regular,
        &format!("Customer: {}", invoice.customer_name),
        12.0,
        layout::LEFT_X,
        620.0,
    );
    text(
        &layer,
        &regular,
        &format!("Customer ID: {}", invoice.customer_id),
        12.0,
        layout::LEFT_X,
        600.0,
    );
    text(
        &layer,
        &regular,
        &format!("Phone: {}", invoice.phone),
        12.0,
        layout::LEFT_X,
        580.0,
    );

    // Item table header.
    let header = [
        ("Description", layout::COL_DESCRIPTION_X),
        ("Qty", layout::COL_QUANTITY_X),
        ("Unit Price", layout::COL_UNIT_PRICE_X),
        ("Warranty", layout::COL_WARRANTY_X),
        ("Amount", layout::COL_AMOUNT_X),
    ];
    for (label, x) in header {
        text(&layer, &bold, label, 12.0, x, layout::TABLE_HEADER_Y);
    }

    // Rows: only slots with a description; quantity and unit price are the
    // raw entered text, echoed verbatim even when unparsable.
    let mut y = layout::FIRST_ROW_Y;
    for (slot, line) in invoice.populated_lines() {
        text(&layer, &regular, &line.description, 12.0, layout::COL_DESCRIPTION_X, y);
        text(&layer, &regular, &line.quantity, 12.0, layout::COL_QUANTITY_X, y);
        text(&layer, &regular, &line.unit_price, 12.0, layout::COL_UNIT_PRICE_X, y);
        text(&layer, &regular, &line.warranty, 12.0, layout::COL_WARRANTY_X, y);
        text(&layer, &regular, &calc.amount_text(slot), 12.0, layout::COL_AMOUNT_X, y);
        y -= layout::ROW_STEP;
    }

    // Totals, directly under the last row.
    text(&layer, &regular, "Subtotal:", 12.0, layout::TOTALS_LABEL_X, y - 20.0);
    text(&layer, &regular, &calc.subtotal_text(), 12.0, layout::TOTALS_VALUE_X, y - 20.0);
    text(&layer, &regular, "Discount:", 12.0, layout::TOTALS_LABEL_X, y - 40.0);
    text(&layer, &regular, &invoice.discount, 12.0, layout::TOTALS_VALUE_X, y - 40.0);
    text(&layer, &bold, "Total:", 12.0, layout::TOTALS_LABEL_X, y - 60.0);
    text(&layer, &bold, &calc.total_text(), 12.0, layout::TOTALS_VALUE_X, y - 60.0);

    // Signature box.
    text(&layer, &regular, "Signature:", 12.0, layout::LEFT_X, layout::SIGNATURE_LABEL_Y);
    stroke_rect(
        &layer,
        layout::SIGNATURE_BOX_X,
        layout::SIGNATURE_BOX_Y,
        layout::SIGNATURE_BOX_WIDTH,
        layout::SIGNATURE_BOX_HEIGHT,
    );

    // Footer terms.
    text(&layer, &regular, layout::TERMS_LINE, 10.0, layout::LEFT_X, 30.0);
    text(&layer, &regular, layout::THANKS_LINE, 10.0, layout::LEFT_X, 15.0);

    let mut buffered = BufWriter::new(writer);
    doc.save(&mut buffered).map_err(pdf_err)?;
    buffered
        .into_inner()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(())
}

fn text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    content: &str,
    size: f32,
    x: f32,
    y: f32,
) {
    layer.use_text(content, size, pt(x), pt(y), font);
}

fn stroke_rect(layer: &PdfLayerReference, x: f32, y: f32, width: f32, height: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(1.0);
    let points = vec![
        (Point::new(pt(x), pt(y)), false),
        (Point::new(pt(x + width), pt(y)), false),
        (Point::new(pt(x + width), pt(y + height)), false),
        (Point::new(pt(x), pt(y + height)), false),
    ];
    layer.add_line(Line {
        points,
        is_closed: true,
    });
}

/// Draw the logo fitted into its square box, bottom-left anchored.
///
/// Transparency is composited against white first; printpdf image XObjects
/// carry plain RGB here.
fn embed_logo(layer: &PdfLayerReference, logo: &DynamicImage) {
    let rgba = logo.to_rgba8();
    let (width_px, height_px) = rgba.dimensions();
    if width_px == 0 || height_px == 0 {
        return;
    }

    let mut rgb = RgbImage::new(width_px, height_px);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = a as f32 / 255.0;
        let blend = |c: u8| (c as f32 * alpha + 255.0 * (1.0 - alpha)) as u8;
        rgb.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
    }

    // Uniform dpi keeps the aspect ratio; the wider side fills the box.
    let aspect = width_px as f32 / height_px as f32;
    let target_width_pt = if aspect >= 1.0 {
        layout::LOGO_BOX_PT
    } else {
        layout::LOGO_BOX_PT * aspect
    };
    let dpi = width_px as f32 * 72.0 / target_width_pt;

    let image = Image::from(ImageXObject {
        width: Px(width_px as usize),
        height: Px(height_px as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: rgb.into_raw(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(pt(layout::LOGO_X)),
            translate_y: Some(pt(layout::LOGO_Y)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quickbill_core::InvoiceNumber;
    use quickbill_invoice::{LineItem, recalculate};

    fn test_invoice() -> Invoice {
        Invoice::empty(InvoiceNumber::from_datetime(
            NaiveDate::from_ymd_opt(2026, 8, 27)
                .unwrap()
                .and_hms_opt(16, 45, 0)
                .unwrap(),
        ))
    }

    fn line(description: &str, quantity: &str, unit_price: &str, warranty: &str) -> LineItem {
        LineItem {
            description: description.to_string(),
            quantity: quantity.to_string(),
            unit_price: unit_price.to_string(),
            warranty: warranty.to_string(),
        }
    }

    fn rendered(invoice: &Invoice) -> Vec<u8> {
        let calc = recalculate(invoice);
        let mut out = Vec::new();
        render_with_logo(invoice, &calc, None, &mut out).unwrap();
        out
    }

    /// Text operands are not stored verbatim in the content stream, so
    /// assertions go through a real parse plus text extraction.
    fn extracted_text(bytes: &[u8]) -> String {
        let doc = lopdf::Document::load_mem(bytes).unwrap();
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        doc.extract_text(&pages).unwrap()
    }

    #[test]
    fn empty_invoice_still_renders_a_full_document() {
        let bytes = rendered(&test_invoice());
        assert!(bytes.starts_with(b"%PDF"));

        let text = extracted_text(&bytes);
        assert!(text.contains(layout::COMPANY_NAME));
        assert!(text.contains("Invoice #INV-202608271645"));
        assert!(text.contains("Subtotal:"));
        assert!(text.contains("0.00"));
        assert!(text.contains("Signature:"));
        assert!(text.contains(layout::TERMS_LINE));
    }

    #[test]
    fn rendered_amounts_match_the_calculated_text() {
        let mut invoice = test_invoice();
        invoice.customer_name = "Asha".to_string();
        invoice.lines[0] = line("Ceiling fan", "3", "150.00", "2 yr");
        invoice.lines[1] = line("Mixer", "3", "150.00", "");
        invoice.discount = "50".to_string();

        let text = extracted_text(&rendered(&invoice));
        assert!(text.contains("Ceiling fan"));
        assert!(text.contains("450.00"));
        assert!(text.contains("900.00"));
        assert!(text.contains("850.00"));
        assert!(text.contains("2 yr"));
    }

    #[test]
    fn invalid_lines_echo_raw_text_and_the_error_marker() {
        let mut invoice = test_invoice();
        invoice.lines[0] = line("Bulb pack", "abc", "10", "");

        let text = extracted_text(&rendered(&invoice));
        assert!(text.contains("abc"));
        assert!(text.contains("Error"));
    }

    #[test]
    fn unused_rows_are_left_out_of_the_table() {
        let mut invoice = test_invoice();
        invoice.lines[0] = line("Wrench", "1", "40", "");
        // Slot with text but no description stays off the bill.
        invoice.lines[1] = line("", "9", "9", "hidden-warranty");

        let text = extracted_text(&rendered(&invoice));
        assert!(text.contains("Wrench"));
        assert!(!text.contains("hidden-warranty"));
    }
}
