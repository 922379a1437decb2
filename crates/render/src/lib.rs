//! `quickbill-render`
//!
//! **Responsibility:** turn a calculated invoice into the fixed-layout
//! one-page PDF bill, and hand it to the host when printing.
//!
//! This crate provides:
//! - the fixed-coordinate document drawing ([`render`], [`render_to_file`])
//! - optional logo discovery next to the executable
//! - print exports into a spool directory plus the startup sweep that
//!   replaces the original fixed-delay temp-file cleanup

pub mod error;
pub mod export;
pub mod layout;
pub mod logo;
pub mod pdf;

pub use error::RenderError;
pub use export::{STALE_EXPORT_AGE, export_for_print, print_spool_dir, sweep_stale_exports};
pub use pdf::{render, render_to_file};
