//! Command-line surface for the billing workflow.
//!
//! Each subcommand maps onto one of the four user actions: start a fresh
//! invoice, calculate totals, generate a PDF bill, or export and open it
//! for printing. The invoice itself is edited in its JSON working file.

mod workfile;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use quickbill_core::InvoiceNumber;
use quickbill_invoice::{Invoice, recalculate};
use quickbill_render::{STALE_EXPORT_AGE, export_for_print, render_to_file, sweep_stale_exports};

#[derive(Debug, Parser)]
#[command(name = "quickbill", version, about = "Single-user retail billing")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Start a fresh invoice with a newly assigned number.
    New {
        /// Invoice working file.
        #[arg(long, default_value = workfile::DEFAULT_FILE)]
        file: PathBuf,
        /// Replace an existing working file.
        #[arg(long)]
        force: bool,
    },
    /// Show per-line amounts, the subtotal, and the total.
    Calc {
        #[arg(long, default_value = workfile::DEFAULT_FILE)]
        file: PathBuf,
    },
    /// Render the bill to a PDF at the given path.
    Generate {
        /// Destination PDF path.
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = workfile::DEFAULT_FILE)]
        file: PathBuf,
    },
    /// Export the bill to a temp file and open the default PDF viewer.
    Print {
        #[arg(long, default_value = workfile::DEFAULT_FILE)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Parse first: help and usage errors must not touch the spool.
    let cli = Cli::parse();

    quickbill_observability::init();
    match sweep_stale_exports(STALE_EXPORT_AGE) {
        Ok(0) => {}
        Ok(removed) => tracing::info!(removed, "removed stale print exports"),
        Err(error) => tracing::warn!(%error, "stale export sweep failed"),
    }

    match cli.command {
        CliCommand::New { file, force } => cmd_new(&file, force),
        CliCommand::Calc { file } => cmd_calc(&file),
        CliCommand::Generate { out, file } => cmd_generate(&file, &out),
        CliCommand::Print { file } => cmd_print(&file),
    }
}

fn cmd_new(file: &Path, force: bool) -> Result<()> {
    if file.exists() && !force {
        bail!(
            "{} already exists; pass --force to start a new invoice",
            file.display()
        );
    }
    let invoice = Invoice::empty(InvoiceNumber::now());
    workfile::store(file, &invoice)?;
    println!("{} -> {}", invoice.number(), file.display());
    Ok(())
}

fn cmd_calc(file: &Path) -> Result<()> {
    let invoice = workfile::load(file)?;
    let calc = recalculate(&invoice);

    println!("Invoice {}", invoice.number());
    for (slot, line) in invoice.populated_lines() {
        println!(
            "{:>2}. {:<32} {:>12}",
            slot + 1,
            line.description,
            calc.amount_text(slot)
        );
    }
    println!("Subtotal: {:>12}", calc.subtotal_text());
    match &calc.total {
        Ok(_) => println!("Total:    {:>12}", calc.total_text()),
        Err(error) => println!("Total:    unavailable ({error})"),
    }
    Ok(())
}

fn cmd_generate(file: &Path, out: &Path) -> Result<()> {
    let invoice = workfile::load(file)?;
    let calc = recalculate(&invoice);
    if let Err(error) = &calc.total {
        bail!("cannot generate bill: {error}");
    }

    render_to_file(&invoice, &calc, out)?;
    println!("{} -> {}", invoice.number(), out.display());
    Ok(())
}

fn cmd_print(file: &Path) -> Result<()> {
    let invoice = workfile::load(file)?;
    let calc = recalculate(&invoice);
    if let Err(error) = &calc.total {
        bail!("cannot print bill: {error}");
    }

    let path = export_for_print(&invoice, &calc)?;
    println!("{} -> {}", invoice.number(), path.display());
    Ok(())
}
