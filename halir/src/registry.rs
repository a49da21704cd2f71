//! Explicit printer registration table.
//!
//! The metrics core stays a pure library; hosts discover analyzers
//! through this static catalog instead of framework self-registration.

use std::io::Write;
use std::sync::OnceLock;

use anyhow::Result;

use crate::halstead::count_units;
use crate::ir::Unit;
use crate::report::render_counts_report;

/// A registered analyzer: static identity plus its run function.
pub struct PrinterDescriptor {
    /// Stable printer name, the lookup key.
    pub name: &'static str,
    /// One-line help text.
    pub help: &'static str,
    /// Pointer into the shipped documentation.
    pub docs_url: &'static str,
    /// Runs the printer over a unit graph, writing its report.
    pub run: fn(&[Unit], &mut dyn Write) -> Result<()>,
}

static PRINTERS: OnceLock<Vec<PrinterDescriptor>> = OnceLock::new();

fn printers_vec() -> &'static Vec<PrinterDescriptor> {
    PRINTERS.get_or_init(|| {
        vec![PrinterDescriptor {
            name: "halstead",
            help: "Computes the Halstead complexity metrics for each unit",
            docs_url: "docs/printers.md#halstead",
            run: run_halstead,
        }]
    })
}

/// Returns all registered printers.
#[must_use]
pub fn all_printers() -> &'static [PrinterDescriptor] {
    printers_vec().as_slice()
}

/// Looks up a printer by name.
#[must_use]
pub fn get_printer(name: &str) -> Option<&'static PrinterDescriptor> {
    all_printers().iter().find(|printer| printer.name == name)
}

fn run_halstead(units: &[Unit], writer: &mut dyn Write) -> Result<()> {
    let counted = count_units(units);
    write!(writer, "{}", render_counts_report(&counted, true))?;
    Ok(())
}
