//! Main binary entry point for the `halir` metrics tool.
//!
//! Thin harness around the library: parses flags, resolves the printer
//! through the registry and delegates to `commands::run_report`.

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use halir::commands::{run_report, ReportOptions};
use halir::registry::{all_printers, get_printer};

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON-encoded unit graph to analyze.
    #[arg(required_unless_present = "list_printers")]
    graph: Option<PathBuf>,

    /// Printer to run.
    #[arg(long, short = 'p', default_value = "halstead")]
    printer: String,

    /// Output raw JSON.
    #[arg(long, short = 'j')]
    json: bool,

    /// Also render the derived metrics (V, D, E, T, B) per unit.
    #[arg(long, short = 'm')]
    metrics: bool,

    /// Do not append the aggregate Total row.
    #[arg(long)]
    no_totals: bool,

    /// Save output to file.
    #[arg(long, short = 'O')]
    output_file: Option<String>,

    /// List the registered printers and exit.
    #[arg(long)]
    list_printers: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_printers {
        println!("{}", "Registered printers".bold().underline());
        for printer in all_printers() {
            println!("  {}: {} ({})", printer.name, printer.help, printer.docs_url);
        }
        return Ok(());
    }

    if get_printer(&cli.printer).is_none() {
        let known: Vec<&str> = all_printers().iter().map(|p| p.name).collect();
        bail!(
            "unknown printer '{}' (registered: {})",
            cli.printer,
            known.join(", ")
        );
    }

    // `required_unless_present` guarantees the graph path here.
    let Some(graph) = cli.graph else {
        bail!("no unit graph given");
    };

    let options = ReportOptions {
        json: cli.json,
        metrics: cli.metrics,
        no_totals: cli.no_totals,
        output_file: cli.output_file,
    };
    run_report(&graph, options, std::io::stdout().lock())
}
