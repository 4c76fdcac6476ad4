use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use herd_stocktake::herd::Herd;
use herd_stocktake::loader::load_animal_table;
use herd_stocktake::productivity::productivity_metrics;
use herd_stocktake::report::{export_report_xlsx, format_console_report};
use herd_stocktake::structure::herd_structure;
use herd_stocktake::summary::RunSummary;
use herd_stocktake::sustainability::{evaluate_sustainability, StockingThresholds};

/// Herd indicators and stocking-rate sustainability from animal-level records.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the animal records CSV.
    #[arg(long, default_value = "data/livestock_data.csv")]
    input: PathBuf,

    /// Path of the XLSX report to write.
    #[arg(long, default_value = "results_report.xlsx")]
    output: PathBuf,

    /// Grazed farm area in hectares.
    #[arg(long)]
    area_ha: f64,

    /// Maximum sustainable stocking rate in LU/ha.
    #[arg(long, default_value_t = 1.4)]
    max_lu_per_ha: f64,

    /// Multiplier on the maximum rate marking the AT RISK / CRITICAL edge.
    #[arg(long, default_value_t = 1.10)]
    risk_band_factor: f64,

    /// Count exited animals in the livestock-unit total as well.
    #[arg(long)]
    include_inactive: bool,

    /// Reference date for ages of active animals (format: YYYY-MM-DD).
    /// Defaults to today; pin it for reproducible runs.
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    let table = load_animal_table(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let herd = Herd::new(table.records, cli.area_ha)?;
    let structure = herd_structure(herd.records(), as_of);
    let productivity = productivity_metrics(herd.records());

    let thresholds = StockingThresholds {
        max_lu_per_ha: cli.max_lu_per_ha,
        risk_band_factor: cli.risk_band_factor,
    };
    let total_lu = herd.total_livestock_units(as_of, cli.include_inactive);
    let sustainability = evaluate_sustainability(total_lu, herd.area_ha(), &thresholds)?;

    let summary = RunSummary::new(&structure, &productivity, &sustainability);

    // Write the workbook before printing anything, so a failed run emits no
    // output at all rather than a console summary without its report file.
    export_report_xlsx(&cli.output, &summary, &table.frame)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("{}", format_console_report(&summary));
    println!("Report exported to: {}", cli.output.display());
    info!(as_of = %as_of, "analysis run complete");

    Ok(())
}
