//! Report rendering: console summary and the two-sheet XLSX workbook.

use std::path::Path;

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use polars::prelude::*;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::StockError;
use crate::schema::{indicator, report};
use crate::summary::{IndicatorValue, RunSummary};

/// Format the run summary as multi-section console text, one section per
/// analyzer, with the sustainability status colored by severity.
pub fn format_console_report(summary: &RunSummary) -> String {
    let mut output: Vec<String> = Vec::new();

    for section in &summary.sections {
        output.push(format!("=== {} ===", section.title).bold().to_string());
        for (name, value) in &section.indicators {
            if name == indicator::SUSTAINABILITY_STATUS {
                output.push(format!("- {name}: {}", status_colored(&value.to_string())));
            } else {
                output.push(format!("- {name}: {value}"));
            }
        }
        output.push(String::new());
    }

    output.join("\n")
}

fn status_colored(label: &str) -> ColoredString {
    match label {
        "OK" => label.green(),
        "AT RISK" => label.yellow(),
        "CRITICAL" => label.red(),
        other => other.normal(),
    }
}

/// Write the report workbook: a `summary` sheet with indicator/value pairs
/// and an `animals` sheet with the raw loaded rows. The workbook is built
/// in memory and saved in one step, so a failed run leaves no partial file.
pub fn export_report_xlsx(
    path: &Path,
    summary: &RunSummary,
    animals: &DataFrame,
) -> Result<(), StockError> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(report::SUMMARY_SHEET)?;
    write_summary_sheet(sheet, summary)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(report::ANIMALS_SHEET)?;
    write_animals_sheet(sheet, animals)?;

    workbook.save(path)?;
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, summary: &RunSummary) -> Result<(), StockError> {
    sheet.write_string(0, 0, report::INDICATOR_HEADER)?;
    sheet.write_string(0, 1, report::VALUE_HEADER)?;

    for (i, (name, value)) in summary.indicators().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, name)?;
        match value {
            IndicatorValue::Count(n) => {
                sheet.write_number(row, 1, *n as f64)?;
            }
            IndicatorValue::Float(v) => {
                sheet.write_number(row, 1, *v)?;
            }
            IndicatorValue::Text(s) => {
                sheet.write_string(row, 1, s)?;
            }
        }
    }

    Ok(())
}

fn write_animals_sheet(sheet: &mut Worksheet, animals: &DataFrame) -> Result<(), StockError> {
    for (col_idx, column) in animals.get_columns().iter().enumerate() {
        let col = col_idx as u16;
        sheet.write_string(0, col, column.name().as_str())?;

        let series = column.as_materialized_series();
        for row_idx in 0..series.len() {
            let row = (row_idx + 1) as u32;
            match series.get(row_idx)? {
                AnyValue::Null => {}
                AnyValue::Float64(v) => {
                    sheet.write_number(row, col, v)?;
                }
                AnyValue::Date(days) => {
                    sheet.write_string(row, col, date32_to_iso(days))?;
                }
                AnyValue::String(s) => {
                    sheet.write_string(row, col, s)?;
                }
                AnyValue::StringOwned(s) => {
                    sheet.write_string(row, col, s.as_str())?;
                }
                other => {
                    sheet.write_string(row, col, format!("{other}"))?;
                }
            }
        }
    }

    Ok(())
}

// Days since the Unix epoch, as polars stores Date values.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

fn date32_to_iso(days: i32) -> String {
    NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS_FROM_CE)
        .map(|d| d.to_string())
        .unwrap_or_default()
}
