//! Herd demographic, productivity, and stocking-rate sustainability
//! indicators from individual-animal livestock records.
//!
//! The pipeline is a one-way flow: [`loader`] produces the validated record
//! collection, the analyzers ([`structure`], [`productivity`], [`herd`])
//! each derive an independent summary from it, [`sustainability`] turns the
//! livestock-unit total into a stocking-rate assessment, and [`report`]
//! renders the console summary and the XLSX workbook. Analyzers never
//! mutate the record collection, and nothing in the library reads the wall
//! clock: every age-dependent computation takes an explicit `as_of` date.

pub mod error;
pub mod herd;
pub mod loader;
pub mod productivity;
pub mod record;
pub mod report;
pub mod schema;
pub mod structure;
pub mod summary;
pub mod sustainability;

pub use error::StockError;
pub use herd::{lu_coefficient, total_livestock_units, Herd};
pub use loader::{load_animal_table, AnimalTable};
pub use productivity::{productivity_metrics, ProductivityMetrics};
pub use record::{AnimalRecord, Sex};
pub use report::{export_report_xlsx, format_console_report};
pub use structure::{herd_structure, HerdStructure};
pub use summary::{IndicatorValue, RunSummary};
pub use sustainability::{
    evaluate_sustainability, StockingThresholds, SustainabilityReport, SustainabilityStatus,
};
