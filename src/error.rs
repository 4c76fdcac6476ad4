use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("InvalidData: {0}")]
    InvalidData(String),

    #[error("Invalid parameter {name}: {value} (must be {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
