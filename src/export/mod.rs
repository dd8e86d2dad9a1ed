pub mod csv;
pub mod geojson;
pub mod pdf;

use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;

use crate::model::RouteSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Geojson,
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "csv" => Ok(ExportFormat::Csv),
            "geojson" | "json" => Ok(ExportFormat::Geojson),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A rendered export, ready for the shell's download/save mechanism.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime: &'static str,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No route to export — calculate a route first")]
    NoRoute,

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("CSV rendering failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("GeoJSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `summary` in the requested format. Pure formatting; the caller
/// decides what to do with the bytes.
pub fn export(summary: &RouteSummary, format: ExportFormat) -> Result<ExportFile, ExportError> {
    match format {
        ExportFormat::Pdf => pdf::render(summary),
        ExportFormat::Csv => csv::render(summary),
        ExportFormat::Geojson => geojson::render(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse_accepts_known_names() {
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(
            " geojson ".parse::<ExportFormat>().unwrap(),
            ExportFormat::Geojson
        );
    }

    #[test]
    fn format_parse_rejects_unknown_names() {
        let err = "kml".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(ref f) if f == "kml"));
    }
}
