use crate::metric::Metric;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot infer connections from filename: {filename}")]
    MalformedFilename { filename: String },

    #[error("Missing 'Requests/sec' line")]
    MissingThroughput,

    #[error("Missing latency table row")]
    MissingLatencyRow,

    #[error("Cannot read report {}", .path.display())]
    CannotReadReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read results directory {}", .path.display())]
    CannotReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed parsing {}: {source}", .path.display())]
    ReportParse {
        path: PathBuf,
        #[source]
        source: Box<ReportError>,
    },

    #[error("No series contains plottable data for {metric}")]
    NoPlottableData { metric: Metric },

    #[error("Failed to render chart: {0}")]
    ChartRendering(String),

    #[error("Cannot write {}", .path.display())]
    CannotWriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot serialize series to JSON")]
    CannotSerialize(#[from] serde_json::Error),
}
