use std::path::PathBuf;
use thiserror::Error;
use wrk_bench_report::error::ReportError;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("No results found in '{}'. Expected files like '{expected}'.", .results_dir.display())]
    NoResultsFound {
        results_dir: PathBuf,
        expected: String,
    },

    #[error(transparent)]
    Report(#[from] ReportError),
}
