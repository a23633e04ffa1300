use crate::error::ReportError;
use crate::parser::parse_report_file;
use crate::series::Series;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loads every `<prefix>_c<N>.txt` report directly inside `results_dir`.
///
/// The series is labeled with `prefix`. No matching files, or no directory at
/// all, gives an empty series. The first report that fails to parse aborts
/// the whole load.
pub fn load_series(results_dir: &Path, prefix: &str) -> Result<Series, ReportError> {
    let paths = discover_reports(results_dir, prefix)?;
    if paths.is_empty() {
        warn!(
            "No reports matching '{prefix}_c<connections>.txt' in {}",
            results_dir.display()
        );
        return Ok(Series::empty(prefix));
    }

    let records = paths
        .iter()
        .map(|path| parse_report_file(path))
        .collect::<Result<Vec<_>, _>>()?;
    let series = Series::new(prefix, records);

    for connections in series.duplicated_connections() {
        warn!(
            "Series '{prefix}' has more than one report for {connections} connections, all of them are plotted"
        );
    }

    info!(
        "Loaded {} reports for '{prefix}' from {}",
        series.len(),
        results_dir.display()
    );
    Ok(series)
}

/// Returns true for `<prefix>_c<digits>.txt`.
pub fn is_report_file_name(file_name: &str, prefix: &str) -> bool {
    file_name
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix("_c"))
        .and_then(|rest| rest.strip_suffix(".txt"))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

// Sorted by path so that reports sharing a connection count keep a stable order.
fn discover_reports(results_dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, ReportError> {
    let entries = match std::fs::read_dir(results_dir) {
        Ok(entries) => entries,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!("Results directory {} does not exist", results_dir.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ReportError::CannotReadDirectory {
                path: results_dir.to_path_buf(),
                source,
            })
        }
    };

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ReportError::CannotReadDirectory {
            path: results_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| is_report_file_name(name, prefix));
        if matches && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
