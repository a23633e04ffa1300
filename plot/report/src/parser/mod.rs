pub mod rules;

use crate::error::ReportError;
use crate::record::BenchmarkRecord;
use rules::Percentile;
use std::path::Path;
use tracing::trace;

/// Parses the text of one `wrk --latency` report.
///
/// `filename` supplies the connection count (`..._c<N>.txt`). Throughput and
/// the latency row are required; percentiles default to `NaN` and connect
/// errors to 0.
pub fn parse_report(text: &str, filename: &str) -> Result<BenchmarkRecord, ReportError> {
    let connections = rules::connections_from_filename(filename)?;
    let requests_per_sec = rules::requests_per_sec(text)?;
    let avg_latency_ms = rules::avg_latency_ms(text)?;
    let p50_latency_ms = rules::percentile_latency_ms(text, Percentile::P50);
    let p99_latency_ms = rules::percentile_latency_ms(text, Percentile::P99);
    let socket_errors = rules::socket_errors(text);
    let connect_errors = socket_errors.map_or(0, |errors| errors.connect);

    Ok(BenchmarkRecord {
        connections,
        requests_per_sec,
        avg_latency_ms,
        p50_latency_ms,
        p99_latency_ms,
        connect_errors,
        socket_errors,
    })
}

/// Reads and parses a report file. Bytes that are not valid UTF-8 are
/// replaced, never rejected.
pub fn parse_report_file(path: &Path) -> Result<BenchmarkRecord, ReportError> {
    let bytes = std::fs::read(path).map_err(|source| ReportError::CannotReadReport {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let record = parse_report(&text, &path.to_string_lossy()).map_err(|error| {
        ReportError::ReportParse {
            path: path.to_path_buf(),
            source: Box::new(error),
        }
    })?;
    trace!("Parsed {}: {record:?}", path.display());
    Ok(record)
}
