//! Extraction rules for `wrk --latency` output, one function per field.
//!
//! Required fields return a [`ReportError`] when missing. Optional fields
//! fall back to `NaN` (latencies) or `None` (socket errors).

use crate::error::ReportError;
use crate::record::SocketErrors;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref CONNECTIONS_REGEX: Regex = Regex::new(r"_c(\d+)\.txt$").unwrap();
    static ref DURATION_REGEX: Regex =
        Regex::new(r"^(?P<value>[0-9.]+)(?P<unit>us|ms|s)$").unwrap();
    static ref THROUGHPUT_REGEX: Regex = Regex::new(r"Requests/sec:\s+([0-9.]+)").unwrap();
    static ref LATENCY_ROW_REGEX: Regex =
        Regex::new(r"(?m)^\s*Latency\s+([0-9.]+(?:us|ms|s))\b").unwrap();
    static ref P50_REGEX: Regex = percentile_regex(50);
    static ref P99_REGEX: Regex = percentile_regex(99);
    static ref SOCKET_ERRORS_REGEX: Regex = Regex::new(
        r"Socket errors:\s+connect\s+(\d+),\s+read\s+(\d+),\s+write\s+(\d+),\s+timeout\s+(\d+)"
    )
    .unwrap();
}

// A distribution row holds exactly one duration after the percentage.
fn percentile_regex(percent: u32) -> Regex {
    Regex::new(&format!(r"(?m)^\s*{percent}%\s+([0-9.]+(?:us|ms|s))\s*$")).unwrap()
}

/// Percentiles reported in the wrk latency distribution that are charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percentile {
    P50,
    P99,
}

impl Percentile {
    fn regex(&self) -> &'static Regex {
        match self {
            Percentile::P50 => &P50_REGEX,
            Percentile::P99 => &P99_REGEX,
        }
    }
}

/// Connection count encoded as `_c<digits>.txt` at the end of the file name.
///
/// Only the last path component is inspected.
pub fn connections_from_filename(filename: &str) -> Result<u64, ReportError> {
    let name = Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename);

    CONNECTIONS_REGEX
        .captures(name)
        .and_then(|captures| captures[1].parse::<u64>().ok())
        .ok_or_else(|| ReportError::MalformedFilename {
            filename: filename.to_owned(),
        })
}

/// Converts a wrk duration token such as `81.75us`, `1.62ms` or `2.01s` to
/// milliseconds. Anything else yields `NaN`.
pub fn duration_to_ms(duration: &str) -> f64 {
    let Some(captures) = DURATION_REGEX.captures(duration.trim()) else {
        return f64::NAN;
    };
    let Ok(value) = captures["value"].parse::<f64>() else {
        return f64::NAN;
    };

    match &captures["unit"] {
        "us" => value / 1000.0,
        "ms" => value,
        "s" => value * 1000.0,
        _ => f64::NAN,
    }
}

/// Value of the first `Requests/sec:` line.
pub fn requests_per_sec(text: &str) -> Result<f64, ReportError> {
    THROUGHPUT_REGEX
        .captures(text)
        .and_then(|captures| captures[1].parse::<f64>().ok())
        .ok_or(ReportError::MissingThroughput)
}

/// First value of the `Latency` row in the thread stats table, which is the
/// average latency.
pub fn avg_latency_ms(text: &str) -> Result<f64, ReportError> {
    LATENCY_ROW_REGEX
        .captures(text)
        .map(|captures| duration_to_ms(&captures[1]))
        .ok_or(ReportError::MissingLatencyRow)
}

/// Latency of a distribution row like `99%    1.78ms`, `NaN` if absent.
pub fn percentile_latency_ms(text: &str, percentile: Percentile) -> f64 {
    percentile
        .regex()
        .captures(text)
        .map_or(f64::NAN, |captures| duration_to_ms(&captures[1]))
}

/// Counts of the `Socket errors:` line. wrk only prints it when some error
/// occurred, so its absence is not an error.
pub fn socket_errors(text: &str) -> Option<SocketErrors> {
    let captures = SOCKET_ERRORS_REGEX.captures(text)?;
    Some(SocketErrors {
        connect: captures[1].parse().ok()?,
        read: captures[2].parse().ok()?,
        write: captures[3].parse().ok()?,
        timeout: captures[4].parse().ok()?,
    })
}
