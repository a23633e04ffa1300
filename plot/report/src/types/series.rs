use crate::error::ReportError;
use crate::metric::Metric;
use crate::record::BenchmarkRecord;
use serde::Serialize;
use std::path::Path;

/// Records of one system under test, ordered by connections.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    label: String,
    records: Vec<BenchmarkRecord>,
}

impl Series {
    /// Records are sorted ascending by connections. The sort is stable, so
    /// records sharing a connection count keep their input order.
    pub fn new(label: impl Into<String>, mut records: Vec<BenchmarkRecord>) -> Self {
        records.sort_by_key(|record| record.connections);
        Self {
            label: label.into(),
            records,
        }
    }

    pub fn empty(label: impl Into<String>) -> Self {
        Self::new(label, Vec::new())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `[connections, value]` pairs in the shape charming expects for value axes.
    pub fn points(&self, metric: Metric) -> Vec<Vec<f64>> {
        self.records
            .iter()
            .map(|record| vec![record.connections as f64, metric.value(record)])
            .collect()
    }

    pub fn has_plottable(&self, metric: Metric) -> bool {
        self.records
            .iter()
            .any(|record| metric.value(record).is_finite())
    }

    pub fn has_connect_errors(&self) -> bool {
        self.records.iter().any(|record| record.connect_errors > 0)
    }

    /// Connection counts that appear in more than one record.
    pub fn duplicated_connections(&self) -> Vec<u64> {
        let mut duplicates: Vec<u64> = self
            .records
            .windows(2)
            .filter(|pair| pair[0].connections == pair[1].connections)
            .map(|pair| pair[0].connections)
            .collect();
        duplicates.dedup();
        duplicates
    }
}

/// All series as a pretty printed JSON array. `NaN` latencies become `null`.
pub fn to_json(series: &[Series]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(series)?)
}

/// Writes all series as a JSON array to `path`, replacing an existing file.
pub fn dump_to_json(series: &[Series], path: &Path) -> Result<(), ReportError> {
    let json = to_json(series)?;
    std::fs::write(path, json).map_err(|source| ReportError::CannotWriteFile {
        path: path.to_path_buf(),
        source,
    })
}
