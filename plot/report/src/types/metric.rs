use crate::record::BenchmarkRecord;
use derive_more::Display;

/// Field of a [`BenchmarkRecord`] that can be charted against connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Metric {
    #[display("Requests/sec")]
    RequestsPerSec,
    #[display("Average latency")]
    AvgLatency,
    #[display("p50 latency")]
    P50Latency,
    #[display("p99 latency")]
    P99Latency,
    #[display("Connect errors")]
    ConnectErrors,
}

impl Metric {
    pub fn value(&self, record: &BenchmarkRecord) -> f64 {
        match self {
            Metric::RequestsPerSec => record.requests_per_sec,
            Metric::AvgLatency => record.avg_latency_ms,
            Metric::P50Latency => record.p50_latency_ms,
            Metric::P99Latency => record.p99_latency_ms,
            Metric::ConnectErrors => record.connect_errors as f64,
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::RequestsPerSec => "Requests/sec",
            Metric::AvgLatency => "Average latency (ms)",
            Metric::P50Latency => "p50 latency (ms)",
            Metric::P99Latency => "p99 latency (ms)",
            Metric::ConnectErrors => "Connect errors",
        }
    }

    /// Default chart file name, relative to the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Metric::RequestsPerSec => "rps_vs_connections.png",
            Metric::AvgLatency => "avg_latency_vs_connections.png",
            Metric::P50Latency => "p50_latency_vs_connections.png",
            Metric::P99Latency => "p99_latency_vs_connections.png",
            Metric::ConnectErrors => "connect_errors_vs_connections.png",
        }
    }

    pub fn default_title(&self) -> Option<&'static str> {
        match self {
            Metric::RequestsPerSec => Some("Requests/sec (higher is better)"),
            Metric::AvgLatency => Some("Average latency (lower is better)"),
            Metric::P50Latency => Some("p50 latency (lower is better)"),
            Metric::P99Latency => Some("p99 latency (lower is better)"),
            Metric::ConnectErrors => None,
        }
    }
}
