use serde::Serialize;

/// Socket error counts from the `Socket errors:` line of a wrk report.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct SocketErrors {
    pub connect: u64,
    pub read: u64,
    pub write: u64,
    pub timeout: u64,
}

/// Metrics of a single `wrk --latency` run.
///
/// Latencies are always milliseconds, whatever unit the report used. A latency
/// that could not be read from the report is `NaN`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BenchmarkRecord {
    /// Concurrent connections (`-c`), taken from the report file name
    pub connections: u64,

    /// Throughput from the `Requests/sec:` line
    pub requests_per_sec: f64,

    /// Average latency from the thread stats table
    pub avg_latency_ms: f64,

    /// Median latency from the latency distribution
    pub p50_latency_ms: f64,

    /// 99th percentile latency from the latency distribution
    pub p99_latency_ms: f64,

    /// Connection failures, 0 when the report has no socket errors line
    pub connect_errors: u64,

    /// Full socket error breakdown, if the report contained one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_errors: Option<SocketErrors>,
}
