use colored::{Color, ColoredString, Colorize};
use human_repr::HumanCount;
use tracing::info;

use crate::{record::BenchmarkRecord, series::Series};

impl Series {
    pub fn print_summary(&self) {
        if self.is_empty() {
            info!("{}", format!("Series '{}': no reports", self.label()).yellow());
            return;
        }

        let header = format!(
            "Series '{}': {} reports, connections {}..={}",
            self.label(),
            self.len(),
            self.records().first().map_or(0, |r| r.connections),
            self.records().last().map_or(0, |r| r.connections),
        )
        .blue();
        info!("{}", header);

        self.records()
            .iter()
            .for_each(|record| info!("{}", record.formatted_string()));
    }
}

impl BenchmarkRecord {
    pub fn formatted_string(&self) -> ColoredString {
        let color = if self.connect_errors > 0 {
            Color::Red
        } else {
            Color::Green
        };

        let requests = (self.requests_per_sec.max(0.0) as u64).human_count_bare();
        let avg = format!("{:.2}", self.avg_latency_ms);
        let p50 = format!("{:.2}", self.p50_latency_ms);
        let p99 = format!("{:.2}", self.p99_latency_ms);
        let errors = match self.socket_errors {
            Some(errors) => format!(
                "socket errors: connect {}, read {}, write {}, timeout {}",
                errors.connect, errors.read, errors.write, errors.timeout
            ),
            None => "no socket errors".to_owned(),
        };

        format!(
            "  c={}: {} req/s ({:.2}), average latency: {} ms, p50 latency: {} ms, \
            p99 latency: {} ms, {}",
            self.connections, requests, self.requests_per_sec, avg, p50, p99, errors,
        )
        .color(color)
    }
}
