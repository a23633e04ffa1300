use super::chart::BenchChart;
use crate::error::ReportError;
use crate::metric::Metric;
use crate::series::Series;
use charming::theme::Theme;
use charming::{Chart, ImageFormat, ImageRenderer};
use derive_new::new;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Canvas of 6.4x4.8 inches at 200 dpi.
pub const CHART_WIDTH: u32 = 1280;
pub const CHART_HEIGHT: u32 = 960;

const SERIES_COLORS: [&str; 4] = ["#f472b6", "#22c55e", "#3b82f6", "#f59e0b"];

/// What to draw: one metric against connections.
#[derive(Debug, Clone, PartialEq, new)]
pub struct ChartRequest {
    pub metric: Metric,
    pub y_label: String,
    pub title: Option<String>,
    pub log_x_axis: bool,
    pub dark: bool,
}

impl ChartRequest {
    /// Request with the metric's default axis label and title.
    pub fn for_metric(metric: Metric, log_x_axis: bool, dark: bool) -> Self {
        Self::new(
            metric,
            metric.y_label().to_owned(),
            metric.default_title().map(str::to_owned),
            log_x_axis,
            dark,
        )
    }
}

/// Builds the chart for `request`, one line per non-empty series.
///
/// Fails with [`ReportError::NoPlottableData`] when no series has a finite
/// value for the metric.
pub fn build_chart(series: &[Series], request: &ChartRequest) -> Result<Chart, ReportError> {
    if !series.iter().any(|s| s.has_plottable(request.metric)) {
        return Err(ReportError::NoPlottableData {
            metric: request.metric,
        });
    }

    let mut chart = BenchChart::new(request.title.as_deref(), request.dark)
        .with_connections_x_axis(request.log_x_axis)
        .with_y_axis(&request.y_label);

    for (index, s) in series.iter().enumerate() {
        if s.is_empty() {
            debug!("Skipping empty series '{}' for {}", s.label(), request.metric);
            continue;
        }
        let color = SERIES_COLORS.get(index).copied();
        chart = chart.add_line_series(s.label(), s.points(request.metric), color);
    }

    Ok(chart.inner)
}

/// Rasterizes a chart to PNG bytes at the fixed canvas size.
pub fn rasterize(chart: &Chart, dark: bool) -> Result<Vec<u8>, ReportError> {
    let theme = if dark { Theme::Dark } else { Theme::Default };
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT).theme(theme);
    renderer
        .render_format(ImageFormat::Png, chart)
        .map_err(|e| ReportError::ChartRendering(format!("{}", e)))
}

/// Writes rendered chart bytes, replacing any existing file.
pub fn save_chart(image: &[u8], output_path: &Path) -> Result<(), ReportError> {
    std::fs::write(output_path, image).map_err(|source| ReportError::CannotWriteFile {
        path: output_path.to_path_buf(),
        source,
    })
}

/// Builds and rasterizes one chart without touching the file system.
pub fn prepare_chart(series: &[Series], request: &ChartRequest) -> Result<Vec<u8>, ReportError> {
    let render_start = Instant::now();
    let chart = build_chart(series, request)?;
    let image = rasterize(&chart, request.dark)?;
    debug!(
        "Rendered {} chart ({} bytes, render: {:.2?})",
        request.metric,
        image.len(),
        render_start.elapsed()
    );
    Ok(image)
}

/// Builds, rasterizes and writes one chart.
pub fn render(
    series: &[Series],
    request: &ChartRequest,
    output_path: &Path,
) -> Result<(), ReportError> {
    let image = prepare_chart(series, request)?;
    save_chart(&image, output_path)?;
    info!(
        "Generated {} chart at: {}",
        request.metric,
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::chart::CONNECTIONS_AXIS_LABEL;
    use crate::record::BenchmarkRecord;
    use serde_json::Value;

    fn record(connections: u64, p99_latency_ms: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            connections,
            requests_per_sec: connections as f64 * 10.0,
            avg_latency_ms: 1.0,
            p50_latency_ms: 1.0,
            p99_latency_ms,
            connect_errors: 0,
            socket_errors: None,
        }
    }

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn chart_json(chart: &Chart) -> Value {
        serde_json::to_value(chart).unwrap()
    }

    #[test]
    fn should_plot_one_line_per_non_empty_series() {
        let series = vec![
            Series::new("bun", vec![record(10, 1.0), record(100, 2.0)]),
            Series::empty("node"),
        ];
        let request = ChartRequest::for_metric(Metric::RequestsPerSec, true, false);

        let json = chart_json(&build_chart(&series, &request).unwrap());

        let lines = json["series"].as_array().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["name"], "bun");
        assert_eq!(lines[0]["data"][1][0], 100.0);
        assert_eq!(lines[0]["data"][1][1], 1000.0);
        assert_eq!(json["title"][0]["text"], "Requests/sec (higher is better)");
    }

    #[test]
    fn x_axis_should_follow_log_flag() {
        let series = vec![Series::new("bun", vec![record(10, 1.0)])];

        let log = chart_json(
            &build_chart(
                &series,
                &ChartRequest::for_metric(Metric::P99Latency, true, false),
            )
            .unwrap(),
        );
        let linear = chart_json(
            &build_chart(
                &series,
                &ChartRequest::for_metric(Metric::P99Latency, false, false),
            )
            .unwrap(),
        );

        assert_eq!(log["xAxis"][0]["type"], "log");
        assert_eq!(linear["xAxis"][0]["type"], "value");
        assert_eq!(log["xAxis"][0]["name"], CONNECTIONS_AXIS_LABEL);
        assert_eq!(log["yAxis"][0]["name"], "p99 latency (ms)");
    }

    #[test]
    fn nan_values_should_become_gaps() {
        let series = vec![Series::new("bun", vec![record(10, f64::NAN), record(20, 3.0)])];
        let request = ChartRequest::for_metric(Metric::P99Latency, true, false);

        let json = chart_json(&build_chart(&series, &request).unwrap());

        assert!(json["series"][0]["data"][0][1].is_null());
        assert_eq!(json["series"][0]["data"][1][1], 3.0);
    }

    #[test]
    fn chart_without_title_should_have_no_title() {
        let series = vec![Series::new("bun", vec![record(10, 1.0)])];
        let request = ChartRequest::new(
            Metric::ConnectErrors,
            "Connect errors".to_owned(),
            None,
            true,
            false,
        );

        let json = chart_json(&build_chart(&series, &request).unwrap());

        assert!(json.get("title").is_none());
    }

    #[test]
    fn render_should_replace_existing_file_with_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rps_vs_connections.png");
        std::fs::write(&path, "stale chart").unwrap();
        let series = vec![Series::new("bun", vec![record(10, 1.0), record(100, 2.0)])];
        let request = ChartRequest::for_metric(Metric::RequestsPerSec, true, false);

        render(&series, &request, &path).unwrap();

        let image = std::fs::read(&path).unwrap();
        assert!(image.starts_with(PNG_MAGIC), "not a PNG");
    }

    #[test]
    fn render_should_not_create_file_without_plottable_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p99_latency_vs_connections.png");
        let series = vec![Series::new("bun", vec![record(10, f64::NAN)])];
        let request = ChartRequest::for_metric(Metric::P99Latency, true, false);

        assert!(render(&series, &request, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn should_fail_without_plottable_data() {
        let request = ChartRequest::for_metric(Metric::P99Latency, true, false);

        let empty = vec![Series::empty("bun"), Series::empty("node")];
        let nan_only = vec![Series::new("bun", vec![record(10, f64::NAN)])];

        assert!(matches!(
            build_chart(&empty, &request),
            Err(ReportError::NoPlottableData {
                metric: Metric::P99Latency
            })
        ));
        assert!(matches!(
            build_chart(&nan_only, &request),
            Err(ReportError::NoPlottableData { .. })
        ));
    }
}
