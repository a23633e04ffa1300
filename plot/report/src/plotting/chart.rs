use charming::{
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisType, ItemStyle, LineStyle, LineStyleType, NameLocation, SplitLine, Symbol,
        TextStyle,
    },
    series::Line,
    Chart,
};

/// Drawing context for one chart. Every chart owns its own `Chart`, nothing is
/// shared between charts.
pub struct BenchChart {
    pub inner: Chart,
}

const AXIS_TEXT_SIZE: u32 = 16;
const SYMBOL_SIZE: f64 = 8.0;
pub const CONNECTIONS_AXIS_LABEL: &str = "Connections (-c)";

impl BenchChart {
    /// Create a new `BenchChart` with legend, grid and an optional title.
    pub fn new(title: Option<&str>, dark: bool) -> Self {
        let chart = Chart::new();
        let chart = match title {
            Some(title) => chart.title(
                Title::new()
                    .text(title)
                    .left("center")
                    .top("2%")
                    .text_style(TextStyle::new().font_size(22).font_weight("bold")),
            ),
            None => chart,
        };
        let grid_top = if title.is_some() { "12%" } else { "6%" };

        let chart = chart
            .legend(
                Legend::new()
                    .show(true)
                    .top(grid_top)
                    .right("6%")
                    .text_style(TextStyle::new().font_size(14)),
            )
            .grid(
                Grid::new()
                    .left("10%")
                    .right("6%")
                    .top(grid_top)
                    .bottom("12%"),
            );

        let chart = if dark {
            chart.background_color("#242424")
        } else {
            chart.background_color("#ffffff")
        };

        Self { inner: chart }
    }

    /// Configure the X axis (connections), logarithmic or linear.
    pub fn with_connections_x_axis(mut self, log_scale: bool) -> Self {
        let axis_type = if log_scale {
            AxisType::Log
        } else {
            AxisType::Value
        };
        self.inner = self.inner.x_axis(
            Axis::new()
                .type_(axis_type)
                .name(CONNECTIONS_AXIS_LABEL)
                .name_location(NameLocation::Middle)
                .name_gap(30)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .split_line(dashed_split_line()),
        );
        self
    }

    /// Configure the Y axis for the charted metric.
    pub fn with_y_axis(mut self, axis_label: &str) -> Self {
        self.inner = self.inner.y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(axis_label)
                .name_location(NameLocation::Middle)
                .name_gap(60)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .split_line(dashed_split_line()),
        );
        self
    }

    /// Add a marked line series. `NaN` values are serialized as `null` and show
    /// up as gaps.
    pub fn add_line_series(mut self, name: &str, points: Vec<Vec<f64>>, color: Option<&str>) -> Self {
        let mut line = Line::new()
            .name(name)
            .data(points)
            .show_symbol(true)
            .symbol(Symbol::Circle)
            .symbol_size(SYMBOL_SIZE)
            .line_style(LineStyle::new().width(2.0));

        if let Some(color) = color {
            line = line.item_style(ItemStyle::new().color(color));
        }

        self.inner = self.inner.series(line);
        self
    }
}

fn dashed_split_line() -> SplitLine {
    SplitLine::new()
        .show(true)
        .line_style(LineStyle::new().type_(LineStyleType::Dashed).width(0.5))
}
