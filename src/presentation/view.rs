// Chart view snapshot for rendering layers
use crate::application::chart_service::{Chart, ChartPhase};
use crate::application::options::ChartOptions;
use crate::domain::chart::ChartKind;
use crate::domain::plot::PlotData;
use crate::domain::range::RangeState;
use serde::Serialize;

/// Everything a rendering layer needs to draw a chart and its controls.
/// Serializable so a web host can pass it straight to its chart library.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub loading: bool,
    pub phase: ChartPhase,
    pub data: PlotData,
    pub range: RangeState,
    pub options: RenderOptions,
}

/// Presentation options resolved for the chart's kind and current data.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOptions {
    pub kind: ChartKind,
    pub height: u32,
    pub stacked: bool,
    pub show_legend: bool,
    pub show_controls: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

impl ChartView {
    pub fn snapshot(chart: &Chart) -> Self {
        let status = chart.status();
        let options = render_options(chart.options(), &status.data);
        Self {
            loading: status.loading,
            phase: status.phase,
            data: status.data,
            range: status.range,
            options,
        }
    }
}

/// The legend only appears when there is more than one series to tell
/// apart; pie charts carry their own legend.
fn render_options(options: &ChartOptions, data: &PlotData) -> RenderOptions {
    let show_legend = data.series_count() > 1 && options.kind != ChartKind::Pie;
    RenderOptions {
        kind: options.kind,
        height: options.height(),
        stacked: options.kind == ChartKind::MultiBar,
        show_legend,
        show_controls: options.show_controls(),
        title: options.title.clone(),
        y_label: options.label.clone(),
        colors: options.colors.clone(),
    }
}
