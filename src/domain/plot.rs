// Shaped plotting structures handed to the rendering layer
use crate::domain::chart::ChartKind;
use crate::domain::series::DataPoint;
use serde::Serialize;

/// A line or bar series: `[timestamp, value]` pairs under a legend key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XySeries {
    pub key: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bar: bool,
    pub values: Vec<DataPoint>,
}

impl XySeries {
    pub fn line(key: String, values: Vec<DataPoint>) -> Self {
        Self {
            key,
            bar: false,
            values,
        }
    }

    pub fn bar(key: String, values: Vec<DataPoint>) -> Self {
        Self {
            key,
            bar: true,
            values,
        }
    }
}

/// One point of a stacked series. `y0` is the cumulative height of the
/// preceding series at the same `x`, `y1 = y + y0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedPoint {
    pub x: i64,
    pub y: f64,
    pub y0: f64,
    pub y1: f64,
    pub series: usize,
    pub key: String,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedSeries {
    pub key: String,
    pub values: Vec<StackedPoint>,
}

impl StackedSeries {
    pub fn new(key: String) -> Self {
        Self {
            key,
            values: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub key: String,
    pub value: f64,
}

/// Shaper output: per-kind plotting structures, serializable as the JSON
/// the rendering library expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlotData {
    Xy(Vec<XySeries>),
    Stacked(Vec<StackedSeries>),
    Pie(Vec<PieSlice>),
}

impl PlotData {
    /// Zero-series plot of the shape the given kind renders.
    pub fn empty(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Line | ChartKind::Bar => PlotData::Xy(Vec::new()),
            ChartKind::MultiBar => PlotData::Stacked(Vec::new()),
            ChartKind::Pie => PlotData::Pie(Vec::new()),
        }
    }

    /// Number of plotted series (slices for a pie).
    pub fn series_count(&self) -> usize {
        match self {
            PlotData::Xy(series) => series.len(),
            PlotData::Stacked(series) => series.len(),
            PlotData::Pie(slices) => slices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series_count() == 0
    }
}
