// Chart configuration supplied by the embedding host
use crate::domain::chart::ChartKind;
use crate::domain::range::TimerangeOption;
use crate::domain::series::RawData;
use futures::future::BoxFuture;
use std::sync::Arc;

/// Caller-supplied async data source, used instead of the device endpoint.
pub type DataLoader =
    Arc<dyn Fn(i64, i64) -> BoxFuture<'static, anyhow::Result<RawData>> + Send + Sync>;

/// Value-format callback, applied at render time only.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

pub const DEFAULT_CHART_HEIGHT: u32 = 400;

/// Per-chart configuration. Set once at chart creation, immutable after.
#[derive(Clone, Default)]
pub struct ChartOptions {
    pub kind: ChartKind,
    /// Field names to restrict retrieval to; empty means all fields.
    pub fields: Vec<String>,
    pub timerange: Option<TimerangeOption>,
    pub format: Option<ValueFormatter>,
    pub height: Option<u32>,
    pub colors: Vec<String>,
    /// Vertical-axis label, generally the unit.
    pub label: Option<String>,
    pub title: Option<String>,
    pub show_controls: Option<bool>,
    pub load_data: Option<DataLoader>,
}

impl ChartOptions {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_timerange(mut self, timerange: TimerangeOption) -> Self {
        self.timerange = Some(timerange);
        self
    }

    pub fn with_format(mut self, format: ValueFormatter) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.push(color.into());
        self
    }

    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_controls(mut self, show: bool) -> Self {
        self.show_controls = Some(show);
        self
    }

    pub fn with_loader(mut self, loader: DataLoader) -> Self {
        self.load_data = Some(loader);
        self
    }

    pub fn height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_CHART_HEIGHT)
    }

    pub fn show_controls(&self) -> bool {
        self.show_controls.unwrap_or(true)
    }

    /// Apply the configured value format, identity when none is set.
    pub fn format_value(&self, value: f64) -> String {
        match &self.format {
            Some(format) => format(value),
            None => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ChartOptions::default();
        assert_eq!(options.kind, ChartKind::Line);
        assert_eq!(options.height(), 400);
        assert!(options.show_controls());
        assert!(options.fields.is_empty());
    }

    #[test]
    fn test_format_value_defaults_to_identity() {
        let options = ChartOptions::new(ChartKind::Line);
        assert_eq!(options.format_value(21.5), "21.5");

        let options = options.with_format(Arc::new(|v| format!("{v:.1}°C")));
        assert_eq!(options.format_value(21.54), "21.5°C");
    }
}
