// Chart error taxonomy

/// Errors surfaced by the charting core.
///
/// `Configuration` is fatal to the chart instance, `Fetch` and
/// `MalformedData` are recoverable: the previous plot data stays intact.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("invalid chart configuration: {0}")]
    Configuration(String),

    #[error("failed to fetch chart data: {0:#}")]
    Fetch(anyhow::Error),

    #[error("malformed chart data: {0}")]
    MalformedData(String),
}

impl ChartError {
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ChartError::Configuration(_))
    }
}
