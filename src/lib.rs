//! Charting core for device dashboards: shapes device-data payloads into
//! plotting structures, manages time-range state and orchestrates fetches.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::chart_service::{Chart, ChartPhase, ChartService, ChartStatus, DisposeHook};
pub use application::data_repository::{DataRequest, DeviceDataRepository, SortOrder};
pub use application::options::{ChartOptions, DataLoader, DEFAULT_CHART_HEIGHT, ValueFormatter};
pub use domain::chart::{ChartKind, OutputMode};
pub use domain::error::ChartError;
pub use domain::plot::{PieSlice, PlotData, StackedPoint, StackedSeries, XySeries};
pub use domain::range::{
    DEFAULT_RANGE_SECS, RANGE_PRESETS, RangePreset, RangeState, TimerangeOption,
};
pub use domain::series::{DataPoint, RawData, Row, SeriesEntry, ValueEntry};
pub use domain::shaper::shape;
pub use infrastructure::config::{RpcConfig, RpcSettings, load_rpc_config};
pub use infrastructure::rpc_repository::RpcRepository;
pub use presentation::view::{ChartView, RenderOptions};
