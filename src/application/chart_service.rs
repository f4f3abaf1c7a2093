// Chart service - fetch orchestration and range management
use crate::application::data_repository::{DataRequest, DeviceDataRepository};
use crate::application::options::{ChartOptions, DataLoader};
use crate::domain::chart::ChartKind;
use crate::domain::error::ChartError;
use crate::domain::plot::PlotData;
use crate::domain::range::RangeState;
use crate::domain::shaper::shape;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Host cleanup callback, run when the chart is disposed.
pub type DisposeHook = Box<dyn FnOnce() + Send>;

/// Fetch lifecycle of a chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Clone)]
enum DataSource {
    Device {
        uuid: String,
        repository: Arc<dyn DeviceDataRepository>,
    },
    Loader(DataLoader),
}

struct ChartState {
    range: RangeState,
    loading: bool,
    generation: u64,
    phase: ChartPhase,
    data: Option<PlotData>,
}

/// Consistent snapshot of a chart's observable state.
#[derive(Debug, Clone)]
pub struct ChartStatus {
    pub loading: bool,
    pub phase: ChartPhase,
    pub range: RangeState,
    pub data: PlotData,
}

/// Creates chart instances bound to a device-data repository.
#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn DeviceDataRepository>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn DeviceDataRepository>) -> Self {
        Self { repository }
    }

    /// Build a chart for a device. A `load_data` callback in the options
    /// takes precedence over the device endpoint; pie charts require one,
    /// the endpoint's row output does not fit the pie payload shape.
    pub fn chart(
        &self,
        device_uuid: impl Into<String>,
        options: ChartOptions,
    ) -> Result<Chart, ChartError> {
        let source = match options.load_data.clone() {
            Some(loader) => DataSource::Loader(loader),
            None if options.kind == ChartKind::Pie => {
                return Err(ChartError::Configuration(
                    "pie charts require a load_data callback".into(),
                ));
            }
            None => DataSource::Device {
                uuid: device_uuid.into(),
                repository: self.repository.clone(),
            },
        };
        Chart::build(source, options)
    }
}

/// One chart instance: owns its range state, loading flag and the last
/// successfully shaped data. Share through `Arc` to drive it from UI
/// callbacks; every fetch is generation-tagged so a superseded response
/// is discarded instead of overwriting newer data.
pub struct Chart {
    kind: ChartKind,
    request: DataRequest,
    options: ChartOptions,
    source: DataSource,
    state: Mutex<ChartState>,
    dispose_hooks: Mutex<Vec<DisposeHook>>,
}

impl std::fmt::Debug for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chart")
            .field("kind", &self.kind)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl Chart {
    /// Build a chart fed exclusively by the options' `load_data` callback.
    pub fn with_loader(options: ChartOptions) -> Result<Self, ChartError> {
        let Some(loader) = options.load_data.clone() else {
            return Err(ChartError::Configuration(
                "chart without a device requires a load_data callback".into(),
            ));
        };
        Self::build(DataSource::Loader(loader), options)
    }

    fn build(source: DataSource, options: ChartOptions) -> Result<Self, ChartError> {
        let range = RangeState::from_option(options.timerange)?;
        let request = DataRequest::for_chart(options.kind, options.fields.clone());
        Ok(Self {
            kind: options.kind,
            request,
            options,
            source,
            state: Mutex::new(ChartState {
                range,
                loading: false,
                generation: 0,
                phase: ChartPhase::Idle,
                data: None,
            }),
            dispose_hooks: Mutex::new(Vec::new()),
        })
    }

    /// Fetch and shape data for the current range.
    ///
    /// On failure the previous data is left untouched, the loading flag is
    /// cleared and the error is both logged and returned. A refresh that
    /// was superseded by a newer one returns the newer state unchanged.
    pub async fn refresh(&self) -> Result<PlotData, ChartError> {
        let (generation, start, end) = {
            let mut state = self.lock();
            state.generation += 1;
            state.loading = true;
            state.phase = ChartPhase::Loading;
            (state.generation, state.range.start, state.range.end)
        };

        tracing::debug!("Loading {} chart data for range {}..{}", self.kind, start, end);
        let fetched = match &self.source {
            DataSource::Loader(load) => load(start, end).await,
            DataSource::Device { uuid, repository } => {
                repository.get_device_data(uuid, start, end, &self.request).await
            }
        };

        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!("Discarding superseded chart fetch (generation {})", generation);
            return Ok(current_data(&state, self.kind));
        }

        let raw = match fetched {
            Ok(raw) => raw,
            Err(err) => {
                state.loading = false;
                state.phase = ChartPhase::Failed;
                tracing::warn!("Chart data fetch failed: {:#}", err);
                return Err(ChartError::Fetch(err));
            }
        };

        match shape(self.kind, &raw) {
            Ok(data) => {
                state.data = Some(data.clone());
                state.loading = false;
                state.phase = ChartPhase::Ready;
                Ok(data)
            }
            Err(err) => {
                state.loading = false;
                state.phase = ChartPhase::Failed;
                tracing::warn!("Chart data could not be shaped: {}", err);
                Err(err)
            }
        }
    }

    /// Switch to a rolling window ending now, then re-fetch.
    pub async fn set_predefined_range(&self, duration_secs: i64) -> Result<PlotData, ChartError> {
        let range = RangeState::predefined(duration_secs)?;
        self.lock().range = range;
        self.refresh().await
    }

    /// Switch to fixed bounds, then re-fetch.
    pub async fn set_custom_range(&self, start: i64, end: i64) -> Result<PlotData, ChartError> {
        let range = RangeState::custom(start, end)?;
        self.lock().range = range;
        self.refresh().await
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn range(&self) -> RangeState {
        self.lock().range
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn phase(&self) -> ChartPhase {
        self.lock().phase
    }

    /// Last successfully shaped data; empty until the first fetch lands.
    pub fn data(&self) -> PlotData {
        let state = self.lock();
        current_data(&state, self.kind)
    }

    pub fn status(&self) -> ChartStatus {
        let state = self.lock();
        ChartStatus {
            loading: state.loading,
            phase: state.phase,
            range: state.range,
            data: current_data(&state, self.kind),
        }
    }

    /// Register a host cleanup callback, e.g. removing renderer tooltips.
    pub fn on_dispose(&self, hook: DisposeHook) {
        self.dispose_hooks.lock().expect("dispose hooks lock poisoned").push(hook);
    }

    /// Run the registered cleanup callbacks. Idempotent.
    pub fn dispose(&self) {
        let hooks: Vec<DisposeHook> = self
            .dispose_hooks
            .lock()
            .expect("dispose hooks lock poisoned")
            .drain(..)
            .collect();
        for hook in hooks {
            hook();
        }
    }

    fn lock(&self) -> MutexGuard<'_, ChartState> {
        self.state.lock().expect("chart state lock poisoned")
    }
}

fn current_data(state: &ChartState, kind: ChartKind) -> PlotData {
    state.data.clone().unwrap_or_else(|| PlotData::empty(kind))
}
