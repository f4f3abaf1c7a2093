// Time-range state for chart fetches
use crate::domain::error::ChartError;
use serde::Serialize;

/// Default window: the last day through now.
pub const DEFAULT_RANGE_SECS: i64 = 86_400;

/// Rolling-window durations offered by range selectors, with display labels.
pub const RANGE_PRESETS: [RangePreset; 8] = [
    RangePreset::new(86_400, "Last day"),
    RangePreset::new(172_800, "Last 2 days"),
    RangePreset::new(604_800, "Last week"),
    RangePreset::new(1_209_600, "Last 2 weeks"),
    RangePreset::new(2_678_400, "Last month"),
    RangePreset::new(7_862_400, "Last quarter"),
    RangePreset::new(15_724_800, "Last semester"),
    RangePreset::new(31_449_600, "Last year"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangePreset {
    pub secs: i64,
    pub label: &'static str,
}

impl RangePreset {
    const fn new(secs: i64, label: &'static str) -> Self {
        Self { secs, label }
    }
}

/// Caller-supplied initial time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerangeOption {
    /// Rolling window of the given duration, ending at "now".
    Predefined(i64),
    /// Fixed bounds, not recomputed automatically.
    Custom { start: i64, end: i64 },
}

/// Current time window of a chart.
///
/// Invariant: `selector != 0` means a rolling window where
/// `end - start == selector` and `end` was "now" at the latest range
/// change; `selector == 0` means fixed caller-supplied bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeState {
    pub selector: i64,
    pub start: i64,
    pub end: i64,
}

impl RangeState {
    /// Rolling window of `duration_secs` ending at the current time.
    pub fn predefined(duration_secs: i64) -> Result<Self, ChartError> {
        if duration_secs <= 0 {
            return Err(ChartError::Configuration(format!(
                "predefined range duration must be positive, got {duration_secs}"
            )));
        }
        Ok(Self::predefined_at(duration_secs, now_ts()))
    }

    pub(crate) fn predefined_at(duration_secs: i64, now: i64) -> Self {
        Self {
            selector: duration_secs,
            start: now - duration_secs,
            end: now,
        }
    }

    /// Fixed window with caller-supplied bounds.
    pub fn custom(start: i64, end: i64) -> Result<Self, ChartError> {
        if end < start {
            return Err(ChartError::Configuration(format!(
                "custom range end {end} precedes start {start}"
            )));
        }
        Ok(Self {
            selector: 0,
            start,
            end,
        })
    }

    /// Initial state from chart options; absent means the last day.
    pub fn from_option(option: Option<TimerangeOption>) -> Result<Self, ChartError> {
        match option {
            Some(TimerangeOption::Predefined(secs)) => Self::predefined(secs),
            Some(TimerangeOption::Custom { start, end }) => Self::custom(start, end),
            None => Self::predefined(DEFAULT_RANGE_SECS),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.selector == 0
    }

    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_window_ends_at_now() {
        let range = RangeState::predefined_at(86_400, 1_700_000_000);
        assert_eq!(range.selector, 86_400);
        assert_eq!(range.end, 1_700_000_000);
        assert_eq!(range.start, 1_700_000_000 - 86_400);
        assert_eq!(range.duration(), 86_400);
        assert!(!range.is_custom());
    }

    #[test]
    fn test_predefined_window_rolls_forward_on_each_change() {
        let first = RangeState::predefined_at(86_400, 1_700_000_000);
        let second = RangeState::predefined_at(86_400, 1_700_000_010);

        assert!(second.end > first.end);
        assert_eq!(first.duration(), 86_400);
        assert_eq!(second.duration(), 86_400);
    }

    #[test]
    fn test_predefined_rejects_non_positive_duration() {
        assert!(matches!(
            RangeState::predefined(0),
            Err(ChartError::Configuration(_))
        ));
        assert!(matches!(
            RangeState::predefined(-60),
            Err(ChartError::Configuration(_))
        ));
    }

    #[test]
    fn test_custom_range_is_fixed() {
        let range = RangeState::custom(100, 200).unwrap();
        assert_eq!(range.selector, 0);
        assert!(range.is_custom());
        assert_eq!((range.start, range.end), (100, 200));
    }

    #[test]
    fn test_custom_range_rejects_inverted_bounds() {
        assert!(matches!(
            RangeState::custom(200, 100),
            Err(ChartError::Configuration(_))
        ));
    }

    #[test]
    fn test_default_option_is_last_day() {
        let range = RangeState::from_option(None).unwrap();
        assert_eq!(range.selector, DEFAULT_RANGE_SECS);
        assert_eq!(range.duration(), DEFAULT_RANGE_SECS);
    }

    #[test]
    fn test_presets_cover_day_through_year() {
        assert_eq!(RANGE_PRESETS.first().map(|p| p.secs), Some(86_400));
        assert_eq!(RANGE_PRESETS.last().map(|p| p.secs), Some(31_449_600));
        assert!(RANGE_PRESETS.windows(2).all(|w| w[0].secs < w[1].secs));
    }
}
