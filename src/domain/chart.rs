// Chart kind and request-mode dispatch
use crate::domain::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    MultiBar,
    Pie,
}

/// Payload shape requested from the data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    List,
    Dict,
}

impl ChartKind {
    /// Request-mode dispatch table. Resolved once at configuration time so
    /// the fetch path never branches on strings.
    pub fn output_mode(self) -> OutputMode {
        match self {
            ChartKind::Line | ChartKind::Bar => OutputMode::List,
            ChartKind::MultiBar | ChartKind::Pie => OutputMode::Dict,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::MultiBar => "multibar",
            ChartKind::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            "multibar" => Ok(ChartKind::MultiBar),
            "pie" => Ok(ChartKind::Pie),
            other => Err(ChartError::Configuration(format!(
                "invalid chart type {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("line".parse::<ChartKind>().unwrap(), ChartKind::Line);
        assert_eq!("bar".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        assert_eq!("multibar".parse::<ChartKind>().unwrap(), ChartKind::MultiBar);
        assert_eq!("pie".parse::<ChartKind>().unwrap(), ChartKind::Pie);
    }

    #[test]
    fn test_parse_unknown_kind_is_configuration_error() {
        let err = "spider".parse::<ChartKind>().unwrap_err();
        assert!(matches!(err, ChartError::Configuration(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_output_mode_dispatch() {
        assert_eq!(ChartKind::Line.output_mode(), OutputMode::List);
        assert_eq!(ChartKind::Bar.output_mode(), OutputMode::List);
        assert_eq!(ChartKind::MultiBar.output_mode(), OutputMode::Dict);
        assert_eq!(ChartKind::Pie.output_mode(), OutputMode::Dict);
    }

    #[test]
    fn test_serde_names_match_wire_strings() {
        assert_eq!(serde_json::to_string(&ChartKind::MultiBar).unwrap(), "\"multibar\"");
        assert_eq!(serde_json::to_string(&OutputMode::Dict).unwrap(), "\"dict\"");
    }
}
