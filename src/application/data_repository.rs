// Repository trait for device data access
use crate::domain::chart::{ChartKind, OutputMode};
use crate::domain::series::RawData;
use async_trait::async_trait;
use serde::Serialize;

/// Sort order for fetched rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Request descriptor sent with every device-data fetch. Derived once from
/// the chart configuration; serialized verbatim into the endpoint's
/// `options` parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataRequest {
    pub output: OutputMode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    pub sort: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl DataRequest {
    pub fn for_chart(kind: ChartKind, fields: Vec<String>) -> Self {
        Self {
            output: kind.output_mode(),
            fields,
            sort: SortOrder::Asc,
            limit: None,
        }
    }
}

#[async_trait]
pub trait DeviceDataRepository: Send + Sync {
    /// Fetch raw data for a device over `[start, end]` (epoch seconds).
    async fn get_device_data(
        &self,
        device_uuid: &str,
        start: i64,
        end: i64,
        request: &DataRequest,
    ) -> anyhow::Result<RawData>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization_for_line_chart() {
        let request = DataRequest::for_chart(ChartKind::Line, vec!["temp".into()]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"output": "list", "fields": ["temp"], "sort": "ASC"})
        );
    }

    #[test]
    fn test_request_omits_empty_fields_and_uses_dict_for_multibar() {
        let request = DataRequest::for_chart(ChartKind::MultiBar, Vec::new());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"output": "dict", "sort": "ASC"})
        );
    }
}
