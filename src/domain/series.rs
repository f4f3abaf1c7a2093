// Raw device-data payload model
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `[timestamp, value]` pair as the data service delivers it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint(pub i64, pub f64);

impl DataPoint {
    pub fn ts(&self) -> i64 {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

/// List-mode entry: a named sequence of `[timestamp, value]` pairs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeriesEntry {
    pub name: String,
    pub values: Vec<DataPoint>,
}

/// One dict-mode row: a timestamp plus the value fields captured at it.
/// Field order is kept as delivered, it fixes stacking order downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Row {
    pub ts: i64,
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl Row {
    /// Numeric value of a field, `None` when absent or not a number.
    pub fn field_value(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(Value::as_f64)
    }
}

/// Dict-mode entry for pie payloads: a named single value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValueEntry {
    pub name: String,
    pub value: f64,
}

/// A fetched payload. The variant is dictated by the request's output mode:
/// list mode yields `Series`, dict mode yields `Rows` for time-keyed data
/// or `Values` for name/value data (pie).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawData {
    Series(IndexMap<String, SeriesEntry>),
    Rows(Vec<Row>),
    Values(IndexMap<String, ValueEntry>),
}

impl RawData {
    pub fn is_empty(&self) -> bool {
        match self {
            RawData::Series(map) => map.is_empty(),
            RawData::Rows(rows) => rows.is_empty(),
            RawData::Values(map) => map.is_empty(),
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            RawData::Series(_) => "series",
            RawData::Rows(_) => "rows",
            RawData::Values(_) => "values",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_list_mode_payload() {
        let raw: RawData = serde_json::from_value(json!({
            "temperature": {"name": "Temperature", "values": [[1, 21.5], [2, 21.7]]},
            "humidity": {"name": "Humidity", "values": [[1, 48.0], [2, 47.0]]},
        }))
        .unwrap();

        let RawData::Series(map) = raw else {
            panic!("expected series payload");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map["temperature"].name, "Temperature");
        assert_eq!(map["temperature"].values, vec![DataPoint(1, 21.5), DataPoint(2, 21.7)]);
    }

    #[test]
    fn test_parse_rows_keeps_field_order() {
        let raw: RawData = serde_json::from_value(json!([
            {"ts": 100, "zone1": 1.0, "zone2": 2.0, "zone0": 3.0},
            {"ts": 200, "zone1": 4.0, "zone2": 5.0, "zone0": 6.0},
        ]))
        .unwrap();

        let RawData::Rows(rows) = raw else {
            panic!("expected rows payload");
        };
        let fields: Vec<&str> = rows[0].fields.keys().map(String::as_str).collect();
        assert_eq!(fields, ["zone1", "zone2", "zone0"]);
        assert_eq!(rows[1].field_value("zone0"), Some(6.0));
        assert_eq!(rows[1].field_value("missing"), None);
    }

    #[test]
    fn test_parse_pie_values_payload() {
        let raw: RawData = serde_json::from_value(json!({
            "disk": {"name": "Disk", "value": 12.0},
        }))
        .unwrap();
        assert!(matches!(raw, RawData::Values(_)));
    }

    #[test]
    fn test_empty_object_parses_as_empty_payload() {
        let raw: RawData = serde_json::from_value(json!({})).unwrap();
        assert!(raw.is_empty());
        let raw: RawData = serde_json::from_value(json!([])).unwrap();
        assert!(raw.is_empty());
    }
}
