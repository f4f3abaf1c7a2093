// Data shaping: raw payloads to per-kind plotting structures
use crate::domain::chart::ChartKind;
use crate::domain::error::ChartError;
use crate::domain::plot::{PieSlice, PlotData, StackedPoint, StackedSeries, XySeries};
use crate::domain::series::{RawData, Row, SeriesEntry, ValueEntry};
use indexmap::IndexMap;

/// Shape a fetched payload for the given chart kind.
///
/// Pure and deterministic. An empty payload of any mode shapes to an empty
/// plot; a payload whose mode does not match the kind is `MalformedData`.
pub fn shape(kind: ChartKind, raw: &RawData) -> Result<PlotData, ChartError> {
    if raw.is_empty() {
        return Ok(PlotData::empty(kind));
    }

    match (kind, raw) {
        (ChartKind::Line, RawData::Series(map)) => Ok(PlotData::Xy(shape_line(map))),
        (ChartKind::Bar, RawData::Series(map)) => Ok(PlotData::Xy(shape_bar(map))),
        (ChartKind::MultiBar, RawData::Rows(rows)) => Ok(PlotData::Stacked(shape_multibar(rows)?)),
        (ChartKind::Pie, RawData::Values(map)) => Ok(PlotData::Pie(shape_pie(map))),
        (kind, raw) => Err(ChartError::MalformedData(format!(
            "{kind} chart cannot plot a {} payload",
            raw.mode_name()
        ))),
    }
}

/// One series per entry, keyed by the entry's display name, values passed
/// through unchanged.
fn shape_line(map: &IndexMap<String, SeriesEntry>) -> Vec<XySeries> {
    map.values()
        .map(|entry| XySeries::line(entry.name.clone(), entry.values.clone()))
        .collect()
}

/// Same as line, but keyed by the mapping key and flagged as bars.
fn shape_bar(map: &IndexMap<String, SeriesEntry>) -> Vec<XySeries> {
    map.iter()
        .map(|(key, entry)| XySeries::bar(key.clone(), entry.values.clone()))
        .collect()
}

/// One stacked series per value field, enumerated in first-row field order.
/// The stack offset accumulates left-to-right across series and resets on
/// every row.
fn shape_multibar(rows: &[Row]) -> Result<Vec<StackedSeries>, ChartError> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };

    let fields: Vec<String> = first.fields.keys().cloned().collect();
    let mut series: Vec<StackedSeries> = fields
        .iter()
        .map(|field| StackedSeries::new(field.clone()))
        .collect();

    for row in rows {
        let mut offset = 0.0;
        for (index, field) in fields.iter().enumerate() {
            let y = row.field_value(field).ok_or_else(|| {
                ChartError::MalformedData(format!(
                    "row at ts {} has no numeric value for field {field:?}",
                    row.ts
                ))
            })?;
            series[index].values.push(StackedPoint {
                x: row.ts,
                y,
                y0: offset,
                y1: y + offset,
                series: index,
                key: field.clone(),
                size: y,
            });
            offset += y;
        }
    }

    Ok(series)
}

fn shape_pie(map: &IndexMap<String, ValueEntry>) -> Vec<PieSlice> {
    map.values()
        .map(|entry| PieSlice {
            key: entry.name.clone(),
            value: entry.value,
        })
        .collect()
}
