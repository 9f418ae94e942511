use atelier_core::{FieldValue, Row};

use crate::result::AthenaQueryResult;

/// Convert an Athena result set into rows keyed by column name.
///
/// # Type Mapping
///
/// - `bigint`, `int`, `integer`, `smallint`, `tinyint` → `Integer` (with fallback to `Text`)
/// - `double`, `float`, `real`, `decimal(p,s)` → `Float` (with fallback to `Text`)
/// - `boolean` → `Boolean` (with fallback to `Text`)
/// - everything else (`varchar`, `date`, `timestamp`, ...) → `Text`
///
/// NULL cells are omitted from the row rather than stored as `FieldValue::Null`,
/// so rules see them as missing fields.
pub fn result_to_rows(result: &AthenaQueryResult) -> Vec<Row> {
    result
        .rows
        .iter()
        .map(|cells| {
            result
                .columns
                .iter()
                .zip(cells)
                .filter_map(|(col, cell)| {
                    let value = cell.as_deref()?;
                    Some((col.name.clone(), parse_field_value(value, &col.data_type)))
                })
                .collect()
        })
        .collect()
}

/// Parse a raw cell according to its Athena type.
pub(crate) fn parse_field_value(value: &str, data_type: &str) -> FieldValue {
    let normalized = data_type.trim().to_ascii_lowercase();
    // `decimal(12,2)` → `decimal`
    let base = normalized.split('(').next().unwrap_or("").trim();

    match base {
        "bigint" | "int" | "integer" | "smallint" | "tinyint" => value
            .trim()
            .parse::<i64>()
            .map(FieldValue::Integer)
            .unwrap_or_else(|_| FieldValue::Text(value.to_string())),
        "double" | "float" | "real" | "decimal" => value
            .trim()
            .parse::<f64>()
            .map(FieldValue::Float)
            .unwrap_or_else(|_| FieldValue::Text(value.to_string())),
        "boolean" => match value.to_ascii_lowercase().as_str() {
            "true" | "1" => FieldValue::Boolean(true),
            "false" | "0" => FieldValue::Boolean(false),
            _ => FieldValue::Text(value.to_string()),
        },
        _ => FieldValue::Text(value.to_string()),
    }
}
