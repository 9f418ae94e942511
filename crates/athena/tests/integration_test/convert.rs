use atelier_athena::{result_to_rows, AthenaColumn, AthenaQueryResult, QueryMetadata};
use atelier_core::FieldValue;

fn column(name: &str, data_type: &str) -> AthenaColumn {
    AthenaColumn {
        name: name.into(),
        data_type: data_type.into(),
    }
}

fn daily_result() -> AthenaQueryResult {
    AthenaQueryResult {
        columns: vec![
            column("store_id", "varchar"),
            column("net_revenue", "decimal(12,2)"),
            column("transactions", "bigint"),
            column("conversion_status", "varchar"),
            column("is_franchise", "boolean"),
        ],
        rows: vec![
            vec![
                Some("SV001".into()),
                Some("15240.75".into()),
                Some("42".into()),
                Some("🟢 Excellent".into()),
                Some("false".into()),
            ],
            vec![Some("SV002".into()), None, Some("17".into()), None, Some("true".into())],
        ],
        metadata: QueryMetadata {
            query_id: "q-daily".into(),
            bytes_scanned: 2048,
            execution_time_ms: 900,
            state: "SUCCEEDED".into(),
            output_location: None,
        },
    }
}

#[test]
fn typed_cells_and_column_order() {
    let rows = result_to_rows(&daily_result());
    assert_eq!(rows.len(), 2);

    let first = &rows[0];
    assert_eq!(
        first.columns().collect::<Vec<_>>(),
        vec!["store_id", "net_revenue", "transactions", "conversion_status", "is_franchise"]
    );
    assert_eq!(first.text("store_id"), Some("SV001"));
    assert_eq!(first.get("net_revenue"), Some(&FieldValue::Float(15240.75)));
    assert_eq!(first.get("transactions"), Some(&FieldValue::Integer(42)));
    assert_eq!(first.get("is_franchise"), Some(&FieldValue::Boolean(false)));
}

#[test]
fn null_cells_are_absent_fields() {
    let rows = result_to_rows(&daily_result());
    let second = &rows[1];
    assert_eq!(second.len(), 3);
    assert!(second.get("net_revenue").is_none());
    assert!(second.require_number("net_revenue").is_err());
    assert_eq!(second.number_or_zero("net_revenue"), 0.0);
}

#[test]
fn empty_result_gives_no_rows() {
    let mut result = daily_result();
    result.rows.clear();
    assert!(result_to_rows(&result).is_empty());
}
