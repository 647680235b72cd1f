use crate::fixtures::SCHEMA;
use model::core::value::Value;
use rusqlite::{Connection, ToSql, types::Value as SqlValue};
use sqlgen::query::renderer::Statement;
use tracing::debug;

pub fn open() -> rusqlite::Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

pub fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Int(v) => SqlValue::Integer(*v),
        Value::Uint(v) => SqlValue::Integer(*v as i64),
        Value::Float(v) => SqlValue::Real(*v),
        Value::String(v) => SqlValue::Text(v.clone()),
        Value::Boolean(v) => SqlValue::Integer(i64::from(*v)),
        Value::Json(v) => SqlValue::Text(v.to_string()),
        Value::Uuid(v) => SqlValue::Text(v.to_string()),
        Value::Bytes(v) => SqlValue::Blob(v.clone()),
        Value::Date(v) => SqlValue::Text(v.to_string()),
        Value::Timestamp(v) => SqlValue::Text(v.to_rfc3339()),
        Value::Null => SqlValue::Null,
    }
}

/// Binds are keyed by bare name; SQLite wants the `:` prefix.
fn named_params(stmt: &Statement) -> Vec<(String, SqlValue)> {
    stmt.binds
        .iter()
        .map(|b| (format!(":{}", b.name), to_sql_value(&b.value)))
        .collect()
}

pub fn execute(conn: &Connection, stmt: &Statement) -> rusqlite::Result<usize> {
    debug!(sql = %stmt.sql, "Executing");
    let params = named_params(stmt);
    let refs: Vec<(&str, &dyn ToSql)> = params
        .iter()
        .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
        .collect();
    conn.execute(&stmt.sql, refs.as_slice())
}

/// Runs a query and collects its first column as text.
pub fn query_ids(conn: &Connection, stmt: &Statement) -> rusqlite::Result<Vec<String>> {
    debug!(sql = %stmt.sql, "Querying");
    let params = named_params(stmt);
    let refs: Vec<(&str, &dyn ToSql)> = params
        .iter()
        .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
        .collect();
    let mut prepared = conn.prepare(&stmt.sql)?;
    let rows = prepared.query_map(refs.as_slice(), |row| row.get::<_, String>(0))?;
    rows.collect()
}
