use rowcast_core::stmt::Value as CoreValue;
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// Bridges a rowcast cell and a SQLite parameter or result column.
#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl From<SqlValue> for Value {
    fn from(value: SqlValue) -> Self {
        Self(match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(v) => CoreValue::Integer(v),
            SqlValue::Real(v) => CoreValue::Real(v),
            SqlValue::Text(v) => CoreValue::Text(v),
            SqlValue::Blob(v) => CoreValue::Blob(v),
        })
    }
}

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match &self.0 {
            CoreValue::Null => ToSqlOutput::Owned(SqlValue::Null),
            CoreValue::Integer(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            CoreValue::Real(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            CoreValue::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            CoreValue::Blob(v) => ToSqlOutput::Borrowed(ValueRef::Blob(&v[..])),
        })
    }
}
