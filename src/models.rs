// ABOUTME: Shared data models for the inspector
// ABOUTME: Table names, column descriptors, and dynamically-typed row values

use rusqlite::types::ValueRef;

/// A table name as returned by the catalog query
pub type TableName = String;

/// A single cell value, one variant per SQLite storage class
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// Text cells must hold valid UTF-8; anything else is rejected, not repaired
impl TryFrom<ValueRef<'_>> for Value {
    type Error = std::str::Utf8Error;

    fn try_from(value: ValueRef<'_>) -> Result<Self, Self::Error> {
        Ok(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(s) => Value::Text(std::str::from_utf8(s)?.to_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        })
    }
}

/// Column metadata for one table column, in `table_info` order
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// Zero-based ordinal position
    pub cid: i64,
    pub name: String,
    /// Declared type; empty when the column was declared without one
    pub declared_type: String,
    /// 1 when the column is NOT NULL
    pub not_null: i64,
    /// Default value expression as written in the schema
    pub default_value: Option<String>,
    /// 1-based position within the primary key, 0 when not part of it
    pub pk: i64,
}

/// One sampled row, values in the table's column order
pub type Row = Vec<Value>;
