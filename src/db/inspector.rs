// ABOUTME: Read-only SQLite access for the inspector
// ABOUTME: Lists catalog tables, describes their columns, and samples rows

use rusqlite::{params, Connection, OpenFlags, Row as SqlRow};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{ColumnDescriptor, Row, TableName, Value};

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Database file not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exclusive, read-only handle on one database file.
///
/// The connection is released when the inspector is dropped, so an early
/// return from a failing table never leaks it.
pub struct Inspector {
    conn: Connection,
    path: PathBuf,
}

impl Inspector {
    /// Open an existing database file read-only
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InspectError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InspectError::DatabaseNotFound(path.to_path_buf()));
        }

        log::debug!("opening {} read-only", path.display());
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// File this inspector was opened on
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all catalog entries of kind `table`, in engine order
    pub fn list_tables(&self) -> Result<Vec<TableName>, InspectError> {
        log::debug!("listing tables from sqlite_master");
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;

        let tables = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tables)
    }

    /// Column metadata for one table, in declaration order
    pub fn describe_table(&self, table: &str) -> Result<Vec<ColumnDescriptor>, InspectError> {
        log::debug!("describing table {}", table);
        let mut stmt = self.conn.prepare(
            r#"SELECT cid, name, type, "notnull", dflt_value, pk FROM pragma_table_info(?1)"#,
        )?;

        let columns = stmt
            .query_map(params![table], |row| {
                Ok(ColumnDescriptor {
                    cid: row.get(0)?,
                    name: row.get(1)?,
                    declared_type: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    not_null: row.get(3)?,
                    default_value: row.get(4)?,
                    pk: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(columns)
    }

    /// Up to `limit` rows from `table`, in whatever order the engine yields them
    pub fn sample_rows(&self, table: &str, limit: u32) -> Result<Vec<Row>, InspectError> {
        log::debug!("sampling up to {} rows from {}", limit, table);
        let query = format!("SELECT * FROM {} LIMIT ?1", quote_identifier(table));
        let mut stmt = self.conn.prepare(&query)?;
        let column_count = stmt.column_count();

        let rows = stmt
            .query_map(params![limit], |row| {
                (0..column_count)
                    .map(|idx| cell(row, idx))
                    .collect::<Result<Row, _>>()
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Close the connection, surfacing any error from SQLite
    pub fn close(self) -> Result<(), InspectError> {
        log::debug!("closing {}", self.path.display());
        self.conn.close().map_err(|(_, e)| InspectError::Sqlite(e))
    }
}

/// Convert one cell, failing on text that is not valid UTF-8
fn cell(row: &SqlRow<'_>, idx: usize) -> rusqlite::Result<Value> {
    let value = row.get_ref(idx)?;
    Value::try_from(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, value.data_type(), Box::new(e))
    })
}

/// Quote an identifier for direct use in SQL text
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
