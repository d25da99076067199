// ABOUTME: Text report for an inspected database
// ABOUTME: Writes the table list, then columns and sampled rows per table

pub mod repr;

use std::io::Write;

use crate::db::{InspectError, Inspector};
use crate::models::{ColumnDescriptor, Row};

/// Write the full report for every catalog table.
///
/// Output is streamed table by table; the first failing table aborts the
/// report with its error.
pub fn write_report<W: Write>(
    inspector: &Inspector,
    sample_limit: u32,
    out: &mut W,
) -> Result<usize, InspectError> {
    let tables = inspector.list_tables()?;
    writeln!(
        out,
        "Tables: {}",
        repr::list(tables.iter().map(|t| repr::tuple([repr::text(t)])))
    )?;

    for table in &tables {
        let columns = inspector.describe_table(table)?;
        let rows = inspector.sample_rows(table, sample_limit)?;
        write_table(out, table, sample_limit, &columns, &rows)?;
    }

    Ok(tables.len())
}

fn write_table<W: Write>(
    out: &mut W,
    table: &str,
    sample_limit: u32,
    columns: &[ColumnDescriptor],
    rows: &[Row],
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Table: {}", table)?;
    writeln!(out, "Columns: {}", repr::list(columns.iter().map(repr::column)))?;
    writeln!(out, "Rows (up to {}): {}", sample_limit, rows.len())?;
    for row in rows {
        writeln!(out, "{}", repr::row(row))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn fixture(sql: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(sql).unwrap();
        (dir, path)
    }

    fn render(path: &Path) -> String {
        let inspector = Inspector::open(path).unwrap();
        let mut out = Vec::new();
        write_report(&inspector, 20, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_database() {
        let (_dir, path) = fixture("CREATE TABLE scratch (x); DROP TABLE scratch;");
        assert_eq!(render(&path), "Tables: []\n");
    }

    #[test]
    fn test_single_table_report() {
        let (_dir, path) = fixture(
            "CREATE TABLE T (id INTEGER PRIMARY KEY, name TEXT);
             INSERT INTO T VALUES (1, 'Lipa');
             INSERT INTO T VALUES (2, 'Tanauan');
             INSERT INTO T VALUES (3, NULL);",
        );

        let expected = "\
Tables: [('T',)]

Table: T
Columns: [(0, 'id', 'INTEGER', 0, None, 1), (1, 'name', 'TEXT', 0, None, 0)]
Rows (up to 20): 3
(1, 'Lipa')
(2, 'Tanauan')
(3, None)
";
        assert_eq!(render(&path), expected);
    }

    #[test]
    fn test_row_cap() {
        let mut sql = String::from("CREATE TABLE big (n INTEGER);");
        for i in 0..45 {
            sql.push_str(&format!("INSERT INTO big VALUES ({});", i));
        }
        let (_dir, path) = fixture(&sql);

        let report = render(&path);
        assert!(report.contains("Rows (up to 20): 20\n"));
        let row_lines = report.lines().filter(|l| l.starts_with('(')).count();
        assert_eq!(row_lines, 20);
    }

    #[test]
    fn test_empty_table_has_no_row_lines() {
        let (_dir, path) = fixture("CREATE TABLE hollow (id INTEGER);");

        let report = render(&path);
        assert!(report.ends_with("Rows (up to 20): 0\n"));
    }

    #[test]
    fn test_tables_reported_in_catalog_order() {
        let (_dir, path) = fixture(
            "CREATE TABLE second_made (x);
             CREATE TABLE first_alpha (y);",
        );

        let report = render(&path);
        assert!(report.starts_with("Tables: [('second_made',), ('first_alpha',)]\n"));
        let second = report.find("Table: second_made").unwrap();
        let first = report.find("Table: first_alpha").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_repeat_runs_identical() {
        let (_dir, path) = fixture(
            "CREATE TABLE a (id INTEGER, v REAL);
             INSERT INTO a VALUES (1, 0.5), (2, 1.25);
             CREATE TABLE b (blob_col BLOB);
             INSERT INTO b VALUES (x'deadbeef');",
        );

        assert_eq!(render(&path), render(&path));
    }

    #[test]
    fn test_invalid_utf8_text_aborts_report() {
        let (_dir, path) = fixture(
            "CREATE TABLE notes (a);
             INSERT INTO notes VALUES (CAST(x'41ff' AS TEXT));",
        );

        let inspector = Inspector::open(&path).unwrap();
        let mut out = Vec::new();
        let result = write_report(&inspector, 20, &mut out);

        assert!(matches!(result, Err(InspectError::Sqlite(_))));
        let partial = String::from_utf8(out).unwrap();
        assert!(!partial.contains("Rows (up to 20)"));
    }

    #[test]
    fn test_sample_limit_shows_in_header() {
        let (_dir, path) = fixture(
            "CREATE TABLE t (id INTEGER);
             INSERT INTO t VALUES (1), (2), (3);",
        );

        let inspector = Inspector::open(&path).unwrap();
        let mut out = Vec::new();
        let count = write_report(&inspector, 2, &mut out).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert_eq!(count, 1);
        assert!(report.contains("Rows (up to 2): 2\n(1,)\n(2,)\n"));
    }
}
