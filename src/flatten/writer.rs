use crate::flatten::types::Table;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write a table as CSV: header row first, then one line per record.
///
/// Missing cells become empty fields; quoting and escaping follow standard
/// CSV rules. Returns the number of record rows written. A zero-column
/// table writes nothing.
pub fn write_table<W: Write>(writer: W, table: &Table) -> Result<usize> {
    if table.columns.is_empty() {
        return Ok(0);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(&table.columns)
        .context("Failed to write CSV header")?;

    for row in &table.rows {
        csv_writer
            .write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))
            .context("Failed to write CSV record")?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(table.rows.len())
}

/// Write a table as CSV to a file, overwriting it. Returns the record count.
pub fn write_table_to_file<P: AsRef<Path>>(path: P, table: &Table) -> Result<usize> {
    let file = std::fs::File::create(&path).with_context(|| {
        format!(
            "Failed to create output file: {}",
            path.as_ref().display()
        )
    })?;
    write_table(file, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: Vec<Vec<Option<&str>>>) -> Table {
        Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|c| c.map(String::from)).collect())
                .collect(),
        }
    }

    fn render(table: &Table) -> String {
        let mut buffer = Vec::new();
        write_table(&mut buffer, table).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_then_rows() {
        let t = table(
            &["a", "b_0", "b_1"],
            vec![
                vec![Some("1"), Some("10"), Some("20")],
                vec![Some("2"), Some("30"), None],
            ],
        );
        assert_eq!(render(&t), "a,b_0,b_1\n1,10,20\n2,30,\n");
    }

    #[test]
    fn test_quoting() {
        let t = table(
            &["name", "note"],
            vec![vec![Some("with, comma"), Some("say \"hi\"")]],
        );
        assert_eq!(render(&t), "name,note\n\"with, comma\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_embedded_newline_is_quoted() {
        let t = table(&["a"], vec![vec![Some("two\nlines")]]);
        assert_eq!(render(&t), "a\n\"two\nlines\"\n");
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let t = table(&[], vec![]);
        let mut buffer = Vec::new();
        let written = write_table(&mut buffer, &t).unwrap();
        assert_eq!(written, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_record_count() {
        let t = table(&["a"], vec![vec![Some("1")], vec![Some("2")]]);
        let mut buffer = Vec::new();
        assert_eq!(write_table(&mut buffer, &t).unwrap(), 2);
    }
}
