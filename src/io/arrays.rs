//! Plain-text arrays: whitespace-separated columns, `#` comment lines.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::analysis::ComparisonTable;
use crate::error::{McmcError, Result};
use crate::model::Configuration;

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| McmcError::io(path, e))
}

fn finish(path: &Path, mut writer: BufWriter<File>) -> Result<()> {
    writer.flush().map_err(|e| McmcError::io(path, e))
}

/// Parse every data line of `path` into exactly `columns` values.
fn read_columns(path: &Path, columns: usize) -> Result<Vec<Vec<f64>>> {
    let file = File::open(path).map_err(|e| McmcError::io(path, e))?;
    let mut rows = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| McmcError::io(path, e))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|tok| tok.parse::<f64>())
            .collect::<std::result::Result<Vec<f64>, _>>()
            .map_err(|e| McmcError::parse(path, i + 1, e.to_string()))?;
        if row.len() != columns {
            return Err(McmcError::parse(
                path,
                i + 1,
                format!("expected {} columns, found {}", columns, row.len()),
            ));
        }
        rows.push(row);
    }
    Ok(rows)
}

pub fn write_samples(path: impl AsRef<Path>, samples: &[Configuration]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create(path)?;
    let io_err = |e| McmcError::io(path, e);
    writeln!(writer, "# x1 x2").map_err(io_err)?;
    for x in samples {
        writeln!(writer, "{} {}", x[0], x[1]).map_err(io_err)?;
    }
    finish(path, writer)
}

pub fn read_samples(path: impl AsRef<Path>) -> Result<Vec<Configuration>> {
    let rows = read_columns(path.as_ref(), 2)?;
    Ok(rows.iter().map(|r| Configuration::new(r[0], r[1])).collect())
}

pub fn write_images(path: impl AsRef<Path>, images: &[f64]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create(path)?;
    let io_err = |e| McmcError::io(path, e);
    writeln!(writer, "# image").map_err(io_err)?;
    for v in images {
        writeln!(writer, "{}", v).map_err(io_err)?;
    }
    finish(path, writer)
}

pub fn read_images(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let rows = read_columns(path.as_ref(), 1)?;
    Ok(rows.into_iter().map(|r| r[0]).collect())
}

/// Write a comparison table with its column names as the header line.
pub fn write_table(path: impl AsRef<Path>, table: &ComparisonTable) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create(path)?;
    let io_err = |e| McmcError::io(path, e);
    writeln!(writer, "# {}", table.header().join(" ")).map_err(io_err)?;
    for row in table.rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{:.6}", v)).collect();
        writeln!(writer, "{}", line.join(" ")).map_err(io_err)?;
    }
    finish(path, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("double_well_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_samples_file() {
        let path = temp_path("samples.txt");
        let samples = vec![Configuration::new(-3.0, 1.0), Configuration::new(-2.95, 1.125)];
        write_samples(&path, &samples).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# x1 x2\n-3 1\n"));
        assert_eq!(read_samples(&path).unwrap(), samples);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_images_file() {
        let path = temp_path("images.txt");
        let images = vec![0.5, -1.25, 3.0];
        write_images(&path, &images).unwrap();
        assert_eq!(read_images(&path).unwrap(), images);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_parse_errors_report_line() {
        let path = temp_path("bad.txt");
        std::fs::write(&path, "# x1 x2\n1 2\n3\n").unwrap();
        match read_samples(&path) {
            Err(McmcError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {:?}", other),
        }

        std::fs::write(&path, "1 abc\n").unwrap();
        assert!(matches!(read_samples(&path), Err(McmcError::Parse { line: 1, .. })));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_table_file() {
        let path = temp_path("table.txt");
        let mut table = ComparisonTable::new("x", vec![0.0, 1.0]);
        table.push("ref", vec![f64::NAN, 0.5]).unwrap();
        write_table(&path, &table).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# x ref");
        assert_eq!(lines[1], "0.000000 NaN");
        assert_eq!(lines[2], "1.000000 0.500000");
        std::fs::remove_file(&path).ok();
    }
}
