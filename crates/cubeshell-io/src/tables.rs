//! Comma-separated FEA tables: nodes, element connectivity and densities.
//!
//! Tables have no header row. Fields are trimmed and blank lines skipped.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use cubeshell_geom::Point;

use crate::error::IngestError;

/// One non-empty row of a table with its 1-based line number.
struct Row {
    line: u64,
    record: csv::StringRecord,
}

fn read_rows(path: &Path) -> Result<Vec<Row>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            line: e.position().map_or(0, |p| p.line()),
            message: e.to_string(),
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line());
        rows.push(Row { line, record });
    }
    log::info!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_field<T>(path: &Path, line: u64, field: &str) -> Result<T, IngestError>
where
    T: FromStr,
    T::Err: Display,
{
    field.parse::<T>().map_err(|e| IngestError::Parse {
        path: path.to_path_buf(),
        line,
        message: format!("invalid value {field:?}: {e}"),
    })
}

fn parse_coordinate(path: &Path, line: u64, field: &str) -> Result<i32, IngestError> {
    let v: f64 = parse_field(path, line, field)?;
    if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
        return Err(IngestError::Parse {
            path: path.to_path_buf(),
            line,
            message: format!("coordinate {field:?} is not an integer grid position"),
        });
    }
    Ok(v as i32)
}

fn expect_width(path: &Path, row: &Row, width: usize, what: &str) -> Result<(), IngestError> {
    if row.record.len() != width {
        return Err(IngestError::Parse {
            path: path.to_path_buf(),
            line: row.line,
            message: format!("expected {width} {what}, found {}", row.record.len()),
        });
    }
    Ok(())
}

/// Reads `x,y,z` rows. Index 0 of the result is a placeholder origin so
/// that 1-based node ids index the vector directly.
pub fn read_nodes(path: &Path) -> Result<Vec<Point>, IngestError> {
    let rows = read_rows(path)?;
    let mut nodes = Vec::with_capacity(rows.len() + 1);
    nodes.push(Point::ORIGIN);
    for row in &rows {
        expect_width(path, row, 3, "coordinates")?;
        let mut c = [0i32; 3];
        for (out, field) in c.iter_mut().zip(row.record.iter()) {
            *out = parse_coordinate(path, row.line, field)?;
        }
        nodes.push(Point::from(c));
    }
    Ok(nodes)
}

/// Reads one row of node ids per element.
pub fn read_connectivity(path: &Path) -> Result<Vec<Vec<usize>>, IngestError> {
    read_rows(path)?
        .iter()
        .map(|row| {
            row.record
                .iter()
                .map(|f| parse_field::<usize>(path, row.line, f))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Reads one density value per row.
pub fn read_density(path: &Path) -> Result<Vec<f64>, IngestError> {
    read_rows(path)?
        .iter()
        .map(|row| {
            expect_width(path, row, 1, "density value")?;
            parse_field::<f64>(path, row.line, &row.record[0])
        })
        .collect()
}
