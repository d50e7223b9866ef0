//! Two-column text exchange format for series points.
//!
//! One point per line, `x` and `y` separated by whitespace:
//!
//! ```text
//! 1 3
//! 10 30
//! 600 400
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::core::{DataPoint, Series};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Parses points from a reader. Blank lines are skipped.
pub fn read_points(reader: impl BufRead) -> PlotResult<Vec<DataPoint>> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        points.push(parse_line(trimmed, index + 1)?);
    }
    Ok(points)
}

/// Writes one `x y` line per point.
pub fn write_points(mut writer: impl Write, points: &[DataPoint]) -> PlotResult<()> {
    for point in points {
        writeln!(writer, "{} {}", point.x, point.y)?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads a series from a file, naming it after the file.
pub fn import_series(path: impl AsRef<Path>, color: Color) -> PlotResult<Series> {
    let path = path.as_ref();
    let points = read_points(BufReader::new(File::open(path)?))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!(name = %name, count = points.len(), "imported series");
    Ok(Series::new(name, color, points))
}

pub fn export_series(path: impl AsRef<Path>, series: &Series) -> PlotResult<()> {
    let file = File::create(path.as_ref())?;
    write_points(BufWriter::new(file), series.points())?;
    debug!(name = series.name(), count = series.len(), "exported series");
    Ok(())
}

fn parse_line(line: &str, line_number: usize) -> PlotResult<DataPoint> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = columns.as_slice() else {
        return Err(PlotError::Import {
            line: line_number,
            message: format!("expected 2 columns, found {}", columns.len()),
        });
    };

    let parse = |text: &str, axis: &str| {
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| PlotError::Import {
                line: line_number,
                message: format!("{axis} value `{text}` is not a finite number"),
            })
    };
    Ok(DataPoint::new(parse(*x, "x")?, parse(*y, "y")?))
}
