//! # Point Files
//!
//! One vertex per line as three whitespace-separated floats.

use crate::error::MeshIoError;
use config::constants::POINTS_FILE;
use glam::DVec3;
use std::io::{Read, Write};

/// Non-blank lines with their 1-based line numbers, split on whitespace.
pub(crate) fn rows(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, fields)| !fields.is_empty())
}

/// Parses the contents of a points file.
///
/// # Example
///
/// ```rust
/// use mesh_io::parse_points;
///
/// let err = parse_points("0 0 1\n0 0\n").unwrap_err();
/// assert_eq!(err.line(), Some(2));
/// ```
pub fn parse_points(text: &str) -> Result<Vec<DVec3>, MeshIoError> {
    let mut points = Vec::new();
    for (line, fields) in rows(text) {
        if fields.len() != 3 {
            return Err(MeshIoError::FieldCount {
                file: POINTS_FILE,
                line,
                expected: "3",
                found: fields.len(),
            });
        }
        let mut xyz = [0.0; 3];
        for (slot, token) in xyz.iter_mut().zip(&fields) {
            *slot = token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| MeshIoError::InvalidNumber {
                    file: POINTS_FILE,
                    line,
                    token: token.to_string(),
                    what: "a finite coordinate",
                })?;
        }
        points.push(DVec3::from_array(xyz));
    }
    Ok(points)
}

/// Reads a points file from a stream.
pub fn read_points<R: Read>(mut reader: R) -> Result<Vec<DVec3>, MeshIoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_points(&text)
}

/// Formats points as `x y z` lines using the shortest round-trip notation.
pub fn format_points(points: &[DVec3]) -> String {
    let mut out = String::with_capacity(points.len() * 24);
    for p in points {
        out.push_str(&format!("{} {} {}\n", p.x, p.y, p.z));
    }
    out
}

/// Writes points to a stream.
pub fn write_points<W: Write>(mut writer: W, points: &[DVec3]) -> Result<(), MeshIoError> {
    writer.write_all(format_points(points).as_bytes())?;
    writer.flush()?;
    Ok(())
}
