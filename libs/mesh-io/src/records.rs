//! # Element Files
//!
//! Index rows for every cell kind. A [`Record`] describes how many fields a
//! row carries and how the fields map onto a cell.

use crate::error::MeshIoError;
use crate::points::rows;
use config::constants::{
    PARALLELEPIPEDS_FILE, PRISMS_FILE, QUADS_FILE, TETRAHEDRA_FILE, TRIANGLES_FILE,
};
use sphere_mesh::{MeshError, Parallelepiped, Prism, Region, Tetrahedron};
use std::io::{Read, Write};

/// A cell that can be stored as one row of integers.
pub trait Record: Sized {
    /// Default file name, also used as the kind in error messages.
    const FILE: &'static str;

    /// Accepted field counts, for error messages.
    const EXPECTED: &'static str;

    /// Whether a row with `count` fields can be decoded.
    fn accepts(count: usize) -> bool;

    /// Builds the record from parsed fields.
    fn from_fields(fields: &[u32]) -> Result<Self, MeshError>;

    /// Appends the row's fields.
    fn write_fields(&self, out: &mut Vec<u32>);
}

fn array<const N: usize>(fields: &[u32]) -> [u32; N] {
    let mut out = [0; N];
    out.copy_from_slice(&fields[..N]);
    out
}

impl Record for [u32; 3] {
    const FILE: &'static str = TRIANGLES_FILE;
    const EXPECTED: &'static str = "3";

    fn accepts(count: usize) -> bool {
        count == 3
    }

    fn from_fields(fields: &[u32]) -> Result<Self, MeshError> {
        Ok(array(fields))
    }

    fn write_fields(&self, out: &mut Vec<u32>) {
        out.extend_from_slice(self);
    }
}

impl Record for [u32; 4] {
    const FILE: &'static str = QUADS_FILE;
    const EXPECTED: &'static str = "4";

    fn accepts(count: usize) -> bool {
        count == 4
    }

    fn from_fields(fields: &[u32]) -> Result<Self, MeshError> {
        Ok(array(fields))
    }

    fn write_fields(&self, out: &mut Vec<u32>) {
        out.extend_from_slice(self);
    }
}

impl Record for Prism {
    const FILE: &'static str = PRISMS_FILE;
    const EXPECTED: &'static str = "6";

    fn accepts(count: usize) -> bool {
        count == 6
    }

    fn from_fields(fields: &[u32]) -> Result<Self, MeshError> {
        Ok(Prism(array(fields)))
    }

    fn write_fields(&self, out: &mut Vec<u32>) {
        out.extend_from_slice(&self.0);
    }
}

impl Record for Parallelepiped {
    const FILE: &'static str = PARALLELEPIPEDS_FILE;
    const EXPECTED: &'static str = "8";

    fn accepts(count: usize) -> bool {
        count == 8
    }

    fn from_fields(fields: &[u32]) -> Result<Self, MeshError> {
        Ok(Parallelepiped(array(fields)))
    }

    fn write_fields(&self, out: &mut Vec<u32>) {
        out.extend_from_slice(&self.0);
    }
}

/// Four node indices plus an optional region tag; untagged rows get
/// [`Region::DEFAULT`].
impl Record for Tetrahedron {
    const FILE: &'static str = TETRAHEDRA_FILE;
    const EXPECTED: &'static str = "4 or 5";

    fn accepts(count: usize) -> bool {
        count == 4 || count == 5
    }

    fn from_fields(fields: &[u32]) -> Result<Self, MeshError> {
        let region = match fields.get(4) {
            Some(&tag) => Region::try_from(tag)?,
            None => Region::DEFAULT,
        };
        Ok(Tetrahedron::new(array(fields), region))
    }

    fn write_fields(&self, out: &mut Vec<u32>) {
        out.extend_from_slice(&self.nodes);
        out.push(self.region.tag());
    }
}

/// Parses the contents of an element file.
///
/// # Example
///
/// ```rust
/// use mesh_io::parse_records;
/// use sphere_mesh::{Region, Tetrahedron};
///
/// let tets: Vec<Tetrahedron> = parse_records("0 1 2 3 0\n4 5 6 7\n").unwrap();
/// assert_eq!(tets[0].region, Region::Inner);
/// assert_eq!(tets[1].region, Region::Outer);
/// ```
pub fn parse_records<R: Record>(text: &str) -> Result<Vec<R>, MeshIoError> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    for (line, tokens) in rows(text) {
        if !R::accepts(tokens.len()) {
            return Err(MeshIoError::FieldCount {
                file: R::FILE,
                line,
                expected: R::EXPECTED,
                found: tokens.len(),
            });
        }
        fields.clear();
        for token in tokens {
            let value = token.parse::<u32>().map_err(|_| MeshIoError::InvalidNumber {
                file: R::FILE,
                line,
                token: token.to_string(),
                what: "a non-negative index",
            })?;
            fields.push(value);
        }
        let record = R::from_fields(&fields).map_err(|source| MeshIoError::InvalidRecord {
            file: R::FILE,
            line,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Reads an element file from a stream.
pub fn read_records<R: Record, S: Read>(mut reader: S) -> Result<Vec<R>, MeshIoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_records(&text)
}

/// Formats records as space-separated rows.
pub fn format_records<R: Record>(records: &[R]) -> String {
    let mut out = String::new();
    let mut fields = Vec::new();
    for record in records {
        fields.clear();
        record.write_fields(&mut fields);
        let row: Vec<String> = fields.iter().map(u32::to_string).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// Writes records to a stream.
pub fn write_records<R: Record, W: Write>(mut writer: W, records: &[R]) -> Result<(), MeshIoError> {
    writer.write_all(format_records(records).as_bytes())?;
    writer.flush()?;
    Ok(())
}
