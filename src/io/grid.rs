//! Plain-text spin grids: one lattice row per line, comma-delimited integers.
//!
//! ```text
//! -1,1,1,-1
//! 1,1,-1,-1
//! ...
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use crate::error::{IsingError, Result};
use crate::lattice::Lattice;

fn parse_rows<R: Read>(reader: R) -> Result<Vec<Vec<i64>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let values = record
            .iter()
            .enumerate()
            .map(|(col, text)| {
                text.parse::<i64>().map_err(|_| IsingError::MalformedCell {
                    row,
                    col,
                    text: text.to_string(),
                })
            })
            .collect::<Result<Vec<i64>>>()?;
        rows.push(values);
    }
    Ok(rows)
}

/// Parse a square grid of any size.
pub fn parse_grid<R: Read>(reader: R) -> Result<Lattice> {
    Lattice::from_rows(&parse_rows(reader)?)
}

/// Parse a grid that must be exactly `size` x `size`.
pub fn parse_reference<R: Read>(reader: R, size: usize) -> Result<Lattice> {
    let rows = parse_rows(reader)?;
    let cols = rows.iter().map(Vec::len).find(|&len| len != size).unwrap_or(size);
    if rows.len() != size || cols != size {
        return Err(IsingError::DimensionMismatch {
            expected: size,
            rows: rows.len(),
            cols,
        });
    }
    Lattice::from_rows(&rows)
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Lattice> {
    parse_grid(BufReader::new(File::open(path)?))
}

pub fn read_reference<P: AsRef<Path>>(path: P, size: usize) -> Result<Lattice> {
    parse_reference(BufReader::new(File::open(path)?), size)
}

pub fn write_grid<W: Write>(lattice: &Lattice, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    for i in 0..lattice.size() {
        wtr.write_record(lattice.row(i).iter().map(|spin| spin.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_grid<P: AsRef<Path>>(lattice: &Lattice, path: P) -> Result<()> {
    write_grid(lattice, BufWriter::new(File::create(path)?))
}
