//! Whitespace delimited text storage of n-dimensional data. The leading axis
//! becomes the rows, all remaining axes are flattened into the columns. The
//! full shape has to be supplied again when reading.

use crate::errors::*;
use crate::Float;
use error_chain::bail;
use ndarray::{Array, ArrayViewD, IxDyn};
use std::path::Path;

const DELIMITER: u8 = b' ';

/// Writes `data` as `shape[0]` rows of space separated values.
pub fn write_csv<P: AsRef<Path>>(path: P, data: ArrayViewD<Float>) -> Result<()> {
    let path = path.as_ref();

    let rows = data.shape().first().cloned().unwrap_or(1);
    let row_len = if rows == 0 { 0 } else { data.len() / rows };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_path(path)
        .chain_err(|| format!("Unable to create CSV file '{}'.", path.display()))?;

    // logical order, independent of the memory layout
    let values: Vec<Float> = data.iter().cloned().collect();

    for (i, row) in values.chunks(row_len.max(1)).enumerate() {
        // shortest representation that reads back exactly
        writer
            .write_record(row.iter().map(|v| format!("{:e}", v)))
            .chain_err(|| format!("Failed to write row {} of '{}'.", i + 1, path.display()))?;
    }

    writer.flush()?;

    Ok(())
}

/// Reads a file written by `write_csv`. Without `shape` the flat
/// `[rows, columns]` matrix is returned, otherwise it is reshaped into `shape`.
pub fn read_csv<P: AsRef<Path>>(path: P, shape: Option<&[usize]>) -> Result<Array<Float, IxDyn>> {
    let path = path.as_ref();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .chain_err(|| format!("Unable to open CSV file '{}'.", path.display()))?;

    let mut values = Vec::new();
    let mut rows = 0;
    let mut row_len = None;

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.chain_err(|| format!("CSV parse error at row {}", row_idx + 1))?;

        match row_len {
            None => row_len = Some(record.len()),
            Some(n) if n != record.len() => {
                bail!(ErrorKind::ShapeMismatch(vec![n], vec![record.len()]))
            }
            _ => {}
        }

        for field in record.iter() {
            let v: Float = field
                .parse()
                .chain_err(|| format!("Invalid value '{}' at row {}", field, row_idx + 1))?;
            values.push(v);
        }

        rows += 1;
    }

    let row_len = row_len.unwrap_or(0);
    let flat = Array::from_shape_vec(IxDyn(&[rows, row_len]), values)
        .chain_err(|| "Unable to assemble CSV data.")?;

    match shape {
        None => Ok(flat),
        Some(s) => {
            if s.iter().product::<usize>() != flat.len() {
                bail!(ErrorKind::ShapeMismatch(s.to_vec(), vec![rows, row_len]))
            }

            flat.into_shape(IxDyn(s))
                .chain_err(|| format!("Unable to reshape CSV data into {:?}.", s))
        }
    }
}
