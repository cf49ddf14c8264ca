//! Persists generated data sets together with the settings they were
//! generated from.

pub mod delimited;
pub mod path;

use self::path::OutputPath;
use crate::dataset::Dataset;
use crate::errors::*;
use crate::settings::{OutputFormat, Settings};
use crate::Float;
use error_chain::bail;
use log::debug;
use ndarray::{Array, ArrayViewD, IxDyn};
use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A data set as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRecord {
    pub settings: Settings,
    pub data: Array<Float, IxDyn>,
}

/// Borrowed counterpart of `DatasetRecord` used for writing.
#[derive(Serialize)]
struct DatasetRecordRef<'a> {
    settings: &'a Settings,
    data: ArrayViewD<'a, Float>,
}

pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::CBOR => "cbor",
        OutputFormat::Bincode => "bincode",
        OutputFormat::MsgPack => "msgpack",
        OutputFormat::CSV => "csv",
    }
}

/// Writes `dataset` in the configured output format next to `path` and
/// returns the path of the written file. The binary formats embed `settings`,
/// CSV only holds the values.
pub fn write_dataset(path: &OutputPath, settings: &Settings, dataset: &Dataset) -> Result<PathBuf> {
    let format = settings.output.format;
    let filepath = path.with_extension(file_extension(format));

    debug!(
        "Writing data set of shape {:?} to '{}'.",
        dataset.shape(),
        filepath.display()
    );

    if format == OutputFormat::CSV {
        delimited::write_csv(&filepath, dataset.view_dyn())?;
    } else {
        let record = DatasetRecordRef {
            settings,
            data: dataset.view_dyn(),
        };
        write_record(&filepath, format, &record)?;
    }

    Ok(filepath)
}

fn write_record(filepath: &Path, format: OutputFormat, record: &DatasetRecordRef) -> Result<()> {
    let file = File::create(filepath)
        .chain_err(|| format!("couldn't create output file '{}'.", filepath.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::CBOR => serde_cbor::to_writer(&mut writer, record)
            .chain_err(|| "Cannot write data set (format: CBOR).")?,
        OutputFormat::Bincode => bincode::serialize_into(&mut writer, record)
            .chain_err(|| "Cannot write data set (format: Bincode).")?,
        OutputFormat::MsgPack => rmp_serde::encode::write_named(&mut writer, record)
            .chain_err(|| "Cannot write data set (format: MsgPack).")?,
        OutputFormat::CSV => bail!("CSV output does not embed the settings."),
    }

    writer
        .flush()
        .chain_err(|| "Error flushing data set to disk")?;

    Ok(())
}

/// Reads a data set written in one of the binary formats, determined by the
/// file extension.
pub fn read_dataset(fname: &Path) -> Result<DatasetRecord> {
    let ext = match fname.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_string(),
        None => bail!(
            "Missing file extension for '{}'. Cannot determine filetype.",
            fname.display()
        ),
    };

    let f =
        File::open(fname).chain_err(|| format!("Unable to open file '{}'.", fname.display()))?;
    let mut r = BufReader::new(f);

    match ext.as_str() {
        "cbor" => Ok(serde_cbor::from_reader(r).chain_err(|| "CBOR, cannot decode given file.")?),
        "bincode" => Ok(bincode::deserialize_from(&mut r)
            .chain_err(|| "Bincode, cannot decode given file.")?),
        "msgpack" => {
            Ok(rmp_serde::from_read(r).chain_err(|| "MsgPack, cannot decode given file.")?)
        }
        _ => bail!(ErrorKind::UnknownFormat(ext)),
    }
}

pub fn pretty_print_duration(d: Duration) -> String {
    let total = d.as_secs();
    let days = total / 86_400;
    let hours = total / 3_600 - days * 24;
    let minutes = total / 60 - (days * 24 + hours) * 60;
    let seconds = total % 60;
    let millis = d.subsec_millis();

    format!(
        "{d} days {h} hours {m} minutes {s}.{ms:03} seconds",
        d = days,
        h = hours,
        m = minutes,
        s = seconds,
        ms = millis
    )
}
