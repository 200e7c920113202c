//! Dataset loading from JSON or `MessagePack` files.
//!
//! The format is chosen by extension: `.msgpack` and `.mp` are read as
//! `MessagePack`, anything else as JSON.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use mstgraph_foundation::{Error, ErrorKind, Region, Result};
use mstgraph_storage::{RawDataset, Snapshot};

/// On-disk dataset encodings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DatasetFormat {
    /// A JSON object keyed by table name.
    Json,
    /// The same object encoded as `MessagePack`.
    MessagePack,
}

impl DatasetFormat {
    /// Picks the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let is_msgpack = path.extension().is_some_and(|ext| {
            ext.eq_ignore_ascii_case("msgpack") || ext.eq_ignore_ascii_case("mp")
        });
        if is_msgpack { Self::MessagePack } else { Self::Json }
    }
}

/// Parses a dataset from bytes.
///
/// # Errors
///
/// Returns a `Serialization` error if the bytes are not a valid dataset.
pub fn from_bytes(bytes: &[u8], format: DatasetFormat) -> Result<RawDataset> {
    match format {
        DatasetFormat::Json => serde_json::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string()))),
        DatasetFormat::MessagePack => rmp_serde::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string()))),
    }
}

/// Encodes a dataset as `MessagePack`, with field names preserved.
///
/// # Errors
///
/// Returns a `Serialization` error if encoding fails.
pub fn to_msgpack(dataset: &RawDataset) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(dataset)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Reads a dataset file.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read, or a `Serialization`
/// error if its contents are not a valid dataset.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<RawDataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    from_bytes(&bytes, DatasetFormat::from_path(path)).map_err(|mut err| {
        if let ErrorKind::Serialization(message) = &mut err.kind {
            *message = format!("{}: {message}", path.display());
        }
        err
    })
}

/// Reads a dataset file and builds a snapshot labelled with its path.
///
/// Consistency problems do not fail the load; they are on the
/// snapshot's report.
///
/// # Errors
///
/// Returns an `Io` or `Serialization` error if the file cannot be read.
pub fn load_snapshot<P: AsRef<Path>>(path: P, region: Region) -> Result<Snapshot> {
    let path = path.as_ref();
    let dataset = read_dataset(path)?;
    let rows = dataset.row_count();
    let snapshot = Snapshot::build(dataset, region, path.display().to_string());
    tracing::info!(
        %region,
        path = %path.display(),
        rows,
        entities = snapshot.store().len(),
        warnings = snapshot.report().len(),
        "dataset.load"
    );
    Ok(snapshot)
}
