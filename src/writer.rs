use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::models::document::MacAddressDocument;
use crate::models::format::OutputFormat;
use crate::models::mac_address::MacAddress;
use crate::{MacGenError, MacGenResult};

/// Write `addresses` to `base` plus each format's extension.
///
/// Every requested format is attempted, even after an earlier one failed.
/// Files already written are left in place. Returns the written paths, or the
/// first error encountered. Failures are logged at debug level only, reporting
/// the returned error is up to the caller.
///
/// # Arguments
///
/// * `addresses` - The addresses to write, in order.
/// * `base` - The output path without extension.
/// * `formats` - The formats to write, in order.
pub fn write(
    addresses: &[MacAddress],
    base: &Path,
    formats: &[OutputFormat],
) -> MacGenResult<Vec<PathBuf>> {
    if formats.is_empty() {
        return Err(MacGenError::ConfigurationError("No output format specified".into()));
    }

    let mut written = Vec::with_capacity(formats.len());
    let mut first_error = None;

    for &format in formats {
        let path = format.path_for(base);
        let result = match format {
            OutputFormat::Json => write_json(addresses, &path),
            OutputFormat::Csv => write_csv(addresses, &path),
        };

        match result {
            Ok(()) => {
                info!("Wrote {} MAC addresses to {}", addresses.len(), path.display());
                written.push(path);
            }
            Err(e) => {
                debug!("Failed to write {format} output to {}: {e}", path.display());
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(written),
    }
}

/// Write `addresses` as a single CSV record, creating or truncating `path`.
pub fn write_csv(addresses: &[MacAddress], path: &Path) -> MacGenResult<()> {
    let file = File::create(path).map_err(|e| MacGenError::io(path, e))?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(addresses.iter().map(|mac| mac.to_string()))?;
    writer.flush().map_err(|e| MacGenError::io(path, e))
}

/// Write `addresses` as `{"macAddress": [...]}` with 2-space indentation,
/// creating or truncating `path`.
pub fn write_json(addresses: &[MacAddress], path: &Path) -> MacGenResult<()> {
    let file = File::create(path).map_err(|e| MacGenError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let document = MacAddressDocument {
        mac_address: addresses.to_vec(),
    };
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush().map_err(|e| MacGenError::io(path, e))
}

/// Read back a file produced by [`write_csv`].
pub fn read_csv(path: &Path) -> MacGenResult<Vec<MacAddress>> {
    let file = File::open(path).map_err(|e| MacGenError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(file);

    let record = match reader.records().next() {
        Some(record) => record?,
        None => return Ok(Vec::new()),
    };
    let addresses = record.iter().map(str::parse).collect::<MacGenResult<Vec<MacAddress>>>()?;
    Ok(addresses)
}

/// Read back a file produced by [`write_json`].
pub fn read_json(path: &Path) -> MacGenResult<Vec<MacAddress>> {
    let file = File::open(path).map_err(|e| MacGenError::io(path, e))?;
    let document: MacAddressDocument = serde_json::from_reader(BufReader::new(file))?;
    Ok(document.mac_address)
}
