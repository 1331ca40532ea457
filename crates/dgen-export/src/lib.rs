//! dgen-export: JSON export for generated dungeons
//!
//! Writes a [`DungeonMap`] as pretty-printed JSON (2-space indent) to
//! `dungeon_<millis>.json`, optionally gzip-compressed, and reads such files
//! back.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use thiserror::Error;
use tracing::{debug, info};

use dgen_core::DungeonMap;

/// File name prefix for exported maps
pub const EXPORT_PREFIX: &str = "dungeon_";

/// Extension of plain exports
pub const JSON_EXTENSION: &str = "json";

/// Extension of compressed exports
pub const GZIP_EXTENSION: &str = "json.gz";

/// Export/import errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export file not found")]
    NotFound,

    #[error("Export file corrupted: {0}")]
    Corrupted(String),
}

/// Render a map as pretty JSON
pub fn export_to_string(map: &DungeonMap) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(map)?)
}

/// Millisecond timestamp used in the export file name
pub fn export_timestamp(map: &DungeonMap) -> i64 {
    map.metadata().generated_at.timestamp_millis()
}

/// `dungeon_<millis>.json`
pub fn export_file_name(map: &DungeonMap) -> String {
    format!("{}{}.{}", EXPORT_PREFIX, export_timestamp(map), JSON_EXTENSION)
}

/// `dungeon_<millis>.json.gz`
pub fn compressed_file_name(map: &DungeonMap) -> String {
    format!("{}{}.{}", EXPORT_PREFIX, export_timestamp(map), GZIP_EXTENSION)
}

/// Write the map into `dir` as pretty JSON, returning the file path
///
/// Creates `dir` if it does not exist.
pub fn export_to_dir(map: &DungeonMap, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(map));

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, map)?;
    writer.flush()?;

    info!(path = %path.display(), "exported dungeon");
    Ok(path)
}

/// Write the map into `dir` as gzip-compressed pretty JSON
pub fn export_compressed_to_dir(
    map: &DungeonMap,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(compressed_file_name(map));

    let file = File::create(&path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    serde_json::to_writer_pretty(&mut encoder, map)?;
    encoder.finish()?.flush()?;

    info!(path = %path.display(), "exported compressed dungeon");
    Ok(path)
}

fn is_compressed(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "gz")
}

/// Parse a map from JSON text and check its structure
pub fn parse_dungeon(json: &str) -> Result<DungeonMap, ExportError> {
    let map: DungeonMap = serde_json::from_str(json)?;
    map.check_structure().map_err(ExportError::Corrupted)?;
    Ok(map)
}

/// Load an exported map, plain or gzip-compressed (by extension)
pub fn load_dungeon(path: impl AsRef<Path>) -> Result<DungeonMap, ExportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|_| ExportError::NotFound)?;
    let mut reader = BufReader::new(file);

    let mut json = String::new();
    if is_compressed(path) {
        GzDecoder::new(reader).read_to_string(&mut json)?;
    } else {
        reader.read_to_string(&mut json)?;
    }

    debug!(path = %path.display(), bytes = json.len(), "loading dungeon");
    parse_dungeon(&json)
}

/// Get the default export directory
pub fn default_export_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dungeon-gen");
    path.push("exports");
    path
}

/// Timestamp encoded in an export file name, if it is one
fn timestamp_from_name(name: &str) -> Option<i64> {
    let rest = name.strip_prefix(EXPORT_PREFIX)?;
    let stamp = rest
        .strip_suffix(&format!(".{}", GZIP_EXTENSION))
        .or_else(|| rest.strip_suffix(&format!(".{}", JSON_EXTENSION)))?;
    stamp.parse().ok()
}

/// List exported files in `dir`, newest first
pub fn list_exports(dir: impl AsRef<Path>) -> Result<Vec<(PathBuf, i64)>, ExportError> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut exports = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let stamp = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(timestamp_from_name);
        if let Some(stamp) = stamp {
            exports.push((path, stamp));
        }
    }

    exports.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(exports)
}
