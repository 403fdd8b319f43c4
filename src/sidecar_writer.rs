use std::fs;
use std::path::Path;
use log::{debug, warn};
use serde_json::{Map, Value};
use crate::analysis::CueMetrics;
use crate::errors::{CaptionError, SidecarError};

// @module: Sidecar JSON document merging

/// Merge scored records into the sidecar document at `path`.
///
/// The document's top level must be a JSON object. The entry under `key`
/// is replaced wholesale with the serialized records; every other field is
/// preserved as-is. A missing sidecar file starts a fresh document.
pub fn merge_into_sidecar(
    path: &Path,
    key: &str,
    records: &[CueMetrics],
    pretty: bool,
) -> Result<(), CaptionError> {
    let mut document = load_document(path)?;

    let serialized = serde_json::to_value(records).map_err(SidecarError::Json)?;
    document.insert(key.to_string(), serialized);

    let root = Value::Object(document);
    let payload = if pretty {
        serde_json::to_string_pretty(&root).map_err(SidecarError::Json)?
    } else {
        serde_json::to_string(&root).map_err(SidecarError::Json)?
    };

    fs::write(path, payload)?;
    debug!("Wrote {} record(s) under '{}' in {:?}", records.len(), key, path);

    Ok(())
}

/// Load the sidecar document, or start a fresh one if the file is missing.
fn load_document(path: &Path) -> Result<Map<String, Value>, CaptionError> {
    if !path.exists() {
        warn!("Sidecar {:?} does not exist, starting a fresh document", path);
        return Ok(Map::new());
    }

    let content = fs::read_to_string(path)?;
    let root: Value = serde_json::from_str(&content).map_err(SidecarError::Json)?;

    match root {
        Value::Object(document) => Ok(document),
        _ => Err(SidecarError::NotAnObject {
            path: path.display().to_string(),
        }
        .into()),
    }
}
