//! Best-effort mirroring of created records to an external sink.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::traits::ExternalSink;

/// Mirror `record` into `collection` on the sink, if one is attached.
///
/// A missing sink is the normal case. Any failure is logged and swallowed;
/// the local write has already happened and stays authoritative.
pub fn mirror_to_sink<T: Serialize>(sink: Option<&Arc<dyn ExternalSink>>, collection: &str, record: &T) {
    let Some(sink) = sink else {
        debug!("No external sink attached, '{}' kept in local storage only", collection);
        return;
    };

    let value = match serde_json::to_value(record) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to encode record for external sink '{}': {}", collection, e);
            return;
        }
    };

    if let Err(e) = sink.insert_data(collection, &value) {
        warn!("External sink unavailable for '{}', using local storage: {}", collection, e);
    }
}

/// Appends `{"collection": ..., "record": ...}` lines to a file.
///
/// Used by the CLI when `sink_file` is configured.
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ExternalSink for JsonLinesSink {
    fn insert_data(&self, collection: &str, record: &serde_json::Value) -> Result<()> {
        let line = serde_json::json!({ "collection": collection, "record": record });

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open sink file {}", self.path.display()))?;
        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to append to sink file {}", self.path.display()))?;

        debug!("Mirrored {} record to {:?}", collection, self.path);
        Ok(())
    }
}
