//! JSONL file writer for model exchanges.
//!
//! Each [`ExchangeEvent`] becomes one JSON line carrying its `type`, a UTC
//! `timestamp`, a per-file `seq` number and the model name. The file is opened
//! in append mode so a resumed batch run keeps extending the same log.

use router_application::ports::exchange_logger::{ExchangeEvent, ExchangeLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

struct LogState {
    writer: BufWriter<File>,
    seq: u64,
}

/// JSONL exchange logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex`; every line is flushed as it is written.
pub struct JsonlExchangeLogger {
    state: Mutex<LogState>,
    model: String,
    path: PathBuf,
}

impl JsonlExchangeLogger {
    /// Open (or create) the log at `path`, tagging every line with `model`.
    ///
    /// Returns `None` if the file cannot be opened; exchange logging is
    /// best-effort and never stops a run.
    pub fn open(path: impl AsRef<Path>, model: impl Into<String>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create exchange log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open exchange log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            state: Mutex::new(LogState {
                writer: BufWriter::new(file),
                seq: 0,
            }),
            model: model.into(),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(&self, event: ExchangeEvent, seq: u64) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        map.insert("seq".to_string(), Value::from(seq));
        map.insert("model".to_string(), Value::from(self.model.as_str()));
        Value::Object(map)
    }
}

impl ExchangeLogger for JsonlExchangeLogger {
    fn log(&self, event: ExchangeEvent) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        state.seq += 1;
        let record = self.record(event, state.seq);

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };
        let _ = writeln!(state.writer, "{}", line);
        let _ = state.writer.flush();
    }
}

impl Drop for JsonlExchangeLogger {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            let _ = state.writer.flush();
        }
    }
}
