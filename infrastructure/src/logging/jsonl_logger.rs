//! Append-only JSONL writer for conversation events.
//!
//! Every event becomes one line: the payload object plus `type` and
//! `timestamp` keys. Earlier sessions in the same file are preserved.

use chatline_application::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let line = match serde_json::to_string(&Self::record(event)) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize conversation event: {}", e);
                return;
            }
        };

        let Ok(mut writer) = self.writer.lock() else {
            warn!(
                "Conversation log {} is poisoned, dropping event",
                self.path.display()
            );
            return;
        };
        // One flush per line so a crash loses at most the current event
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!(
                "Could not write conversation log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
