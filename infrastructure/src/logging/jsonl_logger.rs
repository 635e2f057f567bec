//! JSONL file writer for transcript events.
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying its payload plus
//! `type` and `timestamp` fields. The file is opened in append mode so one
//! log can span several runs.

use solar_application::{ConversationEvent, ConversationLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Transcript logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened; the caller runs
    /// without a transcript log in that case.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open transcript log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = match event.payload {
            serde_json::Value::Object(mut map) => {
                map.insert("type".to_string(), event.event_type.into());
                map.insert("timestamp".to_string(), timestamp.into());
                serde_json::Value::Object(map)
            }
            other => serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": other,
            }),
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                warn!("Failed to write transcript log {}: {}", self.path.display(), e);
            }
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "turn_processed",
            json!({
                "input": "What is net metering?",
                "accepted": true,
                "reply": "Net metering credits exported energy.",
                "fault": false
            }),
        ));
        logger.log(ConversationEvent::new("transcript_cleared", json!({"cleared_turns": 1})));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "turn_processed");
        assert_eq!(records[0]["input"], "What is net metering?");
        assert_eq!(records[0]["accepted"], true);
        assert!(records[0]["timestamp"].is_string());
        assert_eq!(records[1]["type"], "transcript_cleared");
        assert_eq!(records[1]["cleared_turns"], 1);
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new("note", json!("just a string")));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "note");
        assert_eq!(records[0]["data"], "just a string");
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("transcript.jsonl");

        for i in 0..2 {
            let logger = JsonlConversationLogger::new(&path).unwrap();
            logger.log(ConversationEvent::new("turn_processed", json!({"n": i})));
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["n"], 1);
    }
}
