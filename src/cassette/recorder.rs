//! Records interactions into a cassette file.

use std::path::{Path, PathBuf};

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Records interactions and writes them as a YAML cassette file.
///
/// The recorder is shared behind `Arc<Mutex<_>>` by the recording adapters,
/// so [`CassetteRecorder::write`] snapshots the current state instead of
/// consuming the recorder.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), interactions: Vec::new(), next_seq: 0 }
    }

    /// Record an interaction. The `seq` field is assigned automatically.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let interaction = Interaction {
            seq: self.next_seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        };
        self.next_seq += 1;
        self.interactions.push(interaction);
    }

    /// Write the interactions recorded so far as a YAML cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn write(&self) -> Result<&Path, std::io::Error> {
        let cassette = Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            interactions: self.interactions.clone(),
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, yaml)?;
        Ok(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_and_write() {
        let dir = std::env::temp_dir().join("codedoc_cassette_recorder_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "test-recording");
        recorder.record(
            "llm",
            "complete",
            json!({"prompt": "hi"}),
            json!({"ok": {"text": "bye"}}),
        );
        recorder.record("fs", "read_to_string", json!({"path": "/a"}), json!({"ok": "b"}));

        let written = recorder.write().expect("write should succeed");
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();

        assert_eq!(cassette.name, "test-recording");
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].seq, 0);
        assert_eq!(cassette.interactions[1].seq, 1);
        assert_eq!(cassette.interactions[0].port, "llm");
        assert_eq!(cassette.interactions[1].port, "fs");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_can_be_called_again_after_more_interactions() {
        let dir = std::env::temp_dir().join("codedoc_cassette_rewrite_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("grow.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "grow");
        recorder.record("fs", "is_dir", json!({"path": "/a"}), json!(true));
        recorder.write().unwrap();

        recorder.record("fs", "is_dir", json!({"path": "/b"}), json!(false));
        recorder.write().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
