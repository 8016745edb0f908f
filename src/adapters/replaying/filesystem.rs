//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::{extract_result, next_output};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "fs", "read_to_string");
        extract_result(&output, "fs::read_to_string")
    }

    fn write(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "fs", "write");
        if let Some(err) = output.get("err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(msg.into());
        }
        Ok(())
    }

    fn append(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "fs", "append");
        if let Some(err) = output.get("err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(msg.into());
        }
        Ok(())
    }

    fn is_dir(&self, _path: &Path) -> bool {
        let output = next_output(&self.replayer, "fs", "is_dir");
        output.as_bool().expect("fs::is_dir: expected boolean output")
    }

    fn list_dir(
        &self,
        _path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "fs", "list_dir");
        extract_result(&output, "fs::list_dir")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette =
            Cassette { name: "test".into(), recorded_at: Utc::now(), interactions };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn replays_read_to_string() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "read_to_string".into(),
            input: json!({"path": "/tmp/test.txt"}),
            output: json!({"ok": "file contents"}),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        let result = fs.read_to_string(Path::new("/tmp/test.txt")).unwrap();
        assert_eq!(result, "file contents");
    }

    #[test]
    fn replays_read_errors() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "read_to_string".into(),
            input: json!({"path": "/missing"}),
            output: json!({"err": "file not found"}),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        let result = fs.read_to_string(Path::new("/missing"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("file not found"));
    }

    #[test]
    fn replays_is_dir_and_list_dir() {
        let replayer = make_replayer(vec![
            Interaction {
                seq: 0,
                port: "fs".into(),
                method: "is_dir".into(),
                input: json!({"path": "/p/app"}),
                output: json!(true),
            },
            Interaction {
                seq: 1,
                port: "fs".into(),
                method: "list_dir".into(),
                input: json!({"path": "/p/app"}),
                output: json!({"ok": ["a.py", "b.py"]}),
            },
        ]);
        let fs = ReplayingFileSystem::new(replayer);
        assert!(fs.is_dir(Path::new("/p/app")));
        assert_eq!(fs.list_dir(Path::new("/p/app")).unwrap(), vec!["a.py", "b.py"]);
    }

    #[test]
    fn replays_append() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "append".into(),
            input: json!({"path": "documentation.md"}),
            output: json!(null),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        assert!(fs.append(Path::new("documentation.md"), "section").is_ok());
    }
}
