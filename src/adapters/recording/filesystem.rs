//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde_json::json;

use super::{record_result, record_value};
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::filesystem::FileSystem;

/// Records filesystem interactions while delegating to an inner
/// implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl FileSystem for RecordingFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.read_to_string(path);
        record_result(
            &self.recorder,
            "fs",
            "read_to_string",
            &json!({"path": path.display().to_string()}),
            &result,
        );
        result
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.write(path, contents);
        record_result(
            &self.recorder,
            "fs",
            "write",
            &json!({"path": path.display().to_string()}),
            &result,
        );
        result
    }

    fn append(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.append(path, contents);
        record_result(
            &self.recorder,
            "fs",
            "append",
            &json!({"path": path.display().to_string()}),
            &result,
        );
        result
    }

    fn is_dir(&self, path: &Path) -> bool {
        let result = self.inner.is_dir(path);
        record_value(
            &self.recorder,
            "fs",
            "is_dir",
            &json!({"path": path.display().to_string()}),
            &result,
        );
        result
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.list_dir(path);
        record_result(
            &self.recorder,
            "fs",
            "list_dir",
            &json!({"path": path.display().to_string()}),
            &result,
        );
        result
    }
}
