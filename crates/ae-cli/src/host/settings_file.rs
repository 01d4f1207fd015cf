//! Settings persisted as a single JSON object on disk.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use ae_core::{AeError, AeResult, KeyValueStore};

/// A [`KeyValueStore`] backed by `settings.json`. Every write rewrites the file.
pub struct FileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> AeResult<Self> {
        let values = match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<Value>(&text)? {
                Value::Object(map) => map,
                _ => {
                    return Err(AeError::Store(format!(
                        "{} is not a JSON object",
                        path.display()
                    )));
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    fn flush(&self) -> AeResult<()> {
        let text = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, text)
            .map_err(|e| AeError::Store(format!("cannot write {}: {e}", self.path.display())))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AeResult<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> AeResult<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}
