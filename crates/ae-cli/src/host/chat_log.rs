//! The chat log as a JSON-lines file.

use std::io::Write;
use std::path::{Path, PathBuf};

use ae_engine::{ChatLog, ChatMessage, EngineError, EngineResult};

/// A [`ChatLog`] that appends one JSON object per line.
pub struct JsonlChatLog {
    path: PathBuf,
}

impl JsonlChatLog {
    /// A log at `path`. The file is created on first post.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Every message posted so far, oldest first. Unreadable lines are skipped.
    pub fn messages(&self) -> Result<Vec<ChatMessage>, String> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(format!("cannot read {}: {e}", self.path.display())),
        };
        Ok(text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                serde_json::from_str(line)
                    .inspect_err(|e| log::warn!("skipping chat line: {e}"))
                    .ok()
            })
            .collect())
    }
}

impl ChatLog for JsonlChatLog {
    fn post(&mut self, message: ChatMessage) -> EngineResult<()> {
        let line = serde_json::to_string(&message).map_err(|e| EngineError::Chat(e.to_string()))?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| EngineError::Chat(format!("cannot open {}: {e}", self.path.display())))?;
        writeln!(file, "{line}").map_err(|e| EngineError::Chat(e.to_string()))
    }
}
