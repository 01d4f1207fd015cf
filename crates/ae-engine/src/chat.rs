//! Chat output: the encounter summary, its preview, and the chat log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::resolver::ResolvedEncounter;

/// A message posted to the shared chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id.
    pub id: Uuid,
    /// Author of the message.
    pub user: String,
    /// Recipients. A whisper to the author only holds the author.
    pub whisper: Vec<String>,
    /// HTML body.
    pub content: String,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// A message visible only to its author.
    pub fn whisper(user: &str, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: user.to_string(),
            whisper: vec![user.to_string()],
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The host's chat log.
pub trait ChatLog {
    /// Append a message.
    fn post(&mut self, message: ChatMessage) -> EngineResult<()>;
}

/// A [`ChatLog`] that keeps messages in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryChatLog {
    messages: Vec<ChatMessage>,
}

impl MemoryChatLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages posted so far.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

impl ChatLog for MemoryChatLog {
    fn post(&mut self, message: ChatMessage) -> EngineResult<()> {
        self.messages.push(message);
        Ok(())
    }
}

/// Render the chat summary of a matched encounter. `None` for a miss.
pub fn render_message(encounter: &ResolvedEncounter) -> Option<String> {
    let doc = encounter.document.as_ref()?;
    let actors: Vec<String> = encounter.actors.iter().map(|a| a.to_string()).collect();

    Some(format!(
        "<h2>{}</h2>\n\
         <p><strong>Encounter Type:</strong> {}</p>\n\
         <p><strong>Location:</strong> {}</p>\n\
         <p><strong>Actors:</strong><br>{}</p>\n\
         <hr>\n\
         {}",
        doc.name,
        encounter.encounter_type,
        encounter.location,
        actors.join("<br>"),
        encounter.description,
    ))
}

/// A rendered encounter awaiting "send to chat" or "cancel".
#[derive(Debug, Clone)]
pub struct Preview {
    encounter: ResolvedEncounter,
    content: String,
}

impl Preview {
    /// Build the preview of a matched encounter.
    ///
    /// A miss has nothing to preview and is rejected.
    pub fn new(encounter: ResolvedEncounter) -> EngineResult<Self> {
        let content = render_message(&encounter).ok_or(EngineError::NothingToPost {
            row: encounter.row,
            col: encounter.col,
        })?;
        Ok(Self { encounter, content })
    }

    /// The message body that would be posted.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The body wrapped for display in the preview dialog.
    pub fn html(&self) -> String {
        format!("<div class=\"encounter-preview\">{}</div>", self.content)
    }

    /// The encounter being previewed.
    pub fn encounter(&self) -> &ResolvedEncounter {
        &self.encounter
    }

    /// Send to chat as a whisper to `user`.
    pub fn confirm<C: ChatLog + ?Sized>(self, chat: &mut C, user: &str) -> EngineResult<ChatMessage> {
        let message = ChatMessage::whisper(user, self.content);
        chat.post(message.clone())?;
        log::info!("posted {} encounter to chat", self.encounter.encounter_type);
        Ok(message)
    }

    /// Discard the preview without posting.
    pub fn cancel(self) -> ResolvedEncounter {
        self.encounter
    }
}
