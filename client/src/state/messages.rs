//! Message board contents and composer draft validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The board view and the composer both read this state from context. The
//! home page itself never touches it.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Maximum message size in bytes (the EOS transfer memo limit).
pub const MAX_MESSAGE_BYTES: usize = 256;

/// Reasons a composer draft cannot be posted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("message is empty")]
    Empty,
    #[error("message is {len} bytes; the limit is {max}")]
    TooLong { len: usize, max: usize },
}

/// State for the message board.
#[derive(Clone, Debug, Default)]
pub struct MessageBoardState {
    pub messages: Vec<BoardMessage>,
}

/// A single message on the board.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardMessage {
    pub id: String,
    pub author: String,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: f64,
}

impl MessageBoardState {
    /// Append a message and return its id.
    pub fn post(&mut self, author: String, content: String, created_at: f64) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.messages.push(BoardMessage { id: id.clone(), author, content, created_at });
        id
    }

    /// Messages ordered newest first; equal timestamps keep posting order
    /// reversed so the latest post leads.
    pub fn newest_first(&self) -> Vec<BoardMessage> {
        let mut ordered: Vec<BoardMessage> = self.messages.iter().rev().cloned().collect();
        ordered.sort_by(|a, b| b.created_at.total_cmp(&a.created_at));
        ordered
    }
}

/// Trim a draft and check it against the board's limits.
pub fn validate_message(draft: &str) -> Result<String, ComposeError> {
    let content = draft.trim();
    if content.is_empty() {
        return Err(ComposeError::Empty);
    }
    if content.len() > MAX_MESSAGE_BYTES {
        return Err(ComposeError::TooLong { len: content.len(), max: MAX_MESSAGE_BYTES });
    }
    Ok(content.to_owned())
}

/// Current time in milliseconds; `0.0` outside the browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
