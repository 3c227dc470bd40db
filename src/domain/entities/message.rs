/// A text message pulled from the chat platform during one poll cycle.
///
/// Immutable once built; handled in arrival order and discarded.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub chat_id: String,
    pub text: String,
    /// Monotonically increasing platform sequence id, used to advance
    /// the poll cursor.
    pub update_id: i64,
}

impl IncomingMessage {
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>, update_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            update_id,
        }
    }
}

/// The bot's answer to a single incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub photo_url: Option<String>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            photo_url: None,
        }
    }

    pub fn with_photo(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }
}
