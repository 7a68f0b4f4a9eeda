use crate::domain::{ChatId, MessageId, MessageRef, UserId};

/// Incoming text message, messenger-agnostic.
#[derive(Clone, Debug)]
pub struct TextMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub user_id: Option<UserId>,
    pub username: Option<String>,
    pub text: String,
}

impl TextMessage {
    pub fn message_ref(&self) -> MessageRef {
        MessageRef {
            chat_id: self.chat_id,
            message_id: self.message_id,
        }
    }
}

/// Capabilities / limits of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    /// Hard message length limit, in UTF-16 code units.
    pub max_message_len: usize,
    pub supports_force_reply: bool,
}
