//! Telegram adapter (teloxide).
//!
//! This crate implements the `tsh-core` MessagingPort over the Telegram Bot API.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{ForceReply, MessageEntity, MessageEntityKind},
};

pub mod handlers;
pub mod router;

use tsh_core::{
    chunking::{Annotation, Chunk},
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::MessagingCapabilities},
    Result,
};

/// Telegram's hard limit for a message text, in UTF-16 code units.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    fn sent_ref(chat_id: ChatId, msg: &Message) -> MessageRef {
        MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        }
    }
}

/// Map an annotation onto a Telegram entity. Unknown kinds map to `None`.
///
/// Offsets are passed through unchanged: both sides count UTF-16 code units.
pub fn to_entity(a: &Annotation) -> Option<MessageEntity> {
    let kind = match a.kind.as_str() {
        "bold" => MessageEntityKind::Bold,
        "italic" => MessageEntityKind::Italic,
        "underline" => MessageEntityKind::Underline,
        "strikethrough" => MessageEntityKind::Strikethrough,
        "spoiler" => MessageEntityKind::Spoiler,
        "code" => MessageEntityKind::Code,
        "pre" => MessageEntityKind::Pre { language: None },
        _ => return None,
    };
    Some(MessageEntity::new(kind, a.offset, a.length))
}

fn to_entities(chunk: &Chunk) -> Vec<MessageEntity> {
    chunk
        .annotations
        .iter()
        .filter_map(|a| {
            let entity = to_entity(a);
            if entity.is_none() {
                tracing::warn!(kind = %a.kind, "dropping annotation of unsupported kind");
            }
            entity
        })
        .collect()
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    fn capabilities(&self) -> MessagingCapabilities {
        MessagingCapabilities {
            max_message_len: TELEGRAM_MESSAGE_LIMIT,
            supports_force_reply: true,
        }
    }

    async fn send_text(&self, reply_to: MessageRef, text: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(reply_to.chat_id), text.to_string())
            .reply_to_message_id(Self::tg_msg_id(reply_to.message_id))
            .await
            .map_err(Self::map_err)?;
        Ok(Self::sent_ref(reply_to.chat_id, &msg))
    }

    async fn send_prompt(&self, reply_to: MessageRef, text: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(reply_to.chat_id), text.to_string())
            .reply_to_message_id(Self::tg_msg_id(reply_to.message_id))
            .reply_markup(ForceReply::new())
            .await
            .map_err(Self::map_err)?;
        Ok(Self::sent_ref(reply_to.chat_id, &msg))
    }

    async fn send_chunk(&self, reply_to: MessageRef, chunk: &Chunk) -> Result<MessageRef> {
        let entities = to_entities(chunk);
        let mut req = self
            .bot
            .send_message(Self::tg_chat(reply_to.chat_id), chunk.text.clone())
            .reply_to_message_id(Self::tg_msg_id(reply_to.message_id));
        if !entities.is_empty() {
            req = req.entities(entities);
        }
        let msg = req.await.map_err(Self::map_err)?;
        Ok(Self::sent_ref(reply_to.chat_id, &msg))
    }
}
