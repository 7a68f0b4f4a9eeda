//! Telegram update handlers.
//!
//! Handlers only translate teloxide types into `tsh-core` messages; the
//! session logic lives in [`tsh_core::bot::ShellBot`].

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use crate::router::AppState;

mod text;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if msg.text().is_some() {
        return text::handle_text(msg, state).await;
    }

    tracing::debug!(
        chat_id = msg.chat.id.0,
        message_id = msg.id.0,
        "Ignoring non-text message"
    );
    Ok(())
}
