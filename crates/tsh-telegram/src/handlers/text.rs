use std::sync::Arc;

use teloxide::prelude::*;

use tsh_core::{
    domain::{ChatId, MessageId, UserId},
    messaging::types::TextMessage,
};

use crate::router::AppState;

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text().map(|s| s.to_string()) else {
        return Ok(());
    };

    let user = msg.from();
    let incoming = TextMessage {
        chat_id: ChatId(msg.chat.id.0),
        message_id: MessageId(msg.id.0),
        user_id: user.map(|u| UserId(u.id.0 as i64)),
        username: user.and_then(|u| u.username.clone()),
        text,
    };

    let Some(cmd) = state.shell_bot.handle_text(&incoming).await else {
        return Ok(());
    };

    // Run off the dispatcher so the chat stays responsive while the script runs.
    let shell_bot = state.shell_bot.clone();
    tokio::spawn(async move {
        shell_bot.run_command(cmd).await;
    });

    Ok(())
}
