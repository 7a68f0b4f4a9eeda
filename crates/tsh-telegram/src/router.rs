use std::sync::Arc;

use anyhow::Context;
use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use tsh_core::{bot::ShellBot, config::Config, messaging::port::MessagingPort, shell::ShellPort};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub shell_bot: Arc<ShellBot>,
}

pub async fn run_polling(cfg: Arc<Config>, shell: Arc<dyn ShellPort>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.api_token.clone());

    let me = bot
        .get_me()
        .await
        .context("failed to authenticate in the Telegram API")?;
    tracing::info!(username = %me.username(), "Authenticated in the Telegram API");

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let shell_bot = Arc::new(ShellBot::new(&cfg, shell, messenger)?);
    tracing::info!(
        max_chunk_length = shell_bot.limits().max_chunk_length(),
        max_chunk_count = shell_bot.limits().max_chunk_count(),
        bash = %cfg.bash_path.display(),
        "Bot ready"
    );

    let state = Arc::new(AppState { shell_bot });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
