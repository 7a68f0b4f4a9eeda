//! Messenger-agnostic bot: sessions, dispatch, command replies.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{
    chunking::LimitPolicy,
    config::Config,
    domain::{ChatId, MessageRef},
    messaging::{port::MessagingPort, types::TextMessage},
    session::{ChatSession, ChatState, Reaction},
    shell::{render_output, ShellOutput, ShellPort},
    Result,
};

/// A script accepted for execution, waiting to be run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingCommand {
    pub reply_to: MessageRef,
    pub script: String,
}

pub struct ShellBot {
    password: String,
    limits: LimitPolicy,
    shell: Arc<dyn ShellPort>,
    messenger: Arc<dyn MessagingPort>,
    sessions: Mutex<HashMap<ChatId, ChatSession>>,
}

impl ShellBot {
    pub fn new(
        cfg: &Config,
        shell: Arc<dyn ShellPort>,
        messenger: Arc<dyn MessagingPort>,
    ) -> Result<Self> {
        // Never exceed what the messenger can actually deliver.
        let limits = cfg
            .limits()?
            .capped(messenger.capabilities().max_message_len)?;

        Ok(Self {
            password: cfg.password.clone(),
            limits,
            shell,
            messenger,
            sessions: Mutex::new(HashMap::new()),
        })
    }

    pub fn limits(&self) -> LimitPolicy {
        self.limits
    }

    /// Advance the chat's session and send the immediate reply.
    ///
    /// Scripts are not run here; the caller decides where to run the
    /// returned command (typically a spawned task).
    pub async fn handle_text(&self, msg: &TextMessage) -> Option<PendingCommand> {
        let reaction = {
            let mut sessions = self.sessions.lock().await;
            let session = sessions.entry(msg.chat_id).or_default();
            tracing::info!(
                user_id = ?msg.user_id.map(|u| u.0),
                username = msg.username.as_deref().unwrap_or("unknown"),
                message_id = msg.message_id.0,
                message_text = loggable_text(session.state, &msg.text),
                "Message accepted"
            );
            session.handle(&msg.text, &self.password)
        };

        let reply_to = msg.message_ref();
        match reaction {
            Reaction::Reply(notice) => {
                let sent = self.messenger.send_text(reply_to, notice.text()).await;
                log_sent(reply_to, notice.text(), sent);
                None
            }
            Reaction::Prompt(notice) => {
                let sent = if self.messenger.capabilities().supports_force_reply {
                    self.messenger.send_prompt(reply_to, notice.text()).await
                } else {
                    self.messenger.send_text(reply_to, notice.text()).await
                };
                log_sent(reply_to, notice.text(), sent);
                None
            }
            Reaction::Execute(script) => Some(PendingCommand { reply_to, script }),
        }
    }

    /// Run the script and send its output as a sequence of chunk replies.
    pub async fn run_command(&self, cmd: PendingCommand) {
        let out = match self.shell.execute(&cmd.script).await {
            Ok(out) => out,
            Err(e) => ShellOutput {
                output: String::new(),
                error: Some(e.to_string()),
            },
        };

        let rendered = render_output(&out, self.limits);
        if rendered.truncated {
            tracing::warn!(
                chat_id = cmd.reply_to.chat_id.0,
                chunks = rendered.chunks.len(),
                limit = self.limits.max_chunk_count(),
                "Command output truncated"
            );
        }

        for chunk in &rendered.chunks {
            let sent = self.messenger.send_chunk(cmd.reply_to, chunk).await;
            log_sent(cmd.reply_to, &chunk.text, sent);
        }
    }
}

/// Text safe to put in the logs: password replies are never written out.
fn loggable_text(state: ChatState, text: &str) -> &str {
    if state == ChatState::AwaitingPassword {
        "<redacted>"
    } else {
        text
    }
}

fn log_sent(reply_to: MessageRef, text: &str, sent: Result<MessageRef>) {
    match sent {
        Ok(msg) => tracing::info!(
            chat_id = msg.chat_id.0,
            message_id = msg.message_id.0,
            message_text = %text,
            "Message sent"
        ),
        Err(e) => tracing::warn!(
            chat_id = reply_to.chat_id.0,
            reply_to = reply_to.message_id.0,
            message_text = %text,
            error = %e,
            "Failed to send message"
        ),
    }
}
