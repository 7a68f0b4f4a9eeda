use async_trait::async_trait;

use crate::{
    chunking::Chunk,
    domain::MessageRef,
    messaging::types::MessagingCapabilities,
    Result,
};

/// Outbound messaging port.
///
/// Every outgoing message is a reply to an incoming one, so all sends take
/// the message being answered.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    fn capabilities(&self) -> MessagingCapabilities;

    /// Plain text reply.
    async fn send_text(&self, reply_to: MessageRef, text: &str) -> Result<MessageRef>;

    /// Reply that asks the client to answer it directly (forced reply).
    async fn send_prompt(&self, reply_to: MessageRef, text: &str) -> Result<MessageRef>;

    /// Reply carrying one chunk, with its annotations as formatting entities.
    async fn send_chunk(&self, reply_to: MessageRef, chunk: &Chunk) -> Result<MessageRef>;
}
