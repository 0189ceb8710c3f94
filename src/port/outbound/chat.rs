//! Chat surface port.
//!
//! The interval flow talks to the chat platform only through this trait so
//! it can be driven by a recording double in tests.

use async_trait::async_trait;
use thiserror::Error;

/// Chat (conversation) the bot replies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationId(pub i64);

/// Handle of a message previously sent by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle(pub i32);

/// Failure reported by the chat platform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("chat platform error: {0}")]
pub struct ChatError(pub String);

/// Outbound chat operations used by the interval flow.
///
/// Text is MarkdownV2 formatted; implementations send it as such.
#[async_trait]
pub trait ChatSurface: Send + Sync {
    /// Answer an inline button tap with an alert popup.
    async fn acknowledge(&self, callback_id: &str, text: &str) -> Result<(), ChatError>;

    /// Send a new message.
    async fn send_text(
        &self,
        chat: ConversationId,
        text: &str,
    ) -> Result<MessageHandle, ChatError>;

    /// Replace the text of a message sent earlier.
    async fn edit_text(
        &self,
        chat: ConversationId,
        message: MessageHandle,
        text: &str,
    ) -> Result<(), ChatError>;
}
