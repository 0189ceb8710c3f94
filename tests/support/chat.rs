//! Recording chat double for interval flow tests.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use gainerbot::port::outbound::chat::{ChatError, ChatSurface, ConversationId, MessageHandle};

/// A call made against the chat surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCall {
    Acknowledge { callback_id: String, text: String },
    Send { chat: i64, text: String },
    Edit { chat: i64, message: i32, text: String },
}

/// Thread-safe chat surface that records calls and can be told to fail.
#[derive(Default)]
pub struct RecordingChat {
    pub(crate) calls: Mutex<Vec<ChatCall>>,
    pub(crate) next_id: AtomicI32,
    pub fail_acknowledge: bool,
    pub fail_edit: bool,
    /// Indices (0-based) of sends that fail.
    pub fail_send_at: Vec<usize>,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ChatCall> {
        self.calls.lock().expect("lock chat calls").clone()
    }

    pub fn sends(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ChatCall::Send { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn edits(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ChatCall::Edit { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ChatCall) -> usize {
        let mut calls = self.calls.lock().expect("lock chat calls");
        calls.push(call);
        calls.len()
    }

    fn send_index(&self) -> usize {
        self.sends().len()
    }
}

#[async_trait]
impl ChatSurface for RecordingChat {
    async fn acknowledge(&self, callback_id: &str, text: &str) -> Result<(), ChatError> {
        self.record(ChatCall::Acknowledge {
            callback_id: callback_id.to_string(),
            text: text.to_string(),
        });
        if self.fail_acknowledge {
            return Err(ChatError("query is too old".into()));
        }
        Ok(())
    }

    async fn send_text(
        &self,
        chat: ConversationId,
        text: &str,
    ) -> Result<MessageHandle, ChatError> {
        let index = self.send_index();
        self.record(ChatCall::Send {
            chat: chat.0,
            text: text.to_string(),
        });
        if self.fail_send_at.contains(&index) {
            return Err(ChatError("network error".into()));
        }
        Ok(MessageHandle(self.next_id.fetch_add(1, Ordering::SeqCst) + 100))
    }

    async fn edit_text(
        &self,
        chat: ConversationId,
        message: MessageHandle,
        text: &str,
    ) -> Result<(), ChatError> {
        self.record(ChatCall::Edit {
            chat: chat.0,
            message: message.0,
            text: text.to_string(),
        });
        if self.fail_edit {
            return Err(ChatError("message to edit not found".into()));
        }
        Ok(())
    }
}
