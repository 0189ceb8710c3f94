//! Routing of incoming messages and button taps to replies.
//!
//! Kept free of teloxide types so the decisions can be tested directly;
//! [`super::bot`] only maps them onto Bot API calls.

use super::command::{parse_command, ChatCommand, CommandParseError};
use super::flow::IntervalRequest;
use super::format::{escape_markdown, menu_prompt, start_text};
use crate::domain::interval::Interval;
use crate::port::outbound::chat::ConversationId;

/// Callback answer for buttons whose data is not an interval.
pub const UNKNOWN_OPTION_TEXT: &str = "Unknown option";

/// Keyboard to attach to a command reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKeyboard {
    /// Remove any custom reply keyboard left on the client.
    Remove,
    /// Inline keyboard with one button per interval.
    Intervals,
    /// Leave the current keyboard alone.
    Unchanged,
}

/// `MarkdownV2` reply to a command message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub text: String,
    pub keyboard: ReplyKeyboard,
}

/// Decide the reply to a text message. `None` means stay silent.
#[must_use]
pub fn reply_to_message(
    text: &str,
    menu_command: &str,
    bot_username: Option<&str>,
) -> Option<CommandReply> {
    match parse_command(text, menu_command, bot_username) {
        Ok(ChatCommand::Start | ChatCommand::Help) => Some(CommandReply {
            text: start_text(menu_command),
            keyboard: ReplyKeyboard::Remove,
        }),
        Ok(ChatCommand::Menu) => Some(CommandReply {
            text: menu_prompt().to_string(),
            keyboard: ReplyKeyboard::Intervals,
        }),
        Err(CommandParseError::NotACommand | CommandParseError::OtherBot(_)) => None,
        Err(err @ CommandParseError::UnknownCommand(_)) => Some(CommandReply {
            text: format!(
                "{}\n\n{}",
                escape_markdown(&format!("Invalid command: {err}")),
                start_text(menu_command)
            ),
            keyboard: ReplyKeyboard::Unchanged,
        }),
    }
}

/// What to do with a callback query.
#[derive(Debug, Clone)]
pub enum CallbackRoute {
    /// Run the interval flow.
    Run(IntervalRequest),
    /// Data is not an interval; answer with [`UNKNOWN_OPTION_TEXT`].
    UnknownOption { callback_id: String },
    /// The originating message is unavailable, so there is nowhere to reply.
    /// Answer the query without text.
    NoMessage {
        callback_id: String,
        interval: Interval,
    },
}

/// Route a callback query by its data and originating chat.
#[must_use]
pub fn route_callback(callback_id: String, data: Option<&str>, chat: Option<i64>) -> CallbackRoute {
    let Some(interval) = data.and_then(Interval::from_callback_data) else {
        return CallbackRoute::UnknownOption { callback_id };
    };

    match chat {
        Some(chat_id) => CallbackRoute::Run(IntervalRequest {
            callback_id,
            conversation: ConversationId(chat_id),
            interval,
        }),
        None => CallbackRoute::NoMessage {
            callback_id,
            interval,
        },
    }
}
