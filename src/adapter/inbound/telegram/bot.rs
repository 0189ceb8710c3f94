//! Telegram dispatcher wiring.
//!
//! Requires the `telegram` feature to be enabled.

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    BotCommand, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardRemove, MessageId, ParseMode,
};
use tracing::{debug, error, info, warn};

use super::command::bot_commands;
use super::flow::IntervalFlow;
use super::format::button_label;
use super::route::{
    reply_to_message, route_callback, CallbackRoute, ReplyKeyboard, UNKNOWN_OPTION_TEXT,
};
use super::settings::TelegramConfig;
use crate::domain::interval::Interval;
use crate::port::outbound::chat::{ChatError, ChatSurface, ConversationId, MessageHandle};

/// Buttons per keyboard row.
const BUTTONS_PER_ROW: usize = 3;

/// [`ChatSurface`] backed by the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramSurface {
    bot: Bot,
}

impl TelegramSurface {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

fn chat_error(err: teloxide::RequestError) -> ChatError {
    ChatError(err.to_string())
}

#[async_trait]
impl ChatSurface for TelegramSurface {
    async fn acknowledge(&self, callback_id: &str, text: &str) -> Result<(), ChatError> {
        self.bot
            .answer_callback_query(callback_id)
            .text(text)
            .show_alert(true)
            .await
            .map(|_| ())
            .map_err(chat_error)
    }

    async fn send_text(
        &self,
        chat: ConversationId,
        text: &str,
    ) -> Result<MessageHandle, ChatError> {
        let message = self
            .bot
            .send_message(ChatId(chat.0), text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(chat_error)?;
        Ok(MessageHandle(message.id.0))
    }

    async fn edit_text(
        &self,
        chat: ConversationId,
        message: MessageHandle,
        text: &str,
    ) -> Result<(), ChatError> {
        self.bot
            .edit_message_text(ChatId(chat.0), MessageId(message.0), text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map(|_| ())
            .map_err(chat_error)
    }
}

/// Inline keyboard with one button per supported interval.
#[must_use]
pub fn interval_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(Interval::ALL.chunks(BUTTONS_PER_ROW).map(|row| {
        row.iter()
            .map(|interval| {
                InlineKeyboardButton::callback(button_label(*interval), interval.callback_data())
            })
            .collect::<Vec<_>>()
    }))
}

/// Run the bot until the update stream ends.
///
/// Clears any webhook first so long polling does not conflict with it.
pub async fn run_bot(config: TelegramConfig, flow: IntervalFlow) {
    let bot = Bot::new(&config.bot_token);

    let bot_username = match bot.get_me().await {
        Ok(me) => Some(me.username().to_string()),
        Err(e) => {
            warn!(error = %e, "Failed to fetch bot username, accepting every @mention");
            None
        }
    };
    let config = TelegramConfig {
        bot_username,
        ..config
    };

    match bot.delete_webhook().await {
        Ok(_) => info!("Webhook cleared"),
        Err(e) => warn!(error = %e, "Failed to clear webhook"),
    }

    if let Err(e) = register_bot_commands(&bot, &config.menu_command).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!(
        menu_command = %config.menu_command,
        username = ?config.bot_username,
        "Telegram bot listening"
    );

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::new(config), Arc::new(flow)])
        .default_handler(|update| async move {
            debug!(update_id = ?update.id, "Ignoring unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error while handling Telegram update",
        ))
        .build()
        .dispatch()
        .await;

    warn!("Telegram dispatcher stopped");
}

async fn handle_message(
    bot: Bot,
    msg: Message,
    config: Arc<TelegramConfig>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(reply) = reply_to_message(text, &config.menu_command, config.bot_username.as_deref())
    else {
        return Ok(());
    };

    let send = bot
        .send_message(msg.chat.id, reply.text)
        .parse_mode(ParseMode::MarkdownV2);
    let result = match reply.keyboard {
        ReplyKeyboard::Remove => send.reply_markup(KeyboardRemove::new()).await,
        ReplyKeyboard::Intervals => send.reply_markup(interval_keyboard()).await,
        ReplyKeyboard::Unchanged => send.await,
    };

    if let Err(e) = result {
        error!(chat_id = msg.chat.id.0, error = %e, "Failed to send command response");
        if let Err(e) = bot
            .send_message(msg.chat.id, "Sorry, something went wrong. Please try again.")
            .await
        {
            debug!(error = %e, "Failed to send error notice");
        }
    }

    Ok(())
}

async fn handle_callback(bot: Bot, q: CallbackQuery, flow: Arc<IntervalFlow>) -> ResponseResult<()> {
    let chat = q.message.as_ref().map(|m| m.chat().id.0);

    match route_callback(q.id.to_string(), q.data.as_deref(), chat) {
        CallbackRoute::Run(request) => {
            // Detached so the per-chat dispatcher worker is free for the next tap.
            flow.spawn(Arc::new(TelegramSurface::new(bot)), request);
        }
        CallbackRoute::UnknownOption { callback_id } => {
            warn!(data = ?q.data, "Unknown callback data");
            bot.answer_callback_query(callback_id)
                .text(UNKNOWN_OPTION_TEXT)
                .await?;
        }
        CallbackRoute::NoMessage {
            callback_id,
            interval,
        } => {
            warn!(%interval, "Callback query without a message, cannot reply");
            bot.answer_callback_query(callback_id).await?;
        }
    }

    Ok(())
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot, menu_command: &str) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands(menu_command)
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
