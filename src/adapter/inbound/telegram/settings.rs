//! Telegram bot settings.

/// Default menu command (without the leading `/`).
pub const DEFAULT_MENU_COMMAND: &str = "binance";

/// Runtime configuration for the Telegram bot.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Command that opens the interval menu.
    pub menu_command: String,
    /// This bot's username, resolved at startup with `getMe`.
    pub bot_username: Option<String>,
}

impl TelegramConfig {
    /// Create configuration from the environment.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN`. Returns `None` if it is missing or blank;
    /// there is no fallback token.
    #[must_use]
    pub fn from_env(menu_command: &str) -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        if bot_token.trim().is_empty() {
            return None;
        }

        Some(Self {
            bot_token,
            menu_command: menu_command.to_string(),
            bot_username: None,
        })
    }
}
