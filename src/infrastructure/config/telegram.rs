//! Telegram bot configuration.

use serde::Deserialize;

use crate::adapter::inbound::telegram::settings::DEFAULT_MENU_COMMAND;

/// Telegram section of the config file.
///
/// The bot token is never read from the file; see `TELEGRAM_BOT_TOKEN`.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Command (without `/`) that opens the interval menu.
    #[serde(default = "default_menu_command")]
    pub menu_command: String,
}

fn default_menu_command() -> String {
    DEFAULT_MENU_COMMAND.to_string()
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            menu_command: default_menu_command(),
        }
    }
}
