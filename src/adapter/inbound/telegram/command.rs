//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Start,
    Help,
    /// The configurable interval menu command (`/binance` by default).
    Menu,
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    /// `/cmd@other_bot`: meant for a different bot in the same group.
    OtherBot(String),
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::OtherBot(bot) => write!(f, "command is addressed to @{bot}"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// `menu_command` is the configured menu command without the leading `/`.
/// `bot_username` is this bot's username; when known, commands mentioning a
/// different bot are rejected with [`CommandParseError::OtherBot`].
pub fn parse_command(
    text: &str,
    menu_command: &str,
    bot_username: Option<&str>,
) -> Result<ChatCommand, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    let Some(name) = raw_command.strip_prefix('/') else {
        return Err(CommandParseError::NotACommand);
    };

    let name = match name.split_once('@') {
        Some((head, mention)) => {
            if let Some(own) = bot_username {
                if !mention.eq_ignore_ascii_case(own.trim_start_matches('@')) {
                    return Err(CommandParseError::OtherBot(mention.to_string()));
                }
            }
            head
        }
        None => name,
    };

    match name {
        "start" => Ok(ChatCommand::Start),
        "help" => Ok(ChatCommand::Help),
        other if other == menu_command => Ok(ChatCommand::Menu),
        other => Err(CommandParseError::UnknownCommand(format!("/{other}"))),
    }
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands(menu_command: &str) -> Vec<(String, &'static str)> {
    vec![
        (menu_command.to_string(), "Rank the top gainers over an interval"),
        ("start".to_string(), "Welcome message"),
        ("help".to_string(), "Show how to use the bot"),
    ]
}
