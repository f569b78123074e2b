//! Input parser - Turns console lines into commands

use crate::domain::entities::{Command, SettingsField};

/// What a single input line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Commands to dispatch, in order
    Commands(Vec<Command>),
    Help,
    Quit,
    Empty,
    /// Unrecognized slash command
    Unknown(String),
}

/// Parses typed lines into pipeline commands
pub struct InputParser {
    command_prefix: String,
}

impl InputParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.command_prefix
    }

    /// Parse one line of user input
    pub fn parse(&self, line: &str) -> Input {
        let line = line.trim();
        if line.is_empty() {
            return Input::Empty;
        }

        if let Some(rest) = line.strip_prefix(self.command_prefix.as_str()) {
            return self.parse_command(rest);
        }

        // Plain text goes to the chat
        let text = line.to_string();
        Input::Commands(vec![
            Command::ChangeMessageInput(text.clone()),
            Command::SocketSendMessage(text),
            Command::ChangeMessageInput(String::new()),
        ])
    }

    fn parse_command(&self, text: &str) -> Input {
        let (name, arg) = match text.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (text, ""),
        };

        match name.to_lowercase().as_str() {
            "email" => Input::Commands(vec![Command::change_settings(SettingsField::Email, arg)]),
            "password" => Input::Commands(vec![Command::change_settings(SettingsField::Password, arg)]),
            "login" => Input::Commands(vec![Command::SubmitSettingsForm]),
            "connect" => Input::Commands(vec![Command::SocketConnect]),
            "help" => Input::Help,
            "quit" | "exit" => Input::Quit,
            other => Input::Unknown(other.to_string()),
        }
    }

    pub fn help(&self) -> String {
        let p = &self.command_prefix;
        format!(
            "Available commands:\n\
             {p}email <address> - Set the login email\n\
             {p}password <secret> - Set the login password\n\
             {p}login - Submit the login form\n\
             {p}connect - Open the chat session\n\
             {p}quit - Leave\n\
             Anything else is sent to the chat"
        )
    }
}

impl Default for InputParser {
    fn default() -> Self {
        Self::new("/")
    }
}
