use super::Message;

/// Settings form fields that `ChangeSettings` can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    Email,
    Password,
}

/// A command flowing through the dispatch pipeline.
///
/// Commands are immutable once dispatched. Interceptors match on the
/// variants they own and forward everything else untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The login form was submitted
    SubmitSettingsForm,
    /// A settings field changed
    ChangeSettings { field: SettingsField, value: String },
    /// Authentication succeeded with this pseudo
    UserConnected(String),
    /// Open the realtime session
    SocketConnect,
    /// Send this text to the chat as the current pseudo
    SocketSendMessage(String),
    /// A message arrived from the realtime session
    AddMessage(Message),
    /// The chat input field changed
    ChangeMessageInput(String),
}

impl Command {
    pub fn change_settings(field: SettingsField, value: impl Into<String>) -> Self {
        Command::ChangeSettings {
            field,
            value: value.into(),
        }
    }

    /// Stable name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Command::SubmitSettingsForm => "submit_settings_form",
            Command::ChangeSettings { .. } => "change_settings",
            Command::UserConnected(_) => "user_connected",
            Command::SocketConnect => "socket_connect",
            Command::SocketSendMessage(_) => "socket_send_message",
            Command::AddMessage(_) => "add_message",
            Command::ChangeMessageInput(_) => "change_message_input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Command::SubmitSettingsForm.kind(), "submit_settings_form");
        assert_eq!(
            Command::change_settings(SettingsField::Password, "").kind(),
            "change_settings"
        );
        assert_eq!(
            Command::AddMessage(Message::new("hi", "bob")).kind(),
            "add_message"
        );
    }

    #[test]
    fn test_change_settings_builder() {
        let cmd = Command::change_settings(SettingsField::Email, "a@b.com");
        assert_eq!(
            cmd,
            Command::ChangeSettings {
                field: SettingsField::Email,
                value: "a@b.com".to_string()
            }
        );
    }
}
