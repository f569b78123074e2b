use crate::domain::entities::{AppState, Command, SettingsField};
use crate::domain::traits::Reducer;

/// Default state-update stage
#[derive(Debug, Clone, Copy, Default)]
pub struct AppReducer;

impl Reducer for AppReducer {
    fn reduce(&self, state: &mut AppState, command: &Command) {
        match command {
            Command::ChangeSettings { field, value } => match field {
                SettingsField::Email => state.settings.email = value.clone(),
                SettingsField::Password => state.settings.password = value.clone(),
            },
            Command::UserConnected(pseudo) => {
                state.settings.pseudo = Some(pseudo.clone());
            }
            Command::AddMessage(message) => {
                state.chat.messages.push(message.clone());
            }
            Command::ChangeMessageInput(text) => {
                state.chat.input = text.clone();
            }
            Command::SubmitSettingsForm
            | Command::SocketConnect
            | Command::SocketSendMessage(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Message;

    fn reduce_all(commands: &[Command]) -> AppState {
        let mut state = AppState::default();
        for cmd in commands {
            AppReducer.reduce(&mut state, cmd);
        }
        state
    }

    #[test]
    fn test_settings_and_pseudo() {
        let state = reduce_all(&[
            Command::change_settings(SettingsField::Email, "a@b.com"),
            Command::change_settings(SettingsField::Password, "secret"),
            Command::UserConnected("alice".into()),
            Command::change_settings(SettingsField::Password, ""),
        ]);

        assert_eq!(state.settings.email, "a@b.com");
        assert_eq!(state.settings.password, "");
        assert_eq!(state.settings.pseudo.as_deref(), Some("alice"));
    }

    #[test]
    fn test_messages_append_in_order() {
        let state = reduce_all(&[
            Command::AddMessage(Message::new("one", "bob")),
            Command::AddMessage(Message::new("two", "alice")),
            Command::ChangeMessageInput("draft".into()),
        ]);

        assert_eq!(
            state.chat.messages,
            vec![Message::new("one", "bob"), Message::new("two", "alice")]
        );
        assert_eq!(state.chat.input, "draft");
    }

    #[test]
    fn test_effect_commands_leave_state_alone() {
        let state = reduce_all(&[
            Command::SubmitSettingsForm,
            Command::SocketConnect,
            Command::SocketSendMessage("hi".into()),
        ]);
        assert_eq!(state, AppState::default());
    }
}
