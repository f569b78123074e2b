use super::Message;

/// Login form values and the authenticated pseudo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub email: String,
    pub password: String,
    /// `None` until authentication succeeds
    pub pseudo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chat {
    pub messages: Vec<Message>,
    pub input: String,
}

/// The application's data tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub settings: Settings,
    pub chat: Chat,
}

impl AppState {
    pub fn with_credentials(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.settings.email = email.into();
        self.settings.password = password.into();
        self
    }

    pub fn with_pseudo(mut self, pseudo: impl Into<String>) -> Self {
        self.settings.pseudo = Some(pseudo.into());
        self
    }
}
