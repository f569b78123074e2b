use serde::{Deserialize, Serialize};

/// Body of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    pub pseudo: String,
}

/// Response to an authentication request. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub status: u16,
    pub data: Option<AuthData>,
}

/// What a response status means to the login workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success { pseudo: String },
    Unauthorized,
    ServerError,
    Unknown(u16),
}

impl AuthResponse {
    pub fn ok(pseudo: impl Into<String>) -> Self {
        Self {
            status: 200,
            data: Some(AuthData {
                pseudo: pseudo.into(),
            }),
        }
    }

    pub fn status(status: u16) -> Self {
        Self { status, data: None }
    }

    pub fn outcome(self) -> AuthOutcome {
        match (self.status, self.data) {
            (200, Some(data)) => AuthOutcome::Success { pseudo: data.pseudo },
            (401, _) => AuthOutcome::Unauthorized,
            (500, _) => AuthOutcome::ServerError,
            (code, _) => AuthOutcome::Unknown(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_classification() {
        assert_eq!(
            AuthResponse::ok("alice").outcome(),
            AuthOutcome::Success {
                pseudo: "alice".to_string()
            }
        );
        assert_eq!(AuthResponse::status(401).outcome(), AuthOutcome::Unauthorized);
        assert_eq!(AuthResponse::status(500).outcome(), AuthOutcome::ServerError);
        assert_eq!(AuthResponse::status(418).outcome(), AuthOutcome::Unknown(418));
    }

    #[test]
    fn test_success_without_pseudo_is_unknown() {
        assert_eq!(AuthResponse::status(200).outcome(), AuthOutcome::Unknown(200));
    }
}
