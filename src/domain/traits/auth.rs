use async_trait::async_trait;
use crate::domain::entities::AuthResponse;
use crate::application::errors::AuthError;

/// Authenticator trait - abstraction over the remote login service
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for a status code and, on success, a pseudo.
    ///
    /// An `Err` means no response was received at all; any status the
    /// server answers with is an `Ok`.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError>;
}
