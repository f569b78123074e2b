//! Login workflow interceptor

use std::sync::Arc;
use crate::application::errors::AuthError;
use crate::application::messaging::{Context, Dispatcher, Middleware, MiddlewareError, MiddlewareResult, Next};
use crate::application::store::{select_email, select_password};
use crate::domain::entities::{AuthOutcome, Command, SettingsField};
use crate::domain::traits::Authenticator;

/// Turns `SubmitSettingsForm` into a login request and its follow-up commands.
///
/// The submit command never reaches the state-update stage. Every other
/// command is forwarded untouched.
pub struct AuthMiddleware {
    authenticator: Arc<dyn Authenticator>,
}

impl AuthMiddleware {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }

    fn submit(&self, ctx: &Context) -> MiddlewareResult {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| MiddlewareError::Internal(format!("No async runtime for login: {}", e)))?;

        let (email, password) = ctx.state().read(|state| {
            (select_email(state).to_string(), select_password(state).to_string())
        });
        let authenticator = Arc::clone(&self.authenticator);
        let dispatcher = ctx.dispatcher().clone();

        runtime.spawn(async move {
            if let Err(e) = login(authenticator.as_ref(), &email, &password, &dispatcher).await {
                tracing::debug!("Login did not succeed: {}", e);
            }
        });

        Ok(())
    }
}

impl Middleware for AuthMiddleware {
    fn process(&self, ctx: &Context, command: Command, next: Next<'_>) -> MiddlewareResult {
        match command {
            Command::SubmitSettingsForm => self.submit(ctx),
            other => next.run(ctx, other),
        }
    }
}

/// Run one login exchange and dispatch its follow-ups.
///
/// Dispatches `UserConnected` on success, then always clears the password.
/// Returns the pseudo, or why the login did not succeed.
pub async fn login(
    authenticator: &dyn Authenticator,
    email: &str,
    password: &str,
    dispatcher: &Dispatcher,
) -> Result<String, AuthError> {
    let result = match authenticator.login(email, password).await {
        Ok(response) => {
            tracing::debug!("Login response status: {}", response.status);
            match response.outcome() {
                AuthOutcome::Success { pseudo } => {
                    tracing::info!("Logged in as {}", pseudo);
                    dispatcher.dispatch(Command::UserConnected(pseudo.clone()));
                    Ok(pseudo)
                }
                AuthOutcome::ServerError => {
                    tracing::warn!("Login failed: server error");
                    Err(AuthError::ServerError)
                }
                AuthOutcome::Unauthorized => {
                    tracing::warn!("Login failed: unauthorized");
                    Err(AuthError::Unauthorized)
                }
                AuthOutcome::Unknown(status) => {
                    tracing::warn!("Login failed: unexpected status {}", status);
                    Err(AuthError::UnknownStatus(status))
                }
            }
        }
        Err(e) => {
            tracing::error!("Login request failed: {}", e);
            Err(e)
        }
    };

    dispatcher.dispatch(Command::change_settings(SettingsField::Password, ""));
    result
}
