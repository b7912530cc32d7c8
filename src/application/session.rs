// Ports for session handling and user confirmation
use async_trait::async_trait;

/// Decides whether the current session is valid and performs the navigation to login.
pub trait SessionProvider: Send + Sync {
    fn redirect_to_login(&self);
}

/// Synchronous yes/no decision taken before a destructive call.
pub trait ConfirmationGate {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Credential submission against the backend. A successful login establishes the
/// session the product service then uses implicitly.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<(), AuthError>;

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_act_as_confirmation_gates() {
        let yes = |_: &str| true;
        let no = |prompt: &str| prompt.is_empty();
        assert!(yes.confirm("Are you sure?"));
        assert!(!no.confirm("Are you sure?"));
    }
}
