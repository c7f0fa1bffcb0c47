//! Session Accessor
//!
//! Supplies the bearer credential for API calls. Storing and refreshing the
//! credential, and sending the user to a login page when it is missing, are
//! the host application's job.

/// Source of the current bearer token
pub trait SessionAccessor: Send + Sync {
    /// The token to send, or `None` when the user is signed out
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token, e.g. passed on the command line
#[derive(Debug, Clone)]
pub struct StaticSession {
    token: String,
}

impl StaticSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl SessionAccessor for StaticSession {
    fn bearer_token(&self) -> Option<String> {
        let token = self.token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

/// Reads the token from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvSession {
    var: String,
}

impl EnvSession {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl SessionAccessor for EnvSession {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_session() {
        assert_eq!(StaticSession::new(" abc ").bearer_token().as_deref(), Some("abc"));
        assert!(StaticSession::new("").bearer_token().is_none());
    }

    #[test]
    fn test_env_session() {
        let var = "BANKDASH_TEST_SESSION_TOKEN";
        std::env::set_var(var, "tok-123");
        assert_eq!(EnvSession::new(var).bearer_token().as_deref(), Some("tok-123"));
        std::env::remove_var(var);
        assert!(EnvSession::new(var).bearer_token().is_none());
    }
}
