//! Workflow error types
//!
//! Three kinds of failure, handled differently:
//! - **Validation**: caught before any request is sent
//! - **Application**: the server refused (`success: false`), message shown verbatim
//! - **Transport**: the exchange failed; shown generically

use thiserror::Error;

use crate::gateway::GatewayError;

/// Minimum password length accepted by the password form
pub const MIN_PASSWORD_LEN: usize = 6;

/// Client-side input problems. The display text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Please enter a valid loan tenure")]
    InvalidTenure,

    #[error("Please select a bill")]
    NoBillSelected,

    #[error("Please select an account")]
    NoAccountSelected,

    #[error("Please enter a name")]
    EmptyName,

    #[error("Please fill in all password fields")]
    MissingPasswordFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Application { message: String },

    #[error("{0}")]
    Transport(String),
}

impl WorkflowError {
    /// Message for the notice banner. `action` prefixes server refusals,
    /// e.g. "Transfer failed: Insufficient balance".
    pub fn user_message(&self, action: &str) -> String {
        match self {
            WorkflowError::Validation(e) => e.to_string(),
            WorkflowError::Application { message } => format!("{}: {}", action, message),
            WorkflowError::Transport(message) => format!("Error: {}", message),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, WorkflowError::Validation(_))
    }
}

impl From<GatewayError> for WorkflowError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::Application { message, .. } => WorkflowError::Application { message },
            other => WorkflowError::Transport(other.to_string()),
        }
    }
}

/// Result type for workflow operations
pub type WorkflowResult<T> = Result<T, WorkflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let e = WorkflowError::from(GatewayError::application("Insufficient balance"));
        assert_eq!(e.user_message("Transfer failed"), "Transfer failed: Insufficient balance");

        let e = WorkflowError::from(GatewayError::Timeout);
        assert_eq!(e.user_message("Transfer failed"), "Error: Request timeout");

        let e = WorkflowError::from(ValidationError::PasswordTooShort);
        assert_eq!(e.user_message("ignored"), "Password must be at least 6 characters");
        assert!(e.is_validation());
    }
}
