//! Transient view state
//!
//! The panels, modal and notices the dashboard toggles while a workflow runs.
//! None of this is persisted.

use serde::Serialize;

/// Lifecycle of a form that swaps to a success panel on completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PanelPhase {
    /// Form visible, accepting input
    #[default]
    Idle,
    /// Request in flight
    Submitting,
    /// Form hidden, success panel visible
    Succeeded { details: String },
}

impl PanelPhase {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, PanelPhase::Succeeded { .. })
    }

    pub fn form_visible(&self) -> bool {
        !self.is_succeeded()
    }
}

/// Modal dialogs the dashboard can show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "modal", rename_all = "snake_case")]
pub enum Modal {
    AccountDetails { account_id: String },
    AccountSettings { account_id: String },
    Deposit,
}

/// Message surfaced to the user after a workflow finishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub transfer: PanelPhase,
    pub bill_payment: PanelPhase,
    /// Contents of the bill payment amount field
    pub payment_amount: String,
    pub modal: Option<Modal>,
    pub notice: Option<Notice>,
}
