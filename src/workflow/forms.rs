//! Form inputs
//!
//! Field values arrive as the raw text the user typed; parsing happens in the
//! workflows so that bad input never reaches the gateway.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferForm {
    /// Value of the "from" select: an account id, or a legacy
    /// `Name (৳balance)` label
    pub from_account: String,
    pub recipient_name: String,
    pub amount: String,
    /// Defaults to "Transfer to {recipient_name}" when blank
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayBillForm {
    pub account_id: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanForm {
    pub loan_type: String,
    pub amount: String,
    pub tenure_months: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepositForm {
    pub account_id: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

/// Parse a money amount: finite and strictly positive
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(ValidationError::InvalidAmount)
}

/// Parse a loan tenure in whole months, at least one
pub fn parse_tenure(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or(ValidationError::InvalidTenure)
}

/// Text before the first `(` of a select label, trimmed:
/// `"Checking (৳500.00)"` → `"Checking"`
pub fn label_account_name(label: &str) -> &str {
    label.split('(').next().unwrap_or("").trim()
}
