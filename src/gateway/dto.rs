//! Request/Response DTOs
//!
//! Request bodies match the backend's JSON field names exactly. Every
//! response is wrapped in an envelope `{success, message?, ...payload}`;
//! [`decode_envelope`] unwraps it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::GatewayError;
use crate::store::AccountStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from_account_id: String,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplicationRequest {
    pub loan_type: String,
    pub principal_amount: f64,
    pub tenure_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayBillRequest {
    pub bill_id: String,
    pub account_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRequest {
    /// The backend keys deposits by account type: `checking` or `savings`
    pub account_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreezeAccountRequest {
    pub id: String,
    pub status: AccountStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Acknowledgement returned by mutating endpoints. Which optional fields are
/// present depends on the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    /// Source balance after a transfer or bill payment
    #[serde(default)]
    pub balance: Option<f64>,
    /// Balance after a deposit
    #[serde(default)]
    pub new_balance: Option<f64>,
    #[serde(default)]
    pub loan_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// Unwrap the `{success, message, ...}` envelope.
///
/// With `field = Some(name)` the payload is read from that key; with `None`
/// the whole envelope body is decoded as `T` (used for [`Ack`]).
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
    field: Option<&str>,
) -> Result<T, GatewayError> {
    let value: Value = serde_json::from_str(body).map_err(|e| GatewayError::Decode {
        status,
        message: e.to_string(),
    })?;

    let success = value
        .get("success")
        .and_then(Value::as_bool)
        .ok_or_else(|| GatewayError::Decode {
            status,
            message: "missing `success` flag".to_string(),
        })?;

    if !success {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_FAILURE_MESSAGE)
            .to_string();
        return Err(GatewayError::Application { status, message });
    }

    let payload = match field {
        Some(name) => value.get(name).cloned().ok_or_else(|| GatewayError::Decode {
            status,
            message: format!("missing `{}` in response", name),
        })?,
        None => value,
    };

    serde_json::from_value(payload).map_err(|e| GatewayError::Decode {
        status,
        message: e.to_string(),
    })
}
