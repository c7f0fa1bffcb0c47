//! Remote Data Gateway
//!
//! Typed access to the dashboard backend. Each operation takes a request
//! payload, attaches the session's bearer token, and normalizes the response
//! envelope into `Ok(data)` or a [`GatewayError`].
//!
//! ## Endpoints
//!
//! | Operation          | Route                              |
//! |--------------------|------------------------------------|
//! | `fetch_accounts`   | `GET  /api/accounts`               |
//! | `fetch_cards`      | `GET  /api/cards`                  |
//! | `fetch_transactions` | `GET /api/transactions`          |
//! | `fetch_bills`      | `GET  /api/bills`                  |
//! | `fetch_loans`      | `GET  /api/loans`                  |
//! | `fetch_profile`    | `GET  /api/user`                   |
//! | `transfer`         | `POST /api/transfer`               |
//! | `apply_loan`       | `POST /api/apply-loan`             |
//! | `pay_bill`         | `POST /api/pay-bill`               |
//! | `deposit`          | `POST /api/deposit`                |
//! | `update_account`   | `POST /api/accounts/update`        |
//! | `freeze_account`   | `POST /api/account/freeze`         |
//! | `update_profile`   | `POST /api/profile/update`         |
//! | `change_password`  | `POST /api/profile/change-password`|
//!
//! The gateway never touches the store; callers decide what to do with the
//! result.

mod client;
mod dto;
mod error;

pub use client::{GatewayConfig, HttpGateway};
pub use dto::{
    decode_envelope, Ack, ChangePasswordRequest, DepositRequest, FreezeAccountRequest,
    LoanApplicationRequest, PayBillRequest, TransferRequest, UpdateAccountRequest,
    UpdateProfileRequest,
};
pub use error::{GatewayError, GatewayResult};

use async_trait::async_trait;

use crate::store::{Account, Bill, Card, Loan, Transaction, UserProfile};

/// Backend operations used by the workflow controller
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn fetch_accounts(&self) -> GatewayResult<Vec<Account>>;

    async fn fetch_cards(&self) -> GatewayResult<Vec<Card>>;

    async fn fetch_transactions(&self) -> GatewayResult<Vec<Transaction>>;

    async fn fetch_bills(&self) -> GatewayResult<Vec<Bill>>;

    async fn fetch_loans(&self) -> GatewayResult<Vec<Loan>>;

    async fn fetch_profile(&self) -> GatewayResult<UserProfile>;

    /// Move money out of one of the user's accounts. There is no recipient
    /// field; the payee is only named in the description.
    async fn transfer(&self, request: &TransferRequest) -> GatewayResult<Ack>;

    async fn apply_loan(&self, request: &LoanApplicationRequest) -> GatewayResult<Ack>;

    async fn pay_bill(&self, request: &PayBillRequest) -> GatewayResult<Ack>;

    async fn deposit(&self, request: &DepositRequest) -> GatewayResult<Ack>;

    async fn update_account(&self, request: &UpdateAccountRequest) -> GatewayResult<Ack>;

    async fn freeze_account(&self, request: &FreezeAccountRequest) -> GatewayResult<Ack>;

    async fn update_profile(&self, request: &UpdateProfileRequest) -> GatewayResult<Ack>;

    async fn change_password(&self, request: &ChangePasswordRequest) -> GatewayResult<Ack>;
}
