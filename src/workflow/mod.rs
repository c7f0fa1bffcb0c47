//! Workflow Controller
//!
//! Orchestrates every user-initiated operation end to end:
//!
//! 1. validate the form input (no request on failure)
//! 2. call the gateway
//! 3. on success, update view state and refresh the affected collections
//!    from the server (never patch them locally)
//! 4. on failure, record an error notice and leave the collections alone
//!
//! ## Workflows
//!
//! - **transfer**: send money, success panel, refresh accounts + transactions
//! - **bills**: select a bill, pay it, refresh bills + accounts
//! - **loans**: apply for a loan, refresh loans
//! - **accounts**: details, rename, freeze toggle, deposit
//! - **profile**: profile update, password change
//!
//! Background refreshes swallow their errors; the previous snapshot stays in
//! place and is still rendered.

mod accounts;
mod bills;
mod error;
mod forms;
mod loans;
mod profile;
mod transfer;

#[cfg(test)]
mod tests;

pub use error::{ValidationError, WorkflowError, WorkflowResult, MIN_PASSWORD_LEN};
pub use forms::{
    parse_amount, parse_tenure, DepositForm, LoanForm, PasswordForm, PayBillForm, ProfileForm,
    TransferForm,
};

use std::sync::Arc;

use crate::gateway::{Gateway, GatewayError};
use crate::render::Section;
use crate::store::{Collection, Notice, Snapshot, StateStore};

/// Drives the dashboard's workflows against a gateway and a store
#[derive(Clone)]
pub struct Controller {
    gateway: Arc<dyn Gateway>,
    store: Arc<StateStore>,
}

impl Controller {
    pub fn new(gateway: Arc<dyn Gateway>, store: Arc<StateStore>) -> Self {
        Self { gateway, store }
    }

    /// Controller with a fresh, empty store
    pub fn with_gateway(gateway: Arc<dyn Gateway>) -> Self {
        Self::new(gateway, Arc::new(StateStore::new()))
    }

    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Initial page load: every collection, concurrently
    pub async fn load_all(&self) {
        tokio::join!(
            self.refresh_accounts_and_cards(),
            self.refresh_transactions(),
            self.refresh_bills(),
            self.refresh_loans(),
            self.refresh_profile(),
        );
    }

    /// Switch sections. Bills and loans are re-fetched on entry; the other
    /// sections render from what is already in the store.
    pub async fn navigate(&self, section: Section) -> &'static str {
        match section {
            Section::Bills => self.refresh_bills().await,
            Section::Loans => self.refresh_loans().await,
            _ => {}
        }
        section.title()
    }

    /// Accounts and cards are always fetched as a pair
    pub async fn refresh_accounts_and_cards(&self) {
        let accounts_gen = self.store.begin(Collection::Accounts);
        let cards_gen = self.store.begin(Collection::Cards);

        let (accounts, cards) =
            tokio::join!(self.gateway.fetch_accounts(), self.gateway.fetch_cards());

        match accounts {
            Ok(items) => {
                self.store.replace_accounts(accounts_gen, items);
            }
            Err(e) => log_refresh_failure(Collection::Accounts, &e),
        }
        match cards {
            Ok(items) => {
                self.store.replace_cards(cards_gen, items);
            }
            Err(e) => log_refresh_failure(Collection::Cards, &e),
        }
    }

    pub async fn refresh_transactions(&self) {
        let generation = self.store.begin(Collection::Transactions);
        match self.gateway.fetch_transactions().await {
            Ok(items) => {
                self.store.replace_transactions(generation, items);
            }
            Err(e) => log_refresh_failure(Collection::Transactions, &e),
        }
    }

    pub async fn refresh_bills(&self) {
        let generation = self.store.begin(Collection::Bills);
        match self.gateway.fetch_bills().await {
            Ok(items) => {
                self.store.replace_bills(generation, items);
            }
            Err(e) => log_refresh_failure(Collection::Bills, &e),
        }
    }

    pub async fn refresh_loans(&self) {
        let generation = self.store.begin(Collection::Loans);
        match self.gateway.fetch_loans().await {
            Ok(items) => {
                self.store.replace_loans(generation, items);
            }
            Err(e) => log_refresh_failure(Collection::Loans, &e),
        }
    }

    pub async fn refresh_profile(&self) {
        let generation = self.store.begin(Collection::Profile);
        match self.gateway.fetch_profile().await {
            Ok(profile) => {
                self.store.replace_profile(generation, profile);
            }
            Err(e) => log_refresh_failure(Collection::Profile, &e),
        }
    }

    pub fn clear_notice(&self) {
        self.store.clear_notice();
    }

    /// Record a failed workflow as an error notice and hand the error back
    fn report(&self, action: &str, err: WorkflowError) -> WorkflowError {
        let message = err.user_message(action);
        if err.is_validation() {
            tracing::debug!(action, %message, "input rejected");
        } else {
            tracing::warn!(action, %message, "workflow failed");
        }
        self.store.set_notice(Notice::Error(message));
        err
    }

    fn succeed(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(%message, "workflow succeeded");
        self.store.set_notice(Notice::Success(message));
    }
}

fn log_refresh_failure(collection: Collection, err: &GatewayError) {
    if err.is_transport() {
        tracing::warn!(%collection, error = %err, "refresh failed, keeping previous data");
    } else {
        tracing::warn!(%collection, error = %err, "server refused refresh, keeping previous data");
    }
}
