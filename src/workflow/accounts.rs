//! Account workflows: details, settings, freeze toggle and deposits

use super::error::{ValidationError, WorkflowResult};
use super::forms::{parse_amount, DepositForm};
use super::Controller;
use crate::gateway::{DepositRequest, FreezeAccountRequest, UpdateAccountRequest};
use crate::store::{AccountStatus, AccountType, Modal};

impl Controller {
    /// Open the details modal. Unknown ids are ignored.
    pub fn show_account_details(&self, account_id: &str) -> bool {
        let Some(account) = self.store.find_account(account_id) else {
            tracing::debug!(account_id, "details requested for unknown account");
            return false;
        };
        self.store.update_view(|view| {
            view.modal = Some(Modal::AccountDetails {
                account_id: account.id,
            })
        });
        true
    }

    /// Select the account and open its settings modal. Unknown ids are ignored.
    pub fn open_account_settings(&self, account_id: &str) -> bool {
        let Some(account) = self.store.find_account(account_id) else {
            tracing::debug!(account_id, "settings requested for unknown account");
            return false;
        };
        let modal = Modal::AccountSettings {
            account_id: account.id.clone(),
        };
        self.store.set_selected_account(Some(account));
        self.store.update_view(|view| view.modal = Some(modal));
        true
    }

    /// Rename the selected account
    pub async fn save_account_settings(&self, name: &str) -> WorkflowResult<()> {
        const ACTION: &str = "Failed to update account";
        self.store.clear_notice();

        let Some(account) = self.store.selected_account() else {
            return Err(self.report(ACTION, ValidationError::NoAccountSelected.into()));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(self.report(ACTION, ValidationError::EmptyName.into()));
        }

        let request = UpdateAccountRequest {
            id: account.id,
            name: name.to_string(),
        };
        if let Err(e) = self.gateway.update_account(&request).await {
            return Err(self.report(ACTION, e.into()));
        }

        self.store.update_view(|view| view.modal = None);
        self.succeed("Account updated successfully");
        self.refresh_accounts_and_cards().await;
        Ok(())
    }

    /// Flip an account between active and frozen. The refresh runs as soon
    /// as the server acknowledges. Returns the status that was requested.
    pub async fn toggle_freeze(
        &self,
        account_id: &str,
        current: AccountStatus,
    ) -> WorkflowResult<AccountStatus> {
        const ACTION: &str = "Failed to update account status";
        self.store.clear_notice();

        let account_id = account_id.trim();
        if account_id.is_empty() {
            return Err(self.report(ACTION, ValidationError::NoAccountSelected.into()));
        }

        let status = current.toggled();
        let request = FreezeAccountRequest {
            id: account_id.to_string(),
            status,
        };
        if let Err(e) = self.gateway.freeze_account(&request).await {
            return Err(self.report(ACTION, e.into()));
        }

        let message = match status {
            AccountStatus::Frozen => "Account frozen successfully",
            AccountStatus::Active => "Account unfrozen successfully",
        };
        self.succeed(message);
        self.refresh_accounts_and_cards().await;
        Ok(status)
    }

    pub fn open_deposit(&self) {
        self.store.update_view(|view| view.modal = Some(Modal::Deposit));
    }

    pub fn close_modal(&self) {
        self.store.update_view(|view| view.modal = None);
    }

    pub async fn deposit(&self, form: &DepositForm) -> WorkflowResult<()> {
        const ACTION: &str = "Deposit failed";
        self.store.clear_notice();

        let target = match self.deposit_target(&form.account_id) {
            Ok(account_type) => account_type,
            Err(e) => return Err(self.report(ACTION, e.into())),
        };
        let amount = match parse_amount(&form.amount) {
            Ok(amount) => amount,
            Err(e) => return Err(self.report(ACTION, e.into())),
        };

        let request = DepositRequest {
            account_id: target.to_string(),
            amount,
        };
        let ack = match self.gateway.deposit(&request).await {
            Ok(ack) => ack,
            Err(e) => return Err(self.report(ACTION, e.into())),
        };
        tracing::debug!(account_type = %target, new_balance = ?ack.new_balance, "deposit accepted");

        self.store.update_view(|view| view.modal = None);
        self.succeed(format!(
            "Deposit successful! ৳{:.2} added to your account.",
            amount
        ));
        tokio::join!(self.refresh_accounts_and_cards(), self.refresh_profile());
        Ok(())
    }

    /// Deposits go to an account type. Accepts a type value directly, or an
    /// account id that resolves to a checking or savings account.
    fn deposit_target(&self, value: &str) -> Result<AccountType, ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::NoAccountSelected);
        }

        let account_type = if value.eq_ignore_ascii_case("checking") {
            AccountType::Checking
        } else if value.eq_ignore_ascii_case("savings") {
            AccountType::Savings
        } else {
            self.store
                .find_account(value)
                .map(|account| account.account_type)
                .ok_or(ValidationError::AccountNotFound)?
        };

        match account_type {
            AccountType::Other => Err(ValidationError::AccountNotFound),
            supported => Ok(supported),
        }
    }
}
