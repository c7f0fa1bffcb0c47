//! Send-money workflow

use super::error::{ValidationError, WorkflowResult};
use super::forms::{label_account_name, parse_amount, TransferForm};
use super::Controller;
use crate::gateway::TransferRequest;
use crate::store::{Account, PanelPhase};

const ACTION: &str = "Transfer failed";

impl Controller {
    /// Submit a transfer. On success the panel switches to the success view
    /// and accounts, cards and transactions are re-fetched.
    pub async fn transfer(&self, form: &TransferForm) -> WorkflowResult<()> {
        self.store.clear_notice();

        let (account, request) = match self.prepare_transfer(form) {
            Ok(prepared) => prepared,
            Err(e) => return Err(self.report(ACTION, e.into())),
        };

        self.store
            .update_view(|view| view.transfer = PanelPhase::Submitting);

        if let Err(e) = self.gateway.transfer(&request).await {
            self.store.update_view(|view| view.transfer = PanelPhase::Idle);
            return Err(self.report(ACTION, e.into()));
        }

        let details = format!(
            "৳{:.2} transferred to {} from {}",
            request.amount,
            form.recipient_name.trim(),
            account.option_label()
        );
        tracing::info!(from = %account.id, amount = request.amount, "transfer accepted");
        self.store
            .update_view(|view| view.transfer = PanelPhase::Succeeded { details });

        tokio::join!(self.refresh_accounts_and_cards(), self.refresh_transactions());
        Ok(())
    }

    /// "Done" on the success panel: back to the form
    pub fn reset_transfer(&self) {
        self.store.update_view(|view| view.transfer = PanelPhase::Idle);
    }

    fn prepare_transfer(
        &self,
        form: &TransferForm,
    ) -> Result<(Account, TransferRequest), ValidationError> {
        let account = self.resolve_source_account(&form.from_account)?;
        let amount = parse_amount(&form.amount)?;

        let description = match form.description.trim() {
            "" => format!("Transfer to {}", form.recipient_name.trim()),
            text => text.to_string(),
        };

        let request = TransferRequest {
            from_account_id: account.id.clone(),
            amount,
            description,
        };
        Ok((account, request))
    }

    /// Option values are account ids; `Name (৳balance)` labels still resolve
    /// by the name before the parenthesis.
    fn resolve_source_account(&self, value: &str) -> Result<Account, ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::AccountNotFound);
        }
        if let Some(account) = self.store.find_account(value) {
            return Ok(account);
        }

        let name = label_account_name(value);
        self.store
            .accounts()
            .into_iter()
            .find(|account| !name.is_empty() && account.name == name)
            .ok_or(ValidationError::AccountNotFound)
    }
}
