//! Bill payment workflow

use super::error::{ValidationError, WorkflowResult};
use super::forms::{parse_amount, PayBillForm};
use super::Controller;
use crate::gateway::PayBillRequest;
use crate::store::{Bill, PanelPhase};

const ACTION: &str = "Payment failed";

impl Controller {
    /// Select a bill and pre-fill the amount field with its due amount.
    /// An unknown id clears the selection.
    pub fn select_bill(&self, bill_id: &str) -> Option<Bill> {
        let bill = self.store.find_bill(bill_id);
        match &bill {
            Some(found) => {
                let amount = format!("{:.2}", found.amount);
                self.store.update_view(|view| view.payment_amount = amount);
            }
            None => tracing::debug!(bill_id, "selected bill not in store"),
        }
        self.store.set_selected_bill(bill.clone());
        bill
    }

    pub async fn pay_bill(&self, form: &PayBillForm) -> WorkflowResult<()> {
        self.store.clear_notice();

        let (bill, request) = match self.prepare_payment(form) {
            Ok(prepared) => prepared,
            Err(e) => return Err(self.report(ACTION, e.into())),
        };

        self.store
            .update_view(|view| view.bill_payment = PanelPhase::Submitting);

        if let Err(e) = self.gateway.pay_bill(&request).await {
            self.store
                .update_view(|view| view.bill_payment = PanelPhase::Idle);
            return Err(self.report(ACTION, e.into()));
        }

        let details = format!("৳{:.2} paid to {}", request.amount, bill.biller_name);
        tracing::info!(bill = %bill.id, amount = request.amount, "bill paid");
        self.store
            .update_view(|view| view.bill_payment = PanelPhase::Succeeded { details });

        tokio::join!(self.refresh_bills(), self.refresh_accounts_and_cards());
        Ok(())
    }

    /// "Done" on the success panel
    pub async fn reset_bill_payment(&self) {
        self.store.update_view(|view| {
            view.bill_payment = PanelPhase::Idle;
            view.payment_amount.clear();
        });
        self.store.set_selected_bill(None);
        self.refresh_bills().await;
    }

    fn prepare_payment(&self, form: &PayBillForm) -> Result<(Bill, PayBillRequest), ValidationError> {
        let bill = self
            .store
            .selected_bill()
            .ok_or(ValidationError::NoBillSelected)?;

        let account_id = form.account_id.trim();
        if account_id.is_empty() {
            return Err(ValidationError::NoAccountSelected);
        }
        let amount = parse_amount(&form.amount)?;

        let request = PayBillRequest {
            bill_id: bill.id.clone(),
            account_id: account_id.to_string(),
            amount,
        };
        Ok((bill, request))
    }
}
