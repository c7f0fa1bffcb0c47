use super::error::WorkflowResult;
use super::forms::{parse_amount, parse_tenure, LoanForm};
use super::Controller;
use crate::gateway::LoanApplicationRequest;

const ACTION: &str = "Loan application failed";

impl Controller {
    /// Apply for a loan and reload the loan list on success
    pub async fn apply_loan(&self, form: &LoanForm) -> WorkflowResult<()> {
        self.store.clear_notice();

        let request = match prepare(form) {
            Ok(request) => request,
            Err(e) => return Err(self.report(ACTION, e)),
        };

        let ack = match self.gateway.apply_loan(&request).await {
            Ok(ack) => ack,
            Err(e) => return Err(self.report(ACTION, e.into())),
        };

        tracing::info!(loan_id = ?ack.loan_id, loan_type = %request.loan_type, "loan application accepted");
        self.succeed("Loan application successful!");
        self.refresh_loans().await;
        Ok(())
    }
}

fn prepare(form: &LoanForm) -> WorkflowResult<LoanApplicationRequest> {
    Ok(LoanApplicationRequest {
        loan_type: form.loan_type.trim().to_string(),
        principal_amount: parse_amount(&form.amount)?,
        tenure_months: parse_tenure(&form.tenure_months)?,
    })
}
