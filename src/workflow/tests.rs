//! Controller tests against a recording in-memory gateway

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::*;
use crate::gateway::{
    Ack, ChangePasswordRequest, DepositRequest, FreezeAccountRequest, GatewayResult,
    LoanApplicationRequest, PayBillRequest, TransferRequest, UpdateAccountRequest,
    UpdateProfileRequest,
};
use crate::store::{
    Account, AccountStatus, AccountType, Bill, Card, Loan, Modal, PanelPhase, Transaction,
    UserProfile,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    FetchAccounts,
    FetchCards,
    FetchTransactions,
    FetchBills,
    FetchLoans,
    FetchProfile,
    Transfer(TransferRequest),
    ApplyLoan(LoanApplicationRequest),
    PayBill(PayBillRequest),
    Deposit(DepositRequest),
    UpdateAccount(UpdateAccountRequest),
    FreezeAccount(FreezeAccountRequest),
    UpdateProfile(UpdateProfileRequest),
    ChangePassword(ChangePasswordRequest),
}

impl Call {
    fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Call::FetchAccounts
                | Call::FetchCards
                | Call::FetchTransactions
                | Call::FetchBills
                | Call::FetchLoans
                | Call::FetchProfile
        )
    }
}

#[derive(Default)]
struct MockState {
    accounts: Vec<Account>,
    cards: Vec<Card>,
    transactions: Vec<Transaction>,
    bills: Vec<Bill>,
    loans: Vec<Loan>,
    profile: UserProfile,
    calls: Vec<Call>,
    /// Mutations answer `success: false` with this message
    refuse_with: Option<String>,
    /// Every call fails at the transport level
    offline: bool,
    /// Scripted account responses: delay, then payload
    account_script: VecDeque<(Duration, Vec<Account>)>,
}

#[derive(Default)]
struct MockGateway {
    state: Mutex<MockState>,
}

impl MockGateway {
    fn with_state(state: MockState) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(state),
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    fn set<F: FnOnce(&mut MockState)>(&self, f: F) {
        f(&mut self.state.lock().unwrap());
    }

    fn fetch<T: Clone>(&self, call: Call, pick: impl FnOnce(&MockState) -> T) -> GatewayResult<T> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.offline {
            return Err(GatewayError::Unavailable);
        }
        Ok(pick(&state))
    }

    fn mutate(&self, call: Call) -> GatewayResult<Ack> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.offline {
            return Err(GatewayError::Unavailable);
        }
        match &state.refuse_with {
            Some(message) => Err(GatewayError::application(message.clone())),
            None => Ok(Ack::default()),
        }
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn fetch_accounts(&self) -> GatewayResult<Vec<Account>> {
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.account_script.pop_front()
        };
        if let Some((delay, accounts)) = scripted {
            self.state.lock().unwrap().calls.push(Call::FetchAccounts);
            tokio::time::sleep(delay).await;
            return Ok(accounts);
        }
        self.fetch(Call::FetchAccounts, |s| s.accounts.clone())
    }

    async fn fetch_cards(&self) -> GatewayResult<Vec<Card>> {
        self.fetch(Call::FetchCards, |s| s.cards.clone())
    }

    async fn fetch_transactions(&self) -> GatewayResult<Vec<Transaction>> {
        self.fetch(Call::FetchTransactions, |s| s.transactions.clone())
    }

    async fn fetch_bills(&self) -> GatewayResult<Vec<Bill>> {
        self.fetch(Call::FetchBills, |s| s.bills.clone())
    }

    async fn fetch_loans(&self) -> GatewayResult<Vec<Loan>> {
        self.fetch(Call::FetchLoans, |s| s.loans.clone())
    }

    async fn fetch_profile(&self) -> GatewayResult<UserProfile> {
        self.fetch(Call::FetchProfile, |s| s.profile.clone())
    }

    async fn transfer(&self, request: &TransferRequest) -> GatewayResult<Ack> {
        self.mutate(Call::Transfer(request.clone()))
    }

    async fn apply_loan(&self, request: &LoanApplicationRequest) -> GatewayResult<Ack> {
        self.mutate(Call::ApplyLoan(request.clone()))
    }

    async fn pay_bill(&self, request: &PayBillRequest) -> GatewayResult<Ack> {
        self.mutate(Call::PayBill(request.clone()))
    }

    async fn deposit(&self, request: &DepositRequest) -> GatewayResult<Ack> {
        self.mutate(Call::Deposit(request.clone()))
    }

    async fn update_account(&self, request: &UpdateAccountRequest) -> GatewayResult<Ack> {
        self.mutate(Call::UpdateAccount(request.clone()))
    }

    async fn freeze_account(&self, request: &FreezeAccountRequest) -> GatewayResult<Ack> {
        self.mutate(Call::FreezeAccount(request.clone()))
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> GatewayResult<Ack> {
        self.mutate(Call::UpdateProfile(request.clone()))
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> GatewayResult<Ack> {
        self.mutate(Call::ChangePassword(request.clone()))
    }
}

fn account(id: &str, name: &str, balance: f64) -> Account {
    serde_json::from_value(json!({"id": id, "name": name, "type": "checking", "balance": balance}))
        .unwrap()
}

fn bill(id: &str, biller: &str, amount: f64, status: &str) -> Bill {
    serde_json::from_value(json!({
        "id": id,
        "biller_name": biller,
        "amount": amount,
        "category": "utilities",
        "due_date": "2024-02-01",
        "status": status,
    }))
    .unwrap()
}

fn loan(id: &str) -> Loan {
    serde_json::from_value(json!({
        "id": id,
        "loan_type": "personal",
        "principal_amount": 10000.0,
        "remaining_amount": 8000.0,
    }))
    .unwrap()
}

fn bank() -> MockState {
    MockState {
        accounts: vec![account("a1", "Checking", 500.0)],
        bills: vec![bill("b1", "City Power", 250.0, "pending")],
        profile: UserProfile {
            name: "Rahim Uddin".to_string(),
            email: "rahim@example.com".to_string(),
            phone: None,
        },
        ..Default::default()
    }
}

async fn loaded(state: MockState) -> (Arc<MockGateway>, Controller) {
    let gateway = MockGateway::with_state(state);
    let controller = Controller::with_gateway(gateway.clone());
    controller.load_all().await;
    gateway.clear_calls();
    (gateway, controller)
}

fn transfer_form(from: &str, amount: &str) -> TransferForm {
    TransferForm {
        from_account: from.to_string(),
        recipient_name: "X".to_string(),
        amount: amount.to_string(),
        description: String::new(),
    }
}

#[tokio::test]
async fn test_load_all_replaces_every_collection() {
    let (_gateway, controller) = loaded(bank()).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.accounts.len(), 1);
    assert_eq!(snapshot.bills.len(), 1);
    assert_eq!(snapshot.profile.as_ref().map(|p| p.first_name()), Some("Rahim"));
}

#[tokio::test]
async fn test_refresh_is_full_replace() {
    let (gateway, controller) = loaded(bank()).await;

    gateway.set(|s| s.accounts = vec![account("a2", "Savings", 90.0)]);
    controller.refresh_accounts_and_cards().await;

    let ids: Vec<_> = controller.snapshot().accounts.into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["a2".to_string()]);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_data() {
    let (gateway, controller) = loaded(bank()).await;

    gateway.set(|s| s.offline = true);
    controller.load_all().await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.accounts[0].id, "a1");
    assert_eq!(snapshot.bills[0].id, "b1");
    assert!(snapshot.view.notice.is_none());
}

#[tokio::test]
async fn test_late_response_does_not_overwrite_newer() {
    let (gateway, controller) = loaded(bank()).await;

    gateway.set(|s| {
        s.account_script.push_back((
            Duration::from_millis(80),
            vec![account("old", "Stale", 1.0)],
        ));
        s.account_script
            .push_back((Duration::ZERO, vec![account("new", "Fresh", 2.0)]));
    });

    tokio::join!(controller.refresh_accounts_and_cards(), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        controller.refresh_accounts_and_cards().await;
    });

    let accounts = controller.snapshot().accounts;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, "new");
}

#[tokio::test]
async fn test_transfer_with_label_value() {
    let (gateway, controller) = loaded(bank()).await;

    controller
        .transfer(&transfer_form("Checking (৳500.00)", "100"))
        .await
        .unwrap();

    assert_eq!(
        gateway.mutations(),
        vec![Call::Transfer(TransferRequest {
            from_account_id: "a1".to_string(),
            amount: 100.0,
            description: "Transfer to X".to_string(),
        })]
    );

    let calls = gateway.calls();
    assert!(calls.contains(&Call::FetchAccounts));
    assert!(calls.contains(&Call::FetchCards));
    assert!(calls.contains(&Call::FetchTransactions));

    let view = controller.snapshot().view;
    assert!(!view.transfer.form_visible());
    assert_eq!(
        view.transfer,
        PanelPhase::Succeeded {
            details: "৳100.00 transferred to X from Checking (৳500.00)".to_string()
        }
    );

    controller.reset_transfer();
    assert_eq!(controller.snapshot().view.transfer, PanelPhase::Idle);
}

#[tokio::test]
async fn test_transfer_with_id_value_and_description() {
    let (gateway, controller) = loaded(bank()).await;

    let mut form = transfer_form("a1", "12.5");
    form.description = "Rent".to_string();
    controller.transfer(&form).await.unwrap();

    assert_eq!(
        gateway.mutations(),
        vec![Call::Transfer(TransferRequest {
            from_account_id: "a1".to_string(),
            amount: 12.5,
            description: "Rent".to_string(),
        })]
    );
}

#[tokio::test]
async fn test_transfer_rejects_bad_amounts_locally() {
    let (gateway, controller) = loaded(bank()).await;

    for amount in ["0", "-10", "abc", ""] {
        let err = controller
            .transfer(&transfer_form("a1", amount))
            .await
            .unwrap_err();
        assert_eq!(err, WorkflowError::Validation(ValidationError::InvalidAmount));
    }

    assert!(gateway.calls().is_empty());
    let view = controller.snapshot().view;
    assert_eq!(view.transfer, PanelPhase::Idle);
    assert_eq!(
        view.notice,
        Some(Notice::Error("Please enter a valid amount".to_string()))
    );
}

#[tokio::test]
async fn test_transfer_unknown_account_fails_locally() {
    let (gateway, controller) = loaded(bank()).await;

    let err = controller
        .transfer(&transfer_form("Brokerage (৳10.00)", "100"))
        .await
        .unwrap_err();

    assert_eq!(err, WorkflowError::Validation(ValidationError::AccountNotFound));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_transfer_refused_keeps_store() {
    let (gateway, controller) = loaded(bank()).await;
    gateway.set(|s| s.refuse_with = Some("Insufficient balance".to_string()));
    let before = controller.snapshot().accounts;

    let err = controller
        .transfer(&transfer_form("a1", "900"))
        .await
        .unwrap_err();

    assert!(matches!(err, WorkflowError::Application { .. }));
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.accounts, before);
    assert_eq!(snapshot.view.transfer, PanelPhase::Idle);
    assert_eq!(
        snapshot.view.notice,
        Some(Notice::Error("Transfer failed: Insufficient balance".to_string()))
    );
    // No refresh after a refusal
    assert_eq!(gateway.calls().len(), 1);
}

#[tokio::test]
async fn test_bill_selection_prefills_amount() {
    let (gateway, controller) = loaded(bank()).await;

    let selected = controller.select_bill("b1").unwrap();
    assert_eq!(selected.biller_name, "City Power");
    assert_eq!(controller.snapshot().view.payment_amount, "250.00");

    controller
        .pay_bill(&PayBillForm {
            account_id: "a1".to_string(),
            amount: "250".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        gateway.mutations(),
        vec![Call::PayBill(PayBillRequest {
            bill_id: "b1".to_string(),
            account_id: "a1".to_string(),
            amount: 250.0,
        })]
    );
    let calls = gateway.calls();
    assert!(calls.contains(&Call::FetchBills));
    assert!(calls.contains(&Call::FetchAccounts));
    assert_eq!(
        controller.snapshot().view.bill_payment,
        PanelPhase::Succeeded {
            details: "৳250.00 paid to City Power".to_string()
        }
    );

    controller.reset_bill_payment().await;
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.view.bill_payment, PanelPhase::Idle);
    assert!(snapshot.view.payment_amount.is_empty());
    assert!(snapshot.selected_bill.is_none());
}

#[tokio::test]
async fn test_unknown_bill_clears_selection() {
    let (_gateway, controller) = loaded(bank()).await;

    controller.select_bill("b1");
    assert!(controller.select_bill("nope").is_none());
    assert!(controller.snapshot().selected_bill.is_none());
}

#[tokio::test]
async fn test_pay_bill_requires_selection() {
    let (gateway, controller) = loaded(bank()).await;

    let err = controller
        .pay_bill(&PayBillForm {
            account_id: "a1".to_string(),
            amount: "250".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, WorkflowError::Validation(ValidationError::NoBillSelected));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_pay_bill_requires_account() {
    let (gateway, controller) = loaded(bank()).await;
    controller.select_bill("b1");

    let err = controller
        .pay_bill(&PayBillForm {
            account_id: " ".to_string(),
            amount: "250".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, WorkflowError::Validation(ValidationError::NoAccountSelected));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_apply_loan() {
    let (gateway, controller) = loaded(bank()).await;
    gateway.set(|s| s.loans = vec![loan("l1")]);

    controller
        .apply_loan(&LoanForm {
            loan_type: "personal".to_string(),
            amount: "10000".to_string(),
            tenure_months: "24".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        gateway.mutations(),
        vec![Call::ApplyLoan(LoanApplicationRequest {
            loan_type: "personal".to_string(),
            principal_amount: 10000.0,
            tenure_months: 24,
        })]
    );
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.loans.len(), 1);
    assert_eq!(
        snapshot.view.notice,
        Some(Notice::Success("Loan application successful!".to_string()))
    );
}

#[tokio::test]
async fn test_apply_loan_rejects_bad_tenure() {
    let (gateway, controller) = loaded(bank()).await;

    let err = controller
        .apply_loan(&LoanForm {
            loan_type: "personal".to_string(),
            amount: "1000".to_string(),
            tenure_months: "0".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, WorkflowError::Validation(ValidationError::InvalidTenure));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_freeze_toggle_round_trip() {
    let (gateway, controller) = loaded(bank()).await;

    let status = controller
        .toggle_freeze("a1", AccountStatus::Active)
        .await
        .unwrap();
    assert_eq!(status, AccountStatus::Frozen);
    assert_eq!(
        controller.snapshot().view.notice,
        Some(Notice::Success("Account frozen successfully".to_string()))
    );

    let status = controller
        .toggle_freeze("a1", AccountStatus::Frozen)
        .await
        .unwrap();
    assert_eq!(status, AccountStatus::Active);

    assert_eq!(
        gateway.mutations(),
        vec![
            Call::FreezeAccount(FreezeAccountRequest {
                id: "a1".to_string(),
                status: AccountStatus::Frozen,
            }),
            Call::FreezeAccount(FreezeAccountRequest {
                id: "a1".to_string(),
                status: AccountStatus::Active,
            }),
        ]
    );
    // Refresh follows each acknowledgement directly
    let calls = gateway.calls();
    assert_eq!(calls.iter().filter(|c| **c == Call::FetchAccounts).count(), 2);
    assert!(matches!(calls[0], Call::FreezeAccount(_)));
}

#[tokio::test]
async fn test_account_settings_flow() {
    let (gateway, controller) = loaded(bank()).await;

    assert!(!controller.open_account_settings("missing"));
    assert!(controller.open_account_settings("a1"));
    assert_eq!(
        controller.snapshot().view.modal,
        Some(Modal::AccountSettings {
            account_id: "a1".to_string()
        })
    );

    let err = controller.save_account_settings("  ").await.unwrap_err();
    assert_eq!(err, WorkflowError::Validation(ValidationError::EmptyName));

    controller.save_account_settings("Everyday").await.unwrap();
    assert_eq!(
        gateway.mutations(),
        vec![Call::UpdateAccount(UpdateAccountRequest {
            id: "a1".to_string(),
            name: "Everyday".to_string(),
        })]
    );
    let snapshot = controller.snapshot();
    assert!(snapshot.view.modal.is_none());
    assert_eq!(
        snapshot.view.notice,
        Some(Notice::Success("Account updated successfully".to_string()))
    );
}

#[tokio::test]
async fn test_save_settings_without_selection() {
    let (gateway, controller) = loaded(bank()).await;

    let err = controller.save_account_settings("Everyday").await.unwrap_err();
    assert_eq!(err, WorkflowError::Validation(ValidationError::NoAccountSelected));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_account_details_modal() {
    let (_gateway, controller) = loaded(bank()).await;

    assert!(controller.show_account_details("a1"));
    assert_eq!(
        controller.snapshot().view.modal,
        Some(Modal::AccountDetails {
            account_id: "a1".to_string()
        })
    );
    controller.close_modal();
    assert!(controller.snapshot().view.modal.is_none());
}

#[tokio::test]
async fn test_deposit() {
    let (gateway, controller) = loaded(bank()).await;
    controller.open_deposit();

    controller
        .deposit(&DepositForm {
            account_id: "a1".to_string(),
            amount: "75".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        gateway.mutations(),
        vec![Call::Deposit(DepositRequest {
            account_id: "checking".to_string(),
            amount: 75.0,
        })]
    );
    let calls = gateway.calls();
    assert!(calls.contains(&Call::FetchAccounts));
    assert!(calls.contains(&Call::FetchProfile));

    let snapshot = controller.snapshot();
    assert!(snapshot.view.modal.is_none());
    assert_eq!(
        snapshot.view.notice,
        Some(Notice::Success(
            "Deposit successful! ৳75.00 added to your account.".to_string()
        ))
    );
}

#[tokio::test]
async fn test_update_profile() {
    let (gateway, controller) = loaded(bank()).await;

    controller
        .update_profile(&ProfileForm {
            name: " Rahim U. ".to_string(),
            phone: "01700000000 ".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        gateway.mutations(),
        vec![Call::UpdateProfile(UpdateProfileRequest {
            name: "Rahim U.".to_string(),
            phone: "01700000000".to_string(),
        })]
    );
    assert!(gateway.calls().contains(&Call::FetchProfile));
}

#[tokio::test]
async fn test_change_password_fails_locally() {
    let (gateway, controller) = loaded(bank()).await;

    let mismatch = PasswordForm {
        current: "old-secret".to_string(),
        new: "new-secret".to_string(),
        confirm: "new-secreT".to_string(),
    };
    let err = controller.change_password(&mismatch).await.unwrap_err();
    assert_eq!(err, WorkflowError::Validation(ValidationError::PasswordMismatch));

    let short = PasswordForm {
        current: "old-secret".to_string(),
        new: "abc".to_string(),
        confirm: "abc".to_string(),
    };
    let err = controller.change_password(&short).await.unwrap_err();
    assert_eq!(err, WorkflowError::Validation(ValidationError::PasswordTooShort));

    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_change_password_refused() {
    let (gateway, controller) = loaded(bank()).await;
    gateway.set(|s| s.refuse_with = Some("Current password is incorrect".to_string()));

    let form = PasswordForm {
        current: "wrong".to_string(),
        new: "secret1".to_string(),
        confirm: "secret1".to_string(),
    };
    controller.change_password(&form).await.unwrap_err();

    assert_eq!(
        controller.snapshot().view.notice,
        Some(Notice::Error(
            "Failed to change password: Current password is incorrect".to_string()
        ))
    );
}

#[tokio::test]
async fn test_navigate_refetches_bills_and_loans() {
    let (gateway, controller) = loaded(bank()).await;

    assert_eq!(controller.navigate(Section::Bills).await, "Pay Bills");
    assert_eq!(controller.navigate(Section::Loans).await, "Loan Services");
    assert_eq!(controller.navigate(Section::Cards).await, "Your Cards");

    assert_eq!(gateway.calls(), vec![Call::FetchBills, Call::FetchLoans]);
}

#[tokio::test]
async fn test_transfer_network_failure() {
    let (gateway, controller) = loaded(bank()).await;
    gateway.set(|s| s.offline = true);
    let before = controller.snapshot();

    let err = controller
        .transfer(&transfer_form("a1", "100"))
        .await
        .unwrap_err();

    assert!(matches!(err, WorkflowError::Transport(_)));
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.view.transfer, PanelPhase::Idle);
    assert_eq!(
        snapshot.view.notice,
        Some(Notice::Error("Error: Server unavailable".to_string()))
    );
    assert_eq!(snapshot.accounts, before.accounts);
    assert_eq!(snapshot.transactions, before.transactions);
    // The failed mutation is the only call; nothing is re-fetched
    assert_eq!(gateway.calls().len(), 1);
}

#[tokio::test]
async fn test_pay_bill_network_failure() {
    let (gateway, controller) = loaded(bank()).await;
    controller.select_bill("b1");
    gateway.set(|s| s.offline = true);
    let before = controller.snapshot();

    let err = controller
        .pay_bill(&PayBillForm {
            account_id: "a1".to_string(),
            amount: "250".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, WorkflowError::Transport(_)));
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.view.bill_payment, PanelPhase::Idle);
    assert_eq!(
        snapshot.view.notice,
        Some(Notice::Error("Error: Server unavailable".to_string()))
    );
    assert_eq!(snapshot.bills, before.bills);
    assert_eq!(snapshot.accounts, before.accounts);
    assert_eq!(snapshot.selected_bill, before.selected_bill);
    assert_eq!(gateway.calls().len(), 1);
}

#[tokio::test]
async fn test_deposit_sends_account_type() {
    let mut state = bank();
    let mut savings = account("5f1c-uuid-savings", "Savings", 10.0);
    savings.account_type = AccountType::Savings;
    state.accounts.push(savings);
    let (gateway, controller) = loaded(state).await;

    controller
        .deposit(&DepositForm {
            account_id: "5f1c-uuid-savings".to_string(),
            amount: "10".to_string(),
        })
        .await
        .unwrap();
    controller
        .deposit(&DepositForm {
            account_id: "Savings".to_string(),
            amount: "5".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        gateway.mutations(),
        vec![
            Call::Deposit(DepositRequest {
                account_id: "savings".to_string(),
                amount: 10.0,
            }),
            Call::Deposit(DepositRequest {
                account_id: "savings".to_string(),
                amount: 5.0,
            }),
        ]
    );
}

#[tokio::test]
async fn test_deposit_rejects_unknown_account() {
    let mut state = bank();
    let mut brokerage = account("a9", "Brokerage", 1.0);
    brokerage.account_type = AccountType::Other;
    state.accounts.push(brokerage);
    let (gateway, controller) = loaded(state).await;

    for target in ["missing", "a9"] {
        let err = controller
            .deposit(&DepositForm {
                account_id: target.to_string(),
                amount: "10".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, WorkflowError::Validation(ValidationError::AccountNotFound));
    }
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_freeze_requires_account_id() {
    let (gateway, controller) = loaded(bank()).await;

    let err = controller
        .toggle_freeze("  ", AccountStatus::Active)
        .await
        .unwrap_err();

    assert_eq!(err, WorkflowError::Validation(ValidationError::NoAccountSelected));
    assert!(gateway.calls().is_empty());
    assert_eq!(
        controller.snapshot().view.notice,
        Some(Notice::Error("Please select an account".to_string()))
    );
}
