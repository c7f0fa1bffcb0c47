//! Dashboard views
//!
//! Each function turns a [`Snapshot`] into an HTML fragment. No function here
//! reads anything but its arguments.

use super::format::{
    capitalize, escape_html, format_date, format_datetime, format_money, format_signed_money,
};
use crate::store::{
    Account, AccountType, Bill, Card, CardType, Loan, Modal, Notice, PanelPhase, Snapshot,
    Transaction,
};

/// How many transactions the dashboard's "recent" list shows
pub const RECENT_TRANSACTIONS: usize = 3;

const EMPTY_STYLE: &str = "color: #999; text-align: center; padding: 20px;";

fn empty(message: &str) -> String {
    format!("<p style=\"{}\">{}</p>", EMPTY_STYLE, message)
}

/// Greeting plus the total / savings / checking balance cards
pub fn dashboard_summary(snapshot: &Snapshot) -> String {
    let mut html = String::new();

    if let Some(profile) = &snapshot.profile {
        html.push_str(&format!(
            "<div class=\"user-info\"><p id=\"user-name\">{}</p><p id=\"user-email\">{}</p></div>\
             <h2 class=\"greeting\">Welcome back, <span id=\"greet-name\">{}</span></h2>",
            escape_html(&profile.name),
            escape_html(&profile.email),
            escape_html(profile.first_name()),
        ));
    }

    let total: f64 = snapshot.accounts.iter().map(|a| a.balance).sum();
    html.push_str(&format!(
        "<div class=\"balance-card\"><p class=\"label\">Total Balance</p><p class=\"amount\">{}</p></div>",
        format_money(total)
    ));

    if let Some(savings) = first_of_type(&snapshot.accounts, AccountType::Savings) {
        html.push_str(&format!(
            "<div class=\"savings-card\"><p class=\"amount\">{}</p><p class=\"subtitle\">Interest: {}% APY</p></div>",
            format_money(savings.balance),
            savings.apy.unwrap_or(0.0)
        ));
    }

    if let Some(checking) = first_of_type(&snapshot.accounts, AccountType::Checking) {
        html.push_str(&format!(
            "<div class=\"checking-card\"><p class=\"amount\">{}</p></div>",
            format_money(checking.balance)
        ));
    }

    html
}

fn first_of_type(accounts: &[Account], account_type: AccountType) -> Option<&Account> {
    accounts.iter().find(|a| a.account_type == account_type)
}

pub fn accounts_page(snapshot: &Snapshot) -> String {
    snapshot
        .accounts
        .iter()
        .map(account_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn account_card(account: &Account) -> String {
    let role = if account.account_type == AccountType::Checking {
        "Primary"
    } else {
        "Secondary"
    };
    let freeze_label = if account.is_frozen() { "Unfreeze" } else { "Freeze" };
    let id = escape_html(&account.id);

    format!(
        r#"<div class="account-card" data-account-id="{id}">
    <div class="account-header"><h4>{name}</h4><span class="account-type">{role}</span></div>
    <div class="account-number">{number}</div>
    <div class="account-balance"><p class="label">Available Balance</p><p class="amount">{balance}</p></div>
    <div class="account-actions">
        <button class="action-btn" data-action="details" data-account-id="{id}">Details</button>
        <button class="action-btn" data-action="freeze" data-account-id="{id}" data-status="{status}">{freeze_label}</button>
        <button class="action-btn" data-action="settings" data-account-id="{id}">Settings</button>
    </div>
</div>"#,
        id = id,
        name = escape_html(&account.name),
        role = role,
        number = escape_html(&account.card_number),
        balance = format_money(account.balance),
        status = account.status,
        freeze_label = freeze_label,
    )
}

pub fn cards_page(snapshot: &Snapshot) -> String {
    snapshot
        .cards
        .iter()
        .map(card_tile)
        .collect::<Vec<_>>()
        .join("\n")
}

fn card_tile(card: &Card) -> String {
    let (class, label) = match card.card_type {
        CardType::Credit => ("credit-card", "CREDIT"),
        CardType::Debit => ("debit-card", "DEBIT"),
    };

    format!(
        r#"<div class="{class}">
    <div class="card-top"><div class="card-chip">💳</div><p class="card-label">{label} CARD</p></div>
    <p class="card-number">{number}</p>
    <div class="card-footer">
        <div><p class="card-holder-label">Card Holder</p><p class="card-holder">{holder}</p></div>
        <div><p class="card-expiry-label">Expires</p><p class="card-expiry">{expiry}</p></div>
    </div>
</div>"#,
        class = class,
        label = label,
        number = escape_html(&card.number),
        holder = escape_html(&card.holder),
        expiry = escape_html(&card.expiry),
    )
}

/// `<option>`s for the transfer "from" select. The value is the account id.
pub fn transfer_options(accounts: &[Account]) -> String {
    accounts
        .iter()
        .map(|a| {
            format!(
                "<option value=\"{}\">{} - ৳{:.2}</option>",
                escape_html(&a.id),
                escape_html(&a.name),
                a.balance
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Transfer form, or the success panel once a transfer went through
pub fn transfer_panel(snapshot: &Snapshot) -> String {
    match &snapshot.view.transfer {
        PanelPhase::Succeeded { details } => success_panel("transfer-success", details),
        phase => format!(
            r#"<form id="transfer-form"{disabled}>
    <select id="from-account">{options}</select>
    <input id="recipient-name" type="text">
    <input id="amount" type="number" step="0.01">
    <input id="description" type="text">
    <button type="submit" class="btn-primary">Send Money</button>
</form>"#,
            disabled = submitting_attr(phase),
            options = transfer_options(&snapshot.accounts),
        ),
    }
}

fn submitting_attr(phase: &PanelPhase) -> &'static str {
    if *phase == PanelPhase::Submitting {
        " aria-busy=\"true\""
    } else {
        ""
    }
}

fn success_panel(id: &str, details: &str) -> String {
    format!(
        "<div id=\"{}\" class=\"success-message\"><p>{}</p><button class=\"btn-secondary\">Done</button></div>",
        id,
        escape_html(details)
    )
}

/// The dashboard's short list: the newest few transactions
pub fn recent_transactions(snapshot: &Snapshot) -> String {
    if snapshot.transactions.is_empty() {
        return "<p style=\"color: #999; text-align: center;\">No transactions yet</p>".to_string();
    }

    snapshot
        .transactions
        .iter()
        .take(RECENT_TRANSACTIONS)
        .map(|tx| transaction_item(tx, "transaction-item", format_date(&tx.created_at)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn transactions_page(snapshot: &Snapshot) -> String {
    if snapshot.transactions.is_empty() {
        return empty("No transactions yet");
    }

    snapshot
        .transactions
        .iter()
        .map(|tx| transaction_item(tx, "transaction-row", format_datetime(&tx.created_at)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn transaction_item(tx: &Transaction, class: &str, when: String) -> String {
    let (icon, direction) = if tx.is_debit() {
        ("📤", "negative")
    } else {
        ("📥", "positive")
    };

    format!(
        r#"<div class="{class}">
    <span class="transaction-icon">{icon}</span>
    <div class="transaction-details"><p class="transaction-name">{name}</p><p class="transaction-date">{when}</p></div>
    <p class="transaction-amount {direction}">{amount}</p>
</div>"#,
        class = class,
        icon = icon,
        name = escape_html(tx.display_description()),
        when = escape_html(&when),
        direction = direction,
        amount = format_signed_money(tx.amount),
    )
}

pub fn bills_list(snapshot: &Snapshot) -> String {
    if snapshot.bills.is_empty() {
        return empty("No bills to pay");
    }

    snapshot
        .bills
        .iter()
        .map(|bill| {
            format!(
                r#"<div class="bill-row{paid}">
    <div class="bill-row-header"><span class="bill-row-name">{name}</span><span class="bill-row-amount">{amount}</span></div>
    <div class="bill-row-due">Due: {due} • {category}</div>
</div>"#,
                paid = if bill.is_paid() { " paid" } else { "" },
                name = escape_html(&bill.biller_name),
                amount = format_money(bill.amount),
                due = escape_html(&format_date(&bill.due_date)),
                category = escape_html(&bill.category),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bill picker; paid bills are not offered
pub fn bill_selector(bills: &[Bill]) -> String {
    let options: String = bills
        .iter()
        .filter(|b| !b.is_paid())
        .map(|b| {
            format!(
                "<option value=\"{}\">{} - ৳{:.2}</option>",
                escape_html(&b.id),
                escape_html(&b.biller_name),
                b.amount
            )
        })
        .collect();
    format!("<option>Choose a bill...</option>{}", options)
}

pub fn payment_account_selector(accounts: &[Account]) -> String {
    let options: String = accounts
        .iter()
        .map(|a| {
            format!(
                "<option value=\"{}\">{} - ৳{:.2}</option>",
                escape_html(&a.id),
                escape_html(&a.name),
                a.balance
            )
        })
        .collect();
    format!("<option>Choose account...</option>{}", options)
}

/// Deposit targets. Option values are account types, which is what the
/// deposit endpoint expects.
pub fn deposit_account_selector(accounts: &[Account]) -> String {
    let options: String = accounts
        .iter()
        .filter(|a| a.account_type != AccountType::Other)
        .map(|a| {
            format!(
                "<option value=\"{}\">{} - ৳{:.2}</option>",
                a.account_type,
                escape_html(&a.name),
                a.balance
            )
        })
        .collect();

    if options.is_empty() {
        "<option value=\"checking\">Checking Account</option><option value=\"savings\">Savings Account</option>".to_string()
    } else {
        options
    }
}

pub fn bill_details(bill: &Bill) -> String {
    format!(
        "<div><strong>Biller:</strong> {}</div>\
         <div><strong>Amount:</strong> ৳{:.2}</div>\
         <div><strong>Category:</strong> {}</div>\
         <div><strong>Due Date:</strong> {}</div>",
        escape_html(&bill.biller_name),
        bill.amount,
        escape_html(&bill.category),
        escape_html(&format_date(&bill.due_date)),
    )
}

/// Bill payment form with the selected bill's details, or the success panel
pub fn bill_payment_panel(snapshot: &Snapshot) -> String {
    match &snapshot.view.bill_payment {
        PanelPhase::Succeeded { details } => success_panel("bill-payment-success", details),
        phase => format!(
            r#"<form id="bill-payment-form"{disabled}>
    <select id="bill-selector">{bills}</select>
    <div id="bill-details">{details}</div>
    <select id="payment-account">{accounts}</select>
    <input id="payment-amount" type="number" step="0.01" value="{amount}">
    <button type="submit" class="btn-primary">Pay Bill</button>
</form>"#,
            disabled = submitting_attr(phase),
            bills = bill_selector(&snapshot.bills),
            details = snapshot
                .selected_bill
                .as_ref()
                .map(bill_details)
                .unwrap_or_default(),
            accounts = payment_account_selector(&snapshot.accounts),
            amount = escape_html(&snapshot.view.payment_amount),
        ),
    }
}

/// Status line and one card per loan
pub fn loans_list(snapshot: &Snapshot) -> String {
    if snapshot.loans.is_empty() {
        return "<p id=\"loans-status\">No active loans</p>".to_string();
    }

    let cards = snapshot
        .loans
        .iter()
        .map(loan_card)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<p id=\"loans-status\">{} active loan(s)</p>\n{}",
        snapshot.loans.len(),
        cards
    )
}

fn loan_card(loan: &Loan) -> String {
    let progress = loan.progress_percent();
    let status = loan.status.to_string();

    format!(
        r#"<div class="loan-card">
    <div class="loan-header"><h4>{kind} Loan</h4><span class="loan-status {status}">{status_upper}</span></div>
    <div class="loan-details">
        <div class="loan-detail-item"><span>Principal Amount</span><span>{principal}</span></div>
        <div class="loan-detail-item"><span>Remaining Balance</span><span>{remaining}</span></div>
        <div class="loan-detail-item"><span>Interest Rate</span><span>{rate}% p.a.</span></div>
        <div class="loan-detail-item"><span>Monthly Payment</span><span>{monthly}</span></div>
    </div>
    <div class="loan-progress">
        <div class="progress-label"><span>Progress</span><span>{rounded}%</span></div>
        <div class="progress-bar"><div class="progress-fill" style="width: {progress}%;"></div></div>
    </div>
</div>"#,
        kind = escape_html(&capitalize(&loan.loan_type)),
        status = status,
        status_upper = status.to_uppercase(),
        principal = format_money(loan.principal_amount),
        remaining = format_money(loan.remaining_amount),
        rate = loan.interest_rate,
        monthly = format_money(loan.monthly_payment),
        rounded = progress.round(),
        progress = progress,
    )
}

/// Whatever modal is open, rendered against the current snapshot
pub fn modal(snapshot: &Snapshot) -> String {
    match &snapshot.view.modal {
        Some(Modal::AccountDetails { account_id }) => snapshot
            .account(account_id)
            .map(account_details)
            .unwrap_or_default(),
        Some(Modal::AccountSettings { account_id }) => {
            let name = snapshot
                .account(account_id)
                .map(|a| a.name.as_str())
                .unwrap_or("");
            format!(
                "<div id=\"settingsModal\" class=\"modal show\"><input id=\"settingName\" value=\"{}\"></div>",
                escape_html(name)
            )
        }
        Some(Modal::Deposit) => format!(
            "<div id=\"depositModal\" class=\"modal show\"><select id=\"deposit-account\">{}</select><input id=\"deposit-amount\" type=\"number\"></div>",
            deposit_account_selector(&snapshot.accounts)
        ),
        None => String::new(),
    }
}

pub fn account_details(account: &Account) -> String {
    let or_dash = |s: &str| {
        if s.is_empty() {
            "-".to_string()
        } else {
            escape_html(s)
        }
    };

    format!(
        r#"<div id="detailsModal" class="modal show">
    <p id="detailName">{name}</p>
    <p id="detailType">{kind}</p>
    <p id="detailCard">{card}</p>
    <p id="detailBalance">{balance}</p>
    <p id="detailAPY">{apy}%</p>
    <span id="detailStatus" class="status-badge {status}">{status_label}</span>
</div>"#,
        name = or_dash(&account.name),
        kind = capitalize(&account.account_type.to_string()),
        card = or_dash(&account.card_number),
        balance = format_money(account.balance),
        apy = account.apy.unwrap_or(0.0),
        status = account.status,
        status_label = capitalize(account.status.as_str()),
    )
}

/// Profile form pre-filled from `/api/user`
pub fn profile_settings(snapshot: &Snapshot) -> String {
    let (name, email, phone) = snapshot
        .profile
        .as_ref()
        .map(|p| {
            (
                p.name.as_str(),
                p.email.as_str(),
                p.phone.as_deref().unwrap_or(""),
            )
        })
        .unwrap_or(("", "", ""));

    format!(
        r#"<form id="profile-form">
    <input id="setting-name" value="{}">
    <input id="setting-email" value="{}" readonly>
    <input id="setting-phone" value="{}">
</form>"#,
        escape_html(name),
        escape_html(email),
        escape_html(phone),
    )
}

/// Banner for the last success or error message
pub fn notice(snapshot: &Snapshot) -> String {
    match &snapshot.view.notice {
        Some(Notice::Success(m)) => format!("<div class=\"notice success\">{}</div>", escape_html(m)),
        Some(Notice::Error(m)) => format!("<div class=\"notice error\">{}</div>", escape_html(m)),
        None => String::new(),
    }
}
