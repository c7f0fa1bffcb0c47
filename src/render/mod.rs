//! View Renderer
//!
//! Pure functions from a store [`Snapshot`] to HTML fragments. The renderer
//! never calls the gateway; whatever is in the snapshot is what gets shown.
//!
//! - **format**: money, date and escaping helpers
//! - **views**: one function per dashboard region

pub mod format;
pub mod views;

pub use format::{escape_html, format_date, format_datetime, format_money};

use serde::Serialize;

use crate::store::Snapshot;

/// Navigable sections of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dashboard,
    Accounts,
    Cards,
    Bills,
    Transfer,
    Transactions,
    Loans,
    Analytics,
    Settings,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Dashboard,
            Section::Accounts,
            Section::Cards,
            Section::Bills,
            Section::Transfer,
            Section::Transactions,
            Section::Loans,
            Section::Analytics,
            Section::Settings,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Accounts => "accounts",
            Section::Cards => "cards",
            Section::Bills => "bills",
            Section::Transfer => "transfer",
            Section::Transactions => "transactions",
            Section::Loans => "loans",
            Section::Analytics => "analytics",
            Section::Settings => "settings",
        }
    }

    /// Heading shown above the section
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Accounts => "Your Accounts",
            Section::Cards => "Your Cards",
            Section::Bills => "Pay Bills",
            Section::Transfer => "Send Money",
            Section::Transactions => "Transaction History",
            Section::Loans => "Loan Services",
            Section::Analytics => "Financial Analytics",
            Section::Settings => "Settings",
        }
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Section::all()
            .iter()
            .copied()
            .find(|section| section.id() == wanted)
            .ok_or_else(|| format!("unknown section: {}", s))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Render one section, including the notice banner and any open modal
pub fn render_section(snapshot: &Snapshot, section: Section) -> String {
    let body = match section {
        Section::Dashboard => format!(
            "{}\n<div id=\"recent-transactions\">\n{}\n</div>",
            views::dashboard_summary(snapshot),
            views::recent_transactions(snapshot)
        ),
        Section::Accounts => format!(
            "<div class=\"accounts-container\">\n{}\n</div>",
            views::accounts_page(snapshot)
        ),
        Section::Cards => format!(
            "<div class=\"cards-container\">\n{}\n</div>",
            views::cards_page(snapshot)
        ),
        Section::Bills => format!(
            "<div id=\"bills-list\">\n{}\n</div>\n{}",
            views::bills_list(snapshot),
            views::bill_payment_panel(snapshot)
        ),
        Section::Transfer => views::transfer_panel(snapshot),
        Section::Transactions => format!(
            "<div id=\"transactions-full\">\n{}\n</div>",
            views::transactions_page(snapshot)
        ),
        Section::Loans => format!(
            "<div id=\"loans-list\">\n{}\n</div>",
            views::loans_list(snapshot)
        ),
        // Charts are drawn by the host page
        Section::Analytics => String::new(),
        Section::Settings => views::profile_settings(snapshot),
    };

    format!(
        "<section id=\"{id}\" class=\"section active\">\n<h1 id=\"page-title\">{title}</h1>\n{notice}{body}\n{modal}</section>",
        id = section.id(),
        title = section.title(),
        notice = views::notice(snapshot),
        body = body,
        modal = views::modal(snapshot),
    )
}
