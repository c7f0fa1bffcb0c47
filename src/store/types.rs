//! Core data types mirrored from the dashboard API
//!
//! This module defines the records the client holds in its store:
//! - `Account`, `Card`: what the user owns
//! - `Transaction`: posted money movements, newest first
//! - `Bill`, `Loan`: payables and credit lines
//! - `UserProfile`: the signed-in customer's contact details
//!
//! Field names follow the wire format; a few are renamed on the Rust side
//! (`type` → `account_type`, `cardNumber` → `card_number`).

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A deposit account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub account_type: AccountType,
    /// Current balance; negative values are shown as-is
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AccountStatus,
    /// Annual percentage yield, if the product pays interest
    #[serde(default)]
    pub apy: Option<f64>,
    /// Masked card number used as the account's display number
    #[serde(rename = "cardNumber", default, deserialize_with = "null_as_default")]
    pub card_number: String,
    #[serde(default)]
    pub fees: Option<f64>,
}

impl Account {
    /// Select label for this account: `Name (৳12.34)`
    pub fn option_label(&self) -> String {
        format!("{} (৳{:.2})", self.name, self.balance)
    }

    pub fn is_frozen(&self) -> bool {
        self.status == AccountStatus::Frozen
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Checking => write!(f, "checking"),
            AccountType::Savings => write!(f, "savings"),
            AccountType::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Frozen,
    /// Anything the server sends other than `frozen` reads as active
    #[default]
    #[serde(other)]
    Active,
}

impl AccountStatus {
    /// The status a freeze toggle moves to
    pub fn toggled(self) -> Self {
        match self {
            AccountStatus::Active => AccountStatus::Frozen,
            AccountStatus::Frozen => AccountStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Frozen => "frozen",
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(AccountStatus::Active),
            "frozen" => Ok(AccountStatus::Frozen),
            other => Err(format!("unknown account status: {}", other)),
        }
    }
}

/// A payment card. Read-only from the client's side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub card_type: CardType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub holder: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expiry: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub limit: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Credit,
    #[default]
    #[serde(other)]
    Debit,
}

/// A posted transaction. Negative amounts are debits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// Server timestamp, kept verbatim
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl Transaction {
    pub fn is_debit(&self) -> bool {
        self.amount < 0.0
    }

    /// Description shown in lists; blank descriptions read as "Transfer"
    pub fn display_description(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "Transfer",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub biller_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub due_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: BillStatus,
}

impl Bill {
    pub fn is_paid(&self) -> bool {
        self.status == BillStatus::Paid
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Paid,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Loan {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub loan_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub principal_amount: f64,
    /// Outstanding balance, expected within `0..=principal_amount`
    #[serde(default, deserialize_with = "null_as_default")]
    pub remaining_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interest_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub monthly_payment: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: LoanStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Loan {
    /// Share of the principal already repaid, in percent
    pub fn progress_percent(&self) -> f64 {
        if self.principal_amount <= 0.0 {
            return 0.0;
        }
        let paid = self.principal_amount - self.remaining_amount;
        (paid / self.principal_amount * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    #[default]
    Active,
    Closed,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanStatus::Active => write!(f, "active"),
            LoanStatus::Closed => write!(f, "closed"),
            LoanStatus::Other => write!(f, "other"),
        }
    }
}

/// The signed-in customer, as returned by `/api/user`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl UserProfile {
    /// First word of the name, used in the greeting
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}
