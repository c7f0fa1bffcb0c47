//! Client State Store
//!
//! The in-memory snapshot of everything fetched from the dashboard API, plus
//! the transient selection and view state:
//!
//! - **types**: Records mirrored from the API (Account, Card, Transaction, ...)
//! - **view**: Panel phases, modal and notices
//!
//! # Update policy
//!
//! Every collection is replaced wholesale; nothing is patched element by
//! element. Each fetch takes a [`Generation`] from [`StateStore::begin`] before
//! it is issued, and its result is only applied if no newer fetch of the same
//! collection has been issued since.
//!
//! ```text
//! begin(Accounts) -> g1      begin(Accounts) -> g2
//!         |                          |
//!         |                   replace(g2, ..)  applied
//!   replace(g1, ..)  dropped (stale)
//! ```

pub mod types;
pub mod view;

pub use types::{
    Account, AccountStatus, AccountType, Bill, BillStatus, Card, CardType, Loan, LoanStatus,
    Transaction, UserProfile,
};
pub use view::{Modal, Notice, PanelPhase, ViewState};

use serde::Serialize;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The collections the store holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Accounts,
    Cards,
    Transactions,
    Bills,
    Loans,
    Profile,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Collection::Accounts => "accounts",
            Collection::Cards => "cards",
            Collection::Transactions => "transactions",
            Collection::Bills => "bills",
            Collection::Loans => "loans",
            Collection::Profile => "profile",
        };
        f.write_str(name)
    }
}

/// Ticket identifying one issued fetch of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation {
    collection: Collection,
    value: u64,
}

impl Generation {
    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

#[derive(Debug, Default)]
struct Slot<T> {
    value: T,
    issued: u64,
}

impl<T> Slot<T> {
    fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    fn replace(&mut self, generation: u64, value: T) -> bool {
        if generation != self.issued {
            return false;
        }
        self.value = value;
        true
    }
}

#[derive(Debug, Default)]
struct Inner {
    accounts: Slot<Vec<Account>>,
    cards: Slot<Vec<Card>>,
    transactions: Slot<Vec<Transaction>>,
    bills: Slot<Vec<Bill>>,
    loans: Slot<Vec<Loan>>,
    profile: Slot<Option<UserProfile>>,
    selected_account: Option<Account>,
    selected_bill: Option<Bill>,
    view: ViewState,
}

/// Owned copy of the whole store; the only input the renderer reads
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub cards: Vec<Card>,
    pub transactions: Vec<Transaction>,
    pub bills: Vec<Bill>,
    pub loans: Vec<Loan>,
    pub profile: Option<UserProfile>,
    pub selected_account: Option<Account>,
    pub selected_bill: Option<Bill>,
    pub view: ViewState,
}

impl Snapshot {
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }
}

/// Shared client state. Cheap to wrap in an `Arc`; the lock is never held
/// across an await point.
#[derive(Debug, Default)]
pub struct StateStore {
    inner: RwLock<Inner>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issue a new generation for `collection`. Any fetch started earlier for
    /// the same collection becomes stale.
    pub fn begin(&self, collection: Collection) -> Generation {
        let mut inner = self.write();
        let value = match collection {
            Collection::Accounts => inner.accounts.issue(),
            Collection::Cards => inner.cards.issue(),
            Collection::Transactions => inner.transactions.issue(),
            Collection::Bills => inner.bills.issue(),
            Collection::Loans => inner.loans.issue(),
            Collection::Profile => inner.profile.issue(),
        };
        Generation { collection, value }
    }

    fn apply<T>(
        &self,
        generation: Generation,
        expected: Collection,
        value: T,
        slot: impl FnOnce(&mut Inner) -> &mut Slot<T>,
    ) -> bool {
        if generation.collection != expected {
            tracing::warn!(
                "generation for {} used to replace {}",
                generation.collection,
                expected
            );
            return false;
        }
        let mut inner = self.write();
        let applied = slot(&mut *inner).replace(generation.value, value);
        if !applied {
            tracing::debug!(
                collection = %expected,
                generation = generation.value,
                "dropping stale response"
            );
        }
        applied
    }

    pub fn replace_accounts(&self, generation: Generation, items: Vec<Account>) -> bool {
        self.apply(generation, Collection::Accounts, items, |i| &mut i.accounts)
    }

    pub fn replace_cards(&self, generation: Generation, items: Vec<Card>) -> bool {
        self.apply(generation, Collection::Cards, items, |i| &mut i.cards)
    }

    pub fn replace_transactions(&self, generation: Generation, items: Vec<Transaction>) -> bool {
        self.apply(generation, Collection::Transactions, items, |i| {
            &mut i.transactions
        })
    }

    pub fn replace_bills(&self, generation: Generation, items: Vec<Bill>) -> bool {
        self.apply(generation, Collection::Bills, items, |i| &mut i.bills)
    }

    pub fn replace_loans(&self, generation: Generation, items: Vec<Loan>) -> bool {
        self.apply(generation, Collection::Loans, items, |i| &mut i.loans)
    }

    pub fn replace_profile(&self, generation: Generation, profile: UserProfile) -> bool {
        self.apply(generation, Collection::Profile, Some(profile), |i| {
            &mut i.profile
        })
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.read().accounts.value.clone()
    }

    pub fn cards(&self) -> Vec<Card> {
        self.read().cards.value.clone()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.read().transactions.value.clone()
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.read().bills.value.clone()
    }

    pub fn loans(&self) -> Vec<Loan> {
        self.read().loans.value.clone()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.read().profile.value.clone()
    }

    pub fn find_account(&self, id: &str) -> Option<Account> {
        self.read().accounts.value.iter().find(|a| a.id == id).cloned()
    }

    pub fn find_bill(&self, id: &str) -> Option<Bill> {
        self.read().bills.value.iter().find(|b| b.id == id).cloned()
    }

    pub fn selected_account(&self) -> Option<Account> {
        self.read().selected_account.clone()
    }

    pub fn selected_bill(&self) -> Option<Bill> {
        self.read().selected_bill.clone()
    }

    pub fn set_selected_account(&self, account: Option<Account>) {
        self.write().selected_account = account;
    }

    pub fn set_selected_bill(&self, bill: Option<Bill>) {
        self.write().selected_bill = bill;
    }

    pub fn view(&self) -> ViewState {
        self.read().view.clone()
    }

    /// Mutate the view state in place
    pub fn update_view<F: FnOnce(&mut ViewState)>(&self, f: F) {
        f(&mut self.write().view);
    }

    pub fn set_notice(&self, notice: Notice) {
        self.write().view.notice = Some(notice);
    }

    pub fn clear_notice(&self) {
        self.write().view.notice = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = self.read();
        Snapshot {
            accounts: inner.accounts.value.clone(),
            cards: inner.cards.value.clone(),
            transactions: inner.transactions.value.clone(),
            bills: inner.bills.value.clone(),
            loans: inner.loans.value.clone(),
            profile: inner.profile.value.clone(),
            selected_account: inner.selected_account.clone(),
            selected_bill: inner.selected_bill.clone(),
            view: inner.view.clone(),
        }
    }
}
