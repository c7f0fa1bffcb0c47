//! # bankdash
//!
//! Client-side state synchronization and transaction workflows for a
//! personal banking dashboard.
//!
//! ## Features
//!
//! - **Typed gateway**: every backend endpoint behind one async trait
//! - **Consistent state**: collections are always replaced whole, and a late
//!   response never overwrites a newer one
//! - **Workflows**: transfers, bill payments, loans, deposits, account and
//!   profile settings with local validation before anything is sent
//! - **Rendering**: pure functions from a snapshot to HTML fragments
//!
//! ## Modules
//!
//! - [`gateway`]: REST client and response envelope decoding
//! - [`store`]: the client state store
//! - [`workflow`]: the controller driving every user operation
//! - [`render`]: view rendering
//! - [`session`]: bearer token access
//! - [`config`]: file and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bankdash::gateway::{GatewayConfig, HttpGateway};
//! use bankdash::render::{render_section, Section};
//! use bankdash::session::EnvSession;
//! use bankdash::workflow::{Controller, TransferForm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Arc::new(EnvSession::new("BANKDASH_TOKEN"));
//!     let gateway = HttpGateway::new(GatewayConfig::default(), session)?;
//!     let controller = Controller::with_gateway(Arc::new(gateway));
//!
//!     controller.load_all().await;
//!
//!     let form = TransferForm {
//!         from_account: "a1".to_string(),
//!         recipient_name: "Karim".to_string(),
//!         amount: "100".to_string(),
//!         description: String::new(),
//!     };
//!     controller.transfer(&form).await?;
//!
//!     println!("{}", render_section(&controller.snapshot(), Section::Transfer));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod gateway;
pub mod render;
pub mod session;
pub mod store;
pub mod workflow;

// Re-export top-level types for convenience
pub use config::{Config, ConfigError, ConfigSource};

pub use gateway::{Gateway, GatewayConfig, GatewayError, GatewayResult, HttpGateway};

pub use render::{render_section, Section};

pub use session::{EnvSession, SessionAccessor, StaticSession};

pub use store::{
    Account, AccountStatus, Bill, Card, Collection, Loan, Notice, Snapshot, StateStore,
    Transaction, UserProfile,
};

pub use workflow::{Controller, ValidationError, WorkflowError, WorkflowResult};
