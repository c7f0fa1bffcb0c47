//! bankdash CLI
//!
//! Command-line front end for the banking dashboard client:
//! - Show any dashboard section as an HTML fragment or JSON snapshot
//! - Run transfers, bill payments, loan applications and deposits
//! - Manage account and profile settings

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bankdash::config::{generate_default_config, Config};
use bankdash::gateway::{GatewayConfig, HttpGateway};
use bankdash::render::{render_section, Section};
use bankdash::session::{EnvSession, SessionAccessor, StaticSession};
use bankdash::workflow::{
    Controller, DepositForm, LoanForm, PasswordForm, PayBillForm, ProfileForm, TransferForm,
    WorkflowResult,
};

#[derive(Parser)]
#[command(name = "bankdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Banking dashboard client")]
#[command(long_about = "bankdash talks to the dashboard backend.\nView your accounts, move money, pay bills and manage your profile.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session token (default: read from the configured environment variable)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html", global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard overview
    Dashboard,

    /// List accounts
    Accounts,

    /// List cards
    Cards,

    /// Show transaction history
    Transactions,

    /// List bills
    Bills,

    /// List loans
    Loans,

    /// Show profile settings
    Profile,

    /// Send money
    Transfer {
        /// Source account id
        #[arg(long)]
        from: String,
        /// Recipient name
        #[arg(long)]
        to: String,
        /// Amount
        amount: String,
        /// Description (default: "Transfer to <recipient>")
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Pay a bill
    PayBill {
        /// Bill id
        bill: String,
        /// Paying account id
        #[arg(long)]
        account: String,
        /// Amount (default: the bill's amount)
        #[arg(long)]
        amount: Option<String>,
    },

    /// Apply for a loan
    ApplyLoan {
        /// Loan type (personal, home, car, ...)
        loan_type: String,
        /// Principal amount
        amount: String,
        /// Tenure in months
        #[arg(short, long)]
        tenure: String,
    },

    /// Deposit into an account
    Deposit {
        /// Account id, or an account type (checking, savings)
        account: String,
        /// Amount
        amount: String,
    },

    /// Rename an account
    RenameAccount {
        /// Account id
        account: String,
        /// New name
        name: String,
    },

    /// Freeze or unfreeze an account
    Freeze {
        /// Account id
        account: String,
    },

    /// Update profile details
    UpdateProfile {
        /// Full name
        #[arg(long)]
        name: String,
        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Change the account password
    ChangePassword {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {}", path.display()))?;
                eprintln!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let (mut config, source) = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_tracing(&config);
    source.log();
    tracing::debug!(base_url = %config.api.base_url, "bankdash v{}", env!("CARGO_PKG_VERSION"));

    let session: Arc<dyn SessionAccessor> = match &cli.token {
        Some(token) => Arc::new(StaticSession::new(token.clone())),
        None => Arc::new(EnvSession::new(config.session.token_env_var.clone())),
    };
    let gateway = HttpGateway::new(GatewayConfig::from(&config.api), session)
        .context("building HTTP client")?;
    let controller = Controller::with_gateway(Arc::new(gateway));

    controller.load_all().await;

    let (section, outcome) = run(&controller, cli.command).await?;
    controller.navigate(section).await;

    let snapshot = controller.snapshot();
    match cli.format {
        OutputFormat::Html => println!("{}", render_section(&snapshot, section)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }

    if outcome.is_err() {
        if let Some(notice) = &snapshot.view.notice {
            eprintln!("{}", notice.message());
        }
        std::process::exit(1);
    }
    Ok(())
}

/// Run the requested workflow; returns the section to show afterwards
async fn run(
    controller: &Controller,
    command: Commands,
) -> anyhow::Result<(Section, WorkflowResult<()>)> {
    let shown = |section: Section| -> anyhow::Result<(Section, WorkflowResult<()>)> {
        Ok((section, Ok(())))
    };

    match command {
        Commands::Dashboard => shown(Section::Dashboard),
        Commands::Accounts => shown(Section::Accounts),
        Commands::Cards => shown(Section::Cards),
        Commands::Transactions => shown(Section::Transactions),
        Commands::Bills => shown(Section::Bills),
        Commands::Loans => shown(Section::Loans),
        Commands::Profile => shown(Section::Settings),

        Commands::Transfer {
            from,
            to,
            amount,
            description,
        } => {
            let form = TransferForm {
                from_account: from,
                recipient_name: to,
                amount,
                description,
            };
            Ok((Section::Transfer, controller.transfer(&form).await))
        }

        Commands::PayBill {
            bill,
            account,
            amount,
        } => {
            controller.select_bill(&bill);
            let amount = amount.unwrap_or_else(|| controller.store().view().payment_amount);
            let form = PayBillForm {
                account_id: account,
                amount,
            };
            Ok((Section::Bills, controller.pay_bill(&form).await))
        }

        Commands::ApplyLoan {
            loan_type,
            amount,
            tenure,
        } => {
            let form = LoanForm {
                loan_type,
                amount,
                tenure_months: tenure,
            };
            Ok((Section::Loans, controller.apply_loan(&form).await))
        }

        Commands::Deposit { account, amount } => {
            controller.open_deposit();
            let form = DepositForm {
                account_id: account,
                amount,
            };
            Ok((Section::Accounts, controller.deposit(&form).await))
        }

        Commands::RenameAccount { account, name } => {
            controller.open_account_settings(&account);
            Ok((
                Section::Accounts,
                controller.save_account_settings(&name).await,
            ))
        }

        Commands::Freeze { account } => {
            let current = controller
                .store()
                .find_account(&account)
                .map(|a| a.status)
                .with_context(|| format!("Account not found: {}", account))?;
            let outcome = controller.toggle_freeze(&account, current).await.map(|_| ());
            Ok((Section::Accounts, outcome))
        }

        Commands::UpdateProfile { name, phone } => {
            let form = ProfileForm { name, phone };
            Ok((Section::Settings, controller.update_profile(&form).await))
        }

        Commands::ChangePassword {
            current,
            new,
            confirm,
        } => {
            let form = PasswordForm {
                current,
                new,
                confirm,
            };
            Ok((Section::Settings, controller.change_password(&form).await))
        }

        Commands::Config { .. } => shown(Section::Dashboard),
    }
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bankdash={}", config.logging.level).into());

    let json = config.logging.format.eq_ignore_ascii_case("json");
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}
