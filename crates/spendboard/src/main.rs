//! spendboard - Expense tracker client

mod cli;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use spendboard_core::config::parse_timeout;
use spendboard_core::{
    delete_with_confirmation, ApiConfig, DeleteOutcome, ExpenseApi, ExpenseDraft, ReqwestTransport,
};
use spendboard_types::{Category, ExpenseId, ExpensePatch, DEFAULT_CURRENCY};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spendboard",
    version,
    about = "Expense tracker client",
    long_about = "Browser UI host and terminal client for an expense tracking backend.\n\
                  \n\
                  Lists, creates, edits and deletes expenses, prints spending summaries\n\
                  (optionally converted into one display currency) and looks up live\n\
                  exchange rates. `serve` hosts the compiled Leptos front end.\n\
                  \n\
                  Examples:\n\
                    spendboard list                              # Table of expenses\n\
                    spendboard add --amount 12.50 --category food --date 2024-01-01\n\
                    spendboard edit 3 --merchant \"Corner Shop\"   # Change one field\n\
                    spendboard delete 3                          # Asks before deleting\n\
                    spendboard summary --currency EUR            # Totals converted to EUR\n\
                    spendboard rate USD JPY                      # 1 USD = x JPY\n\
                    spendboard serve --open                      # Host the web UI\n\
                  \n\
                  Web Frontend Workflow:\n\
                    cd crates/spendboard-web && trunk build --release\n\
                    spendboard serve                             # Serves dist/ on :3000\n\
                  \n\
                  Environment Variables:\n\
                    SPENDBOARD_API_BASE_URL          # Backend address (default http://127.0.0.1:8000)\n\
                    SPENDBOARD_TIMEOUT               # Request timeout in seconds\n\
                    SPENDBOARD_NO_COLOR              # Disable ANSI colors (log-friendly)\n\
                    RUST_LOG                         # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL (the API lives under <base>/api)
    #[arg(long, global = true, env = "SPENDBOARD_API_BASE_URL")]
    api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SPENDBOARD_TIMEOUT", default_value = "15", value_parser = parse_timeout)]
    timeout: Duration,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "SPENDBOARD_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List all expenses
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one expense
    Show {
        id: ExpenseId,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a new expense
    Add {
        /// Decimal amount, e.g. 12.50
        #[arg(long)]
        amount: String,
        /// food, transport, bills, shopping or other
        #[arg(long)]
        category: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,
        #[arg(long)]
        merchant: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Change fields of an existing expense (only given fields are sent)
    Edit {
        id: ExpenseId,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        category: Option<Category>,
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        merchant: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an expense after confirmation
    Delete {
        id: ExpenseId,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Print totals and breakdowns
    Summary {
        /// Convert totals into this currency
        #[arg(long)]
        currency: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the current exchange rate between two currencies
    Rate { from: String, to: String },
    /// Host the compiled web UI
    Serve {
        /// Port for the web server
        #[arg(long, default_value = "3000")]
        port: u16,
        /// Trunk output directory
        #[arg(long, default_value = "crates/spendboard-web/dist")]
        dist: PathBuf,
        /// Open the UI in the default browser
        #[arg(long)]
        open: bool,
    },
}

type Api = ExpenseApi<ReqwestTransport>;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.no_color);

    let config = ApiConfig::from_optional(cli.api_base.as_deref())
        .context("Invalid --api-base")?
        .with_timeout(cli.timeout);
    debug!(base_url = config.base_url(), timeout = ?config.timeout(), "using backend");

    let transport = ReqwestTransport::new(&config).context("Failed to build HTTP client")?;
    let api = ExpenseApi::new(config, transport);
    let no_color = cli.no_color;

    match cli.command {
        Command::List { json } => run_list(&api, json, no_color).await?,
        Command::Show { id, json } => run_show(&api, id, json).await?,
        Command::Add {
            amount,
            category,
            date,
            currency,
            merchant,
            description,
        } => {
            let draft = ExpenseDraft {
                amount,
                currency,
                category,
                date,
                merchant: merchant.unwrap_or_default(),
                description: description.unwrap_or_default(),
            };
            run_add(&api, draft).await?
        }
        Command::Edit {
            id,
            amount,
            currency,
            category,
            date,
            merchant,
            description,
        } => {
            let patch = ExpensePatch {
                amount,
                currency,
                category,
                date,
                description,
                merchant,
            };
            run_edit(&api, id, patch).await?
        }
        Command::Delete { id, yes } => return run_delete(&api, id, yes).await,
        Command::Summary { currency, json } => {
            run_summary(&api, currency.as_deref(), json, no_color).await?
        }
        Command::Rate { from, to } => run_rate(&api, &from, &to).await?,
        Command::Serve { port, dist, open } => run_serve(port, dist, open).await?,
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .init();
}

async fn run_list(api: &Api, json: bool, no_color: bool) -> Result<()> {
    let expenses = api.list_expenses().await?;
    println!("{}", cli::format_expense_table(&expenses, json, no_color));
    Ok(())
}

async fn run_show(api: &Api, id: ExpenseId, json: bool) -> Result<()> {
    let expense = api.get_expense(id).await?;
    println!("{}", cli::format_expense_info(&expense, json));
    Ok(())
}

async fn run_add(api: &Api, draft: ExpenseDraft) -> Result<()> {
    let body = draft.into_create()?;
    let created = api.create_expense(&body).await?;
    println!(
        "Created expense {} ({} on {})",
        created.id,
        created.amount_display(),
        created.date
    );
    Ok(())
}

async fn run_edit(api: &Api, id: ExpenseId, patch: ExpensePatch) -> Result<()> {
    if patch.is_empty() {
        bail!("Nothing to update: pass at least one field (e.g. --amount)");
    }
    let updated = api.update_expense(id, &patch).await?;
    println!("{}", cli::format_expense_info(&updated, false));
    Ok(())
}

async fn run_delete(api: &Api, id: ExpenseId, yes: bool) -> Result<ExitCode> {
    let prompt = cli::TerminalPrompt::new(yes);
    let outcome = delete_with_confirmation(api, &prompt, id).await;
    match &outcome {
        DeleteOutcome::Cancelled => println!("Cancelled."),
        DeleteOutcome::Deleted => println!("Deleted expense {}.", id),
        // Already reported on stderr by the prompt
        DeleteOutcome::Failed(_) => {}
    }
    Ok(delete_exit_code(&outcome))
}

fn delete_exit_code(outcome: &DeleteOutcome) -> ExitCode {
    match outcome {
        DeleteOutcome::Failed(_) => ExitCode::FAILURE,
        DeleteOutcome::Cancelled | DeleteOutcome::Deleted => ExitCode::SUCCESS,
    }
}

async fn run_summary(
    api: &Api,
    currency: Option<&str>,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let summary = api.fetch_summary(currency).await?;
    println!("{}", cli::format_summary(&summary, currency, json, no_color));
    Ok(())
}

async fn run_rate(api: &Api, from: &str, to: &str) -> Result<()> {
    let rate = api.fetch_exchange_rate(from, to).await?;
    println!("{}", rate.display_line());
    Ok(())
}

async fn run_serve(port: u16, dist: PathBuf, open: bool) -> Result<()> {
    if open {
        let url = format!("http://127.0.0.1:{}", port);
        if let Err(e) = open::that(&url) {
            warn!(url = %url, error = %e, "could not open browser");
        }
    }

    spendboard_web::run(dist, port)
        .await
        .context("Web server failed")
}
