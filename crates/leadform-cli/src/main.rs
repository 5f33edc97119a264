mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{backup, completions, customers, ledger, submit, tui, Context};
use crate::error::{exit_code_for, report_error};
use leadform_config as config;
use leadform_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "leadform", version, about = "leadform CLI")]
struct Cli {
    /// Customer catalog CSV
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Lead ledger CSV that submissions are appended to
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List selectable customer names
    Customers(customers::CustomersArgs),
    /// Show one customer's details
    Show(customers::ShowArgs),
    /// Validate a lead entry and append it to the ledger
    Submit(submit::SubmitArgs),
    /// Print the ledger
    Ledger(ledger::LedgerArgs),
    Backup(backup::BackupArgs),
    Tui(tui::TuiArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        catalog,
        ledger,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Tui(args) => tui::launch(catalog, ledger, config_path, args, verbose),
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let catalog_path =
                paths::resolve_catalog_path(catalog.or_else(|| app_config.catalog_path.clone()))
                    .with_context(|| "resolve catalog path")?;
            let ledger_path =
                paths::resolve_ledger_path(ledger.or_else(|| app_config.ledger_path.clone()))
                    .with_context(|| "resolve ledger path")?;
            debug!(
                catalog = %catalog_path.display(),
                ledger = %ledger_path.display(),
                "data paths resolved"
            );

            let store = Store::open(&catalog_path, &ledger_path)
                .with_context(|| format!("open catalog {}", catalog_path.display()))?;

            let ctx = Context {
                store: &store,
                json,
            };

            match command {
                Command::Customers(args) => customers::list_customers(&ctx, args),
                Command::Show(args) => customers::show_customer(&ctx, args),
                Command::Submit(args) => submit::submit_lead(&ctx, args),
                Command::Ledger(args) => ledger::print_ledger(&ctx, args),
                Command::Backup(args) => backup::backup(&ctx, args),
                Command::Tui(_) => unreachable!("tui command handled before catalog load"),
                Command::Completions(_) => {
                    unreachable!("completions command handled before catalog load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
