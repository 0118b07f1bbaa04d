pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod prompt;
pub mod render;

use anyhow::Context;
use bolao_core::{PersistenceAdapter, PoolError, Session};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::db::SqliteRepository;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.db);

    tracing::info!("Opening database at {}", config.db_path.display());
    let repository = SqliteRepository::open(&config.db_path)
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    let mut session = Session::new(PersistenceAdapter::new(repository));

    match cli.command.unwrap_or(Command::Form) {
        Command::Form => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            commands::run_repl(&mut session, &mut input, &mut output)?;
        }
        Command::List => report_outcome(commands::list_saved(&mut session)),
        Command::Apply { result, date } => {
            report_outcome(commands::check_saved(&mut session, &result, date.as_deref()))
        }
    }

    Ok(())
}

/// Print a one-shot result, or its notice and exit with status 1.
fn report_outcome(outcome: Result<String, PoolError>) {
    match outcome {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => {
            tracing::debug!(error = %e, "command rejected");
            eprintln!("{}", render::notice(&e));
            std::process::exit(1);
        }
    }
}
