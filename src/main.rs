mod config;
mod db;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let run::Cli { db: db_override, command } = run::Cli::parse();
    let config = config::Config::load(db_override)?;
    logging::init(&config)?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        db = %config.db_path.display(),
        "Starting expensetui"
    );

    let mut db = db::Database::open(&config.db_path)?;

    let result = match command {
        None => run::as_tui(&mut db),
        Some(command) => run::as_cli(command, &mut db),
    };
    if let Err(ref e) = result {
        tracing::error!(error = %e, "expensetui exited with an error");
    }
    result
}
