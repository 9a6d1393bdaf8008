use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use vigil_alert::{config, run};
use vigil_client::prelude::*;

mod cli;

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger
    env_logger::init();
}

#[tokio::main]
async fn main() -> Result<()> {
    preprocess();
    let cli = cli::Cli::parse();
    log::info!("Command line input recorded: {cli:#?}");

    // cli framework:
    // "> vigil <COMMAND>"
    match &cli.command {
        // "> vigil run"
        // full pass: quote -> change -> headlines -> SMS
        cli::Commands::Run => {
            let client = build_client(config::USER_AGENT)?;
            run::alert(&client).await?;
        }

        // "> vigil check"
        // report the change without messaging anyone
        cli::Commands::Check => {
            let client = build_client(config::USER_AGENT)?;
            let today = chrono::Local::now().date_naive();
            let pct = run::daily_change(&client, today).await?;

            let line = format!("{}: {pct:+.2}%", config::TICKER);
            if pct < 0.0 {
                println!("{}", line.red());
            } else {
                println!("{}", line.green());
            }
        }
    }

    Ok(())
}
