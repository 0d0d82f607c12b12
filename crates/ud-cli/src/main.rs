//! ud - user profile desk
//!
//! View the first users of a users API, archive or hide them, and edit their
//! profiles locally. Edits live only as long as the process.
//!
//! # Examples
//!
//! ```bash
//! # Interactive session
//! ud
//!
//! # One-shot list as JSON
//! ud list --json --pretty
//!
//! # Profile form of user 3 against another API
//! ud show 3 --base-url http://localhost:3000
//! ```

use ud_cli::{App, Cli, CliErrorResult, Commands, OutputFormat, execute, logger, session};
use ud_client::Client;
use ud_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<()> {
    // Load and validate configuration
    let mut config = Config::load()?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let client = Client::from_config(&config.api, &config.cache)?;
    let mut app = App::new(client, config);

    let format = OutputFormat::new(cli.json, cli.pretty);
    let mut stdout = std::io::stdout();

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            info!("Starting interactive session");
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            session::run(&mut app, stdin, &mut stdout).await
        }
        command => execute(&mut app, command, format, &mut stdout).await,
    }
}
