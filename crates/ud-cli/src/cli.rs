use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ud")]
#[command(about = "View and edit user profiles from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Defaults to an interactive session
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Users API base URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
