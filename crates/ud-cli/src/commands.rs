use crate::{App, CliError, CliErrorResult, render};

use std::io::Write;
use std::time::Instant;

use clap::Subcommand;
use ud_core::{Route, UserId};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the first users, split into active and archived
    List,

    /// Show the profile form of one user
    Show {
        /// User ID
        id: UserId,
    },

    /// Interactive session on stdin/stdout (default)
    Session,
}

/// How one-shot commands print their result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json { pretty: bool },
}

impl OutputFormat {
    pub fn new(json: bool, pretty: bool) -> Self {
        if json || pretty {
            OutputFormat::Json { pretty }
        } else {
            OutputFormat::Text
        }
    }
}

/// Run a one-shot command against a fresh app
pub async fn execute<W: Write>(
    app: &mut App,
    command: Commands,
    format: OutputFormat,
    out: &mut W,
) -> CliErrorResult<()> {
    let route = match command {
        Commands::List => Route::List,
        Commands::Show { id } => Route::EditUser(id),
        Commands::Session => {
            return Err(CliError::session(
                "session is interactive; run it with session::run",
            ));
        }
    };

    app.navigate(route).await;
    if let Some(err) = app.take_failure() {
        return Err(err.into());
    }

    let text = match format {
        OutputFormat::Text => render::render_screen(app, Instant::now()),
        OutputFormat::Json { pretty } => {
            let value = match route {
                Route::List => app.list_view().map(|view| render::list_json(&view)),
                Route::EditUser(_) => app.edit_view().map(render::edit_json),
            };
            let value = value.ok_or_else(|| CliError::session("Nothing loaded"))?;
            render::to_json_string(&value, pretty)? + "\n"
        }
    };

    out.write_all(text.as_bytes())?;
    Ok(())
}
