//! Interactive session: one command per input line, rendered to `out`.
//!
//! The overlay store lives for the whole session. Every store mutation is
//! observed through a subscription and redraws the current screen once.

use crate::{App, CliErrorResult, SessionCommand, SessionLine, render};

use std::io::Write;
use std::time::Instant;

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use ud_core::{Route, SubmitOutcome};

pub const GREETING: &str = "Type `help` for commands, `quit` to leave.";

/// Read commands from `input` until it ends or `quit` is entered
pub async fn run<R, W>(app: &mut App, input: R, out: &mut W) -> CliErrorResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let subscription = app.store_mut().subscribe(move |_| {
        let _ = tx.send(());
    });

    writeln!(out, "{GREETING}")?;
    navigate(app, Route::List, out).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match SessionLine::parse_line(&line) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                // Covers `help` as well as unknown input
                write!(out, "{}", err.render())?;
                continue;
            }
        };

        debug!("Session command: {:?}", command);
        if command == SessionCommand::Quit {
            break;
        }

        let redraw = apply(app, command, out).await?;

        let mut changed = false;
        while rx.try_recv().is_ok() {
            changed = true;
        }

        if redraw || changed {
            write!(out, "{}", render::render_screen(app, Instant::now()))?;
        }
        out.flush()?;
    }

    app.store_mut().unsubscribe(subscription);
    info!("Session ended");
    Ok(())
}

/// Apply one command. Returns true when the screen must be redrawn for a
/// reason other than a store change.
async fn apply<W: Write>(
    app: &mut App,
    command: SessionCommand,
    out: &mut W,
) -> CliErrorResult<bool> {
    match command {
        SessionCommand::List | SessionCommand::Back => {
            navigate(app, Route::List, out).await?;
            Ok(false)
        }
        SessionCommand::Open { path } => {
            navigate(app, path, out).await?;
            Ok(false)
        }
        SessionCommand::Edit { id } => {
            navigate(app, Route::EditUser(id), out).await?;
            Ok(false)
        }
        SessionCommand::Archive { id } => {
            app.archive(id);
            Ok(false)
        }
        SessionCommand::Unarchive { id } => {
            app.unarchive(id);
            Ok(false)
        }
        SessionCommand::Hide { id } => {
            app.hide(id);
            Ok(false)
        }
        SessionCommand::Set { field, value } => {
            match app.set_field(field, value.join(" ")) {
                Ok(Some(message)) => writeln!(out, "{}: {}", field.label(), message)?,
                Ok(None) => writeln!(out, "{}: ok", field.label())?,
                Err(err) => writeln!(out, "{}", err.user_message())?,
            }
            Ok(false)
        }
        SessionCommand::Save => match app.save(Instant::now()) {
            // A successful save redraws through the store subscription
            Ok(SubmitOutcome::Saved(_)) => Ok(false),
            Ok(SubmitOutcome::Rejected(errors)) => {
                writeln!(out, "Not saved: {} invalid field(s)", errors.len())?;
                Ok(true)
            }
            Err(err) => {
                writeln!(out, "{}", err.user_message())?;
                Ok(false)
            }
        },
        SessionCommand::Close => match app.close_notice() {
            Ok(()) => Ok(true),
            Err(err) => {
                writeln!(out, "{}", err.user_message())?;
                Ok(false)
            }
        },
        SessionCommand::Quit => Ok(false),
    }
}

/// Show the loading placeholder, fetch, then show the result
async fn navigate<W: Write>(app: &mut App, route: Route, out: &mut W) -> CliErrorResult<()> {
    app.start(route);
    write!(out, "{}", render::render_screen(app, Instant::now()))?;
    out.flush()?;

    app.load().await;
    write!(out, "{}", render::render_screen(app, Instant::now()))?;
    Ok(())
}
