//! Text and JSON rendering of screens.

use crate::{App, CliErrorResult, Screen};

use std::fmt::Write as _;
use std::time::Instant;

use serde_json::{Value, json};
use ud_client::LoadState;
use ud_core::{EditView, FormField, ListView, UserRecord};

pub const LOADING_USERS: &str = "Loading users...";
pub const LOADING_USER: &str = "Loading user...";
pub const NO_USERS: &str = "No users";
pub const CHANGES_SAVED: &str = "Changes saved!";

/// Render whatever the current route shows
pub fn render_screen(app: &App, now: Instant) -> String {
    match app.screen() {
        Screen::List(LoadState::Loading) => format!("{LOADING_USERS}\n"),
        Screen::List(LoadState::Failed(err)) => format!("Error: {}\n", err.user_message()),
        Screen::List(LoadState::Ready(_)) => match app.list_view() {
            Some(view) => render_list(&view),
            None => String::new(),
        },
        Screen::Edit {
            view: LoadState::Loading,
            ..
        } => format!("{LOADING_USER}\n"),
        Screen::Edit {
            view: LoadState::Failed(err),
            ..
        } => format!("Error: {}\n", err.user_message()),
        Screen::Edit {
            view: LoadState::Ready(view),
            ..
        } => render_edit(view, now),
    }
}

pub fn render_list(view: &ListView) -> String {
    if view.has_no_users() {
        return format!("{NO_USERS}\n");
    }

    let mut out = String::new();
    section_title(&mut out, "Active");
    if view.active.is_empty() {
        out.push_str("  (none)\n");
    }
    for user in &view.active {
        user_card(&mut out, user, false);
    }

    if view.has_archived() {
        out.push('\n');
        section_title(&mut out, "Archive");
        for user in &view.archived {
            user_card(&mut out, user, true);
        }
    }

    out
}

pub fn render_edit(view: &EditView, now: Instant) -> String {
    let mut out = String::new();
    let values = view.form.values();

    let _ = writeln!(out, "Profile data for @{} (#{})", view.user.username, view.user.id);
    let _ = writeln!(out, "Avatar: {}", view.avatar_url);
    out.push('\n');

    for field in FormField::ALL {
        let _ = writeln!(out, "  {:<14}{}", field.label(), values.get(field));
        if let Some(message) = view.form.error(field) {
            let _ = writeln!(out, "  {:<14}! {}", "", message);
        }
    }

    if let Some(left) = view.notice.remaining(now) {
        out.push('\n');
        let _ = writeln!(
            out,
            "{CHANGES_SAVED} (closes in {}s, `close` to dismiss)",
            left.as_secs_f64().ceil() as u64
        );
    }

    out
}

fn section_title(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
}

fn user_card(out: &mut String, user: &UserRecord, archived: bool) {
    let _ = writeln!(out, "#{:<3} {} @{}", user.id.get(), user.name, user.username);
    let _ = writeln!(out, "     {} | {}", user.company_name(), user.city());
    if archived {
        let _ = writeln!(out, "     actions: edit {0} | unarchive {0}", user.id);
    } else {
        let _ = writeln!(out, "     actions: edit {0} | archive {0} | hide {0}", user.id);
    }
}

// =========================================================================
// JSON
// =========================================================================

pub fn list_json(view: &ListView) -> Value {
    json!({
        "active": view.active,
        "archived": view.archived,
        "fetched": view.fetched,
    })
}

pub fn edit_json(view: &EditView) -> Value {
    json!({
        "user": view.user,
        "avatarUrl": view.avatar_url,
        "values": view.form.values(),
        "errors": view.form.errors(),
    })
}

pub fn to_json_string(value: &Value, pretty: bool) -> CliErrorResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
