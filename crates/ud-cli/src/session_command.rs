use clap::{Parser, Subcommand};
use ud_core::{FormField, Route, UserId};

/// One line of session input
#[derive(Parser, Debug)]
#[command(name = "ud")]
#[command(no_binary_name = true)]
#[command(disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

impl SessionLine {
    /// Split a raw input line on whitespace and parse it
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Show the user list
    List,

    /// Go to a route, e.g. `/` or `/users/3`
    Open {
        path: Route,
    },

    /// Open the profile form of a user
    Edit {
        id: UserId,
    },

    /// Move a user to the archive
    Archive {
        id: UserId,
    },

    /// Move an archived user back to active
    Unarchive {
        id: UserId,
    },

    /// Hide a user for the rest of the session
    Hide {
        id: UserId,
    },

    /// Change a form field and validate it
    Set {
        /// name, username, email, city, phone or companyName
        field: FormField,

        /// New value; words are joined with single spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        value: Vec<String>,
    },

    /// Validate and save the open form
    Save,

    /// Dismiss the save confirmation
    Close,

    /// Return to the user list
    Back,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
