use std::sync::LazyLock;

use regex::Regex;

// Local part and domain shape. Leading dots and ".." runs are rejected
// separately because the regex crate has no lookahead.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A single predicate over a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be empty
    Required,
    /// At least this many characters
    MinChars(usize),
    /// At most this many characters
    MaxChars(usize),
    /// Well-formed email address
    Email,
    /// At least one digit; every non-digit character is ignored
    DigitsOnly,
}

impl Rule {
    /// True when `value` satisfies the rule
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::MinChars(min) => value.chars().count() >= *min,
            Self::MaxChars(max) => value.chars().count() <= *max,
            Self::Email => is_email(value),
            Self::DigitsOnly => {
                let digits: String = value.chars().filter(char::is_ascii_digit).collect();
                !digits.is_empty()
            }
        }
    }
}

/// A rule paired with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: String,
}

impl FieldRule {
    pub fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}
