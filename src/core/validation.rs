//! Input validation for `/usercreate`.
//!
//! Every rule is checked and every violation is reported, in field declaration order.
//! A [`ValidatedAccount`] can only be obtained from [`validate`], so holding one means
//! the password confirmation matched.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum username length, in characters.
pub const USERNAME_MIN: usize = 3;
/// Maximum username length, in characters.
pub const USERNAME_MAX: usize = 191;
/// Minimum password length, in characters.
pub const PASSWORD_MIN: usize = 8;

// Local part may not start with a dot or contain "..", both checked separately
#[allow(clippy::unwrap_used)] // Literal pattern, covered by tests
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").unwrap()
});

/// Option values exactly as received from the slash command.
#[derive(Clone, Default)]
pub struct RawAccountInput {
    /// `username` option
    pub username: String,
    /// `email` option
    pub email: String,
    /// `password` option
    pub password: String,
    /// `confirm_password` option
    pub confirm_password: String,
    /// Optional `first` option
    pub first: Option<String>,
    /// Optional `last` option
    pub last: Option<String>,
}

impl fmt::Debug for RawAccountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawAccountInput")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first", &self.first)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Option name the violation belongs to
    pub field: &'static str,
    /// Human-readable explanation
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input that passed every rule.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedAccount {
    username: String,
    email: String,
    password: String,
    first: Option<String>,
    last: Option<String>,
}

impl ValidatedAccount {
    /// Panel username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Login email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password, already confirmed.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// First name if one was given; defaults are applied later, when the request is built.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    /// Last name if one was given.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl fmt::Debug for ValidatedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedAccount")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first", &self.first)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

fn min_length_message(min: usize) -> String {
    format!("String must contain at least {min} character(s)")
}

fn max_length_message(max: usize) -> String {
    format!("String must contain at most {max} character(s)")
}

/// Checks an email address against the usual `local@domain.tld` syntax.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

/// Validates raw command input.
///
/// # Errors
/// Returns every violation found, ordered username, email, password, confirm_password.
pub fn validate(input: RawAccountInput) -> Result<ValidatedAccount, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let username_len = input.username.chars().count();
    if username_len < USERNAME_MIN {
        violations.push(FieldViolation::new("username", min_length_message(USERNAME_MIN)));
    } else if username_len > USERNAME_MAX {
        violations.push(FieldViolation::new("username", max_length_message(USERNAME_MAX)));
    }

    if !is_valid_email(&input.email) {
        violations.push(FieldViolation::new("email", "Invalid email"));
    }

    if input.password.chars().count() < PASSWORD_MIN {
        violations.push(FieldViolation::new("password", min_length_message(PASSWORD_MIN)));
    }

    if input.confirm_password.chars().count() < PASSWORD_MIN {
        violations.push(FieldViolation::new(
            "confirm_password",
            min_length_message(PASSWORD_MIN),
        ));
    }
    if input.password != input.confirm_password {
        violations.push(FieldViolation::new(
            "confirm_password",
            "Passwords do not match.",
        ));
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(ValidatedAccount {
        username: input.username,
        email: input.email,
        password: input.password,
        first: input.first.filter(|name| !name.is_empty()),
        last: input.last.filter(|name| !name.is_empty()),
    })
}
