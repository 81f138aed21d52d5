use crate::core::validation::FieldViolation;
use thiserror::Error;

/// Every failure the bot and the registrar can run into.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration present but unusable
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A required environment variable is unset or blank
    #[error("Missing required environment variable: {name}")]
    MissingEnv { name: &'static str },

    /// `/usercreate` input broke one or more rules, in field order
    #[error("Validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// The panel could not be reached or did not answer in time
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The panel answered with a non-success status
    #[error("Request failed with status code {status}")]
    RemoteApi { status: u16, body: String },

    /// Discord gateway or HTTP failure
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
