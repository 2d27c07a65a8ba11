//! Unified error types and result handling for `DebtBuddy`.
//!
//! Validation failures are raised before any store call is made; store
//! failures surface as [`Error::Database`] and are handled at each ledger
//! operation boundary. [`Error::NotAuthorized`] is only ever raised by the
//! command layer - the ledger performs no privilege checks of its own.

use thiserror::Error;

/// All errors that can occur within `DebtBuddy`.
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed local validation and never reached the store
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the violated constraint
        message: String,
    },

    /// Amount is non-positive or not a finite number
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// No debt record exists with the given id
    #[error("No debt record with id '{id}'")]
    DebtNotFound {
        /// The id that failed to resolve
        id: String,
    },

    /// A mutating command was invoked by a user without the admin flag
    #[error("User {user_id} is not allowed to modify debts")]
    NotAuthorized {
        /// Discord user id of the rejected caller
        user_id: String,
    },

    /// Configuration problem (unreadable file, invalid TOML)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Store or transport failure reported by `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// String formatting failed while building a reply
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Discord framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
