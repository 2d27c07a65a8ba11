//! Shared test utilities for `DebtBuddy`.
//!
//! This module provides common helper functions for setting up test
//! databases, seeding debt records, and constructing ledgers wired to an
//! observable notification channel.

use crate::{
    core::{
        debt::{self, DebtInput},
        ledger::DebtLedger,
        notify::{self, Notification, NotificationReceiver},
    },
    entities,
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a valid debt input with no description.
#[must_use]
pub fn sample_input(debtor: &str, amount: f64) -> DebtInput {
    DebtInput {
        debtor_name: debtor.to_string(),
        amount,
        description: None,
    }
}

/// Creates a test debt through the store with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `debtor` - Debtor name
/// * `amount` - Amount owed
pub async fn create_test_debt(
    db: &DatabaseConnection,
    debtor: &str,
    amount: f64,
) -> Result<entities::debt::Model> {
    debt::insert_debt(db, sample_input(debtor, amount)).await
}

/// Inserts a debt with an explicit creation time, for ordering tests.
pub async fn create_debt_at(
    db: &DatabaseConnection,
    debtor: &str,
    amount: f64,
    created_at: DateTime<Utc>,
) -> Result<entities::debt::Model> {
    let model = entities::debt::ActiveModel {
        id: Set(uuid::Uuid::new_v4().to_string()),
        debtor_name: Set(debtor.to_string()),
        amount: Set(amount),
        description: Set(None),
        is_paid: Set(false),
        created_at: Set(created_at),
        updated_at: Set(created_at),
    };

    model.insert(db).await.map_err(Into::into)
}

/// Sets up a ledger over a fresh in-memory database.
/// Returns the ledger and the receiving half of its notification channel.
pub async fn setup_ledger() -> Result<(DebtLedger, NotificationReceiver)> {
    let db = setup_test_db().await?;
    let (sender, receiver) = notify::channel();
    Ok((DebtLedger::new(db, sender), receiver))
}

/// Drains every notification already delivered to the receiver.
pub fn drain(receiver: &mut NotificationReceiver) -> Vec<Notification> {
    let mut notes = Vec::new();
    while let Ok(note) = receiver.try_recv() {
        notes.push(note);
    }
    notes
}
