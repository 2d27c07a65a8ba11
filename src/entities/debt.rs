//! Debt entity - Represents one tracked amount owed by a named debtor.
//!
//! Each debt has a store-assigned UUID, the debtor's name, the amount owed,
//! an optional note, a paid flag, and creation/modification timestamps.
//! Rows are listed newest-first by `created_at`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debts")]
pub struct Model {
    /// Store-assigned UUID. While an insert is in flight the ledger holds a
    /// `temp-` prefixed placeholder here; a placeholder is never persisted.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Name of the person who owes the money
    pub debtor_name: String,
    /// Amount owed, strictly positive
    pub amount: f64,
    /// Optional free-form note about the debt
    pub description: Option<String>,
    /// Whether the debt has been repaid
    pub is_paid: bool,
    /// When the record was created - immutable after creation
    pub created_at: DateTimeUtc,
    /// Refreshed on every mutation
    pub updated_at: DateTimeUtc,
}

/// Debts reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
