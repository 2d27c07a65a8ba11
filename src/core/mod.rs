//! Core business logic - framework-agnostic debt, ledger, notification, and
//! profile operations. Nothing in this module knows about Discord; the bot
//! layer is a thin surface over these functions.

/// Store-level CRUD against the `debts` table
pub mod debt;
/// The optimistic in-memory mirror of the debt list
pub mod ledger;
/// Notification types emitted by the ledger
pub mod notify;
/// Privilege lookups for command gating
pub mod profile;
