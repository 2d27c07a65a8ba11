//! Debt ledger - the in-memory mirror of the `debts` table.
//!
//! The ledger is the sole owner of the debt list shown to users; the bot
//! layer only reads snapshots and invokes operations. Every mutating
//! operation applies its local change first and issues the store call
//! second, so the visible state updates immediately regardless of network
//! latency. A failed store call is compensated: a create purges its
//! placeholder, while update/toggle/remove fall back to a full refetch.
//! Operations are not serialized against each other - racing mutations
//! follow last-write-wins until a refetch reconciles with the store.

use crate::{
    core::{
        debt::{self, DebtInput},
        notify::{Notification, NotificationSender},
    },
    entities::DebtModel,
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{error, warn};
use uuid::Uuid;

/// Prefix of the transient ids held by records awaiting store identity.
const PLACEHOLDER_PREFIX: &str = "temp-";

/// Summary statistics derived from the current debt list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebtStats {
    /// Sum of all amounts
    pub total: f64,
    /// Sum of amounts still owed
    pub unpaid: f64,
    /// Sum of repaid amounts, derived as `total - unpaid`
    pub paid: f64,
    /// Number of tracked debts
    pub total_count: usize,
    /// Number of open debts
    pub unpaid_count: usize,
    /// Number of settled debts
    pub paid_count: usize,
}

/// The in-memory mirror of the `debts` table with optimistic mutations.
///
/// The mirror is ordered newest-first, matching the store's list order. The
/// internal lock is only held across synchronous mutations, never across a
/// store call.
pub struct DebtLedger {
    db: DatabaseConnection,
    notifications: NotificationSender,
    records: RwLock<Vec<DebtModel>>,
    loading: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl DebtLedger {
    /// Creates an empty ledger over the given connection.
    ///
    /// Call [`DebtLedger::refresh`] to populate the mirror.
    #[must_use]
    pub fn new(db: DatabaseConnection, notifications: NotificationSender) -> Self {
        Self {
            db,
            notifications,
            records: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    /// Replaces the mirror wholesale with the current store contents.
    ///
    /// On failure the mirror is left untouched, the error message is kept in
    /// `last_error`, a failure notification is emitted, and the error is
    /// returned.
    pub async fn refresh(&self) -> Result<()> {
        self.loading.store(true, Ordering::SeqCst);
        let outcome = debt::list_debts(&self.db).await;
        self.loading.store(false, Ordering::SeqCst);

        match outcome {
            Ok(rows) => {
                *self.records.write().await = rows;
                *self.last_error.write().await = None;
                Ok(())
            }
            Err(err) => {
                warn!("Failed to refresh debt list: {err}");
                *self.last_error.write().await = Some(err.to_string());
                self.notify(Notification::destructive(
                    "Error",
                    "Could not load the debt list",
                ));
                Err(err)
            }
        }
    }

    /// Creates a debt record with an optimistic placeholder.
    ///
    /// The placeholder (a `temp-` prefixed id, `is_paid` false, timestamps of
    /// now) is prepended to the mirror before the insert is issued. On
    /// success it is replaced in place by the authoritative row; on failure
    /// it is purged and the error is returned so the caller can keep its
    /// input around for a retry. The mirror never permanently contains a
    /// placeholder.
    pub async fn create(&self, input: DebtInput) -> Result<DebtModel> {
        debt::validate_input(&input)?;

        let now = Utc::now();
        let placeholder_id = format!("{PLACEHOLDER_PREFIX}{}", Uuid::new_v4());
        let placeholder = DebtModel {
            id: placeholder_id.clone(),
            debtor_name: input.debtor_name.trim().to_string(),
            amount: input.amount,
            description: input.description.clone(),
            is_paid: false,
            created_at: now,
            updated_at: now,
        };

        self.records.write().await.insert(0, placeholder);

        match debt::insert_debt(&self.db, input).await {
            Ok(created) => {
                {
                    let mut records = self.records.write().await;
                    // The placeholder is gone if a refresh replaced the
                    // mirror mid-flight; the refetched list already holds
                    // store state.
                    if let Some(entry) = records.iter_mut().find(|r| r.id == placeholder_id) {
                        *entry = created.clone();
                    }
                }
                self.notify(Notification::success(
                    "Debt added",
                    format!("Now tracking {}", created.debtor_name),
                ));
                Ok(created)
            }
            Err(err) => {
                self.records
                    .write()
                    .await
                    .retain(|r| r.id != placeholder_id);
                error!("Failed to add debt: {err}");
                self.notify(Notification::destructive(
                    "Error",
                    "Could not add the debt",
                ));
                Err(err)
            }
        }
    }

    /// Rewrites a record's editable fields optimistically, then persists.
    ///
    /// On success the optimistic state stands as final. On store failure the
    /// edit is discarded by a full refetch and the original error is
    /// returned; the refetch's own error, if any, is dropped.
    pub async fn update(&self, id: &str, input: DebtInput) -> Result<()> {
        debt::validate_input(&input)?;

        let now = Utc::now();
        let debtor_name = {
            let mut records = self.records.write().await;
            let Some(entry) = records.iter_mut().find(|r| r.id == id) else {
                return Err(Error::DebtNotFound { id: id.to_string() });
            };
            entry.debtor_name = input.debtor_name.trim().to_string();
            entry.amount = input.amount;
            entry.description = input.description.clone();
            entry.updated_at = now;
            entry.debtor_name.clone()
        };

        match debt::update_debt(&self.db, id, input, now).await {
            Ok(()) => {
                self.notify(Notification::success(
                    "Debt updated",
                    format!("Saved changes for {debtor_name}"),
                ));
                Ok(())
            }
            Err(err) => {
                let _ = self.refresh().await;
                error!("Failed to update debt {id}: {err}");
                self.notify(Notification::destructive(
                    "Error",
                    "Could not update the debt",
                ));
                Err(err)
            }
        }
    }

    /// Flips the paid flag on a record optimistically, then persists.
    ///
    /// The success notification reflects the new state and is composed from
    /// the record as it existed immediately before the toggle. On store
    /// failure the flip is discarded by a full refetch.
    pub async fn toggle_paid(&self, id: &str) -> Result<()> {
        let now = Utc::now();
        let previous = {
            let mut records = self.records.write().await;
            let Some(entry) = records.iter_mut().find(|r| r.id == id) else {
                return Err(Error::DebtNotFound { id: id.to_string() });
            };
            let previous = entry.clone();
            entry.is_paid = !entry.is_paid;
            entry.updated_at = now;
            previous
        };
        let is_now_paid = !previous.is_paid;

        match debt::set_paid(&self.db, id, is_now_paid, now).await {
            Ok(()) => {
                let status = if is_now_paid { "paid" } else { "unpaid" };
                self.notify(Notification::success(
                    "Debt status updated",
                    format!("Marked {} as {status}", previous.debtor_name),
                ));
                Ok(())
            }
            Err(err) => {
                let _ = self.refresh().await;
                error!("Failed to toggle paid status for {id}: {err}");
                self.notify(Notification::destructive(
                    "Error",
                    "Could not update the paid status",
                ));
                Err(err)
            }
        }
    }

    /// Removes a record optimistically, then issues the store delete.
    ///
    /// On store failure the record is restored by a full refetch.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let removed = {
            let mut records = self.records.write().await;
            let Some(index) = records.iter().position(|r| r.id == id) else {
                return Err(Error::DebtNotFound { id: id.to_string() });
            };
            records.remove(index)
        };

        match debt::delete_debt(&self.db, id).await {
            Ok(()) => {
                self.notify(Notification::success(
                    "Debt deleted",
                    format!("No longer tracking {}", removed.debtor_name),
                ));
                Ok(())
            }
            Err(err) => {
                let _ = self.refresh().await;
                error!("Failed to delete debt {id}: {err}");
                self.notify(Notification::destructive(
                    "Error",
                    "Could not delete the debt",
                ));
                Err(err)
            }
        }
    }

    /// Derives summary statistics from the current mirror.
    ///
    /// Computed fresh on every call; a pure function of the current list.
    /// `paid` is `total - unpaid`, keeping the three sums consistent.
    pub async fn stats(&self) -> DebtStats {
        let records = self.records.read().await;
        let total: f64 = records.iter().map(|r| r.amount).sum();
        let unpaid: f64 = records
            .iter()
            .filter(|r| !r.is_paid)
            .map(|r| r.amount)
            .sum();
        let unpaid_count = records.iter().filter(|r| !r.is_paid).count();

        DebtStats {
            total,
            unpaid,
            paid: total - unpaid,
            total_count: records.len(),
            unpaid_count,
            paid_count: records.len() - unpaid_count,
        }
    }

    /// Cloned snapshot of the mirror for display, newest first.
    pub async fn records(&self) -> Vec<DebtModel> {
        self.records.read().await.clone()
    }

    /// Finds the newest record for a debtor, matching case-insensitively.
    pub async fn find_by_debtor(&self, debtor_name: &str) -> Option<DebtModel> {
        let needle = debtor_name.trim().to_lowercase();
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.debtor_name.to_lowercase() == needle)
            .cloned()
    }

    /// Whether a refresh is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Message from the most recent failed refresh, if any.
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    fn notify(&self, notification: Notification) {
        // The receiver may already be gone; notifications are best-effort.
        let _ = self.notifications.send(notification);
    }
}
