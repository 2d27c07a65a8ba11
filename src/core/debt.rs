//! Debt store operations - CRUD against the `debts` table.
//!
//! Provides the async store calls the ledger builds on: listing newest-first,
//! inserting with a store-assigned UUID, and updates/deletes scoped by id.
//! All functions are async and return Result types for error handling.

use crate::{
    entities::{Debt, debt},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, Set, prelude::*};
use uuid::Uuid;

/// Editable fields of a debt record, submitted on create and update.
#[derive(Debug, Clone)]
pub struct DebtInput {
    /// Name of the person who owes the money
    pub debtor_name: String,
    /// Amount owed
    pub amount: f64,
    /// Optional free-form note
    pub description: Option<String>,
}

/// Validates submitted fields before any store call is made.
///
/// The trimmed debtor name must be non-empty and the amount must be a finite
/// number strictly greater than zero. Violations are returned synchronously
/// and never reach the network.
pub fn validate_input(input: &DebtInput) -> Result<()> {
    if input.debtor_name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Debtor name cannot be empty".to_string(),
        });
    }

    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(Error::InvalidAmount {
            amount: input.amount,
        });
    }

    Ok(())
}

/// Retrieves all debt records, newest first.
///
/// This is the canonical list order; the ledger mirrors it verbatim so the
/// view layer never has to sort.
pub async fn list_debts(db: &DatabaseConnection) -> Result<Vec<debt::Model>> {
    Debt::find()
        .order_by_desc(debt::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific debt record by its id, returning None if not found.
pub async fn get_debt_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<debt::Model>> {
    Debt::find_by_id(id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts a new debt record, assigning its durable UUID and timestamps.
///
/// The returned row is the authoritative record as persisted by the store;
/// `is_paid` always starts false and both timestamps are set to now.
pub async fn insert_debt(db: &DatabaseConnection, input: DebtInput) -> Result<debt::Model> {
    validate_input(&input)?;

    let now = Utc::now();
    let model = debt::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        debtor_name: Set(input.debtor_name.trim().to_string()),
        amount: Set(input.amount),
        description: Set(input.description),
        is_paid: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Rewrites the editable fields of the record with the given id.
///
/// The update is a single scoped `UPDATE` statement; the row is not fetched
/// first. Returns `DebtNotFound` when no row matched the id.
pub async fn update_debt(
    db: &DatabaseConnection,
    id: &str,
    input: DebtInput,
    updated_at: DateTime<Utc>,
) -> Result<()> {
    validate_input(&input)?;

    let result = Debt::update_many()
        .col_expr(
            debt::Column::DebtorName,
            Expr::value(input.debtor_name.trim().to_string()),
        )
        .col_expr(debt::Column::Amount, Expr::value(input.amount))
        .col_expr(debt::Column::Description, Expr::value(input.description))
        .col_expr(debt::Column::UpdatedAt, Expr::value(updated_at))
        .filter(debt::Column::Id.eq(id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::DebtNotFound { id: id.to_string() });
    }

    Ok(())
}

/// Sets the paid flag on the record with the given id.
///
/// Returns `DebtNotFound` when no row matched the id.
pub async fn set_paid(
    db: &DatabaseConnection,
    id: &str,
    is_paid: bool,
    updated_at: DateTime<Utc>,
) -> Result<()> {
    let result = Debt::update_many()
        .col_expr(debt::Column::IsPaid, Expr::value(is_paid))
        .col_expr(debt::Column::UpdatedAt, Expr::value(updated_at))
        .filter(debt::Column::Id.eq(id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::DebtNotFound { id: id.to_string() });
    }

    Ok(())
}

/// Deletes the record with the given id.
///
/// Returns `DebtNotFound` when no row matched the id.
pub async fn delete_debt(db: &DatabaseConnection, id: &str) -> Result<()> {
    let result = Debt::delete_many()
        .filter(debt::Column::Id.eq(id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::DebtNotFound { id: id.to_string() });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use chrono::Duration;

    #[test]
    fn test_validate_input_rejects_empty_name() {
        let result = validate_input(&sample_input("", 100.0));
        assert!(matches!(result, Err(Error::Validation { .. })));

        let result = validate_input(&sample_input("   ", 100.0));
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_validate_input_rejects_bad_amounts() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = validate_input(&sample_input("An", amount));
            assert!(matches!(result, Err(Error::InvalidAmount { .. })));
        }
    }

    #[test]
    fn test_validate_input_accepts_valid_fields() {
        assert!(validate_input(&sample_input("An", 500_000.0)).is_ok());
    }

    #[tokio::test]
    async fn test_insert_debt_assigns_identity_and_defaults() -> Result<()> {
        let db = setup_test_db().await?;

        let created = insert_debt(
            &db,
            DebtInput {
                debtor_name: "  An  ".to_string(),
                amount: 500_000.0,
                description: Some("lunch".to_string()),
            },
        )
        .await?;

        assert!(uuid::Uuid::parse_str(&created.id).is_ok());
        assert_eq!(created.debtor_name, "An");
        assert_eq!(created.amount, 500_000.0);
        assert_eq!(created.description, Some("lunch".to_string()));
        assert!(!created.is_paid);
        assert_eq!(created.created_at, created.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_debt_rejects_invalid_input() -> Result<()> {
        let db = setup_test_db().await?;

        let result = insert_debt(&db, sample_input("An", -5.0)).await;
        assert!(matches!(result, Err(Error::InvalidAmount { amount }) if amount == -5.0));
        assert!(list_debts(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_list_debts_orders_newest_first() -> Result<()> {
        let db = setup_test_db().await?;
        let base = Utc::now();

        let older = create_debt_at(&db, "An", 100.0, base - Duration::minutes(10)).await?;
        let newer = create_debt_at(&db, "Binh", 300.0, base).await?;

        let listed = list_debts(&db).await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[1].id, older.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_debt_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_debt(&db, "An", 100.0).await?;

        let found = get_debt_by_id(&db, &created.id).await?;
        assert_eq!(found, Some(created));

        let missing = get_debt_by_id(&db, "no-such-id").await?;
        assert!(missing.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_debt_rewrites_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_debt(&db, "An", 100.0).await?;

        let later = created.created_at + Duration::seconds(5);
        update_debt(
            &db,
            &created.id,
            DebtInput {
                debtor_name: "Binh".to_string(),
                amount: 250.0,
                description: None,
            },
            later,
        )
        .await?;

        let stored = get_debt_by_id(&db, &created.id).await?.unwrap();
        assert_eq!(stored.debtor_name, "Binh");
        assert_eq!(stored.amount, 250.0);
        assert_eq!(stored.description, None);
        assert_eq!(stored.created_at, created.created_at);
        assert!(stored.updated_at >= stored.created_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_debt_unknown_id() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_debt(&db, "no-such-id", sample_input("An", 10.0), Utc::now()).await;
        assert!(matches!(result, Err(Error::DebtNotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_set_paid_flips_single_record() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_test_debt(&db, "An", 100.0).await?;
        let second = create_test_debt(&db, "Binh", 300.0).await?;

        set_paid(&db, &second.id, true, Utc::now()).await?;

        let stored_first = get_debt_by_id(&db, &first.id).await?.unwrap();
        let stored_second = get_debt_by_id(&db, &second.id).await?.unwrap();
        assert!(!stored_first.is_paid);
        assert!(stored_second.is_paid);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_debt_removes_exactly_one() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_test_debt(&db, "An", 100.0).await?;
        let second = create_test_debt(&db, "Binh", 300.0).await?;

        delete_debt(&db, &first.id).await?;

        let remaining = list_debts(&db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);

        let result = delete_debt(&db, &first.id).await;
        assert!(matches!(result, Err(Error::DebtNotFound { .. })));

        Ok(())
    }
}
