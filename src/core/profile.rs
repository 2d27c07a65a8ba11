//! Profile business logic - privilege lookups backing the command gate.
//!
//! Profiles are keyed by Discord user id and carry the `is_admin` flag that
//! gates every mutating debt command at the call-site. The ledger itself
//! never checks privilege, so deployments must mirror the gate in the
//! store's own access rules.

use crate::{
    entities::{Profile, profile},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Finds a profile by Discord user id.
pub async fn get_profile(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Option<profile::Model>> {
    Profile::find_by_id(user_id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Fetches the profile for a user, creating a non-admin one if absent.
pub async fn ensure_profile(db: &DatabaseConnection, user_id: &str) -> Result<profile::Model> {
    if let Some(existing) = get_profile(db, user_id).await? {
        return Ok(existing);
    }

    let model = profile::ActiveModel {
        user_id: Set(user_id.to_string()),
        is_admin: Set(false),
        created_at: Set(chrono::Utc::now()),
    };

    model.insert(db).await.map_err(Into::into)
}

/// Whether the user may create, edit, toggle, or delete debts.
///
/// Users without a profile row are read-only viewers.
pub async fn is_admin(db: &DatabaseConnection, user_id: &str) -> Result<bool> {
    Ok(get_profile(db, user_id).await?.is_some_and(|p| p.is_admin))
}

/// Returns an error unless the user carries the admin flag.
pub async fn require_admin(db: &DatabaseConnection, user_id: &str) -> Result<()> {
    if is_admin(db, user_id).await? {
        Ok(())
    } else {
        Err(Error::NotAuthorized {
            user_id: user_id.to_string(),
        })
    }
}

/// Sets the admin flag for a user, creating the profile when needed.
pub async fn set_admin(
    db: &DatabaseConnection,
    user_id: &str,
    is_admin: bool,
) -> Result<profile::Model> {
    let existing = ensure_profile(db, user_id).await?;
    let mut active: profile::ActiveModel = existing.into();
    active.is_admin = Set(is_admin);
    active.update(db).await.map_err(Into::into)
}

/// Promotes every listed user id to admin, returning how many were processed.
pub async fn promote_admins(db: &DatabaseConnection, user_ids: &[String]) -> Result<usize> {
    for user_id in user_ids {
        set_admin(db, user_id, true).await?;
    }
    Ok(user_ids.len())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_ensure_profile_defaults_to_viewer() -> Result<()> {
        let db = setup_test_db().await?;

        let created = ensure_profile(&db, "user123").await?;
        assert_eq!(created.user_id, "user123");
        assert!(!created.is_admin);

        // Idempotent: a second call returns the same row.
        let again = ensure_profile(&db, "user123").await?;
        assert_eq!(again, created);

        Ok(())
    }

    #[tokio::test]
    async fn test_is_admin_false_for_unknown_user() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(!is_admin(&db, "nobody").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_admin_promotes_and_demotes() -> Result<()> {
        let db = setup_test_db().await?;

        set_admin(&db, "user123", true).await?;
        assert!(is_admin(&db, "user123").await?);

        set_admin(&db, "user123", false).await?;
        assert!(!is_admin(&db, "user123").await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_require_admin_rejects_viewers() -> Result<()> {
        let db = setup_test_db().await?;
        ensure_profile(&db, "viewer").await?;

        let result = require_admin(&db, "viewer").await;
        assert!(matches!(
            result,
            Err(Error::NotAuthorized { user_id }) if user_id == "viewer"
        ));

        set_admin(&db, "viewer", true).await?;
        require_admin(&db, "viewer").await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_promote_admins_covers_every_listed_id() -> Result<()> {
        let db = setup_test_db().await?;
        let ids = vec!["one".to_string(), "two".to_string()];

        let count = promote_admins(&db, &ids).await?;
        assert_eq!(count, 2);
        assert!(is_admin(&db, "one").await?);
        assert!(is_admin(&db, "two").await?);

        Ok(())
    }
}
