//! Profile entity - Per-user privilege flags keyed by Discord user id.
//!
//! The `is_admin` flag gates every mutating debt command at the call-site.
//! Users without a profile row are read-only viewers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Profile database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// Discord user id this profile belongs to
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    /// Whether the user may create, edit, toggle, or delete debts
    pub is_admin: bool,
    /// When the profile was first created
    pub created_at: DateTimeUtc,
}

/// Profiles reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
