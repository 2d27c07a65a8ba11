//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod debt;
pub mod profile;

// Re-export specific types to avoid conflicts
pub use debt::{Column as DebtColumn, Entity as Debt, Model as DebtModel};
pub use profile::{Column as ProfileColumn, Entity as Profile, Model as ProfileModel};
