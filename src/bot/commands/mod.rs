//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Debt management commands
pub mod debt;

/// General utility commands
pub mod general;

/// Statistics report command
pub mod report;

// Export commands
pub use debt::*;
pub use general::*;
pub use report::*;
