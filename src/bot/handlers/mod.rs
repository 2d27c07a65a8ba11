//! Discord interaction handlers.

/// Autocomplete suggestions for command parameters
pub mod autocomplete;
