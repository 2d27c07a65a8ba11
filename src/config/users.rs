//! Admin roster configuration from environment variables.
//!
//! The `ADMIN_USER_IDS` variable holds a comma-separated list of Discord user
//! ids that are promoted to admin profiles at startup. The flag only gates
//! the command surface; deployments must mirror it in the store's own access
//! rules.

/// Parses `ADMIN_USER_IDS` into a list of Discord user ids.
///
/// An unset variable yields an empty list, leaving every user read-only
/// until promoted directly in the `profiles` table.
#[must_use]
pub fn admin_user_ids() -> Vec<String> {
    std::env::var("ADMIN_USER_IDS")
        .map(|raw| parse_admin_ids(&raw))
        .unwrap_or_default()
}

/// Splits a comma-separated id list, trimming whitespace and dropping blanks.
#[must_use]
pub fn parse_admin_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_admin_ids_splits_and_trims() {
        let ids = parse_admin_ids("111, 222 ,333");
        assert_eq!(ids, vec!["111", "222", "333"]);
    }

    #[test]
    fn test_parse_admin_ids_drops_blanks() {
        let ids = parse_admin_ids(" , 111,, ");
        assert_eq!(ids, vec!["111"]);
    }

    #[test]
    fn test_parse_admin_ids_empty_input() {
        assert!(parse_admin_ids("").is_empty());
    }
}
