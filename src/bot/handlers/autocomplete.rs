//! Autocomplete handlers for Discord slash command parameters.
//!
//! This module provides autocomplete functionality for the debtor name
//! parameter, improving the user experience by suggesting tracked debtors as
//! the user types. Suggestions are served from the ledger's in-memory mirror,
//! so no store call is made per keystroke.

use crate::{bot::BotData, errors::Error};

/// Provides autocomplete suggestions for debtor names.
///
/// This function filters the ledger's current records for debtor names that
/// match the user's partial input (case-insensitive) and returns up to 25
/// unique names.
///
/// # Arguments
/// * `ctx` - The poise context containing the ledger
/// * `partial` - The partial string the user has typed so far
///
/// # Returns
/// A vector of debtor names that match the partial input
pub async fn autocomplete_debtor_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let records = ctx.data().ledger.records().await;
    let partial_lower = partial.to_lowercase();

    let mut matching: Vec<String> = records
        .into_iter()
        .filter(|record| record.debtor_name.to_lowercase().contains(&partial_lower))
        .map(|record| record.debtor_name)
        .collect();

    // Sort alphabetically for consistent UX, then cap at the Discord limit
    matching.sort();
    matching.dedup();
    matching.truncate(25);
    matching
}
