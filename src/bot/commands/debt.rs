//! Debt Discord commands - listing, creation, editing, and settlement.
//!
//! This module contains commands that drive the debt ledger. Every mutating
//! command is gated on the caller's admin profile before the ledger is
//! touched; the gate lives here because the ledger itself performs no
//! privilege checks.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{debt::DebtInput, profile},
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Parses the user-supplied amount string before any store call is made.
    ///
    /// Discord delivers the amount as free text; rejecting garbage here keeps
    /// the ledger's no-network-on-invalid-input guarantee intact.
    pub fn parse_amount(raw: &str) -> Result<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation {
                message: "Amount cannot be empty".to_string(),
            });
        }

        trimmed.parse::<f64>().map_err(|_| Error::Validation {
            message: format!("'{trimmed}' is not a number"),
        })
    }

    /// Checks the caller's admin flag, replying with a refusal when absent.
    ///
    /// Returns false when the command should stop. The flag only gates this
    /// surface; deployments must restrict writes at the store as well.
    async fn ensure_admin(ctx: &poise::Context<'_, BotData, Error>) -> Result<bool> {
        let user_id = ctx.author().id.to_string();
        match profile::require_admin(&ctx.data().database, &user_id).await {
            Ok(()) => Ok(true),
            Err(Error::NotAuthorized { .. }) => {
                ctx.say("🔒 Only admins can modify debts. Ask an existing admin to add you.")
                    .await?;
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Lists all tracked debts with their payment status.
    ///
    /// This command reads the ledger's in-memory mirror and shows every debt
    /// newest-first with a paid/unpaid marker. Available to all users.
    #[poise::command(slash_command, prefix_command)]
    pub async fn debts(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let records = ctx.data().ledger.records().await;

        if records.is_empty() {
            ctx.say("📂 No debts tracked yet. An admin can add one with `/add_debt`!")
                .await?;
            return Ok(());
        }

        let currency = ctx.data().settings.currency();
        let mut response = String::from("📒 **Tracked Debts**\n\n");

        for record in records {
            let marker = if record.is_paid { "✅" } else { "🔴" };
            write!(
                &mut response,
                "{marker} **{}** - {currency}{:.2}",
                record.debtor_name, record.amount
            )?;
            if let Some(ref description) = record.description {
                write!(&mut response, " ({description})")?;
            }
            writeln!(
                &mut response,
                " - since {}",
                record.created_at.format("%Y-%m-%d")
            )?;
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Forces a full resync of the debt list from the store.
    ///
    /// Useful when another deployment has edited the table; the ledger has no
    /// change detection of its own. Available to all users.
    #[poise::command(slash_command, prefix_command)]
    pub async fn refresh_debts(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.data().ledger.refresh().await?;

        let count = ctx.data().ledger.records().await.len();
        ctx.say(format!(
            "🔄 Synced {count} debt{} from the store.",
            if count == 1 { "" } else { "s" }
        ))
        .await?;
        Ok(())
    }

    /// Starts tracking a new debt.
    ///
    /// The debt appears in the list immediately; if the store rejects it the
    /// entry is withdrawn and the failure reported.
    #[poise::command(slash_command, prefix_command)]
    pub async fn add_debt(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Who owes the money"] debtor: String,
        #[description = "Amount owed"] amount: String,
        #[description = "What the debt is for (optional)"] description: Option<String>,
    ) -> Result<()> {
        if !ensure_admin(&ctx).await? {
            return Ok(());
        }

        let amount = match parse_amount(&amount) {
            Ok(value) => value,
            Err(err) => {
                ctx.say(format!("❌ {err}")).await?;
                return Ok(());
            }
        };

        let created = match ctx
            .data()
            .ledger
            .create(DebtInput {
                debtor_name: debtor,
                amount,
                description,
            })
            .await
        {
            Ok(created) => created,
            Err(err @ (Error::Validation { .. } | Error::InvalidAmount { .. })) => {
                ctx.say(format!("❌ {err}")).await?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let currency = ctx.data().settings.currency();
        ctx.say(format!(
            "✅ Now tracking **{}** owing {currency}{:.2}.",
            created.debtor_name, created.amount
        ))
        .await?;
        Ok(())
    }

    /// Edits an existing debt's debtor, amount, or description.
    ///
    /// The newest debt matching the given debtor name is edited. Fields not
    /// provided keep their current values.
    #[poise::command(slash_command, prefix_command)]
    pub async fn update_debt(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Current debtor name"]
        #[autocomplete = "autocomplete::autocomplete_debtor_name"]
        debtor: String,
        #[description = "New debtor name (optional)"] new_debtor: Option<String>,
        #[description = "New amount (optional)"] amount: Option<String>,
        #[description = "New description (optional)"] description: Option<String>,
    ) -> Result<()> {
        if !ensure_admin(&ctx).await? {
            return Ok(());
        }

        if new_debtor.is_none() && amount.is_none() && description.is_none() {
            ctx.say(
                "❌ Please specify at least one field to update (new_debtor, amount, or description).",
            )
            .await?;
            return Ok(());
        }

        let Some(existing) = ctx.data().ledger.find_by_debtor(&debtor).await else {
            ctx.say(format!("❌ No tracked debt for '{debtor}'. Use `/debts` to see the list."))
                .await?;
            return Ok(());
        };

        let new_amount = match amount {
            Some(ref raw) => match parse_amount(raw) {
                Ok(value) => value,
                Err(err) => {
                    ctx.say(format!("❌ {err}")).await?;
                    return Ok(());
                }
            },
            None => existing.amount,
        };

        let input = DebtInput {
            debtor_name: new_debtor
                .clone()
                .unwrap_or_else(|| existing.debtor_name.clone()),
            amount: new_amount,
            description: description.clone().or_else(|| existing.description.clone()),
        };

        match ctx.data().ledger.update(&existing.id, input).await {
            Ok(()) => {}
            Err(err @ (Error::Validation { .. } | Error::InvalidAmount { .. })) => {
                ctx.say(format!("❌ {err}")).await?;
                return Ok(());
            }
            Err(err) => return Err(err),
        }

        let currency = ctx.data().settings.currency();
        let mut changes = Vec::new();
        if let Some(ref name) = new_debtor {
            changes.push(format!("debtor to '{name}'"));
        }
        if amount.is_some() {
            changes.push(format!("amount to {currency}{new_amount:.2}"));
        }
        if let Some(ref text) = description {
            changes.push(format!("description to '{text}'"));
        }

        ctx.say(format!(
            "✅ Updated debt for **{}**: {}",
            existing.debtor_name,
            changes.join(", ")
        ))
        .await?;
        Ok(())
    }

    /// Toggles the paid status of a debt.
    ///
    /// The newest debt matching the given debtor name is flipped between paid
    /// and unpaid.
    #[poise::command(slash_command, prefix_command)]
    pub async fn toggle_paid(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Debtor whose debt to mark"]
        #[autocomplete = "autocomplete::autocomplete_debtor_name"]
        debtor: String,
    ) -> Result<()> {
        if !ensure_admin(&ctx).await? {
            return Ok(());
        }

        let Some(existing) = ctx.data().ledger.find_by_debtor(&debtor).await else {
            ctx.say(format!("❌ No tracked debt for '{debtor}'.")).await?;
            return Ok(());
        };

        ctx.data().ledger.toggle_paid(&existing.id).await?;

        let reply = if existing.is_paid {
            format!("↩️ Marked the debt of **{}** as unpaid.", existing.debtor_name)
        } else {
            format!("✅ Marked the debt of **{}** as paid.", existing.debtor_name)
        };
        ctx.say(reply).await?;
        Ok(())
    }

    /// Stops tracking a debt entirely.
    ///
    /// The newest debt matching the given debtor name is deleted. Historical
    /// data is not preserved - use `/toggle_paid` to settle without deleting.
    #[poise::command(slash_command, prefix_command)]
    pub async fn delete_debt(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Debtor whose debt to delete"]
        #[autocomplete = "autocomplete::autocomplete_debtor_name"]
        debtor: String,
    ) -> Result<()> {
        if !ensure_admin(&ctx).await? {
            return Ok(());
        }

        let Some(existing) = ctx.data().ledger.find_by_debtor(&debtor).await else {
            ctx.say(format!("❌ No tracked debt for '{debtor}'.")).await?;
            return Ok(());
        };

        ctx.data().ledger.remove(&existing.id).await?;

        ctx.say(format!(
            "🗑️ Deleted the debt of **{}**.",
            existing.debtor_name
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::parse_amount;
    use crate::errors::Error;

    #[test]
    fn test_parse_amount_accepts_numbers() {
        assert_eq!(parse_amount("500000").unwrap(), 500_000.0);
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
        // Negative values parse here; the ledger's validation rejects them.
        assert_eq!(parse_amount("-5").unwrap(), -5.0);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("abc"),
            Err(Error::Validation { .. })
        ));
        assert!(matches!(parse_amount(""), Err(Error::Validation { .. })));
        assert!(matches!(parse_amount("  "), Err(Error::Validation { .. })));
    }
}
