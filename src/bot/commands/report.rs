//! Report command - summary statistics over the tracked debts.
//!
//! This module renders the ledger's derived statistics as a Discord embed.
//! The numbers are computed fresh from the in-memory mirror on every
//! invocation.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Shows a summary report of all tracked debts.
    ///
    /// This command displays the total amount tracked, how much is still
    /// outstanding, and how much has been repaid, together with the matching
    /// record counts. Available to all users.
    #[poise::command(slash_command, prefix_command)]
    pub async fn report(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        use poise::serenity_prelude as serenity;

        let stats = ctx.data().ledger.stats().await;

        if stats.total_count == 0 {
            ctx.say("📊 No debts tracked yet. An admin can add one with `/add_debt`!")
                .await?;
            return Ok(());
        }

        let currency = ctx.data().settings.currency();
        let now = chrono::Local::now();

        let report_embed = serenity::CreateEmbed::default()
            .title("📊 Debt Report")
            .description(format!("As of: {}", now.format("%Y-%m-%d %H:%M")))
            .color(0x0034_98DB) // Blue color
            .fields(vec![
                (
                    "Total",
                    format!("{currency}{:.2} ({} tracked)", stats.total, stats.total_count),
                    true,
                ),
                (
                    "Unpaid",
                    format!("{currency}{:.2} ({} open)", stats.unpaid, stats.unpaid_count),
                    true,
                ),
                (
                    "Paid",
                    format!("{currency}{:.2} ({} settled)", stats.paid, stats.paid_count),
                    true,
                ),
            ])
            .footer(serenity::CreateEmbedFooter::new(format!(
                "DebtBuddy v0.1.0 | {} debt{}",
                stats.total_count,
                if stats.total_count == 1 { "" } else { "s" }
            )));

        ctx.send(poise::CreateReply::default().embed(report_embed))
            .await?;

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
