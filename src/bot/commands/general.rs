//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require database operations
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    ///
    /// This is a simple health check command that doesn't require any database operations.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    ///
    /// This command provides users with information about all available bot commands
    /// and their usage, helping them understand the bot's capabilities.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**DebtBuddy Help**\n\
        Here is a summary of all available commands for DebtBuddy.\n\n\
        **Viewing Commands**\n\
        • `/debts` - Lists all tracked debts with their payment status.\n\
        • `/report` - Shows total, unpaid, and repaid amounts.\n\
        • `/refresh_debts` - Resyncs the list from the store.\n\n\
        **Admin Commands**\n\
        • `/add_debt <debtor> <amount> [description]` - Starts tracking a debt.\n\
        • `/update_debt <debtor> [new_debtor] [amount] [description]` - Edits a debt.\n\
        • `/toggle_paid <debtor>` - Flips a debt between paid and unpaid.\n\
        • `/delete_debt <debtor>` - Stops tracking a debt.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.\n\n\
        Admins are configured via `ADMIN_USER_IDS`; everyone else is read-only.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
