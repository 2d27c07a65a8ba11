//! Binary entry point - wires configuration, database, ledger, and bot.

use debt_buddy::{
    bot, config,
    core::{ledger::DebtLedger, notify, profile},
    errors::{Error, Result},
};
use dotenvy::dotenv;
use std::{env, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load deployment settings (optional config.toml)
    let settings = config::settings::load_default_settings();

    // 4. Initialize database and schema
    let database = config::database::create_connection().await?;
    config::database::create_tables(&database).await?;
    info!("Database initialized successfully.");

    // 5. Promote configured admins
    let admin_ids = config::users::admin_user_ids();
    let promoted = profile::promote_admins(&database, &admin_ids).await?;
    info!("Ensured {promoted} admin profile(s) from ADMIN_USER_IDS.");

    // 6. Build the ledger and prime its mirror
    let (notify_sender, notify_receiver) = notify::channel();
    let ledger = Arc::new(DebtLedger::new(database.clone(), notify_sender));
    ledger.refresh().await?;
    info!(
        "Debt ledger primed with {} record(s).",
        ledger.records().await.len()
    );

    // 7. Run the bot. DISCORD_BOT_TOKEN is loaded directly before use.
    let token = env::var("DISCORD_BOT_TOKEN").map_err(Error::EnvVar)?;
    bot::run_bot(token, database, ledger, notify_receiver, settings).await
}
