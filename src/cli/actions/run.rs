use super::Action;
use crate::{connection::Database, probe};
use anyhow::Context;
use tracing::debug;

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<()> {
    match action {
        Action::Probe { dsn, tls } => {
            let database =
                Database::from_dsn(&dsn, &tls).context("Failed to build connection handle")?;

            debug!(
                driver = database.driver(),
                tls_enabled = tls.mode.is_enabled(),
                tls_mode = tls.mode.as_str(),
                "starting probe"
            );

            // outcome is reported by the probe itself
            let _ = probe::run(&database).await;

            Ok(())
        }
    }
}
