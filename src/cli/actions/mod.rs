mod run;

use crate::tls::TlsConfig;
use dsn::DSN;

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Probe { dsn: DSN, tls: TlsConfig },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the connection handle cannot be built. A failed
    /// probe is reported, not returned.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
