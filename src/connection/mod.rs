pub mod mysql;
pub mod postgres;

use crate::{
    probe::{self, ScalarQuery},
    tls::TlsConfig,
};
use anyhow::{Result, bail};
use async_trait::async_trait;
use dsn::DSN;
use sqlx::{mysql::MySqlConnectOptions, postgres::PgConnectOptions};
use tracing::debug;

/// Connection handle built from a DSN
///
/// Holds connect options only; the connection is opened when a query runs
/// and closed right after.
#[derive(Debug, Clone)]
pub enum Database {
    Postgres(PgConnectOptions),
    MySql(MySqlConnectOptions),
}

impl Database {
    /// Build the handle for the DSN driver
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not supported
    pub fn from_dsn(dsn: &DSN, tls: &TlsConfig) -> Result<Self> {
        match dsn.driver.as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres(postgres::connect_options(dsn, tls))),
            "mysql" => Ok(Self::MySql(mysql::connect_options(dsn, tls))),
            other => bail!("unsupported driver: {other}"),
        }
    }

    /// Label used in logs
    #[must_use]
    pub const fn driver(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::MySql(_) => "mysql",
        }
    }
}

#[async_trait]
impl ScalarQuery for Database {
    async fn query_scalar(&self, sql: &str) -> Result<i64, probe::Error> {
        debug!(driver = self.driver(), sql, "connecting");

        let value = match self {
            Self::Postgres(options) => postgres::query_scalar(options, sql).await?,
            Self::MySql(options) => mysql::query_scalar(options, sql).await?,
        };

        Ok(value)
    }
}

/// First successful decode, or the error from the `i64` attempt
fn widen<E>(
    first: Result<i64, E>,
    narrower: impl IntoIterator<Item = Result<i64, E>>,
) -> Result<i64, E> {
    first.or_else(|e| narrower.into_iter().find_map(Result::ok).ok_or(e))
}
