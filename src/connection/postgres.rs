use crate::tls::{TlsConfig, TlsMode};
use dsn::DSN;
use sqlx::{
    ConnectOptions, Connection, Row,
    postgres::{PgConnectOptions, PgSslMode},
};
use tracing::debug;

/// Build `PostgreSQL` connect options from the DSN and TLS settings
#[must_use]
pub fn connect_options(dsn: &DSN, tls: &TlsConfig) -> PgConnectOptions {
    let mut options = PgConnectOptions::new()
        .username(dsn.username.clone().unwrap_or_default().as_ref())
        .password(dsn.password.clone().unwrap_or_default().as_str())
        .database(dsn.database.clone().unwrap_or_default().as_ref());

    if let Some(host) = &dsn.host {
        options = options.host(host.as_str()).port(dsn.port.unwrap_or(5432));
    } else if let Some(socket) = &dsn.socket {
        options = options.socket(socket.as_str());
    }

    options = match tls.mode {
        TlsMode::Disable => options.ssl_mode(PgSslMode::Disable),
        TlsMode::Require => options.ssl_mode(PgSslMode::Require),
        TlsMode::VerifyCA => options.ssl_mode(PgSslMode::VerifyCa),
        TlsMode::VerifyFull => options.ssl_mode(PgSslMode::VerifyFull),
    };

    if matches!(tls.mode, TlsMode::VerifyCA | TlsMode::VerifyFull)
        && let Some(ca_path) = &tls.ca
    {
        options = options.ssl_root_cert(ca_path);
    }

    if let (Some(cert_path), Some(key_path)) = (&tls.cert, &tls.key) {
        options = options.ssl_client_cert(cert_path).ssl_client_key(key_path);
    }

    options
}

/// Open a connection, read one integer and close it
///
/// `SELECT 1` is typed `int4` by `PostgreSQL`, so narrower integers are
/// widened to `i64`.
///
/// # Errors
///
/// Returns an error if connecting, executing or decoding fails
pub async fn query_scalar(options: &PgConnectOptions, sql: &str) -> Result<i64, sqlx::Error> {
    let mut conn = options.connect().await?;

    let row = sqlx::query(sql).fetch_one(&mut conn).await?;
    let value = super::widen(
        row.try_get::<i64, _>(0),
        [
            row.try_get::<i32, _>(0).map(i64::from),
            row.try_get::<i16, _>(0).map(i64::from),
        ],
    )?;

    if let Err(e) = conn.close().await {
        debug!("failed to close postgres connection: {e}");
    }

    Ok(value)
}
