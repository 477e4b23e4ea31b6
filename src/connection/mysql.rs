use crate::tls::{TlsConfig, TlsMode};
use dsn::DSN;
use sqlx::{
    ConnectOptions, Connection, Row,
    mysql::{MySqlConnectOptions, MySqlSslMode},
};
use tracing::debug;

/// Build `MySQL` connect options from the DSN and TLS settings
#[must_use]
pub fn connect_options(dsn: &DSN, tls: &TlsConfig) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .username(dsn.username.clone().unwrap_or_default().as_ref())
        .password(dsn.password.clone().unwrap_or_default().as_str())
        .database(dsn.database.clone().unwrap_or_default().as_ref());

    if let Some(host) = &dsn.host {
        options = options.host(host.as_str()).port(dsn.port.unwrap_or(3306));
    } else if let Some(socket) = &dsn.socket {
        options = options.socket(socket.as_str());
    }

    options = match tls.mode {
        TlsMode::Disable => options.ssl_mode(MySqlSslMode::Disabled),
        TlsMode::Require => options.ssl_mode(MySqlSslMode::Required),
        TlsMode::VerifyCA => options.ssl_mode(MySqlSslMode::VerifyCa),
        TlsMode::VerifyFull => options.ssl_mode(MySqlSslMode::VerifyIdentity),
    };

    if matches!(tls.mode, TlsMode::VerifyCA | TlsMode::VerifyFull)
        && let Some(ca_path) = &tls.ca
    {
        options = options.ssl_ca(ca_path);
    }

    if let (Some(cert_path), Some(key_path)) = (&tls.cert, &tls.key) {
        options = options.ssl_client_cert(cert_path).ssl_client_key(key_path);
    }

    options
}

/// Open a connection, read one integer and close it
///
/// # Errors
///
/// Returns an error if connecting, executing or decoding fails
pub async fn query_scalar(options: &MySqlConnectOptions, sql: &str) -> Result<i64, sqlx::Error> {
    let mut conn = options.connect().await?;

    let row = sqlx::query(sql).fetch_one(&mut conn).await?;
    let value = super::widen(
        row.try_get::<i64, _>(0),
        [row.try_get::<i32, _>(0).map(i64::from)],
    )?;

    if let Err(e) = conn.close().await {
        debug!("failed to close mysql connection: {e}");
    }

    Ok(value)
}
