use dsn::DSN;
use std::{path::PathBuf, str::FromStr};

/// TLS configuration for database connections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsConfig {
    pub mode: TlsMode,
    pub ca: Option<PathBuf>,
    pub cert: Option<PathBuf>,
    pub key: Option<PathBuf>,
}

impl TlsConfig {
    /// Extract TLS configuration from DSN query parameters
    ///
    /// Accepts both the `PostgreSQL` and the `MySQL` parameter names:
    /// - sslmode, ssl-mode: disable|require|verify-ca|verify-full
    /// - sslrootcert, sslca, ssl-ca: Path to CA certificate
    /// - sslcert, ssl-cert: Path to client certificate
    /// - sslkey, ssl-key: Path to client private key
    ///
    /// An unknown mode falls back to `disable`.
    #[must_use]
    pub fn from_dsn(dsn: &DSN) -> Self {
        let param = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| dsn.params.get(*name))
                .cloned()
        };

        Self {
            mode: param(&["sslmode", "ssl-mode"])
                .and_then(|m| m.parse::<TlsMode>().ok())
                .unwrap_or_default(),
            ca: param(&["sslrootcert", "sslca", "ssl-ca"]).map(PathBuf::from),
            cert: param(&["sslcert", "ssl-cert"]).map(PathBuf::from),
            key: param(&["sslkey", "ssl-key"]).map(PathBuf::from),
        }
    }

    /// Replace any setting for which an explicit value was given
    #[must_use]
    pub fn with_overrides(
        self,
        mode: Option<TlsMode>,
        ca: Option<PathBuf>,
        cert: Option<PathBuf>,
        key: Option<PathBuf>,
    ) -> Self {
        Self {
            mode: mode.unwrap_or(self.mode),
            ca: ca.or(self.ca),
            cert: cert.or(self.cert),
            key: key.or(self.key),
        }
    }
}

/// TLS/SSL mode for database connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsMode {
    /// No TLS encryption
    #[default]
    Disable,
    /// TLS required, but no certificate verification
    Require,
    /// Verify server certificate against CA
    VerifyCA,
    /// Verify certificate and hostname
    VerifyFull,
}

impl FromStr for TlsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disable" => Ok(Self::Disable),
            "require" => Ok(Self::Require),
            "verify-ca" => Ok(Self::VerifyCA),
            "verify-full" => Ok(Self::VerifyFull),
            _ => Err(format!("Invalid TLS mode: {s}")),
        }
    }
}

impl TlsMode {
    /// Check if TLS is enabled
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disable)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Require => "require",
            Self::VerifyCA => "verify-ca",
            Self::VerifyFull => "verify-full",
        }
    }
}
