//! TLS settings for database connections
//!
//! Settings come from DSN query parameters and can be overridden from the
//! command line. They are applied to the `PostgreSQL` and `MySQL` connect
//! options in [`crate::connection`].

pub mod config;

pub use config::{TlsConfig, TlsMode};
