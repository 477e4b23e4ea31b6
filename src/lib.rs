//! Startup connectivity probe for relational databases.
//!
//! `dbprobe` runs a single `SELECT 1` against a `PostgreSQL` or `MySQL`
//! database and reports the outcome on the console. A failed probe is
//! reported, never fatal.

pub mod cli;
pub mod connection;
pub mod probe;
pub mod tls;
