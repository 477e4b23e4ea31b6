use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("dsn")
                .env("DBPROBE_DSN")
                .help("<mysql|postgres>://<username>:<password>@tcp(<host>:<port>)/<database>")
                .long("dsn")
                .short('d')
                .required(true),
        )
        .arg(
            Arg::new("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("tls-mode")
                .env("DBPROBE_TLS_MODE")
                .help("TLS/SSL mode: disable, require, verify-ca, verify-full")
                .long("tls-mode")
                .long_help(
                    "TLS/SSL connection mode, overrides sslmode/ssl-mode from the DSN:\n\n\
                    - disable: No TLS (default)\n\
                    - require: TLS required, no certificate verification\n\
                    - verify-ca: Verify server certificate against CA\n\
                    - verify-full: Verify certificate and hostname\n\n\
                    MySQL/MariaDB: Maps to ssl-mode (DISABLED, REQUIRED, VERIFY_CA, VERIFY_IDENTITY)\n\
                    PostgreSQL: Maps to sslmode (disable, require, verify-ca, verify-full)"
                )
                .value_name("MODE")
                .value_parser(["disable", "require", "verify-ca", "verify-full"]),
        )
        .arg(
            Arg::new("tls-ca")
                .env("DBPROBE_TLS_CA")
                .help("Path to CA certificate file for TLS verification")
                .long("tls-ca")
                .long_help(
                    "Path to Certificate Authority (CA) certificate file.\n\
                    Used by the verify-ca and verify-full modes.\n\n\
                    Example: /etc/ssl/certs/ca-certificates.crt"
                )
                .value_name("PATH"),
        )
        .arg(
            Arg::new("tls-cert")
                .env("DBPROBE_TLS_CERT")
                .help("Path to client certificate file for TLS client authentication")
                .long("tls-cert")
                .value_name("PATH")
                .requires("tls-key"),
        )
        .arg(
            Arg::new("tls-key")
                .env("DBPROBE_TLS_KEY")
                .help("Path to client private key file for TLS client authentication")
                .long("tls-key")
                .value_name("PATH")
                .requires("tls-cert"),
        )
}
