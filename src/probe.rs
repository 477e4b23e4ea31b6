use async_trait::async_trait;
use futures::FutureExt;
use std::{any::Any, io::Write, panic::AssertUnwindSafe};
use tracing::{debug, info, warn};

/// The fixed no-op query sent to the database
pub const QUERY: &str = "SELECT 1";

/// Value a healthy database returns for [`QUERY`]
pub const EXPECTED: i64 = 1;

/// Anything that went wrong while running the probe query
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] sqlx::Error),

    #[error("probe query panicked: {0}")]
    Panicked(String),
}

/// A ready to use handle able to run a query returning one integer
#[async_trait]
pub trait ScalarQuery: Send + Sync {
    /// Run `sql` and return the first column of the first row
    ///
    /// # Errors
    ///
    /// Returns an error if connecting, executing or decoding fails
    async fn query_scalar(&self, sql: &str) -> Result<i64, Error>;
}

#[must_use]
pub fn success_message(value: i64) -> String {
    format!("✅ Database connection successful! Result: {value}")
}

#[must_use]
pub fn failure_message(err: &Error) -> String {
    format!("❌ Database connection failed: {err}")
}

/// Run the startup probe, reporting on stdout/stderr
///
/// Returns the scalar read from the database, or `None` if the probe failed.
/// Failures are reported and swallowed, never returned.
pub async fn run<H>(handle: &H) -> Option<i64>
where
    H: ScalarQuery + ?Sized,
{
    run_with(handle, &mut std::io::stdout(), &mut std::io::stderr()).await
}

/// Same as [`run`] but writing the report to the given sinks
pub async fn run_with<H, O, E>(handle: &H, out: &mut O, err: &mut E) -> Option<i64>
where
    H: ScalarQuery + ?Sized,
    O: Write,
    E: Write,
{
    let outcome = execute(handle).await;
    report(outcome, out, err)
}

/// Run [`QUERY`] once, turning a panic in the driver into an [`Error`]
///
/// # Errors
///
/// Returns an error if the query fails or panics
pub async fn execute<H>(handle: &H) -> Result<i64, Error>
where
    H: ScalarQuery + ?Sized,
{
    debug!(query = QUERY, "running startup probe");

    match AssertUnwindSafe(handle.query_scalar(QUERY))
        .catch_unwind()
        .await
    {
        Ok(result) => result,
        Err(payload) => Err(Error::Panicked(panic_message(payload.as_ref()))),
    }
}

fn report<O, E>(outcome: Result<i64, Error>, out: &mut O, err: &mut E) -> Option<i64>
where
    O: Write,
    E: Write,
{
    match outcome {
        Ok(value) => {
            if value != EXPECTED {
                warn!(value, expected = EXPECTED, "probe returned an unexpected value");
            }
            info!(value, "database connection successful");

            // output errors are ignored, the outcome stands
            let _ = writeln!(out, "{}", success_message(value));
            let _ = out.flush();
            Some(value)
        }
        Err(e) => {
            let _ = writeln!(err, "{}", failure_message(&e));

            let detail = anyhow::Error::new(e);
            let chain = format!("{detail:#}");
            debug!(error = %chain, "database connection failed");

            // cause chain only, no backtrace
            let _ = err.write_all(cause_chain(&detail).as_bytes());
            let _ = err.flush();
            None
        }
    }
}

fn cause_chain(detail: &anyhow::Error) -> String {
    let causes: Vec<String> = detail.chain().skip(1).map(ToString::to_string).collect();
    if causes.is_empty() {
        return String::new();
    }

    let mut out = String::from("Caused by:\n");
    for (i, cause) in causes.iter().enumerate() {
        out.push_str(&format!("    {i}: {cause}\n"));
    }
    out
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}
