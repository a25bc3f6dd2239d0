//! Application execution logic.
//!
//! This module builds the HTTP client and the build-status sender from
//! validated configuration and reports one build status.

use thiserror::Error;

use stash_notify::client::{BuildStatus, HeaderError, StashClient, StatusSender};
use stash_notify::config::{SendArgs, ValidatedConfig};
use stash_notify::transport::{HttpClient, HttpError, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
///
/// Failing to reach the server is not among them; that is logged and
/// the run still succeeds.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] HttpError),

    /// An extra header could not be prepared.
    #[error("Failed to prepare extra headers: {0}")]
    Header(#[source] HeaderError),
}

/// Reports one build status.
///
/// This function:
/// 1. Creates the HTTP client with the configured timeouts
/// 2. Creates the build-status sender
/// 3. Sends the status (or only logs it in dry-run mode)
///
/// # Errors
///
/// Returns an error if the HTTP client or the sender cannot be created.
/// Send failures are logged, not returned.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it builds a real
/// TLS-capable HTTP client.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: &ValidatedConfig, args: &SendArgs) -> Result<(), RunError> {
    let client = ReqwestClient::with_timeouts(config.timeouts).map_err(RunError::HttpClient)?;
    let sender = StashClient::new(client, config.client_config()).map_err(RunError::Header)?;

    if config.tls.is_permissive() && config.base_url.starts_with("https://") {
        tracing::warn!(
            "TLS certificate verification is disabled for {}",
            config.base_url
        );
    }

    let status = build_status(args);

    if args.dry_run {
        tracing::info!("Dry-run mode enabled - build status will be logged but not sent");
        dry_run(&sender, &status);
        return Ok(());
    }

    report(&sender, &status).await;
    Ok(())
}

/// Converts the `send` arguments into a [`BuildStatus`].
fn build_status(args: &SendArgs) -> BuildStatus {
    BuildStatus::new(
        args.state.into(),
        args.key.as_str(),
        args.name.as_str(),
        args.url.as_str(),
        args.revision.as_str(),
    )
    .with_description(args.description.as_str())
}

/// Builds and logs the request without sending it.
fn dry_run<H: HttpClient>(sender: &StashClient<H>, status: &BuildStatus) {
    match sender.build_request(status) {
        Ok(request) => {
            let size = request.body.as_ref().map_or(0, Vec::len);
            tracing::info!("Dry-run: would POST {size} bytes to {}", request.url);
        }
        Err(e) => {
            tracing::error!("Dry-run: request could not be built: {e}");
        }
    }
}

/// Sends a build status on a best-effort basis.
async fn report<S: StatusSender>(sender: &S, status: &BuildStatus) {
    tracing::info!(
        "Reporting {} for {} at {}",
        status.state,
        status.key,
        status.revision
    );

    sender.notify(status).await;
}
