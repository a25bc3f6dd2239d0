//! Build-status sender trait and HTTP implementation.

use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};

use crate::status::{
    BuildState, StatusPayload, authorization_header_value, build_status_url, first_line,
};
use crate::transport::{HttpClient, HttpRequest};

use super::{ClientConfig, HeaderError, NotifyError};

/// Inputs for one build-status notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStatus {
    /// Build lifecycle state
    pub state: BuildState,
    /// Build plan key
    pub key: String,
    /// Build display name; only its first line is reported
    pub display_name: String,
    /// Link back to the build results
    pub url: String,
    /// Free-form description
    pub description: String,
    /// Commit the status is attached to
    pub revision: String,
}

impl BuildStatus {
    /// Creates a build status with an empty description.
    #[must_use]
    pub fn new(
        state: BuildState,
        key: impl Into<String>,
        display_name: impl Into<String>,
        url: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            state,
            key: key.into(),
            display_name: display_name.into(),
            url: url.into(),
            description: String::new(),
            revision: revision.into(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds the JSON payload, keeping only the first line of the display name.
    #[must_use]
    pub fn payload(&self) -> StatusPayload {
        StatusPayload::new(
            self.state,
            self.key.as_str(),
            first_line(&self.display_name),
            self.url.as_str(),
            self.description.as_str(),
        )
    }
}

/// Trait for reporting build status to a review server.
///
/// Allows the command-line runner to be tested without a network.
pub trait StatusSender: Send + Sync {
    /// Sends one build status.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the request cannot be built or the
    /// HTTP exchange fails. A non-success response status is not an error.
    fn send_build_status(
        &self,
        status: &BuildStatus,
    ) -> impl std::future::Future<Output = Result<(), NotifyError>> + Send;

    /// Sends one build status on a best-effort basis.
    ///
    /// Failures are logged and dropped so the calling build pipeline is
    /// never aborted by a status report.
    fn notify(&self, status: &BuildStatus) -> impl std::future::Future<Output = ()> + Send {
        async move {
            match self.send_build_status(status).await {
                Ok(()) => {
                    tracing::debug!(
                        "Build status {} sent for {}",
                        status.state,
                        status.revision
                    );
                }
                Err(e) => {
                    tracing::error!("Could not send data to Stash: {e}");
                }
            }
        }
    }
}

/// HTTP-based build-status sender.
///
/// Posts a [`BuildStatus`] to
/// `{base_url}/rest/build-status/1.0/commits/{revision}` with Basic
/// authentication and the configured extra headers.
///
/// # Header Order
///
/// `Content-Type`, `Content-Length`, and `Authorization` are set first;
/// extra headers are applied afterwards and replace a fixed header with
/// the same name.
///
/// # Example
///
/// ```
/// use stash_notify::client::{ClientConfig, StashClient};
/// use stash_notify::transport::ReqwestClient;
///
/// let config = ClientConfig::new("https://stash.example.com", "ci", "secret")
///     .with_header_string("X-Header-1:value-1");
/// let client = StashClient::new(ReqwestClient::new().unwrap(), config).unwrap();
/// assert_eq!(client.config().username(), "ci");
/// ```
#[derive(Debug)]
pub struct StashClient<H> {
    client: H,
    config: ClientConfig,
    extra_headers: HeaderMap,
}

impl<H> StashClient<H> {
    /// Creates a sender using `client` for the HTTP exchange.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError`] if an extra header cannot be sent over HTTP.
    pub fn new(client: H, config: ClientConfig) -> Result<Self, HeaderError> {
        let extra_headers = config.extra_headers().to_header_map()?;

        Ok(Self {
            client,
            config,
            extra_headers,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the HTTP request for `status` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidBaseUrl`] if the configured base URL
    /// has no `http://` or `https://` scheme, or
    /// [`NotifyError::InvalidUrl`] if the resulting URL does not parse.
    pub fn build_request(&self, status: &BuildStatus) -> Result<HttpRequest, NotifyError> {
        let target = build_status_url(self.config.base_url(), &status.revision)?;
        let url = url::Url::parse(&target).map_err(|e| NotifyError::InvalidUrl {
            url: target.clone(),
            reason: e.to_string(),
        })?;

        let auth = authorization_header_value(self.config.username(), self.config.password());
        let body = status.payload().to_json_body();

        tracing::info!("Sending build status to {target}");
        tracing::debug!("With body: {body}");
        tracing::debug!("Auth header: {auth}");
        tracing::debug!("Additional headers: {:?}", self.config.extra_headers());

        let mut auth_value =
            HeaderValue::from_str(&format!("Basic {auth}")).map_err(|e| {
                HeaderError::InvalidValue {
                    name: AUTHORIZATION.to_string(),
                    reason: e.to_string(),
                }
            })?;
        auth_value.set_sensitive(true);

        let mut request = HttpRequest::post(url)
            .with_tls(self.config.tls())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(CONTENT_LENGTH, HeaderValue::from(body.len()))
            .with_header(AUTHORIZATION, auth_value);

        for (name, value) in &self.extra_headers {
            request = request.with_header(name.clone(), value.clone());
        }

        Ok(request.with_body(body.into_bytes()))
    }
}

impl<H: HttpClient> StatusSender for StashClient<H> {
    async fn send_build_status(&self, status: &BuildStatus) -> Result<(), NotifyError> {
        let request = self.build_request(status)?;
        let response = self.client.request(request).await?;

        if response.is_success() {
            tracing::debug!("Server accepted build status ({})", response.status);
        } else {
            tracing::warn!("Server answered build status with {}", response.status);
        }
        tracing::debug!("Response: {}", response.log_text());

        Ok(())
    }
}
