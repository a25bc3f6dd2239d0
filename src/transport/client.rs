//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, Timeouts};

/// Production HTTP client using reqwest.
///
/// Holds two reqwest clients built with the same timeouts: one that
/// verifies server certificates and one that does not. Each request is
/// routed by its own [`TlsPolicy`](super::TlsPolicy), so the permissive
/// client is only used for `https://` requests that opt in to it.
/// Nothing process-wide is reconfigured.
///
/// # Example
///
/// ```no_run
/// use stash_notify::transport::{HttpClient, HttpRequest, ReqwestClient, TlsPolicy};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new()?;
/// let url = Url::parse("https://stash.internal/rest/build-status/1.0/commits/abc")?;
/// let request = HttpRequest::post(url)
///     .with_body(b"{}".to_vec())
///     .with_tls(TlsPolicy::AcceptInvalidCerts);
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    verifying: reqwest::Client,
    permissive: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client with default [`Timeouts`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeouts(Timeouts::default())
    }

    /// Creates a client with explicit connect and request timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the TLS backend cannot be initialized.
    pub fn with_timeouts(timeouts: Timeouts) -> Result<Self, HttpError> {
        let verifying = Self::builder(timeouts)
            .build()
            .map_err(|e| HttpError::ClientBuild(Box::new(e)))?;
        // Skipping certificate verification also skips the host name check.
        let permissive = Self::builder(timeouts)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| HttpError::ClientBuild(Box::new(e)))?;

        Ok(Self {
            verifying,
            permissive,
        })
    }

    /// Creates an HTTP client from existing reqwest clients.
    ///
    /// Useful when you need custom configuration (proxies, extra roots, etc.).
    /// `permissive` receives `https://` requests whose policy accepts
    /// invalid certificates; `verifying` receives everything else.
    #[must_use]
    pub const fn from_clients(verifying: reqwest::Client, permissive: reqwest::Client) -> Self {
        Self {
            verifying,
            permissive,
        }
    }

    fn builder(timeouts: Timeouts) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
    }

    fn client_for(&self, req: &HttpRequest) -> &reqwest::Client {
        if req.skips_certificate_checks() {
            &self.permissive
        } else {
            &self.verifying
        }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let client = self.client_for(&req);

        // Build the reqwest request
        let mut builder = client.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_send_error)?;

        // Extract response parts; the connection is released when `response` is consumed.
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(map_send_error)?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

fn map_send_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
