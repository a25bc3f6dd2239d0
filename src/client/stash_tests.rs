//! Tests for `StatusSender` and `StashClient`.

use super::{BuildStatus, ClientConfig, NotifyError, StashClient, StatusSender};
use crate::status::{BuildState, InvalidBaseUrl};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse, TlsPolicy};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock HTTP client that returns one configured result and records requests.
#[derive(Debug)]
struct MockClient {
    response: Mutex<Option<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(response: Result<HttpResponse, HttpError>) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn with_status(status: http::StatusCode) -> Self {
        Self::new(Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            b"{}".to_vec(),
        )))
    }

    fn success() -> Self {
        Self::with_status(http::StatusCode::NO_CONTENT)
    }

    fn failing() -> Self {
        Self::new(Err(HttpError::Connection(Box::new(std::io::Error::other(
            "connection refused",
        )))))
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl HttpClient for &MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.response
            .lock()
            .unwrap()
            .take()
            .expect("mock answers one request")
    }
}

fn config() -> ClientConfig {
    ClientConfig::new("http://example.com/", "testuser", "2jfksfjadf")
}

fn status() -> BuildStatus {
    BuildStatus::new(
        BuildState::Successful,
        "REPO-MASTER",
        "REPO-MASTER-42",
        "http://example.com/browse/REPO-MASTER-42",
        "12349782349",
    )
    .with_description("A description...")
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> &'a str {
    req.headers.get(name).unwrap().to_str().unwrap()
}

mod build_status {
    use super::*;

    #[test]
    fn new_has_empty_description() {
        let status = BuildStatus::new(BuildState::Failed, "K", "N", "U", "R");

        assert!(status.description.is_empty());
    }

    #[test]
    fn payload_keeps_first_line_of_display_name() {
        let status = BuildStatus::new(
            BuildState::InProgress,
            "K",
            "Build #7\ntriggered by alice",
            "U",
            "R",
        );

        assert_eq!(status.payload().name, "Build #7");
    }

    #[test]
    fn payload_copies_remaining_fields() {
        let payload = status().payload();

        assert_eq!(payload.state, BuildState::Successful);
        assert_eq!(payload.key, "REPO-MASTER");
        assert_eq!(payload.url, "http://example.com/browse/REPO-MASTER-42");
        assert_eq!(payload.description, "A description...");
    }
}

mod stash_client_construction {
    use super::*;

    #[test]
    fn new_keeps_config() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, config()).unwrap();

        assert_eq!(client.config().base_url(), "http://example.com/");
    }

    #[test]
    fn invalid_extra_header_is_rejected() {
        let mock = MockClient::success();
        let result = StashClient::new(&mock, config().with_header_string("Bad Name:x"));

        assert!(result.is_err());
    }

    #[test]
    fn config_debug_redacts_password() {
        let debug = format!("{:?}", config());

        assert!(!debug.contains("2jfksfjadf"));
        assert!(debug.contains("<redacted>"));
    }
}

mod request_building {
    use super::*;

    #[test]
    fn targets_commit_build_status_url() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, config()).unwrap();

        let req = client.build_request(&status()).unwrap();

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(
            req.url.as_str(),
            "http://example.com/rest/build-status/1.0/commits/12349782349"
        );
    }

    #[test]
    fn sets_fixed_headers() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, config()).unwrap();

        let req = client.build_request(&status()).unwrap();
        let body_len = req.body.as_ref().unwrap().len();

        assert_eq!(header(&req, "content-type"), "application/json");
        assert_eq!(header(&req, "content-length"), body_len.to_string());
        assert_eq!(
            header(&req, "authorization"),
            "Basic dGVzdHVzZXI6Mmpma3NmamFkZg=="
        );
    }

    #[test]
    fn content_length_counts_utf8_bytes() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, config()).unwrap();
        let status = status().with_description("déjà vu");

        let req = client.build_request(&status).unwrap();
        let body = String::from_utf8(req.body.clone().unwrap()).unwrap();

        assert!(body.len() > body.chars().count());
        assert_eq!(header(&req, "content-length"), body.len().to_string());
    }

    #[test]
    fn body_is_rendered_payload() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, config()).unwrap();

        let req = client.build_request(&status()).unwrap();

        let expected = "{\n    \"state\": \"SUCCESSFUL\",\n    \"key\": \"REPO-MASTER\",\n    \"name\": \"REPO-MASTER-42\",\n    \"url\": \"http://example.com/browse/REPO-MASTER-42\",\n    \"description\": \"A description...\"\n}";
        assert_eq!(req.body.unwrap(), expected.as_bytes());
    }

    #[test]
    fn adds_extra_headers() {
        let mock = MockClient::success();
        let config = config()
            .with_header_string("X-Header-1:value-1,X-Header-2: value2, X-Header-3: value_3");
        let client = StashClient::new(&mock, config).unwrap();

        let req = client.build_request(&status()).unwrap();

        assert_eq!(header(&req, "x-header-1"), "value-1");
        assert_eq!(header(&req, "x-header-2"), "value2");
        assert_eq!(header(&req, "x-header-3"), "value_3");
    }

    #[test]
    fn extra_header_overrides_fixed_header() {
        let mock = MockClient::success();
        let config = config().with_header_string("Content-Type: application/vnd.custom+json");
        let client = StashClient::new(&mock, config).unwrap();

        let req = client.build_request(&status()).unwrap();

        assert_eq!(req.headers.get_all("content-type").iter().count(), 1);
        assert_eq!(header(&req, "content-type"), "application/vnd.custom+json");
    }

    #[test]
    fn repeated_extra_header_in_other_case_sends_last_value() {
        let mock = MockClient::success();
        let config = config().with_header_string("x-token:first,X-Token:second");
        let client = StashClient::new(&mock, config).unwrap();

        let req = client.build_request(&status()).unwrap();

        assert_eq!(req.headers.get_all("x-token").iter().count(), 1);
        assert_eq!(header(&req, "x-token"), "second");
    }

    #[test]
    fn carries_configured_tls_policy() {
        let mock = MockClient::success();
        let config = ClientConfig::new("https://stash.internal", "u", "p")
            .with_tls(TlsPolicy::AcceptInvalidCerts);
        let client = StashClient::new(&mock, config).unwrap();

        let req = client.build_request(&status()).unwrap();

        assert_eq!(req.tls, TlsPolicy::AcceptInvalidCerts);
        assert!(req.skips_certificate_checks());
    }

    #[test]
    fn tls_is_verified_by_default() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, ClientConfig::new("https://stash", "u", "p")).unwrap();

        let req = client.build_request(&status()).unwrap();

        assert!(!req.skips_certificate_checks());
    }

    #[test]
    fn base_url_without_scheme_is_rejected() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, ClientConfig::new("://example.com/", "u", "p")).unwrap();

        let result = client.build_request(&status());

        assert!(matches!(
            result,
            Err(NotifyError::InvalidBaseUrl(InvalidBaseUrl(url))) if url == "://example.com/"
        ));
    }

    #[test]
    fn unparseable_url_is_rejected() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, ClientConfig::new("http://bad host", "u", "p")).unwrap();

        let result = client.build_request(&status());

        assert!(matches!(result, Err(NotifyError::InvalidUrl { .. })));
    }
}

mod sending {
    use super::*;

    #[tokio::test]
    async fn sends_one_request() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, config()).unwrap();

        client.send_build_status(&status()).await.unwrap();

        assert_eq!(mock.calls(), 1);
        assert_eq!(
            mock.last_request().url.path(),
            "/rest/build-status/1.0/commits/12349782349"
        );
    }

    #[tokio::test]
    async fn error_status_is_not_an_error() {
        let mock = MockClient::with_status(http::StatusCode::BAD_REQUEST);
        let client = StashClient::new(&mock, config()).unwrap();

        let result = client.send_build_status(&status()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn transport_error_is_returned() {
        let mock = MockClient::failing();
        let client = StashClient::new(&mock, config()).unwrap();

        let result = client.send_build_status(&status()).await;

        assert!(matches!(
            result,
            Err(NotifyError::Http(HttpError::Connection(_)))
        ));
    }

    #[tokio::test]
    async fn invalid_base_url_sends_nothing() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, ClientConfig::new("example.com", "u", "p")).unwrap();

        let result = client.send_build_status(&status()).await;

        assert!(matches!(result, Err(NotifyError::InvalidBaseUrl(_))));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn notify_swallows_transport_error() {
        let mock = MockClient::failing();
        let client = StashClient::new(&mock, config()).unwrap();

        client.notify(&status()).await;

        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn notify_swallows_invalid_base_url() {
        let mock = MockClient::success();
        let client = StashClient::new(&mock, ClientConfig::new("ftp://x", "u", "p")).unwrap();

        client.notify(&status()).await;

        assert_eq!(mock.calls(), 0);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let http = NotifyError::from(HttpError::Timeout);
        let base = NotifyError::from(InvalidBaseUrl("x".to_string()));

        assert_eq!(http.to_string(), "Could not send build status: Request timed out");
        assert!(base.to_string().contains("Invalid base URL 'x'"));
    }
}
