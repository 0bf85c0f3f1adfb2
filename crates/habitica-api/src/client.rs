//! HTTP client for the Habitica user API.
//!
//! This module sends the single `GET /api/v3/user` request, handles the
//! identification headers Habitica requires, and maps status codes to
//! [`ApiError`].

use std::time::Duration;

use crate::credentials::Credentials;
use crate::error::{ApiError, Error};
use crate::types::{ProgressSnapshot, UserResponse};

/// Habitica user endpoint.
pub const USER_API_URL: &str = "https://habitica.com/api/v3/user";

/// Application name used in the `x-client` header.
pub const DEFAULT_CLIENT_NAME: &str = "habitica-badge";

/// Options for building a [`HabiticaClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// Endpoint to query.
    pub url: String,
    /// Application name; Habitica wants `x-client: <user id>-<app name>`.
    pub client_name: String,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Whole-request timeout. `None` leaves the wait unbounded.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            url: USER_API_URL.to_string(),
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            user_agent: format!("habitica-badge/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

/// Async client for the Habitica user API.
#[derive(Debug, Clone)]
pub struct HabiticaClient {
    http: reqwest::Client,
    options: ClientOptions,
}

impl HabiticaClient {
    /// Build a client from options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the TLS backend cannot be initialized.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(options.user_agent.clone());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| Error::Client(e.to_string()))?;
        Ok(Self { http, options })
    }

    /// The options this client was built with.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Fetch the raw user document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Network request fails or times out
    /// - Server returns 401 (unauthorized)
    /// - Server returns 429 (rate limited)
    /// - Server returns 5xx (server error)
    /// - Server returns any other non-200 status
    ///
    /// # Security
    ///
    /// The API key is used only for this request and is not stored.
    pub async fn fetch_user_raw(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response = self
            .http
            .get(&self.options.url)
            .header("x-api-user", &credentials.user_id)
            .header("x-api-key", &credentials.api_key)
            .header(
                "x-client",
                format!("{}-{}", credentials.user_id, self.options.client_name),
            )
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        map_response(response).await
    }

    /// Fetch the user document and extract a [`ProgressSnapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for transport and status failures and
    /// [`Error::Parse`] when the body is not a user document.
    pub async fn get_progress(&self, credentials: &Credentials) -> Result<ProgressSnapshot, Error> {
        let body = self.fetch_user_raw(credentials).await?;
        parse_progress(&body)
    }
}

/// Map HTTP response to result, handling error status codes.
async fn map_response(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status().as_u16();

    match status {
        200 => response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string())),
        401 => Err(ApiError::Unauthorized),
        429 => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            Err(ApiError::RateLimited { retry_after })
        }
        500..=599 => Err(ApiError::Server(status)),
        _ => Err(ApiError::Unexpected(status)),
    }
}

/// Parse a user document body into a [`ProgressSnapshot`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if the body is not JSON, lacks `data.stats`, or
/// `stats.lvl` is missing or not a non-negative integer.
pub fn parse_progress(body: &str) -> Result<ProgressSnapshot, Error> {
    let response: UserResponse =
        serde_json::from_str(body).map_err(|e| Error::Parse(e.to_string()))?;
    Ok(ProgressSnapshot::from(response.data.stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one canned HTTP response on a random local port.
    ///
    /// Returns the endpoint URL and a handle resolving to the raw request text.
    async fn serve_once(status_line: &str, headers: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind local listener");
        let addr = listener.local_addr().expect("local addr");
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n{headers}\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/api/v3/user"), handle)
    }

    fn client_for(url: String) -> HabiticaClient {
        HabiticaClient::new(ClientOptions {
            url,
            ..ClientOptions::default()
        })
        .expect("client should build")
    }

    fn creds() -> Credentials {
        Credentials::new("user-123", "token-abc")
    }

    #[test]
    fn test_api_url_is_correct() {
        assert_eq!(USER_API_URL, "https://habitica.com/api/v3/user");
    }

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();
        assert_eq!(options.client_name, "habitica-badge");
        assert!(options.user_agent.starts_with("habitica-badge/"));
        assert!(options.timeout.is_none());
    }

    #[test]
    fn test_parse_progress_valid() {
        let body = r#"{"data":{"stats":{"lvl":10,"exp":150,"toNextLevel":200,"class":"healer"}}}"#;
        let snapshot = parse_progress(body).expect("should parse");
        assert_eq!(snapshot.level, 10);
        assert_eq!(snapshot.percentage(), 75);
        assert_eq!(snapshot.class.as_deref(), Some("healer"));
    }

    #[test]
    fn test_parse_progress_not_json() {
        let result = parse_progress("<html>maintenance</html>");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_progress_negative_to_next_is_zero_percent() {
        let body = r#"{"data":{"stats":{"lvl":10,"exp":150,"toNextLevel":-20}}}"#;
        let snapshot = parse_progress(body).expect("should parse");
        assert_eq!(snapshot.percentage(), 0);
    }

    #[test]
    fn test_parse_progress_missing_stats() {
        let result = parse_progress(r#"{"data":{}}"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[tokio::test]
    async fn test_sends_identification_headers() {
        let body = r#"{"data":{"stats":{"lvl":10,"exp":150,"toNextLevel":200}}}"#;
        let (url, server) = serve_once("200 OK", "content-type: application/json\r\n", body).await;

        let snapshot = client_for(url)
            .get_progress(&creds())
            .await
            .expect("fetch should succeed");
        assert_eq!(snapshot.percentage(), 75);

        let request = server.await.expect("server task").to_lowercase();
        assert!(request.starts_with("get /api/v3/user"));
        assert!(request.contains("x-api-user: user-123"));
        assert!(request.contains("x-api-key: token-abc"));
        assert!(request.contains("x-client: user-123-habitica-badge"));
        assert!(request.contains("content-type: application/json"));
        assert!(request.contains("user-agent: habitica-badge/"));
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let (url, _server) = serve_once("401 Unauthorized", "", "{}").await;
        let result = client_for(url).fetch_user_raw(&creds()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_rate_limited_reads_retry_after() {
        let (url, _server) = serve_once("429 Too Many Requests", "retry-after: 60\r\n", "{}").await;
        let result = client_for(url).fetch_user_raw(&creds()).await;
        match result {
            Err(ApiError::RateLimited { retry_after }) => {
                assert_eq!(retry_after.as_deref(), Some("60"));
            }
            other => panic!("expected RateLimited, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error() {
        let (url, _server) = serve_once("500 Internal Server Error", "", "oops").await;
        let result = client_for(url).fetch_user_raw(&creds()).await;
        assert!(matches!(result, Err(ApiError::Server(500))));
    }

    #[tokio::test]
    async fn test_unexpected_status() {
        let (url, _server) = serve_once("404 Not Found", "", "").await;
        let result = client_for(url).fetch_user_raw(&creds()).await;
        assert!(matches!(result, Err(ApiError::Unexpected(404))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (url, _server) = serve_once("200 OK", "", "not json").await;
        let result = client_for(url).get_progress(&creds()).await;
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let result = client_for(format!("http://{addr}/api/v3/user"))
            .fetch_user_raw(&creds())
            .await;
        match result {
            Err(err @ ApiError::Network(_)) => assert_eq!(err.status(), None),
            other => panic!("expected Network, got: {other:?}"),
        }
    }

    // Integration test - requires valid credentials
    #[tokio::test]
    #[ignore = "requires real Habitica credentials"]
    async fn test_get_progress_integration() {
        let credentials = Credentials::from_env()
            .expect("HABITICA_USER_ID and HABITICA_API_TOKEN must be set for integration test");
        let client = HabiticaClient::new(ClientOptions::default()).expect("client");
        let snapshot = client
            .get_progress(&credentials)
            .await
            .expect("live fetch should succeed");
        assert!(snapshot.percentage() <= 100);
    }
}
