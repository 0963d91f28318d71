//! Mobilités M schedule API client.

use tracing::{info, warn};

use crate::domain::RouteName;

use super::error::ScheduleError;
use super::types::RouteDocument;

/// Default base URL for the Mobilités M open data API.
pub const DEFAULT_BASE_URL: &str = "https://data.mobilites-m.fr";

/// Network prefix prepended to every route name.
const NETWORK_PREFIX: &str = "SEM";

/// Configuration for the schedule client.
#[derive(Debug, Clone)]
pub struct MtagClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MtagClientConfig {
    /// Create a config pointing at the public API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MtagClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the `ficheHoraires` endpoint.
#[derive(Debug, Clone)]
pub struct MtagClient {
    http: reqwest::Client,
    base_url: String,
}

impl MtagClient {
    /// Create a new schedule client.
    pub fn new(config: MtagClientConfig) -> Result<Self, ScheduleError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the schedule document for a route.
    ///
    /// The route name is interpolated as-is.
    pub fn schedule_url(&self, route: &RouteName) -> String {
        format!(
            "{}/api/ficheHoraires/json?route={}:{}",
            self.base_url,
            NETWORK_PREFIX,
            route.as_str()
        )
    }

    /// Fetch the schedule document for a route.
    ///
    /// Issues exactly one GET. The body is decoded as JSON whatever the status
    /// code; an error status whose body is JSON comes back as a document and
    /// will usually fail later during extraction.
    pub async fn fetch(&self, route: &RouteName) -> Result<RouteDocument, ScheduleError> {
        let url = self.schedule_url(route);
        info!(%route, %url, "fetching schedule");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(%route, status = status.as_u16(), "schedule API returned an error status");
        }

        let body = response.text().await?;

        RouteDocument::parse(&body).map_err(|e| ScheduleError::decode(e, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = MtagClientConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = MtagClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = MtagClient::new(MtagClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn schedule_url_uses_sem_prefix() {
        let client = MtagClient::new(MtagClientConfig::default()).unwrap();
        let route = RouteName::parse("A").unwrap();

        assert_eq!(
            client.schedule_url(&route),
            "https://data.mobilites-m.fr/api/ficheHoraires/json?route=SEM:A"
        );
    }

    #[test]
    fn schedule_url_does_not_encode_route() {
        let client = MtagClient::new(
            MtagClientConfig::new().with_base_url("http://localhost:9000/"),
        )
        .unwrap();
        let route = RouteName::parse("C%201").unwrap();

        assert_eq!(
            client.schedule_url(&route),
            "http://localhost:9000/api/ficheHoraires/json?route=SEM:C%201"
        );
    }

    /// Serve a single canned HTTP response on a local port.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{addr}")
    }

    /// Client that talks to localhost directly, ignoring any proxy settings.
    fn local_client(base_url: String) -> MtagClient {
        MtagClient {
            http: reqwest::Client::builder()
                .no_proxy()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .unwrap(),
            base_url,
        }
    }

    #[tokio::test]
    async fn fetch_decodes_json_body() {
        let base = serve_once("200 OK", r#"{"0": {"arrets": []}}"#);
        let route = RouteName::parse("A").unwrap();

        let doc = local_client(base).fetch(&route).await.unwrap();
        assert!(doc.as_value()["0"]["arrets"].is_array());
    }

    #[tokio::test]
    async fn fetch_rejects_non_json_body() {
        let base = serve_once("200 OK", "<html>maintenance</html>");
        let route = RouteName::parse("A").unwrap();

        let result = local_client(base).fetch(&route).await;
        match result {
            Err(ScheduleError::Decode { body, .. }) => {
                assert_eq!(body.as_deref(), Some("<html>maintenance</html>"));
            }
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_status_with_json_body_is_not_special() {
        let base = serve_once("404 Not Found", r#"{"error": "unknown route"}"#);
        let route = RouteName::parse("ZZ").unwrap();

        let doc = local_client(base).fetch(&route).await.unwrap();
        assert_eq!(doc.as_value()["error"], "unknown route");
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        // Port 9 on localhost is reserved for discard and normally closed.
        let client = local_client("http://127.0.0.1:9".to_string());
        let route = RouteName::parse("A").unwrap();

        let result = client.fetch(&route).await;
        assert!(matches!(result, Err(ScheduleError::Transport(_))));
    }
}
