//! Remote catalog fetcher using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::domain::{AppConfig, AppError};
use crate::ports::CatalogFetcher;

/// HTTP transport for the remote catalog document.
///
/// One GET per call, bounded by the configured timeout. No retries.
#[derive(Debug, Clone)]
pub struct HttpCatalogFetcher {
    url: Url,
    user_agent: String,
    client: Client,
}

impl HttpCatalogFetcher {
    /// Create a fetcher from the application configuration.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::NetworkUnavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { url: config.remote_url.clone(), user_agent: config.user_agent.clone(), client })
    }
}

impl CatalogFetcher for HttpCatalogFetcher {
    fn fetch(&self) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(USER_AGENT, &self.user_agent)
            .send()
            .map_err(|e| {
                let reason = if e.is_timeout() { "request timed out" } else { "request failed" };
                AppError::NetworkUnavailable(format!("{} for {}: {}", reason, self.url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::NetworkUnavailable(format!(
                "{} returned HTTP {}",
                self.url,
                status.as_u16()
            )));
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| AppError::NetworkUnavailable(format!("Failed to read response body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(url: &str) -> AppConfig {
        AppConfig::default().with_remote_url(url).unwrap()
    }

    #[test]
    fn fetch_returns_raw_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/config.yaml")
            .match_header("user-agent", "test-agent/1")
            .with_status(200)
            .with_body("app_name: Remote\ncategories: []\n")
            .expect(1)
            .create();

        let mut config = config_for(&format!("{}/config.yaml", server.url()));
        config.user_agent = "test-agent/1".to_string();
        let fetcher = HttpCatalogFetcher::new(&config).unwrap();

        let body = fetcher.fetch().unwrap();

        assert_eq!(body, b"app_name: Remote\ncategories: []\n");
        mock.assert();
    }

    #[test]
    fn http_error_status_is_network_unavailable() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/config.yaml").with_status(404).expect(1).create();

        let fetcher =
            HttpCatalogFetcher::new(&config_for(&format!("{}/config.yaml", server.url()))).unwrap();

        let err = fetcher.fetch().unwrap_err();
        assert!(matches!(err, AppError::NetworkUnavailable(msg) if msg.contains("404")));
        mock.assert();
    }

    #[test]
    fn server_error_is_not_retried() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/config.yaml").with_status(503).expect(1).create();

        let fetcher =
            HttpCatalogFetcher::new(&config_for(&format!("{}/config.yaml", server.url()))).unwrap();

        assert!(fetcher.fetch().is_err());
        mock.assert();
    }

    #[test]
    fn refused_connection_is_network_unavailable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let fetcher =
            HttpCatalogFetcher::new(&config_for(&format!("http://127.0.0.1:{}/config.yaml", port)))
                .unwrap();

        assert!(matches!(fetcher.fetch(), Err(AppError::NetworkUnavailable(_))));
    }
}
