// src/transport/http.rs
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

use super::{Transport, TransportError, TransportResponse};

/// Production transport: one shared reqwest client across all probes.
/// The client's connection pool is safe for concurrent independent use;
/// request timeouts are owned by the aggregator, not set here.
pub struct HttpTransport {
    base_url: Url,
    client: Client,
}

impl HttpTransport {
    pub fn new(base_url: Url) -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    fn resolve(&self, path: &str) -> Result<Url, TransportError> {
        if path.starts_with("http://") || path.starts_with("https://") {
            Url::parse(path)
        } else {
            self.base_url.join(path)
        }
        .map_err(|source| TransportError::InvalidUrl {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<TransportResponse, TransportError> {
        let method = method
            .parse::<Method>()
            .map_err(|_| TransportError::InvalidMethod(method.to_string()))?;
        let url = self.resolve(path)?;

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        Ok(TransportResponse {
            status: response.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> HttpTransport {
        HttpTransport::new(Url::parse("http://localhost:8080").unwrap()).unwrap()
    }

    #[test]
    fn resolves_relative_paths_against_base() {
        let url = transport().resolve("/health/auth-service").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/health/auth-service");
    }

    #[test]
    fn keeps_absolute_urls() {
        let url = transport().resolve("http://other-host:9090/actuator/health").unwrap();
        assert_eq!(url.as_str(), "http://other-host:9090/actuator/health");
    }

    #[tokio::test]
    async fn rejects_unknown_method() {
        let err = transport()
            .send("NOT A VERB", "/health/auth-service", None)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidMethod(_)));
    }
}
