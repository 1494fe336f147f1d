//! HTTP transport to the search endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{ClientError, Result, SearchRequest, SearchResponse};

/// Backend contract spoken by a transport.
///
/// One deployment speaks exactly one contract; the two are never mixed
/// within a single transport instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contract {
    /// `GET /search?q=&type=&num=` returning a flat JSON array.
    #[default]
    Get,
    /// `POST /search` with a form-encoded body returning
    /// `{status, message?, results}`.
    Post,
}

/// Trait for sending a search request and decoding its response.
///
/// The controller talks to the backend exclusively through this seam, which
/// keeps it testable without a network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the decoded response.
    async fn send(&self, request: &SearchRequest) -> Result<SearchResponse>;
}

/// Default timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A transport that talks to a real search endpoint via reqwest.
///
/// No retries and no caching; a failed request surfaces as a single error
/// for the renderer to display.
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    contract: Contract,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport for the given endpoint with the GET contract and
    /// the default timeout.
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent("querydeck/0.2")
                .build()
                .map_err(ClientError::Http)?,
            endpoint: Url::parse(endpoint)?,
            contract: Contract::Get,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Sets the wire contract.
    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a custom reqwest client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the contract this transport speaks.
    pub fn contract(&self) -> Contract {
        self.contract
    }

    fn get_url(&self, request: &SearchRequest) -> String {
        format!(
            "{}?q={}&type={}&num={}",
            self.endpoint,
            urlencoding::encode(request.trimmed_query()),
            request.category.as_str(),
            request.result_count
        )
    }

    async fn send_inner(&self, request: &SearchRequest) -> Result<SearchResponse> {
        match self.contract {
            Contract::Get => {
                let url = self.get_url(request);
                debug!("GET {}", url);
                let response = self.client.get(&url).send().await?;
                let body = response.text().await?;
                SearchResponse::decode_flat(request.category, &body)
            }
            Contract::Post => {
                debug!("POST {} query={}", self.endpoint, request.trimmed_query());
                let form = [
                    ("query", request.trimmed_query()),
                    ("type", request.category.as_str()),
                ];
                let response = self.client.post(self.endpoint.clone()).form(&form).send().await?;
                let body = response.text().await?;
                SearchResponse::decode_wrapped(request.category, &body)
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &SearchRequest) -> Result<SearchResponse> {
        match tokio::time::timeout(self.timeout, self.send_inner(request)).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn test_http_transport_new() {
        let transport = HttpTransport::new("http://localhost:5000/search").unwrap();
        assert_eq!(transport.contract(), Contract::Get);
        assert_eq!(transport.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_http_transport_invalid_endpoint() {
        let result = HttpTransport::new("not a url");
        assert!(matches!(result, Err(ClientError::UrlParse(_))));
    }

    #[test]
    fn test_http_transport_with_contract() {
        let transport = HttpTransport::new("http://localhost:5000/search")
            .unwrap()
            .with_contract(Contract::Post);
        assert_eq!(transport.contract(), Contract::Post);
    }

    #[test]
    fn test_http_transport_with_timeout() {
        let transport = HttpTransport::new("http://localhost:5000/search")
            .unwrap()
            .with_timeout(Duration::from_secs(3));
        assert_eq!(transport.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_get_url_encodes_query() {
        let transport = HttpTransport::new("http://localhost:5000/search").unwrap();
        let request = SearchRequest::new("cats & dogs").with_category(Category::News);
        let url = transport.get_url(&request);
        assert_eq!(
            url,
            "http://localhost:5000/search?q=cats%20%26%20dogs&type=news&num=10"
        );
    }

    #[test]
    fn test_get_url_trims_query() {
        let transport = HttpTransport::new("http://localhost:5000/search").unwrap();
        let request = SearchRequest::new("  cats  ");
        let url = transport.get_url(&request);
        assert!(url.contains("q=cats&"));
    }

    #[test]
    fn test_contract_default() {
        let default: Contract = Default::default();
        assert_eq!(default, Contract::Get);
    }
}
