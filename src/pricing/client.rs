use reqwest::{Client, Url};
use std::time::Duration;
use tokio::time::timeout;

use crate::config::{ConfigError, PricingConfig};
use crate::pricing::error::LookupError;
use crate::pricing::types::Product;
use crate::pricing::{FetchFuture, ProductSource};

/// Path of the product search script under the back-office base URL.
pub const SEARCH_PATH: &str = "AdminDTE/includes/BuscarProductoCP.php";

/// HTTP client for the store's price-list endpoint.
///
/// One `GET` per lookup, no retries and no caching: scanning the same code
/// twice hits the server twice.
#[derive(Clone)]
pub struct PricingClient {
    client: Client,
    endpoint: Url,
    tax_id: String,
    timeout: Duration,
}

impl PricingClient {
    pub fn new(config: &PricingConfig) -> Result<Self, ConfigError> {
        let base = config.base_url.trim().trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}/{SEARCH_PATH}")).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("invalid pricing.base_url '{}': {}", config.base_url, e),
            }
        })?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|source| ConfigError::HttpClient { source })?;

        Ok(Self {
            client,
            endpoint,
            tax_id: config.tax_id.trim().to_string(),
            timeout: config.timeout(),
        })
    }

    /// Full request URL for `code`.
    pub fn lookup_url(&self, code: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("Codigo", code)
            .append_pair("Rut_Empresa", &self.tax_id);
        url
    }

    /// Look up `code`. An empty list means the product does not exist.
    pub async fn lookup(&self, code: &str) -> Result<Vec<Product>, LookupError> {
        match timeout(self.timeout, self.do_lookup(code)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout {
                seconds: self.timeout.as_secs(),
            }),
        }
    }

    async fn do_lookup(&self, code: &str) -> Result<Vec<Product>, LookupError> {
        let url = self.lookup_url(code);
        tracing::debug!(code, url = %url, "requesting price");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| LookupError::Network {
            message: e.to_string(),
        })?;

        let products: Vec<Product> =
            serde_json::from_slice(&body).map_err(|e| LookupError::Decode {
                message: e.to_string(),
            })?;

        tracing::debug!(code, products = products.len(), "price response decoded");
        Ok(products)
    }
}

impl ProductSource for PricingClient {
    fn fetch(&self, code: &str) -> FetchFuture {
        let client = self.clone();
        let code = code.to_string();
        Box::pin(async move { client.lookup(&code).await })
    }
}
