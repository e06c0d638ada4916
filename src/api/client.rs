//! Scalex REST API client implementation.
//!
//! The [`ScalexClient`] validates each request locally, then hands it to a
//! [`Transport`] and decodes the JSON response.
//!
//! # Example
//!
//! ```rust,ignore
//! use scalex::api::{CreateTransactionRequest, ScalexClient};
//! use scalex::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ScalexClient::new(ClientConfig::from_env()?)?;
//!
//!     let coins = client.get_supported_coins().await?;
//!     println!("Supported coins: {}", coins);
//!
//!     let tx = client
//!         .create_transaction(CreateTransactionRequest::new("seller", "buyer", 100, "btc", 100))
//!         .await?;
//!     println!("Created: {}", tx);
//!
//!     Ok(())
//! }
//! ```

use std::borrow::Cow;

use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::api::transport::{HttpTransport, Method, RequestSpec, Transport};
use crate::api::types::*;
use crate::config::ClientConfig;

/// Scalex REST API client.
///
/// Generic over its [`Transport`] so the HTTP layer can be swapped out;
/// production code uses the default [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct ScalexClient<T = HttpTransport> {
    transport: T,
    network_type: String,
}

impl ScalexClient<HttpTransport> {
    /// Create a client over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            transport,
            network_type: config.network_type().to_string(),
        })
    }

    /// Create a client from `SCALEX_*` environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

impl<T: Transport> ScalexClient<T> {
    /// Create a client over an arbitrary transport.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if `network_type` is blank.
    pub fn with_transport(transport: T, network_type: impl Into<String>) -> ApiResult<Self> {
        let network_type = network_type.into();
        if network_type.trim().is_empty() {
            return Err(ApiError::Configuration("Provide your network type".to_string()));
        }
        Ok(Self {
            transport,
            network_type,
        })
    }

    /// Blockchain network used when creating transactions and customers.
    pub fn network_type(&self) -> &str {
        &self.network_type
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    async fn send(&self, request: RequestSpec) -> ApiResult<Value> {
        let body = self.transport.call(request).await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::Deserialize(format!("Failed to deserialize response: {}", e)))
    }

    async fn get(&self, route: String) -> ApiResult<Value> {
        self.send(RequestSpec::get(route)).await
    }

    async fn post(&self, route: String, body: Option<Value>) -> ApiResult<Value> {
        let mut request = RequestSpec::new(route, Method::Post);
        request.body = body;
        self.send(request).await
    }

    /// Percent-encoded path segment; blank values are missing.
    fn segment<'a>(value: &'a str, field: &'static str) -> ApiResult<Cow<'a, str>> {
        if value.trim().is_empty() {
            return Err(ApiError::MissingField(field));
        }
        Ok(urlencoding::encode(value))
    }

    /// Upper-cased, percent-encoded crypto symbol.
    fn crypto_segment(crypto: &str) -> ApiResult<String> {
        Ok(Self::segment(&crypto.to_uppercase(), "crypto")?.into_owned())
    }

    // =========================================================================
    // Company endpoints
    // =========================================================================

    /// Register a new company account.
    pub async fn register(&self, request: RegisterRequest) -> ApiResult<Value> {
        let body = request.into_body()?;
        self.post("/auth/register".to_string(), Some(body)).await
    }

    /// Update the account's fee.
    pub async fn update_fee(&self, request: UpdateFeeRequest) -> ApiResult<Value> {
        let body = request.into_body()?;
        self.post("/fee/update".to_string(), Some(body)).await
    }

    // =========================================================================
    // Transaction endpoints
    // =========================================================================

    /// Update amount, coin and fiat amount of a transaction.
    pub async fn update_transaction(
        &self,
        id: &str,
        request: UpdateTransactionRequest,
    ) -> ApiResult<Value> {
        let id = Self::segment(id, "id")?;
        let body = request.into_body()?;
        self.post(format!("/transactions/{}", id), Some(body)).await
    }

    /// Move a transaction to another status.
    pub async fn update_transaction_status(
        &self,
        id: &str,
        status: TransactionStatus,
    ) -> ApiResult<Value> {
        let id = Self::segment(id, "id")?;
        self.post(format!("/transactions/update/{}/{}", id, status), None)
            .await
    }

    /// Get all transactions in a given status.
    pub async fn get_transactions_by_status(&self, status: TransactionStatus) -> ApiResult<Value> {
        self.get(format!("/transactions/status{}", status)).await
    }

    /// Get a transaction by ID.
    pub async fn get_transaction(&self, id: &str) -> ApiResult<Value> {
        let id = Self::segment(id, "id")?;
        self.get(format!("/transactions/{}", id)).await
    }

    /// Get all transactions.
    pub async fn get_transactions(&self) -> ApiResult<Value> {
        self.get("/transactions".to_string()).await
    }

    /// Create a transaction on the configured network.
    ///
    /// `coin_type` is upper-cased before sending.
    pub async fn create_transaction(&self, request: CreateTransactionRequest) -> ApiResult<Value> {
        let body = request.into_body()?;
        let network = Self::segment(&self.network_type, "network_type")?;
        self.post(format!("/transactions/{}/create", network), Some(body))
            .await
    }

    // =========================================================================
    // Customer endpoints
    // =========================================================================

    /// Create a customer on the configured network.
    pub async fn create_customer(&self) -> ApiResult<Value> {
        let network = Self::segment(&self.network_type, "network_type")?;
        self.post(format!("/customers/{}/create", network), None).await
    }

    /// Get all customers.
    pub async fn get_customers(&self) -> ApiResult<Value> {
        self.get("/customers".to_string()).await
    }

    /// Get a customer by ID.
    pub async fn get_customer(&self, id: &str) -> ApiResult<Value> {
        let id = Self::segment(id, "id")?;
        self.get(format!("/customers/{}", id)).await
    }

    /// Get a customer's deposit address for `crypto` (e.g. `"eth"`).
    pub async fn get_customer_address(&self, id: &str, crypto: &str) -> ApiResult<Value> {
        let id = Self::segment(id, "id")?;
        let crypto = Self::crypto_segment(crypto)?;
        self.get(format!("/customers/address/{}/{}", id, crypto)).await
    }

    /// Get a customer's balance in `crypto`.
    pub async fn get_customer_balance(&self, id: &str, crypto: &str) -> ApiResult<Value> {
        let id = Self::segment(id, "id")?;
        let crypto = Self::crypto_segment(crypto)?;
        self.get(format!("/customers/balance/{}/{}", id, crypto)).await
    }

    // =========================================================================
    // Reference data
    // =========================================================================

    /// Get all supported cryptocurrencies.
    pub async fn get_supported_coins(&self) -> ApiResult<Value> {
        self.get("/supported-coins".to_string()).await
    }
}
