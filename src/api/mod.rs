//! REST API client module for Scalex.
//!
//! This module provides a validating HTTP client for the Scalex REST API:
//! company registration, fees, transactions, customers and supported coins.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scalex::api::ScalexClient;
//! use scalex::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://api.scalex.africa", "my-api-key", "testnet")?;
//!     let client = ScalexClient::new(config)?;
//!
//!     // Deposit address of a customer, "eth" is sent as "ETH"
//!     let address = client.get_customer_address("cust1", "eth").await?;
//!     println!("Address: {}", address);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`.
//! Validation errors are raised before anything is sent:
//!
//! ```rust,ignore
//! use scalex::api::{ApiError, UpdateFeeRequest};
//!
//! match client.update_fee(UpdateFeeRequest::default()).await {
//!     Ok(fee) => println!("Updated: {}", fee),
//!     Err(ApiError::MissingField(field)) => println!("Missing {}", field),
//!     Err(ApiError::Http(e)) => println!("Request failed: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! # Custom transports
//!
//! [`ScalexClient`] is generic over [`Transport`]. Anything that can turn a
//! [`RequestSpec`] into a response body can stand in for [`HttpTransport`],
//! which is how the tests observe outgoing requests.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::ScalexClient;
pub use error::{ApiError, ApiResult};
pub use transport::{HttpTransport, Method, RequestSpec, Transport, API_KEY_HEADER};
pub use types::*;
