//! # Scalex Rust SDK
//!
//! A Rust SDK for the Scalex API: company registration, fee updates,
//! transaction lifecycle management, and customer and crypto-address lookups.
//!
//! ## Modules
//!
//! - [`api`]: REST client, transport layer, request types and errors
//! - [`config`]: Client configuration (explicit or from `SCALEX_*` variables)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scalex::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ScalexClient::from_env()?;
//!
//!     let tx = client
//!         .create_transaction(CreateTransactionRequest::new("seller", "buyer", 100, "btc", 100))
//!         .await?;
//!     println!("Created: {}", tx);
//!
//!     let pending = client
//!         .get_transactions_by_status(TransactionStatus::AwaitingBuyerApproval)
//!         .await?;
//!     println!("Pending: {}", pending);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module.
pub mod api;

/// Client configuration.
pub mod config;

pub use config::ClientConfig;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use scalex::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiResult, HttpTransport, Method, RequestSpec, ScalexClient, Transport,
        // Request types
        CreateTransactionRequest, RegisterRequest, TransactionStatus, UpdateFeeRequest,
        UpdateTransactionRequest,
    };
    pub use crate::config::ClientConfig;
}
