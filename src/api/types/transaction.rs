//! Transaction-related types for the Scalex REST API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::{require, require_str, to_body};
use crate::api::error::{ApiError, ApiResult};

/// Lifecycle state of a transaction on the Scalex side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Waiting for the buyer to approve
    AwaitingBuyerApproval,
    /// Waiting for the seller to approve
    AwaitingSellerApproval,
    /// Waiting for the buyer to send cash
    AwaitingBuyerCashTransfer,
    /// Waiting for the seller to confirm receipt of cash
    AwaitingSellerCashApproval,
    /// Settled
    Completed,
    /// Canceled by either party
    Canceled,
    /// Under dispute
    Dispute,
}

impl TransactionStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [TransactionStatus; 7] = [
        TransactionStatus::AwaitingBuyerApproval,
        TransactionStatus::AwaitingSellerApproval,
        TransactionStatus::AwaitingBuyerCashTransfer,
        TransactionStatus::AwaitingSellerCashApproval,
        TransactionStatus::Completed,
        TransactionStatus::Canceled,
        TransactionStatus::Dispute,
    ];

    /// Wire name, as used in routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::AwaitingBuyerApproval => "awaiting_buyer_approval",
            TransactionStatus::AwaitingSellerApproval => "awaiting_seller_approval",
            TransactionStatus::AwaitingBuyerCashTransfer => "awaiting_buyer_cash_transfer",
            TransactionStatus::AwaitingSellerCashApproval => "awaiting_seller_cash_approval",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Canceled => "canceled",
            TransactionStatus::Dispute => "dispute",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = ApiError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ApiError::MissingField("status"));
        }
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ApiError::InvalidEnum {
                field: "status",
                value: s.to_string(),
            })
    }
}

/// Body for POST /transactions/{network}/create.
///
/// Amounts are JSON numbers and reach the wire exactly as given. `coin_type`
/// is upper-cased before sending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    /// Seller's customer ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    /// Buyer's customer ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<String>,
    /// Crypto amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Number>,
    /// Coin symbol, e.g. `BTC`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_type: Option<String>,
    /// Fiat equivalent of `amount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_fiat: Option<Number>,
}

impl CreateTransactionRequest {
    /// Create a request with every required field set.
    pub fn new(
        seller_id: impl Into<String>,
        buyer_id: impl Into<String>,
        amount: impl Into<Number>,
        coin_type: impl Into<String>,
        amount_in_fiat: impl Into<Number>,
    ) -> Self {
        Self {
            seller_id: Some(seller_id.into()),
            buyer_id: Some(buyer_id.into()),
            amount: Some(amount.into()),
            coin_type: Some(coin_type.into()),
            amount_in_fiat: Some(amount_in_fiat.into()),
        }
    }

    /// Set the seller ID.
    pub fn with_seller_id(mut self, seller_id: impl Into<String>) -> Self {
        self.seller_id = Some(seller_id.into());
        self
    }

    /// Set the buyer ID.
    pub fn with_buyer_id(mut self, buyer_id: impl Into<String>) -> Self {
        self.buyer_id = Some(buyer_id.into());
        self
    }

    /// Set the crypto amount.
    pub fn with_amount(mut self, amount: impl Into<Number>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the coin symbol.
    pub fn with_coin_type(mut self, coin_type: impl Into<String>) -> Self {
        self.coin_type = Some(coin_type.into());
        self
    }

    /// Set the fiat amount.
    pub fn with_amount_in_fiat(mut self, amount_in_fiat: impl Into<Number>) -> Self {
        self.amount_in_fiat = Some(amount_in_fiat.into());
        self
    }

    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`] naming the first absent field.
    pub fn validate(&self) -> ApiResult<()> {
        require_str(&self.seller_id, "seller_id")?;
        require_str(&self.buyer_id, "buyer_id")?;
        require(&self.amount, "amount")?;
        require_str(&self.coin_type, "coin_type")?;
        require(&self.amount_in_fiat, "amount_in_fiat")?;
        Ok(())
    }

    pub(crate) fn into_body(mut self) -> ApiResult<Value> {
        self.validate()?;
        self.coin_type = self.coin_type.map(|c| c.to_uppercase());
        to_body(&self)
    }
}

/// Body for POST /transactions/{id}.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    /// Crypto amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Number>,
    /// Coin symbol, e.g. `USDT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_type: Option<String>,
    /// Fiat equivalent of `amount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_fiat: Option<Number>,
}

impl UpdateTransactionRequest {
    /// Create a request with every required field set.
    pub fn new(
        amount: impl Into<Number>,
        coin_type: impl Into<String>,
        amount_in_fiat: impl Into<Number>,
    ) -> Self {
        Self {
            amount: Some(amount.into()),
            coin_type: Some(coin_type.into()),
            amount_in_fiat: Some(amount_in_fiat.into()),
        }
    }

    /// Set the crypto amount.
    pub fn with_amount(mut self, amount: impl Into<Number>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the coin symbol.
    pub fn with_coin_type(mut self, coin_type: impl Into<String>) -> Self {
        self.coin_type = Some(coin_type.into());
        self
    }

    /// Set the fiat amount.
    pub fn with_amount_in_fiat(mut self, amount_in_fiat: impl Into<Number>) -> Self {
        self.amount_in_fiat = Some(amount_in_fiat.into());
        self
    }

    /// Check that every required field is present.
    pub fn validate(&self) -> ApiResult<()> {
        require(&self.amount, "amount")?;
        require_str(&self.coin_type, "coin_type")?;
        require(&self.amount_in_fiat, "amount_in_fiat")?;
        Ok(())
    }

    pub(crate) fn into_body(mut self) -> ApiResult<Value> {
        self.validate()?;
        self.coin_type = self.coin_type.map(|c| c.to_uppercase());
        to_body(&self)
    }
}
