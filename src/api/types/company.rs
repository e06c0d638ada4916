//! Company account types: registration and fees.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::{require, require_str, to_body};
use crate::api::error::ApiResult;

/// Body for POST /auth/register.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl RegisterRequest {
    /// Create a request with every required field set.
    pub fn new(
        company_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            company_name: Some(company_name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            country: Some(country.into()),
        }
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Check that every required field is present.
    pub fn validate(&self) -> ApiResult<()> {
        require_str(&self.company_name, "company_name")?;
        require_str(&self.email, "email")?;
        require_str(&self.password, "password")?;
        require_str(&self.country, "country")?;
        Ok(())
    }

    pub(crate) fn into_body(self) -> ApiResult<Value> {
        self.validate()?;
        to_body(&self)
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("company_name", &self.company_name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("country", &self.country)
            .finish()
    }
}

/// Body for POST /fee/update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateFeeRequest {
    /// New fee amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Number>,
}

impl UpdateFeeRequest {
    pub fn new(amount: impl Into<Number>) -> Self {
        Self {
            amount: Some(amount.into()),
        }
    }

    /// Check that the amount is present.
    pub fn validate(&self) -> ApiResult<()> {
        require(&self.amount, "amount")?;
        Ok(())
    }

    pub(crate) fn into_body(self) -> ApiResult<Value> {
        self.validate()?;
        to_body(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use serde_json::json;

    #[test]
    fn test_register_body() {
        let body = RegisterRequest::new("Acme Ltd", "ops@acme.test", "hunter2", "Nigeria")
            .into_body()
            .unwrap();
        assert_eq!(
            body,
            json!({
                "company_name": "Acme Ltd",
                "email": "ops@acme.test",
                "password": "hunter2",
                "country": "Nigeria"
            })
        );
    }

    #[test]
    fn test_register_missing_fields() {
        let request = RegisterRequest::default()
            .with_company_name("Acme Ltd")
            .with_email("ops@acme.test")
            .with_country("Ghana");
        assert!(matches!(request.validate(), Err(ApiError::MissingField("password"))));

        let request = RegisterRequest::new("", "ops@acme.test", "pw", "Ghana");
        assert!(matches!(request.validate(), Err(ApiError::MissingField("company_name"))));
    }

    #[test]
    fn test_register_debug_hides_password() {
        let request = RegisterRequest::new("Acme Ltd", "ops@acme.test", "hunter2", "Kenya");
        assert!(!format!("{:?}", request).contains("hunter2"));
    }

    #[test]
    fn test_update_fee() {
        assert_eq!(UpdateFeeRequest::new(2).into_body().unwrap(), json!({"amount": 2}));
        assert!(matches!(
            UpdateFeeRequest::default().validate(),
            Err(ApiError::MissingField("amount"))
        ));
    }
}
