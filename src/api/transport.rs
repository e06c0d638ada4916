//! HTTP dispatch layer.
//!
//! [`Transport`] turns a [`RequestSpec`] (route, verb, optional JSON body,
//! per-call headers) into a response body. [`HttpTransport`] is the reqwest
//! implementation used in production; tests substitute their own.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::{Map, Value};

use crate::api::error::{ApiError, ApiResult};
use crate::config::ClientConfig;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "s-api-key";

/// HTTP verbs understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Upper-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether requests with this verb carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ApiError;

    /// Case-insensitive; anything but the five supported verbs is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "put" => Ok(Method::Put),
            "patch" => Ok(Method::Patch),
            "delete" => Ok(Method::Delete),
            _ => Err(ApiError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// A single logical request, built fresh for each call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestSpec {
    /// Path appended to the base URL, starting with `/`
    pub route: String,
    /// HTTP verb
    pub method: Method,
    /// JSON payload, ignored for GET and DELETE
    pub body: Option<Value>,
    /// Per-call headers, merged over the client defaults
    pub headers: BTreeMap<String, String>,
}

impl RequestSpec {
    /// Create a request with no body and no extra headers.
    pub fn new(route: impl Into<String>, method: Method) -> Self {
        Self {
            route: route.into(),
            method,
            body: None,
            headers: BTreeMap::new(),
        }
    }

    /// Create a GET request.
    pub fn get(route: impl Into<String>) -> Self {
        Self::new(route, Method::Get)
    }

    /// Create a POST request.
    pub fn post(route: impl Into<String>) -> Self {
        Self::new(route, Method::Post)
    }

    /// Create a request from a verb name such as `"get"` or `"PATCH"`.
    pub fn parse(route: impl Into<String>, method: &str) -> ApiResult<Self> {
        Ok(Self::new(route, method.parse()?))
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a per-call header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Something that can execute a [`RequestSpec`] and hand back the raw body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request. Non-2xx statuses are errors.
    async fn call(&self, request: RequestSpec) -> ApiResult<String>;

    /// Execute a request described by loose parts, parsing `method` first.
    ///
    /// Fails with [`ApiError::UnsupportedMethod`] without calling
    /// [`call`](Self::call) when the verb is not recognised.
    async fn dispatch(
        &self,
        route: &str,
        method: &str,
        data: Option<Value>,
        headers: BTreeMap<String, String>,
    ) -> ApiResult<String> {
        let mut request = RequestSpec::parse(route, method)?;
        request.body = data;
        request.headers = headers;
        self.call(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn call(&self, request: RequestSpec) -> ApiResult<String> {
        (**self).call(request).await
    }
}

/// reqwest-backed [`Transport`] with the API key and JSON headers preset.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the underlying HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a header is invalid or the HTTP client cannot be initialized.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut api_key = HeaderValue::from_str(config.api_key())
            .map_err(|_| ApiError::InvalidParameter("API key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        for (name, value) in config.default_headers() {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let http_client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url().to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    // =========================================================================
    // Per-verb handlers
    // =========================================================================

    fn get(&self, url: &str) -> RequestBuilder {
        self.http_client.get(url)
    }

    fn delete(&self, url: &str) -> RequestBuilder {
        self.http_client.delete(url)
    }

    fn post(&self, url: &str, body: &Value) -> RequestBuilder {
        self.http_client.post(url).json(body)
    }

    fn put(&self, url: &str, body: &Value) -> RequestBuilder {
        self.http_client.put(url).json(body)
    }

    fn patch(&self, url: &str, body: &Value) -> RequestBuilder {
        self.http_client.patch(url).json(body)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, request: RequestSpec) -> ApiResult<String> {
        let url = self.url(&request.route);
        let body = request.body.unwrap_or_else(|| Value::Object(Map::new()));

        let mut builder = match request.method {
            Method::Get => self.get(&url),
            Method::Delete => self.delete(&url),
            Method::Post => self.post(&url, &body),
            Method::Put => self.put(&url, &body),
            Method::Patch => self.patch(&url, &body),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        tracing::debug!(method = %request.method, route = %request.route, "Dispatching request");
        let response = builder.send().await?;
        tracing::debug!(status = %response.status(), route = %request.route, "Received response");

        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport_for(server: &MockServer) -> HttpTransport {
        let config = ClientConfig::new(server.uri(), "test-key", "testnet").unwrap();
        HttpTransport::new(&config).unwrap()
    }

    #[test]
    fn test_method_parsing_is_case_insensitive() {
        for name in ["get", "GET", "Get", "gEt"] {
            assert_eq!(name.parse::<Method>().unwrap(), Method::Get);
        }
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert_eq!("Put".parse::<Method>().unwrap(), Method::Put);
        assert_eq!("PATCH".parse::<Method>().unwrap(), Method::Patch);
        assert_eq!("delete".parse::<Method>().unwrap(), Method::Delete);
    }

    #[test]
    fn test_method_parsing_rejects_unknown() {
        for name in ["HEAD", "OPTIONS", "", "gett"] {
            match name.parse::<Method>() {
                Err(ApiError::UnsupportedMethod(m)) => assert_eq!(m, name),
                other => panic!("expected UnsupportedMethod for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_method_body_rules() {
        assert!(!Method::Get.has_body());
        assert!(!Method::Delete.has_body());
        assert!(Method::Post.has_body());
        assert!(Method::Put.has_body());
        assert!(Method::Patch.has_body());
        assert_eq!(Method::default(), Method::Get);
    }

    #[test]
    fn test_request_spec_builder() {
        let request = RequestSpec::parse("/fee/update", "post")
            .unwrap()
            .with_body(json!({"amount": 2}))
            .with_header("X-Trace", "abc");

        assert_eq!(request.route, "/fee/update");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body, Some(json!({"amount": 2})));
        assert_eq!(request.headers.get("X-Trace").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_invalid_default_header_rejected() {
        let config = ClientConfig::new("https://api.scalex.africa", "key", "testnet")
            .unwrap()
            .with_header("bad header", "value");
        assert!(matches!(
            HttpTransport::new(&config),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[tokio::test]
    async fn test_get_sends_fixed_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/supported-coins"))
            .and(header("s-api-key", "test-key"))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let body = transport_for(&server)
            .call(RequestSpec::get("/supported-coins"))
            .await
            .unwrap();
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_mutating_verbs_send_json_body() {
        let server = MockServer::start().await;
        for verb in ["POST", "PUT", "PATCH"] {
            Mock::given(method(verb))
                .and(path("/resource"))
                .and(body_json(json!({"amount": 10})))
                .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
                .expect(1)
                .mount(&server)
                .await;
        }

        let transport = transport_for(&server);
        for verb in ["post", "Put", "PATCH"] {
            transport
                .dispatch("/resource", verb, Some(json!({"amount": 10})), BTreeMap::new())
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_missing_body_is_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customers/testnet/create"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        transport_for(&server)
            .call(RequestSpec::post("/customers/testnet/create"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_per_call_headers_are_merged() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/resource/1"))
            .and(header("s-api-key", "test-key"))
            .and(header("x-request-id", "42"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let request = RequestSpec::new("/resource/1", Method::Delete).with_header("x-request-id", "42");
        transport_for(&server).call(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .call(RequestSpec::get("/transactions/missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_unsupported_method_never_sends() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .dispatch("/supported-coins", "HEAD", None, BTreeMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedMethod(_)));
    }
}
