use crate::config::Config;
use crate::models::{
    dashboard::DashboardSummary,
    error::AppError,
    indoor::{
        IndoorCreateRequest, IndoorDetail, IndoorDetailResponse, IndoorListItem,
        IndoorUpdateRequest, IndoorUpdateResponse,
    },
    plant::{Plant, PlantCreateRequest, PlantWaterRequest, WaterPlantResponse},
};
use crate::services::identity::IdentityProvider;
use reqwest::{Method, StatusCode, Url, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

// CONSTANTS
/// Header carrying the acting Telegram user id
pub const USER_ID_HEADER: &str = "X-Telegram-UserId";

/// Backend endpoint paths, relative to the base URL.
pub mod endpoints {
    pub const DASHBOARD: &str = "/api/dashboard";
    pub const INDOORS: &str = "/api/indoors";
    pub const PLANTS: &str = "/api/plants";

    pub fn indoor(indoor_id: &str) -> String {
        format!("{INDOORS}/{indoor_id}")
    }

    pub fn water_plant(plant_id: &str) -> String {
        format!("{PLANTS}/{plant_id}/water")
    }
}

/// A primitive query-string value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

// API CONFIGURATION
/// Configuration for the PlantulasBot API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves an endpoint path against the base URL and appends the query parameters in order.
    pub fn resolve_url(&self, path: &str, query: &[(&str, QueryValue)]) -> Result<Url, AppError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| AppError::Config(format!("Invalid base URL '{}': {e}", self.base_url)))?;
        let mut url = base
            .join(path)
            .map_err(|e| AppError::Config(format!("Invalid endpoint '{path}': {e}")))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, &value.to_string());
            }
        }

        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
        }
    }
}

// RESPONSE HANDLING
/// Parses a response body as JSON, treating empty or malformed bodies as `null`.
pub fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}

/// Extracts a human-readable message from an error body.
///
/// Looks at `detail` first (a string, or a list of validation errors carrying `msg`), then
/// `message`, and falls back to `HTTP <status>`.
pub fn error_message(status: StatusCode, body: &Value) -> String {
    let detail = match body.get("detail") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Array(items)) if !items.is_empty() => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                Some(Value::Array(items.clone()).to_string())
            } else {
                Some(messages.join("; "))
            }
        }
        Some(other @ Value::Object(_)) => Some(other.to_string()),
        _ => None,
    };

    detail
        .or_else(|| {
            body.get("message")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

/// Turns a status and raw body into the parsed JSON body, or an `AppError::Http` for non-2xx.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<Value, AppError> {
    let value = parse_body(body);

    if status.is_success() {
        Ok(value)
    } else {
        Err(AppError::Http {
            message: error_message(status, &value),
            status: status.as_u16(),
        })
    }
}

/// Interprets the response and deserializes a 2xx body into `T`.
pub fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    path: &str,
) -> Result<T, AppError> {
    let value = interpret_response(status, body)?;
    serde_json::from_value(value)
        .map_err(|e| AppError::Data(format!("Unexpected response from {path}: {e}")))
}

/// Browser console logging. The console bindings only exist on wasm32, host builds stay silent.
mod console {
    #[cfg(target_arch = "wasm32")]
    pub fn debug(message: &str) {
        gloo::console::debug!(message);
    }

    #[cfg(target_arch = "wasm32")]
    pub fn warn(message: &str) {
        gloo::console::warn!(message);
    }

    #[cfg(target_arch = "wasm32")]
    pub fn error(message: &str) {
        gloo::console::error!(message);
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn debug(_message: &str) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn warn(_message: &str) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn error(_message: &str) {}
}

// API CLIENT
/// HTTP client for the PlantulasBot backend.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    identity: Rc<dyn IdentityProvider>,
}

impl ApiClient {
    /// Creates a new client with default configuration.
    pub fn new(identity: Rc<dyn IdentityProvider>) -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default(), identity)
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(
        config: ApiConfig,
        identity: Rc<dyn IdentityProvider>,
    ) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();
        // Native builds talk to the backend directly, never through a system proxy
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.no_proxy();

        let http = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            identity,
        })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Returns the identity provider attached to every request.
    pub fn identity(&self) -> &Rc<dyn IdentityProvider> {
        &self.identity
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, &[], None).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, QueryValue)],
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, &[], Some(to_json(body)?))
            .await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, &[], Some(to_json(body)?))
            .await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, &[], Some(to_json(body)?))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, &[], None).await
    }

    /// Builds the outgoing request: resolved URL, JSON content type and the identity header.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, QueryValue)],
        body: Option<String>,
    ) -> Result<reqwest::Request, AppError> {
        let url = self.config.resolve_url(path, query)?;

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_ID_HEADER, self.identity.user_id());
        if let Some(body) = body {
            request = request.body(body);
        }

        request
            .build()
            .map_err(|e| AppError::Config(format!("Invalid request for '{path}': {e}")))
    }

    /// Executes a single request. No retry, no timeout.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, QueryValue)],
        body: Option<String>,
    ) -> Result<T, AppError> {
        let request = self.build_request(method.clone(), path, query, body)?;
        console::debug(&format!("{method} {}", request.url()));

        let response = self.http.execute(request).await.map_err(|e| {
            console::error(&format!("{method} {path} failed: {e}"));
            self.classify_error(e)
        })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        decode_response(status, &text, path).inspect_err(|e| {
            console::warn(&format!("{method} {path} returned {status}: {e}"));
        })
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("Request error: {error}"))
        } else {
            AppError::Network(error.to_string())
        }
    }

    // RESOURCES
    /// `GET /api/dashboard`
    pub async fn fetch_dashboard(&self) -> Result<DashboardSummary, AppError> {
        self.get(endpoints::DASHBOARD).await
    }

    /// `GET /api/indoors`
    pub async fn fetch_indoors(&self) -> Result<Vec<IndoorListItem>, AppError> {
        self.get(endpoints::INDOORS).await
    }

    /// `GET /api/indoors/{id}`
    pub async fn fetch_indoor_detail(
        &self,
        indoor_id: &str,
    ) -> Result<IndoorDetailResponse, AppError> {
        self.get(&endpoints::indoor(indoor_id)).await
    }

    /// `PATCH /api/indoors/{id}`
    pub async fn update_indoor(
        &self,
        indoor_id: &str,
        request: &IndoorUpdateRequest,
    ) -> Result<IndoorUpdateResponse, AppError> {
        self.patch(&endpoints::indoor(indoor_id), request).await
    }

    /// `POST /api/indoors`
    pub async fn create_indoor(
        &self,
        request: &IndoorCreateRequest,
    ) -> Result<IndoorDetail, AppError> {
        self.post(endpoints::INDOORS, request).await
    }

    /// `POST /api/plants`
    pub async fn create_plant(&self, request: &PlantCreateRequest) -> Result<Plant, AppError> {
        self.post(endpoints::PLANTS, request).await
    }

    /// `POST /api/plants/{id}/water`
    pub async fn water_plant(
        &self,
        plant_id: &str,
        request: &PlantWaterRequest,
    ) -> Result<WaterPlantResponse, AppError> {
        self.post(&endpoints::water_plant(plant_id), request).await
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|e| AppError::Data(format!("Failed to serialize request body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::identity::StaticIdentity;
    use serde_json::json;

    fn client_for(user_id: &str) -> ApiClient {
        let config = ApiConfig::builder()
            .base_url("http://plants.local:8000")
            .build();
        ApiClient::with_config(config, Rc::new(StaticIdentity::new(user_id))).unwrap()
    }

    fn body_json(request: &reqwest::Request) -> Value {
        let bytes = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .expect("request has a buffered body");
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::API_BASE_URL);
    }

    #[test]
    fn test_resolve_url_joins_path() {
        let config = ApiConfig::builder()
            .base_url("http://plants.local:8000")
            .build();

        let url = config.resolve_url(&endpoints::indoor("abc"), &[]).unwrap();
        assert_eq!(url.as_str(), "http://plants.local:8000/api/indoors/abc");
    }

    #[test]
    fn test_resolve_url_appends_query() {
        let config = ApiConfig::builder().base_url("http://localhost:8000").build();

        let url = config
            .resolve_url(
                endpoints::DASHBOARD,
                &[
                    ("days", QueryValue::from(7u32)),
                    ("only_due", true.into()),
                    ("q", "ficus lyrata".into()),
                ],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/dashboard?days=7&only_due=true&q=ficus+lyrata"
        );
    }

    #[test]
    fn test_resolve_url_invalid_base() {
        let config = ApiConfig::builder().base_url("not a url").build();
        let err = config.resolve_url(endpoints::INDOORS, &[]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(endpoints::water_plant("p1"), "/api/plants/p1/water");
        assert_eq!(endpoints::indoor("i9"), "/api/indoors/i9");
    }

    #[test]
    fn test_error_message_from_detail() {
        let err = interpret_response(StatusCode::NOT_FOUND, r#"{"detail": "X"}"#).unwrap_err();
        assert_eq!(err.to_string(), "X");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_error_message_from_message_field() {
        let body = json!({ "message": "Plant not found" });
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, &body),
            "Plant not found"
        );
    }

    #[test]
    fn test_error_message_from_validation_list() {
        let body = json!({
            "detail": [
                { "loc": ["body", "liters"], "msg": "field required" },
                { "loc": ["body", "name"], "msg": "value is not a valid string" }
            ]
        });
        assert_eq!(
            error_message(StatusCode::UNPROCESSABLE_ENTITY, &body),
            "field required; value is not a valid string"
        );
    }

    #[test]
    fn test_error_message_unparseable_body() {
        let err = interpret_response(StatusCode::BAD_GATEWAY, "<html>oops</html>").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_success_with_unparseable_body_is_null() {
        let value = interpret_response(StatusCode::OK, "").unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_query_value_display() {
        assert_eq!(QueryValue::from(1.5).to_string(), "1.5");
        assert_eq!(QueryValue::from(-3i64).to_string(), "-3");
        assert_eq!(QueryValue::from(false).to_string(), "false");
    }

    #[test]
    fn test_build_request_sets_headers_and_url() {
        let client = client_for("42");
        let request = client
            .build_request(
                Method::GET,
                endpoints::DASHBOARD,
                &[("days", QueryValue::from(3u32))],
                None,
            )
            .unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://plants.local:8000/api/dashboard?days=3"
        );
        assert_eq!(request.headers()[USER_ID_HEADER], "42");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_build_request_serializes_body() {
        let client = client_for("7");
        let water = PlantWaterRequest {
            liters: 1.5,
            date: None,
            note: Some("con abono".to_string()),
            ferts: None,
        };

        let request = client
            .build_request(
                Method::POST,
                &endpoints::water_plant("p1"),
                &[],
                Some(to_json(&water).unwrap()),
            )
            .unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.url().as_str(),
            "http://plants.local:8000/api/plants/p1/water"
        );
        assert_eq!(
            body_json(&request),
            json!({ "liters": 1.5, "note": "con abono" })
        );
    }

    #[test]
    fn test_build_request_reads_identity_each_time() {
        let client = client_for("42");
        client.identity().set_user_id("99");

        let request = client
            .build_request(Method::GET, endpoints::INDOORS, &[], None)
            .unwrap();
        assert_eq!(request.headers()[USER_ID_HEADER], "99");
    }

    #[test]
    fn test_build_request_invalid_base_url() {
        let config = ApiConfig::builder().base_url("not a url").build();
        let client =
            ApiClient::with_config(config, Rc::new(StaticIdentity::new("1"))).unwrap();

        let err = client
            .build_request(Method::GET, endpoints::INDOORS, &[], None)
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_decode_response_shape_mismatch_is_data_error() {
        let err = decode_response::<DashboardSummary>(
            StatusCode::OK,
            r#"{"unexpected": true}"#,
            endpoints::DASHBOARD,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Data(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_decode_response_keeps_http_error() {
        let err = decode_response::<DashboardSummary>(
            StatusCode::NOT_FOUND,
            r#"{"detail": "Indoor not found"}"#,
            endpoints::DASHBOARD,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Indoor not found");
        assert_eq!(err.status(), Some(404));
    }
}
