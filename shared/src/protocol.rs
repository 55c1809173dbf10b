use crate::error::ApiError;
use crate::{LoginData, LoginRequest, Product, ProductPayload, ProductsPage};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait Endpoint {
    /// The type carried in the envelope's `data` field.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Prefix of the human-readable error when the server gives no reason.
    const FAILURE: &'static str;
    /// Whether an `Authorization` header is attached when a session exists.
    const AUTHORIZED: bool = false;
    /// A 401 on this endpoint means the session itself is no longer valid.
    const SESSION_SCOPED: bool = false;

    /// Path relative to the API base, always ending with `/`.
    fn path(&self) -> String;

    fn query(&self) -> String {
        String::new()
    }

    fn body(&self) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}

// =========================================================
// 响应信封 (Response Envelope)
// =========================================================

/// `{ success, data, message?, error?, details? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// 服务器给出的原因：`error` 优先，其次 `details`
    pub fn reason(&self) -> Option<String> {
        self.error
            .clone()
            .or_else(|| self.details.clone())
            .filter(|r| !r.trim().is_empty())
    }

    pub fn into_result(self, failure: &str) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(
                self.reason().unwrap_or_else(|| failure.to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Rejected(format!("{}: empty response", failure)))
    }
}

/// 非 2xx 时尽力从响应体中取出服务器的错误文本
pub fn error_reason(body: &str) -> Option<String> {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.reason())
}

// =========================================================
// 查询参数 (Query Parameters)
// =========================================================

/// 列表查询过滤条件，全部可选
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<String>,
    pub trending: Option<bool>,
}

impl ProductQuery {
    /// 热门商品：`trending=true` 且最多 `TRENDING_LIMIT` 个
    pub fn trending() -> Self {
        Self {
            limit: Some(crate::TRENDING_LIMIT),
            trending: Some(true),
            ..Self::default()
        }
    }

    /// 编码为 `?a=b&c=d`；没有参数时为空串
    ///
    /// 字符串参数非空才追加，`limit`/`offset` 非零才追加。
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        let mut push_text = |key: &'static str, value: &Option<String>| {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, v.to_string()));
            }
        };
        push_text("category", &self.category);
        push_text("search", &self.search);

        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset.filter(|n| *n > 0) {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(sort) = self.sort.as_deref().filter(|v| !v.is_empty()) {
            pairs.push(("sort", sort.to_string()));
        }
        if let Some(trending) = self.trending {
            pairs.push(("trending", trending.to_string()));
        }

        if pairs.is_empty() {
            return String::new();
        }

        let encoded: Vec<String> = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

// =========================================================
// Request Definitions
// =========================================================

fn encode_body<T: Serialize>(value: &T) -> Result<Option<String>, ApiError> {
    serde_json::to_string(value)
        .map(Some)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// `GET /api/products/`
#[derive(Debug)]
pub struct ListProducts<'a>(pub &'a ProductQuery);

impl Endpoint for ListProducts<'_> {
    type Response = ProductsPage;
    const METHOD: HttpMethod = HttpMethod::Get;
    const FAILURE: &'static str = "Failed to fetch products";

    fn path(&self) -> String {
        "api/products/".to_string()
    }

    fn query(&self) -> String {
        self.0.to_query_string()
    }
}

/// `GET /api/products/{id}/`
#[derive(Debug)]
pub struct GetProduct<'a> {
    pub id: &'a str,
}

impl Endpoint for GetProduct<'_> {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Get;
    const FAILURE: &'static str = "Failed to fetch product";

    fn path(&self) -> String {
        format!("api/products/{}/", urlencoding::encode(self.id))
    }
}

/// `POST /api/products/`
#[derive(Debug)]
pub struct CreateProduct<'a> {
    pub payload: &'a ProductPayload,
}

impl Endpoint for CreateProduct<'_> {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Post;
    const FAILURE: &'static str = "Failed to create product";
    const AUTHORIZED: bool = true;

    fn path(&self) -> String {
        "api/products/".to_string()
    }

    fn body(&self) -> Result<Option<String>, ApiError> {
        encode_body(self.payload)
    }
}

/// `PUT /api/products/{id}/` (全量替换)
#[derive(Debug)]
pub struct UpdateProduct<'a> {
    pub id: &'a str,
    pub payload: &'a ProductPayload,
}

impl Endpoint for UpdateProduct<'_> {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Put;
    const FAILURE: &'static str = "Failed to update product";
    const AUTHORIZED: bool = true;

    fn path(&self) -> String {
        format!("api/products/{}/", urlencoding::encode(self.id))
    }

    fn body(&self) -> Result<Option<String>, ApiError> {
        encode_body(self.payload)
    }
}

/// `DELETE /api/products/{id}/`
///
/// 成功时可能是 204 无响应体，只看状态码。
#[derive(Debug)]
pub struct DeleteProduct<'a> {
    pub id: &'a str,
}

impl Endpoint for DeleteProduct<'_> {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    const FAILURE: &'static str = "Failed to delete product";
    const AUTHORIZED: bool = true;

    fn path(&self) -> String {
        format!("api/products/{}/", urlencoding::encode(self.id))
    }
}

/// `GET /api/dashboard/`：当前用户自己的商品
#[derive(Debug)]
pub struct ListDashboard<'a>(pub &'a ProductQuery);

impl Endpoint for ListDashboard<'_> {
    type Response = ProductsPage;
    const METHOD: HttpMethod = HttpMethod::Get;
    const FAILURE: &'static str = "Failed to fetch dashboard";
    const AUTHORIZED: bool = true;
    const SESSION_SCOPED: bool = true;

    fn path(&self) -> String {
        "api/dashboard/".to_string()
    }

    fn query(&self) -> String {
        // 面板接口不支持 trending
        ProductQuery {
            trending: None,
            ..self.0.clone()
        }
        .to_query_string()
    }
}

/// `POST /api/login/`
#[derive(Debug)]
pub struct Login<'a>(pub &'a LoginRequest);

impl Endpoint for Login<'_> {
    type Response = LoginData;
    const METHOD: HttpMethod = HttpMethod::Post;
    const FAILURE: &'static str = "Login failed";

    fn path(&self) -> String {
        "api/login/".to_string()
    }

    fn body(&self) -> Result<Option<String>, ApiError> {
        encode_body(self.0)
    }
}
