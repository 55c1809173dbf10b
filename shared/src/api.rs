use crate::auth::AuthSession;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::protocol::{
    ApiEnvelope, CreateProduct, DeleteProduct, Endpoint, GetProduct, ListDashboard, ListProducts,
    Login, ProductQuery, UpdateProduct, error_reason,
};
use crate::{LoginData, LoginRequest, Product, ProductPayload};

#[cfg(test)]
mod tests;

/// 商店 API 客户端
///
/// 每个方法只发出一次请求。需要鉴权的调用显式接收会话，
/// 客户端自己从不读写存储。
#[derive(Clone, Debug)]
pub struct StoreApi<C> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> StoreApi<C> {
    pub fn new(config: &ClientConfig, client: C) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    /// 将后端返回的图片地址转换为可直接使用的绝对地址
    pub fn image_url(&self, raw: &str) -> String {
        normalize_image_url(&self.base_url, Some(raw))
    }

    fn url<E: Endpoint>(&self, endpoint: &E) -> String {
        format!(
            "{}{}{}",
            self.base_url,
            endpoint.path().trim_start_matches('/'),
            endpoint.query()
        )
    }

    /// 发送请求并处理状态码，成功时返回原始响应
    async fn dispatch<E: Endpoint>(
        &self,
        endpoint: &E,
        session: Option<&AuthSession>,
    ) -> Result<HttpResponse, ApiError> {
        let url = self.url(endpoint);
        let mut req = HttpRequest::new(&url, E::METHOD).with_header("Accept", "application/json");

        if E::AUTHORIZED {
            if let Some(token) = session.and_then(AuthSession::token) {
                req = req.with_header("Authorization", &format!("Token {}", token));
            }
        }
        if let Some(body) = endpoint.body()? {
            req = req.with_json_body(body);
        }

        tracing::debug!(method = E::METHOD.as_str(), %url, "api request");

        let resp = self.client.send(req).await.inspect_err(|e| {
            tracing::error!(%url, error = %e, "api transport failure");
        })?;

        if resp.ok() {
            return Ok(resp);
        }

        tracing::warn!(%url, status = resp.status, "api request failed");

        if resp.status == 401 && E::SESSION_SCOPED {
            return Err(ApiError::Unauthorized);
        }

        let message = error_reason(&resp.body)
            .unwrap_or_else(|| format!("{}: {}", E::FAILURE, resp.status));
        Err(ApiError::status(resp.status, message))
    }

    /// `dispatch` 之后解开响应信封
    async fn call<E: Endpoint>(
        &self,
        endpoint: &E,
        session: Option<&AuthSession>,
    ) -> Result<E::Response, ApiError> {
        let resp = self.dispatch(endpoint, session).await?;
        let envelope: ApiEnvelope<E::Response> = resp.json()?;
        envelope.into_result(E::FAILURE).inspect_err(|e| {
            tracing::warn!(error = %e, "api envelope rejected");
        })
    }

    /// 获取商品列表
    pub async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        let page = self.call(&ListProducts(query), None).await?;
        Ok(page.products)
    }

    /// 获取单个商品
    pub async fn fetch_product(&self, id: &str) -> Result<Product, ApiError> {
        self.call(&GetProduct { id }, None).await
    }

    /// 创建商品，至少需要一张图片
    pub async fn create_product(
        &self,
        payload: &ProductPayload,
        session: Option<&AuthSession>,
    ) -> Result<Product, ApiError> {
        require_images(payload)?;
        self.call(&CreateProduct { payload }, session).await
    }

    /// 全量更新商品 (PUT)，至少需要一张图片
    pub async fn update_product(
        &self,
        id: &str,
        payload: &ProductPayload,
        session: Option<&AuthSession>,
    ) -> Result<Product, ApiError> {
        require_images(payload)?;
        self.call(&UpdateProduct { id, payload }, session).await
    }

    /// 删除商品
    pub async fn delete_product(
        &self,
        id: &str,
        session: Option<&AuthSession>,
    ) -> Result<(), ApiError> {
        self.dispatch(&DeleteProduct { id }, session).await?;
        Ok(())
    }

    /// 获取当前用户自己的商品
    pub async fn fetch_dashboard(
        &self,
        query: &ProductQuery,
        session: Option<&AuthSession>,
    ) -> Result<Vec<Product>, ApiError> {
        let page = self.call(&ListDashboard(query), session).await?;
        Ok(page.products)
    }

    /// 提交登录凭据
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginData, ApiError> {
        self.call(&Login(credentials), None).await
    }
}

fn require_images(payload: &ProductPayload) -> Result<(), ApiError> {
    if payload.images_data.iter().all(|data| data.trim().is_empty()) {
        return Err(ApiError::InvalidInput(
            "At least one image is required".to_string(),
        ));
    }
    Ok(())
}

/// 图片地址规范化
///
/// - 空值返回空串
/// - 绝对 http(s) 地址原样返回
/// - 其他一律视为相对路径，与 `base` 以单个 `/` 拼接
pub fn normalize_image_url(base: &str, url: Option<&str>) -> String {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return String::new();
    };

    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }

    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}
