use crate::web::FetchClient;
use levelspro_shared::api::StoreApi;
use levelspro_shared::config::ClientConfig;

/// 浏览器中使用的 API 客户端
pub type Api = StoreApi<FetchClient>;

pub fn create_api(config: &ClientConfig) -> Api {
    tracing::debug!(base_url = %config.api_base_url, "api client ready");
    StoreApi::new(config, FetchClient)
}
