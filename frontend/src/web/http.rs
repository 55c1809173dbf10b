//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 实现共享层的 `HttpClient` trait。
//! 状态码原样交给上层判断，这里只处理传输层失败。

use gloo_net::http::{Request, RequestBuilder};
use levelspro_shared::error::ApiError;
use levelspro_shared::http::{HttpClient, HttpRequest, HttpResponse};
use levelspro_shared::protocol::HttpMethod;

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = builder(req.method, &req.url);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(network)?;

        let resp = request.send().await.map_err(network)?;
        let status = resp.status();

        // 204 等响应没有可读的响应体
        let body = resp.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
