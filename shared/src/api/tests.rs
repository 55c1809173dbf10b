use super::*;
use crate::Category;
use crate::http::MockHttpClient;
use crate::protocol::HttpMethod;
use serde_json::json;

// =========================================================
// 辅助函数
// =========================================================

const BASE: &str = "http://h/";

fn create_api() -> StoreApi<MockHttpClient> {
    let config = ClientConfig::default().with_api_base_url(BASE);
    StoreApi::new(&config, MockHttpClient::new())
}

fn product_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "category": "Laptops",
        "price": "950,000 TZS",
        "specs": ["i5", "8GB RAM"],
        "warranty": "6 Months",
        "image_urls": ["/media/a.jpg"],
        "created_at": "2025-01-02T10:00:00Z"
    })
}

fn list_json(products: Vec<serde_json::Value>) -> serde_json::Value {
    let count = products.len();
    json!({
        "success": true,
        "data": { "products": products, "count": count, "limit": 20, "offset": 0, "total_pages": 1 }
    })
}

fn session() -> AuthSession {
    AuthSession {
        username: "admin".to_string(),
        email: None,
        user_id: Some("1".to_string()),
        token: "tok123".to_string(),
        logged_in: true,
    }
}

fn payload() -> ProductPayload {
    ProductPayload {
        name: "Dell OptiPlex 7080".to_string(),
        category: Category::Desktops,
        price: "780,000 TZS".to_string(),
        specs: vec!["i7".to_string()],
        warranty: "3 Months".to_string(),
        images_data: vec!["aGVsbG8=".to_string()],
    }
}

// =========================================================
// normalize_image_url 测试
// =========================================================

#[test]
fn test_normalize_absolute_url_unchanged() {
    assert_eq!(
        normalize_image_url(BASE, Some("https://x/y.jpg")),
        "https://x/y.jpg"
    );
    assert_eq!(normalize_image_url(BASE, Some("http://x/y.jpg")), "http://x/y.jpg");
}

#[test]
fn test_normalize_rooted_path_has_single_slash() {
    assert_eq!(
        normalize_image_url("http://h/", Some("/img/a.jpg")),
        "http://h/img/a.jpg"
    );
    assert_eq!(
        normalize_image_url("http://h", Some("/img/a.jpg")),
        "http://h/img/a.jpg"
    );
}

#[test]
fn test_normalize_bare_relative_path() {
    assert_eq!(
        normalize_image_url("http://h/", Some("media/a.jpg")),
        "http://h/media/a.jpg"
    );
}

#[test]
fn test_normalize_empty_input() {
    assert_eq!(normalize_image_url(BASE, Some("")), "");
    assert_eq!(normalize_image_url(BASE, None), "");
}

#[test]
fn test_api_image_url_uses_configured_base() {
    let api = create_api();
    assert_eq!(api.image_url("/media/a.jpg"), "http://h/media/a.jpg");
}

// =========================================================
// fetch_products 测试
// =========================================================

#[tokio::test]
async fn test_fetch_products_returns_nested_list() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Get,
        "http://h/api/products/",
        200,
        list_json(vec![product_json("1", "HP EliteBook"), product_json("2", "Mouse")]),
    );

    let products = api.fetch_products(&ProductQuery::default()).await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "HP EliteBook");
    assert_eq!(products[0].category, Category::Laptops);
}

#[tokio::test]
async fn test_fetch_products_sends_query_and_no_auth() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Get,
        "http://h/api/products/?limit=6&trending=true",
        200,
        list_json(vec![]),
    );

    let products = api.fetch_products(&ProductQuery::trending()).await.unwrap();
    assert!(products.is_empty());

    let req = api.client.last_request().unwrap();
    assert_eq!(req.header("Authorization"), None);
}

#[tokio::test]
async fn test_fetch_products_non_2xx() {
    let api = create_api();
    api.client
        .mock_raw(HttpMethod::Get, "http://h/api/products/", 500, "oops");

    let err = api.fetch_products(&ProductQuery::default()).await.unwrap_err();
    assert_eq!(err, ApiError::status(500, "Failed to fetch products: 500"));
}

#[tokio::test]
async fn test_fetch_products_rejected_envelope() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Get,
        "http://h/api/products/",
        200,
        json!({ "success": false, "error": "Database unavailable" }),
    );

    let err = api.fetch_products(&ProductQuery::default()).await.unwrap_err();
    assert_eq!(err, ApiError::Rejected("Database unavailable".to_string()));
}

#[tokio::test]
async fn test_fetch_products_network_failure() {
    let api = create_api();
    api.client
        .mock_network_failure(HttpMethod::Get, "http://h/api/products/", "offline");

    let err = api.fetch_products(&ProductQuery::default()).await.unwrap_err();
    assert_eq!(err, ApiError::Network("offline".to_string()));
}

#[tokio::test]
async fn test_fetch_products_malformed_body() {
    let api = create_api();
    api.client
        .mock_raw(HttpMethod::Get, "http://h/api/products/", 200, "<html>");

    let err = api.fetch_products(&ProductQuery::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =========================================================
// fetch_product 测试
// =========================================================

#[tokio::test]
async fn test_fetch_product_accepts_numeric_id() {
    let api = create_api();
    let mut body = product_json("7", "Custom Gaming PC");
    body["id"] = json!(7);
    body["category"] = json!("Gaming PCs");
    api.client.mock_response(
        HttpMethod::Get,
        "http://h/api/products/7/",
        200,
        json!({ "success": true, "data": body }),
    );

    let product = api.fetch_product("7").await.unwrap();
    assert_eq!(product.id, "7");
    assert_eq!(product.category, Category::GamingPcs);
}

#[tokio::test]
async fn test_fetch_product_missing() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Get,
        "http://h/api/products/9/",
        404,
        json!({ "success": false, "error": "Product not found" }),
    );

    let err = api.fetch_product("9").await.unwrap_err();
    assert_eq!(err, ApiError::status(404, "Product not found"));
}

#[tokio::test]
async fn test_fetch_product_success_without_data() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Get,
        "http://h/api/products/9/",
        200,
        json!({ "success": true }),
    );

    let err = api.fetch_product("9").await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
}

// =========================================================
// create / update 测试
// =========================================================

#[tokio::test]
async fn test_create_product_posts_json_with_token() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Post,
        "http://h/api/products/",
        201,
        json!({ "success": true, "data": product_json("10", "Dell OptiPlex 7080") }),
    );

    let created = api.create_product(&payload(), Some(&session())).await.unwrap();
    assert_eq!(created.id, "10");

    let req = api.client.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.header("Authorization"), Some("Token tok123"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));

    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["category"], "Desktops");
    assert_eq!(body["images_data"], json!(["aGVsbG8="]));
    assert_eq!(body["specs"], json!(["i7"]));
}

#[tokio::test]
async fn test_create_product_without_images_never_sends() {
    let api = create_api();
    let mut payload = payload();
    payload.images_data.clear();

    let err = api.create_product(&payload, Some(&session())).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidInput("At least one image is required".to_string())
    );
    assert_eq!(api.client.request_count(), 0);
}

#[tokio::test]
async fn test_create_product_surfaces_server_details() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Post,
        "http://h/api/products/",
        400,
        json!({ "details": "Invalid image data" }),
    );

    let err = api.create_product(&payload(), Some(&session())).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid image data");
}

#[tokio::test]
async fn test_update_product_uses_put() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Put,
        "http://h/api/products/10/",
        200,
        json!({ "success": true, "data": product_json("10", "Dell OptiPlex 7080") }),
    );

    api.update_product("10", &payload(), Some(&session()))
        .await
        .unwrap();
    assert_eq!(api.client.last_request().unwrap().method, HttpMethod::Put);
}

#[tokio::test]
async fn test_update_product_requires_images() {
    let api = create_api();
    let mut payload = payload();
    payload.images_data = vec!["  ".to_string()];

    assert!(api.update_product("10", &payload, None).await.is_err());
    assert_eq!(api.client.request_count(), 0);
}

// =========================================================
// delete 测试
// =========================================================

#[tokio::test]
async fn test_delete_product_accepts_empty_204() {
    let api = create_api();
    api.client
        .mock_raw(HttpMethod::Delete, "http://h/api/products/10/", 204, "");

    api.delete_product("10", Some(&session())).await.unwrap();
    let req = api.client.last_request().unwrap();
    assert_eq!(req.header("Authorization"), Some("Token tok123"));
}

#[tokio::test]
async fn test_delete_product_surfaces_server_error() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Delete,
        "http://h/api/products/10/",
        403,
        json!({ "error": "You can only delete your own products" }),
    );

    let err = api.delete_product("10", Some(&session())).await.unwrap_err();
    assert_eq!(err.to_string(), "You can only delete your own products");
}

// =========================================================
// dashboard 测试
// =========================================================

#[tokio::test]
async fn test_fetch_dashboard_sends_token() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Get,
        "http://h/api/dashboard/",
        200,
        list_json(vec![product_json("3", "Wireless Mouse")]),
    );

    let products = api
        .fetch_dashboard(&ProductQuery::default(), Some(&session()))
        .await
        .unwrap();
    assert_eq!(products.len(), 1);

    let req = api.client.last_request().unwrap();
    assert_eq!(req.header("Authorization"), Some("Token tok123"));
    assert_eq!(req.body, None);
}

#[tokio::test]
async fn test_fetch_dashboard_401_asks_to_login_again() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Get,
        "http://h/api/dashboard/",
        401,
        json!({ "detail": "Invalid token." }),
    );

    let err = api
        .fetch_dashboard(&ProductQuery::default(), Some(&session()))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Authentication required. Please login again.");
}

#[tokio::test]
async fn test_invalid_session_sends_no_header() {
    let api = create_api();
    api.client.mock_response(
        HttpMethod::Get,
        "http://h/api/dashboard/",
        200,
        list_json(vec![]),
    );

    let mut stale = session();
    stale.logged_in = false;
    api.fetch_dashboard(&ProductQuery::default(), Some(&stale))
        .await
        .unwrap();
    assert_eq!(api.client.last_request().unwrap().header("Authorization"), None);
}
