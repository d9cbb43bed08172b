use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::system::middleware::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes(db: DatabaseConnection, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Клиентские маршруты (/manage и т.п.) отдают index.html
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Products
        .route(
            "/api/products",
            get(handlers::a001_product::list_all).post(handlers::a001_product::create),
        )
        .route(
            "/api/products/:id",
            get(handlers::a001_product::get_by_id)
                .put(handlers::a001_product::update)
                .delete(handlers::a001_product::delete),
        )
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::domain::a001_product::aggregate::{MessageResponse, Product};
    use serde_json::json;
    use tower::ServiceExt;

    async fn app() -> Router {
        let db = connect_in_memory().await;
        configure_routes(db, Path::new("dist"))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn list(app: &Router) -> Vec<Product> {
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/products"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_update_delete_flow() {
        let app = app().await;
        assert!(list(&app).await.is_empty());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/products",
                json!({
                    "company": "Acme",
                    "product_name": "Widget",
                    "package_unit": "Box",
                    "contact": ""
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: MessageResponse = body_json(response).await;
        assert!(!created.message.is_empty());

        let products = list(&app).await;
        assert_eq!(products.len(), 1);
        let id = products[0].id;

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/products/{}", id),
                json!({
                    "company": "Acme",
                    "product_name": "Widget XL",
                    "package_unit": "Pallet"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let response = app
            .clone()
            .oneshot(empty_request("GET", &format!("/api/products/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated: Product = body_json(response).await;
        assert_eq!(updated.product_name, "Widget XL");
        assert_eq!(updated.package_unit, "Pallet");

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/api/products/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let deleted: MessageResponse = body_json(response).await;
        assert!(!deleted.message.is_empty());
        assert!(list(&app).await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let app = app().await;
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/products/404",
                json!({"company": "A", "product_name": "B", "package_unit": "C"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(empty_request("DELETE", "/api/products/404"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blank_required_field_is_bad_request() {
        let app = app().await;
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/products",
                json!({"company": " ", "product_name": "Widget", "package_unit": "Box"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(list(&app).await.is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = app().await;
        let response = app
            .oneshot(empty_request("DELETE", "/api/products/abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
