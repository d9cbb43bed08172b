use super::state::SaveRequest;
use crate::shared::browser;
use contracts::domain::a001_product::aggregate::{MessageResponse, Product, ProductId};
use gloo_net::http::{Request, Response};
use std::future::Future;

use crate::shared::api_utils::api_url;

/// Everything the page commands need from the outside world: the REST
/// backend and the blocking browser dialogs.
pub trait ProductGateway {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, String>>;
    fn save(&self, request: &SaveRequest) -> impl Future<Output = Result<MessageResponse, String>>;
    fn delete(&self, id: ProductId) -> impl Future<Output = Result<MessageResponse, String>>;
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Gateway backed by `gloo-net` and `window` dialogs
#[derive(Clone, Copy)]
pub struct HttpGateway;

impl ProductGateway for HttpGateway {
    async fn fetch_products(&self) -> Result<Vec<Product>, String> {
        fetch_products().await
    }

    async fn save(&self, request: &SaveRequest) -> Result<MessageResponse, String> {
        save(request).await
    }

    async fn delete(&self, id: ProductId) -> Result<MessageResponse, String> {
        delete_product(id).await
    }

    fn confirm(&self, message: &str) -> bool {
        browser::confirm(message)
    }

    fn alert(&self, message: &str) {
        browser::alert(message)
    }
}

async fn read_message(response: Response) -> Result<MessageResponse, String> {
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<MessageResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET /api/products
async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/products"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST /api/products or PUT /api/products/:id
async fn save(request: &SaveRequest) -> Result<MessageResponse, String> {
    let url = api_url(&request.path());
    let builder = match request {
        SaveRequest::Create(_) => Request::post(&url),
        SaveRequest::Update(_, _) => Request::put(&url),
    };

    let response = builder
        .header("Accept", "application/json")
        .json(request.dto())
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_message(response).await
}

/// DELETE /api/products/:id
async fn delete_product(id: ProductId) -> Result<MessageResponse, String> {
    let response = Request::delete(&api_url(&format!("/api/products/{}", id)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_message(response).await
}
