//! Typed access to the productos endpoints

use shared::{Producto, ProductoPayload};

use crate::client::HttpClient;
use crate::error::ClientResult;

/// Typed surface over the `/productos` endpoints
///
/// Thin by intent: verbs and paths live here, decoding belongs to the
/// transport.
#[derive(Debug, Clone)]
pub struct ProductosApi<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> ProductosApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetch every product; the parent list view refreshes through this
    pub async fn list(&self) -> ClientResult<Vec<Producto>> {
        self.client.get("/productos").await
    }

    /// Create a product, returning the stored record
    pub async fn create(&self, payload: &ProductoPayload) -> ClientResult<Producto> {
        self.client.post("/productos", payload).await
    }

    /// Update the product with the given id
    pub async fn update(&self, id: i64, payload: &ProductoPayload) -> ClientResult<Producto> {
        self.client
            .put(&format!("/productos/{}", id), payload)
            .await
    }
}
