// mostrador-client/src/client/http_oneshot.rs
// In-process HTTP client over an axum Router

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::credential::CredentialProvider;
use crate::error::{ClientError, ClientResult};

use super::decode_body;
use super::http::HttpClient;

/// In-process HTTP client
///
/// Calls an axum `Router` through tower's `oneshot`, no socket involved.
/// Integration tests run the whole form flow through this, and embedded
/// deployments (backend and UI in one process) use it as their transport.
///
/// # Example
///
/// ```ignore
/// let router: Router = build_app().with_state(state);
/// let client = OneshotHttpClient::new(router, Arc::new(Anonymous));
///
/// let productos: Vec<Producto> = client.get("/productos").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    credentials: Arc<dyn CredentialProvider>,
}

impl OneshotHttpClient {
    /// Create a client over an already assembled router (`with_state` applied)
    pub fn new(router: Router, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            router,
            credentials,
        }
    }

    fn build_request(&self, method: http::Method, path: &str) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = self.credentials.token() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        builder
            .header("Content-Type", "application/json")
            .body(Body::empty())
            .expect("Failed to build request")
    }

    fn build_request_with_body<B: Serialize>(
        &self,
        method: http::Method,
        path: &str,
        body: &B,
    ) -> Result<Request<Body>, ClientError> {
        let body_bytes = serde_json::to_vec(body)?;

        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = self.credentials.token() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        Ok(builder
            .header("Content-Type", "application/json")
            .body(Body::from(body_bytes))
            .expect("Failed to build request"))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        decode_body(status, &body)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::GET, path);
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(http::Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(http::Method::PUT, path, body)?;
        self.execute(request).await
    }
}
