//! mostrador-client
//!
//! Client-side core for the mostrador product catalog: typed access to the
//! `/productos` REST API and the create/edit form controller used by the
//! dialog front-ends.
//!
//! Transports are swappable behind [`HttpClient`]: [`NetworkHttpClient`]
//! talks to a remote backend over HTTP, [`OneshotHttpClient`] drives an
//! axum `Router` inside the same process (tests, embedded deployments).

pub mod api;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod form;

pub use api::ProductosApi;
pub use client::{HttpClient, NetworkHttpClient, OneshotHttpClient};
pub use config::ClientConfig;
pub use credential::{Anonymous, Credential, CredentialProvider, CredentialStore, StaticToken};
pub use error::{ClientError, ClientResult, FormError};
pub use form::{Callback, FieldEdit, FormMode, ProductoDraft, ProductoForm, StockMode};
