//! Shared types for the mostrador suite
//!
//! Wire types exchanged with the inventory backend: the product record,
//! the create/update payload and the error envelope. Everything here is
//! plain serde data, usable from the client, tests and embedded backends.

pub mod models;
pub mod response;

pub use models::{Disponibilidad, Producto, ProductoPayload};
pub use response::ApiMessage;
