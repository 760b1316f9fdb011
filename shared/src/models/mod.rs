//! Data models
//!
//! Shared between the backend and the form clients (via API).
//! All record IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod producto;

pub use producto::{Disponibilidad, Producto, ProductoPayload};
