//! API response types

use serde::{Deserialize, Serialize};

/// Error envelope returned by the backend
///
/// Failed requests answer with `{ "message": "..." }`. The field stays
/// optional so bodies without it still decode and the caller can fall
/// back to its own wording.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMessage {
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}
