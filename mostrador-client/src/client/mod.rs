//! HTTP transports
//!
//! Two interchangeable implementations of [`HttpClient`]: network
//! ([`NetworkHttpClient`]) and in-process ([`OneshotHttpClient`]).

mod http;
mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
pub use http_oneshot::OneshotHttpClient;

use serde::de::DeserializeOwned;
use shared::ApiMessage;

use crate::error::{ClientError, ClientResult};

/// Decode rule shared by every transport.
///
/// The body is parsed as JSON before the status is inspected, so a
/// malformed body fails with `InvalidResponse` even on 2xx and a save is
/// reported as failed. On a non-success status the backend's `message`
/// is extracted when the body carries a non-empty one.
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: ::http::StatusCode,
    body: &[u8],
) -> ClientResult<T> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))?;

    if !status.is_success() {
        let message = serde_json::from_value::<ApiMessage>(value)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|message| !message.is_empty());
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::http::StatusCode;
    use shared::Producto;

    #[test]
    fn test_decode_success_body() {
        let body = br#"{"id": 3, "nombre": "Fideos"}"#;
        let producto: Producto = decode_body(StatusCode::OK, body).unwrap();
        assert_eq!(producto.id, Some(3));
    }

    #[test]
    fn test_decode_malformed_body_fails_even_on_success_status() {
        let result: ClientResult<Producto> = decode_body(StatusCode::OK, b"<html>oops</html>");
        assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
    }

    #[test]
    fn test_decode_error_status_extracts_message() {
        let body = br#"{"message": "SKU duplicado"}"#;
        let result: ClientResult<Producto> = decode_body(StatusCode::CONFLICT, body);
        match result {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 409);
                assert_eq!(message.as_deref(), Some("SKU duplicado"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_error_status_without_message() {
        let body = br#"{"error": "stack trace"}"#;
        let result: ClientResult<Producto> = decode_body(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(matches!(
            result,
            Err(ClientError::Api { status: 500, message: None })
        ));
    }

    #[test]
    fn test_decode_error_status_non_object_body() {
        let result: ClientResult<Producto> = decode_body(StatusCode::BAD_REQUEST, br#""rechazado""#);
        assert!(matches!(result, Err(ClientError::Api { message: None, .. })));
    }

    #[test]
    fn test_decode_empty_message_treated_as_missing() {
        let body = br#"{"message": ""}"#;
        let result: ClientResult<Producto> = decode_body(StatusCode::CONFLICT, body);
        assert!(matches!(result, Err(ClientError::Api { message: None, .. })));
    }

    #[test]
    fn test_decode_shape_mismatch_is_invalid_response() {
        let result: ClientResult<Vec<Producto>> = decode_body(StatusCode::OK, br#"{"id": 1}"#);
        assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
    }
}
