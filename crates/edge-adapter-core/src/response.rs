//! Response construction helpers.
//!
//! The platform's response model carries a status text alongside the status
//! code; `http` responses have no reason-phrase slot, so synthesized status
//! text rides in a [`StatusText`] extension. Consumers that re-serialize
//! responses for the platform must consult the extension before falling back
//! to the status's canonical reason.

use axum::body::Body;
use axum::http::{Response, StatusCode};

/// Status text for the "no asset, no route" and asset-404 responses.
pub const NOT_FOUND_TEXT: &str = "Not found";

/// Response extension carrying an explicit status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusText(pub String);

/// Build a bodiless response with a status and explicit status text.
pub fn bare(status: StatusCode, status_text: impl Into<String>) -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response.extensions_mut().insert(StatusText(status_text.into()));
    response
}

/// The bare 404 returned for missing assets and unmatched requests.
pub fn not_found() -> Response<Body> {
    bare(StatusCode::NOT_FOUND, NOT_FOUND_TEXT)
}

/// Read a response's status text.
///
/// Prefers the [`StatusText`] extension, then the status code's canonical
/// reason phrase.
pub fn status_text<B>(response: &Response<B>) -> String {
    response
        .extensions()
        .get::<StatusText>()
        .map(|text| text.0.clone())
        .or_else(|| {
            response
                .status()
                .canonical_reason()
                .map(ToString::to_string)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_response() {
        let response = bare(StatusCode::SERVICE_UNAVAILABLE, "Backend down");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_text(&response), "Backend down");
    }

    #[test]
    fn test_not_found() {
        let response = not_found();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(status_text(&response), NOT_FOUND_TEXT);
    }

    #[test]
    fn test_status_text_canonical_fallback() {
        let response = Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::empty())
            .unwrap();

        assert_eq!(status_text(&response), "Internal Server Error");
    }
}
