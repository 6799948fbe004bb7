//! Root greeting endpoint.

/// Greeting handler.
///
/// Returns the fixed greeting for `GET /`. The handler is stateless and
/// side-effect free; Axum serves a `&'static str` with status 200 and
/// content type `text/plain; charset=utf-8`.
pub async fn index() -> &'static str {
    "Hello world"
}
