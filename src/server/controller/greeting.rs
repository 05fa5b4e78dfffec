/// Tag for grouping miscellaneous endpoints in OpenAPI documentation
pub static GREETING_TAG: &str = "greeting";

/// Plain-text greeting served at the root path.
#[utoipa::path(
    get,
    path = "/",
    tag = GREETING_TAG,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
)]
pub async fn greeting() -> &'static str {
    "Hello, Feedback Manager!"
}
