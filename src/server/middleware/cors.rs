//! Cross-origin headers for every response.
//!
//! `tower_http`'s `CorsLayer` only adds the allowed methods and headers to
//! preflight responses, and it answers every `OPTIONS` request itself. The
//! layers here stamp the full header set onto all responses and turn plain
//! `OPTIONS` requests away before they reach the CORS layer.

use axum::{
    extract::Request,
    http::{header, HeaderName, HeaderValue, Method},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::server::{config::CorsOrigins, error::AppError};

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// `ALLOWED_METHODS` as sent in `Access-Control-Allow-Methods`.
const ALLOWED_METHODS_VALUE: &str = "GET,POST,PUT,DELETE,OPTIONS";
const ALLOWED_HEADERS_VALUE: &str = "content-type";

/// Wraps `router` with the CORS layers for the configured origins.
///
/// Every response carries `Access-Control-Allow-Methods` and
/// `Access-Control-Allow-Headers`. `Access-Control-Allow-Origin` is `*` on every
/// response when any origin is allowed; with an origin list it is only echoed
/// back to a listed requesting origin.
pub fn apply(router: Router, origins: &CorsOrigins) -> Router {
    let router = router
        .layer(cors_layer(origins))
        .layer(middleware::from_fn(reject_plain_options))
        .layer(default_header(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            ALLOWED_METHODS_VALUE,
        ))
        .layer(default_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            ALLOWED_HEADERS_VALUE,
        ));

    match origins {
        CorsOrigins::Any => router.layer(default_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")),
        CorsOrigins::List(_) => router,
    }
}

/// Builds the layer answering preflights and echoing allowed origins.
fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE]);

    match origins {
        CorsOrigins::Any => layer.allow_origin(Any),
        CorsOrigins::List(list) => layer.allow_origin(AllowOrigin::list(list.iter().cloned())),
    }
}

fn default_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
}

/// Answers `OPTIONS` requests that are not CORS preflights with 405.
///
/// A preflight carries both `Origin` and `Access-Control-Request-Method`.
async fn reject_plain_options(request: Request, next: Next) -> Response {
    if is_plain_options(&request) {
        return AppError::MethodNotAllowed.into_response();
    }

    next.run(request).await
}

fn is_plain_options(request: &Request) -> bool {
    let headers = request.headers();

    *request.method() == Method::OPTIONS
        && !(headers.contains_key(header::ORIGIN)
            && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD))
}
