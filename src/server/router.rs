use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::feedback::{FeedbackDto, FeedbackPayloadDto},
    server::{
        config::CorsOrigins,
        controller::{fallback, feedback, greeting},
        middleware::cors,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Feedback Manager", description = "CRUD API for employee feedback"),
    paths(
        greeting::greeting,
        feedback::get_feedback,
        feedback::create_feedback,
        feedback::update_feedback,
        feedback::delete_feedback,
    ),
    components(schemas(FeedbackDto, FeedbackPayloadDto)),
    tags(
        (name = "feedback", description = "Feedback records"),
        (name = "greeting", description = "Service greeting"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(greeting::greeting).head(fallback::method_not_allowed),
        )
        .route(
            "/feedback",
            get(feedback::get_feedback)
                .head(fallback::method_not_allowed)
                .post(feedback::create_feedback),
        )
        .route("/feedback/{id}", put(feedback::update_feedback))
        .route("/feedback/delete/{id}", delete(feedback::delete_feedback))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .fallback(fallback::not_found)
}

/// Builds the complete service: routes, state, CORS and request tracing.
pub fn app(state: AppState, origins: &CorsOrigins) -> Router {
    cors::apply(router().with_state(state), origins).layer(TraceLayer::new_for_http())
}
