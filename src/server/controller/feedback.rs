use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::feedback::{FeedbackDto, FeedbackPayloadDto},
    server::{
        error::AppError,
        model::feedback::{Feedback, FeedbackParams},
        service::feedback::FeedbackService,
        state::AppState,
        util::extract::{FeedbackId, JsonPayload},
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

/// Get all feedback records.
///
/// Returns every stored record in the store's natural order. An empty store yields
/// an empty array.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Array of feedback records
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/feedback",
    tag = FEEDBACK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved feedback", body = Vec<FeedbackDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_feedback(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    let feedback = service.get_all().await?;

    let dtos: Vec<FeedbackDto> = feedback.into_iter().map(Feedback::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new feedback record.
///
/// Any `id` in the body is ignored; the store assigns one.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Employee ID, feedback text and rating
///
/// # Returns
/// - `200 OK` - The created record including its assigned ID
/// - `400 Bad Request` - Body could not be decoded
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/feedback",
    tag = FEEDBACK_TAG,
    request_body = FeedbackPayloadDto,
    responses(
        (status = 200, description = "Successfully created feedback", body = FeedbackDto),
        (status = 400, description = "Invalid feedback body", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<FeedbackPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    let feedback = service.create(FeedbackParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Replace a feedback record.
///
/// All three mutable fields are replaced. The response echoes the submitted fields
/// under the requested ID whether or not a record with that ID exists.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the record to replace
/// - `payload` - Replacement employee ID, feedback text and rating
///
/// # Returns
/// - `200 OK` - The submitted record under the requested ID
/// - `400 Bad Request` - Non-integer ID or body could not be decoded
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(
        ("id" = i32, Path, description = "Feedback ID")
    ),
    request_body = FeedbackPayloadDto,
    responses(
        (status = 200, description = "Successfully updated feedback", body = FeedbackDto),
        (status = 400, description = "Invalid ID or feedback body", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn update_feedback(
    State(state): State<AppState>,
    FeedbackId(id): FeedbackId,
    JsonPayload(payload): JsonPayload<FeedbackPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    let feedback = service
        .update(id, FeedbackParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(feedback.into_dto())))
}

/// Delete a feedback record.
///
/// Deleting an ID with no matching record still succeeds.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the record to delete
///
/// # Returns
/// - `200 OK` - Plain-text confirmation
/// - `400 Bad Request` - Non-integer ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/feedback/delete/{id}",
    tag = FEEDBACK_TAG,
    params(
        ("id" = i32, Path, description = "Feedback ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted feedback", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_feedback(
    State(state): State<AppState>,
    FeedbackId(id): FeedbackId,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    service.delete(id).await?;

    Ok((StatusCode::OK, format!("Feedback with ID {} deleted", id)))
}
