use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored feedback record as returned by the API.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDto {
    pub id: i32,
    pub employee_id: String,
    pub feedback_text: String,
    pub rating: i32,
}

/// Request body for creating or replacing a feedback record.
///
/// Any `id` supplied by the client is ignored; the store assigns ids on create and
/// the path supplies it on update.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayloadDto {
    pub employee_id: String,
    pub feedback_text: String,
    pub rating: i32,
}
