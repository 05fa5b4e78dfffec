//! Domain & parameter models for feedback operations
//!
//! Defines the feedback domain model, the parameter model carrying the mutable
//! fields, and the conversions from entity and DTO types.

use crate::model::feedback::{FeedbackDto, FeedbackPayloadDto};

/// The feedback domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: i32,
    pub employee_id: String,
    pub feedback_text: String,
    pub rating: i32,
}

impl Feedback {
    /// Converts an entity model to the feedback domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Feedback` - The converted domain model
    pub fn from_entity(entity: entity::feedback::Model) -> Self {
        Self {
            id: entity.id,
            employee_id: entity.employee_id,
            feedback_text: entity.feedback_text,
            rating: entity.rating,
        }
    }

    /// Builds a feedback domain model from an id and the submitted fields.
    ///
    /// Used to echo an update back to the caller without re-reading the row.
    pub fn from_params(id: i32, params: FeedbackParams) -> Self {
        Self {
            id,
            employee_id: params.employee_id,
            feedback_text: params.feedback_text,
            rating: params.rating,
        }
    }

    /// Converts the domain model into its API representation
    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            employee_id: self.employee_id,
            feedback_text: self.feedback_text,
            rating: self.rating,
        }
    }
}

/// Parameters for creating or replacing a feedback record
///
/// All three mutable fields are always supplied; updates replace them wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackParams {
    pub employee_id: String,
    pub feedback_text: String,
    pub rating: i32,
}

impl FeedbackParams {
    /// Converts a request payload into operation parameters
    pub fn from_dto(dto: FeedbackPayloadDto) -> Self {
        Self {
            employee_id: dto.employee_id,
            feedback_text: dto.feedback_text,
            rating: dto.rating,
        }
    }
}
