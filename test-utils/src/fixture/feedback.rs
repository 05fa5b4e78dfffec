//! Feedback fixtures for creating in-memory test data.

use entity::feedback;

/// Default test employee identifier.
pub const DEFAULT_EMPLOYEE_ID: &str = "E1";

/// Default test feedback text.
pub const DEFAULT_FEEDBACK_TEXT: &str = "Good";

/// Default test rating.
pub const DEFAULT_RATING: i32 = 5;

/// Creates a feedback entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - employee_id: `"E1"`
/// - feedback_text: `"Good"`
/// - rating: `5`
///
/// # Returns
/// - `feedback::Model` - In-memory feedback entity
pub fn entity() -> feedback::Model {
    feedback::Model {
        id: 1,
        employee_id: DEFAULT_EMPLOYEE_ID.to_string(),
        feedback_text: DEFAULT_FEEDBACK_TEXT.to_string(),
        rating: DEFAULT_RATING,
    }
}

/// Creates a feedback entity builder for customization.
///
/// # Returns
/// - `FeedbackEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> FeedbackEntityBuilder {
    FeedbackEntityBuilder { entity: entity() }
}

/// Builder for in-memory feedback entity models.
pub struct FeedbackEntityBuilder {
    entity: feedback::Model,
}

impl FeedbackEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.entity.employee_id = employee_id.into();
        self
    }

    pub fn feedback_text(mut self, feedback_text: impl Into<String>) -> Self {
        self.entity.feedback_text = feedback_text.into();
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.entity.rating = rating;
        self
    }

    pub fn build(self) -> feedback::Model {
        self.entity
    }
}
