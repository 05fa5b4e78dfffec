//! Feedback factory for creating persisted test feedback records.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test feedback records with customizable fields.
///
/// Defaults come from `fixture::feedback::entity()`, with a unique employee ID per
/// factory so records created in the same test are distinguishable.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::feedback::FeedbackFactory;
///
/// let feedback = FeedbackFactory::new(&db)
///     .feedback_text("Needs improvement")
///     .rating(2)
///     .build()
///     .await?;
/// ```
pub struct FeedbackFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::feedback::Model,
}

impl<'a> FeedbackFactory<'a> {
    /// Creates a new FeedbackFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `FeedbackFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::feedback::entity_builder()
            .employee_id(format!("E{}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the employee identifier.
    pub fn employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.entity.employee_id = employee_id.into();
        self
    }

    /// Sets the feedback text.
    pub fn feedback_text(mut self, feedback_text: impl Into<String>) -> Self {
        self.entity.feedback_text = feedback_text.into();
        self
    }

    /// Sets the rating.
    pub fn rating(mut self, rating: i32) -> Self {
        self.entity.rating = rating;
        self
    }

    /// Builds and inserts the feedback entity into the database.
    ///
    /// The ID is left for the store to assign.
    ///
    /// # Returns
    /// - `Ok(entity::feedback::Model)` - Created feedback entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::feedback::Model, DbErr> {
        entity::feedback::ActiveModel {
            id: ActiveValue::NotSet,
            employee_id: ActiveValue::Set(self.entity.employee_id),
            feedback_text: ActiveValue::Set(self.entity.feedback_text),
            rating: ActiveValue::Set(self.entity.rating),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a feedback record with default values.
///
/// Shorthand for `FeedbackFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::feedback::Model)` - Created feedback entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_feedback(db: &DatabaseConnection) -> Result<entity::feedback::Model, DbErr> {
    FeedbackFactory::new(db).build().await
}
