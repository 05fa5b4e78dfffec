//! Feedback data repository for database operations
//!
//! Provides the `FeedbackRepository` for managing feedback records in the database.
//! Every method issues exactly one parameterized statement; there are no
//! transactions. Entity models are converted into domain models before they leave
//! this layer.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter,
};

use crate::server::{
    error::AppError,
    model::feedback::{Feedback, FeedbackParams},
};

/// Repository providing database operations for feedback records.
pub struct FeedbackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackRepository<'a> {
    /// Creates a new FeedbackRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FeedbackRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all feedback records in the store's natural scan order
    ///
    /// # Returns
    /// - `Ok(Vec<Feedback>)` - Every stored record; empty if the table is empty
    /// - `Err(AppError::DbErr)` - Database error during select
    pub async fn get_all(&self) -> Result<Vec<Feedback>, AppError> {
        let entities = entity::prelude::Feedback::find().all(self.db).await?;

        Ok(entities.into_iter().map(Feedback::from_entity).collect())
    }

    /// Creates a new feedback record
    ///
    /// The ID is assigned by the store.
    ///
    /// # Arguments
    /// - `params` - The employee ID, text and rating of the new record
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The created record including its assigned ID
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: FeedbackParams) -> Result<Feedback, AppError> {
        let entity = entity::feedback::ActiveModel {
            id: ActiveValue::NotSet,
            employee_id: ActiveValue::Set(params.employee_id),
            feedback_text: ActiveValue::Set(params.feedback_text),
            rating: ActiveValue::Set(params.rating),
        }
        .insert(self.db)
        .await?;

        Ok(Feedback::from_entity(entity))
    }

    /// Replaces all mutable fields of the record with the provided ID
    ///
    /// Issues an unconditional `UPDATE ... WHERE id = ?`; a missing record is not
    /// an error.
    ///
    /// # Arguments
    /// - `id` - ID of the record to update
    /// - `params` - Replacement values for every mutable field
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 or 1)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: FeedbackParams) -> Result<u64, AppError> {
        let result = entity::prelude::Feedback::update_many()
            .col_expr(
                entity::feedback::Column::EmployeeId,
                Expr::value(params.employee_id),
            )
            .col_expr(
                entity::feedback::Column::FeedbackText,
                Expr::value(params.feedback_text),
            )
            .col_expr(entity::feedback::Column::Rating, Expr::value(params.rating))
            .filter(entity::feedback::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the record with the provided ID
    ///
    /// # Arguments
    /// - `id` - The ID of the record to delete
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Feedback::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
