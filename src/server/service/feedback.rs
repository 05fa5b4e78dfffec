use sea_orm::DatabaseConnection;

use crate::server::{
    data::feedback::FeedbackRepository,
    error::AppError,
    model::feedback::{Feedback, FeedbackParams},
};

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored feedback record
    pub async fn get_all(&self) -> Result<Vec<Feedback>, AppError> {
        let repo = FeedbackRepository::new(self.db);

        repo.get_all().await
    }

    /// Creates a new feedback record, returning it with its assigned ID
    pub async fn create(&self, params: FeedbackParams) -> Result<Feedback, AppError> {
        let repo = FeedbackRepository::new(self.db);

        repo.create(params).await
    }

    /// Replaces the fields of a feedback record
    ///
    /// Always echoes the submitted fields under the requested ID. An ID with no
    /// matching record is not an error; the miss is only logged.
    pub async fn update(&self, id: i32, params: FeedbackParams) -> Result<Feedback, AppError> {
        let repo = FeedbackRepository::new(self.db);

        let rows = repo.update(id, params.clone()).await?;
        if rows == 0 {
            tracing::debug!("Update matched no feedback with id {}", id);
        }

        Ok(Feedback::from_params(id, params))
    }

    /// Deletes a feedback record
    ///
    /// Deleting an ID with no matching record succeeds; the miss is only logged.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = FeedbackRepository::new(self.db);

        let rows = repo.delete(id).await?;
        if rows == 0 {
            tracing::debug!("Delete matched no feedback with id {}", id);
        }

        Ok(())
    }
}
