use super::*;

/// Tests creating a new feedback record.
///
/// Verifies that the repository inserts the record and returns it with a
/// store-assigned positive ID.
///
/// Expected: Ok with feedback created
#[tokio::test]
async fn creates_feedback() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let feedback = repo.create(params("E1", "Good", 5)).await?;

    assert!(feedback.id > 0);
    assert_eq!(feedback.employee_id, "E1");
    assert_eq!(feedback.feedback_text, "Good");
    assert_eq!(feedback.rating, 5);

    let stored = entity::prelude::Feedback::find_by_id(feedback.id)
        .one(db)
        .await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().feedback_text, "Good");

    Ok(())
}

/// Tests that each created record receives a distinct ID.
///
/// Expected: Ok with three records and three unique IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let first = repo.create(params("E1", "One", 1)).await?;
    let second = repo.create(params("E1", "Two", 2)).await?;
    let third = repo.create(params("E2", "Three", 3)).await?;

    assert_ne!(first.id, second.id);
    assert_ne!(first.id, third.id);
    assert_ne!(second.id, third.id);

    let count = entity::prelude::Feedback::find().count(db).await?;
    assert_eq!(count, 3);

    Ok(())
}

/// Tests that ratings are stored without range validation.
///
/// Expected: Ok with negative and large ratings persisted as given
#[tokio::test]
async fn stores_out_of_range_ratings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let negative = repo.create(params("E1", "Bad", -10)).await?;
    let large = repo.create(params("E1", "Great", 1000)).await?;

    assert_eq!(negative.rating, -10);
    assert_eq!(large.rating, 1000);

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_without_table() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let result = repo.create(params("E1", "Good", 5)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
