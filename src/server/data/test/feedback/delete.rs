use super::*;

/// Tests deleting an existing record.
///
/// Expected: Ok(1) and the record is gone
#[tokio::test]
async fn deletes_feedback() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_feedback(db).await?;

    let repo = FeedbackRepository::new(db);
    let rows = repo.delete(existing.id).await?;

    assert_eq!(rows, 1);

    let stored = entity::prelude::Feedback::find_by_id(existing.id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a non-existent ID.
///
/// Expected: Ok(0) with other records untouched
#[tokio::test]
async fn reports_zero_rows_for_missing_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_feedback(db).await?;

    let repo = FeedbackRepository::new(db);
    let rows = repo.delete(existing.id + 1000).await?;

    assert_eq!(rows, 0);

    let count = entity::prelude::Feedback::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
