use super::*;

/// Tests updating an existing record replaces every mutable field.
///
/// Expected: Ok(1) and the stored row carries the new values under the same ID
#[tokio::test]
async fn replaces_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_feedback(db).await?;

    let repo = FeedbackRepository::new(db);
    let rows = repo
        .update(existing.id, params("E9", "Much improved", 4))
        .await?;

    assert_eq!(rows, 1);

    let stored = entity::prelude::Feedback::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.employee_id, "E9");
    assert_eq!(stored.feedback_text, "Much improved");
    assert_eq!(stored.rating, 4);

    let count = entity::prelude::Feedback::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests updating only touches the targeted record.
///
/// Expected: Ok(1) and the other record is unchanged
#[tokio::test]
async fn leaves_other_records_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_feedback(db).await?;
    let other = factory::create_feedback(db).await?;

    let repo = FeedbackRepository::new(db);
    repo.update(target.id, params("E9", "Changed", 1)).await?;

    let stored_other = entity::prelude::Feedback::find_by_id(other.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_other, other);

    Ok(())
}

/// Tests updating a non-existent ID is a silent no-op.
///
/// Expected: Ok(0) and the table remains empty
#[tokio::test]
async fn reports_zero_rows_for_missing_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let rows = repo.update(999999, params("E1", "Ghost", 3)).await?;

    assert_eq!(rows, 0);

    let count = entity::prelude::Feedback::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
