use super::*;

/// Tests listing an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let feedback = repo.get_all().await?;

    assert!(feedback.is_empty());

    Ok(())
}

/// Tests listing returns every stored record.
///
/// Expected: Ok with all created records present
#[tokio::test]
async fn returns_all_records() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_feedback(db).await?;
    let second = factory::feedback::FeedbackFactory::new(db)
        .feedback_text("Needs work")
        .rating(2)
        .build()
        .await?;

    let repo = FeedbackRepository::new(db);
    let feedback = repo.get_all().await?;

    assert_eq!(feedback.len(), 2);
    assert!(feedback.iter().any(|f| f.id == first.id && f.employee_id == first.employee_id));
    assert!(feedback
        .iter()
        .any(|f| f.id == second.id && f.feedback_text == "Needs work" && f.rating == 2));

    Ok(())
}
