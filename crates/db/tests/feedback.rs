//! Integration tests for the feedback log.

use skillsync_db::models::feedback::CreateFeedback;
use skillsync_db::repositories::feedback_repo::RECENT_FEEDBACK_LIMIT;
use skillsync_db::repositories::FeedbackRepo;
use sqlx::PgPool;

fn entry(author: &str, rating: i32) -> CreateFeedback {
    CreateFeedback {
        author_name: author.to_string(),
        rating,
        message: format!("Message from {author}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_feedback_is_listed_newest_first(pool: PgPool) {
    for (author, rating) in [("amy", 5), ("ben", 3), ("cal", 4), ("dee", 1)] {
        FeedbackRepo::create(&pool, &entry(author, rating)).await.unwrap();
    }

    let all = FeedbackRepo::list_newest_first(&pool, None).await.unwrap();
    let authors: Vec<_> = all.iter().map(|f| f.author_name.as_str()).collect();
    assert_eq!(authors, vec!["dee", "cal", "ben", "amy"]);

    let recent = FeedbackRepo::list_newest_first(&pool, Some(RECENT_FEEDBACK_LIMIT))
        .await
        .unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].author_name, "dee");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_out_of_range_rating_is_rejected_by_schema(pool: PgPool) {
    let result = FeedbackRepo::create(&pool, &entry("eve", 9)).await;
    assert!(result.is_err());
    assert!(FeedbackRepo::list_newest_first(&pool, None)
        .await
        .unwrap()
        .is_empty());
}
