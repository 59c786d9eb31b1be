use chrono::{Duration, Utc};
use skillsync_db::models::session::CreateSession;
use skillsync_db::models::user::CreateUser;
use skillsync_db::repositories::{SessionRepo, UserRepo};
use sqlx::PgPool;

async fn user_with_session(pool: &PgPool, hash: &str, ttl: Duration) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: format!("{hash}@test.com"),
            username: hash.to_string(),
            password_hash: "hash".to_string(),
        },
    )
    .await
    .unwrap();
    SessionRepo::create(
        pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: hash.to_string(),
            expires_at: Utc::now() + ttl,
        },
    )
    .await
    .unwrap();
    user.id
}

/// A refresh token can be spent exactly once.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_consume_is_single_use(pool: PgPool) {
    let user_id = user_with_session(&pool, "once", Duration::days(7)).await;

    let session = SessionRepo::consume(&pool, "once").await.unwrap().unwrap();
    assert_eq!(session.user_id, user_id);
    assert!(session.is_revoked);

    assert!(SessionRepo::consume(&pool, "once").await.unwrap().is_none());
    assert!(SessionRepo::consume(&pool, "never-issued").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_consume_has_one_winner(pool: PgPool) {
    user_with_session(&pool, "contested", Duration::days(7)).await;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pool = pool.clone();
            tokio::spawn(async move { SessionRepo::consume(&pool, "contested").await })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap().is_some() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_session_cannot_be_consumed(pool: PgPool) {
    user_with_session(&pool, "stale", Duration::minutes(-1)).await;
    assert!(SessionRepo::consume(&pool, "stale").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revoke_all_blocks_consume(pool: PgPool) {
    let user_id = user_with_session(&pool, "leaving", Duration::days(7)).await;

    assert_eq!(SessionRepo::revoke_all_for_user(&pool, user_id).await.unwrap(), 1);
    assert_eq!(SessionRepo::revoke_all_for_user(&pool, user_id).await.unwrap(), 0);
    assert!(SessionRepo::consume(&pool, "leaving").await.unwrap().is_none());
}
