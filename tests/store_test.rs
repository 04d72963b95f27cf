//! Entity store contract: lookups by id, foreign key and uniqueness
//! constraint, counts and existence checks without row loads.

mod common;

use common::{register_user, test_pool};
use ripple_content::db::{comment_repo, like_repo, post_repo, user_repo};
use ripple_content::error::is_unique_violation;
use ripple_content::models::PostPatch;
use uuid::Uuid;

#[tokio::test]
async fn user_lookups_and_username_uniqueness() {
    let pool = test_pool().await;
    let (alice, _) = register_user(&pool, "alice").await;

    let by_id = user_repo::find_by_id(&pool, alice.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "alice");

    let by_name = user_repo::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_name.id, alice.id);

    assert!(user_repo::username_exists(&pool, "alice").await.unwrap());
    assert!(!user_repo::username_exists(&pool, "bob").await.unwrap());

    let err = user_repo::create_user(&pool, "alice", "x@example.com", "X", "h", "s")
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err));
}

#[tokio::test]
async fn post_counts_and_partial_update_at_store_level() {
    let pool = test_pool().await;
    let (alice, _) = register_user(&pool, "alice").await;
    let (bob, _) = register_user(&pool, "bob").await;

    post_repo::create_post(&pool, "A1", "x", alice.id).await.unwrap();
    post_repo::create_post(&pool, "B1", "x", bob.id).await.unwrap();
    let p = post_repo::create_post(&pool, "A2", "x", alice.id).await.unwrap();

    assert_eq!(post_repo::count_posts(&pool).await.unwrap(), 3);
    assert_eq!(
        post_repo::count_posts_by_author(&pool, alice.id).await.unwrap(),
        2
    );

    // Partial update touches only supplied fields and refreshes updated_at.
    let patch = PostPatch {
        title: None,
        content: Some("new body".into()),
    };
    let updated = post_repo::update_post(&pool, p.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "A2");
    assert_eq!(updated.content, "new body");
    assert!(updated.updated_at >= p.updated_at);

    // Updating a missing row is absent, not an error.
    assert!(post_repo::update_post(&pool, Uuid::new_v4(), &patch)
        .await
        .unwrap()
        .is_none());
    assert!(!post_repo::delete_post(&pool, Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn dangling_references_are_not_creatable() {
    let pool = test_pool().await;
    let (alice, _) = register_user(&pool, "alice").await;

    // Comment and like on a nonexistent post are refused by the store.
    assert!(
        comment_repo::create_comment(&pool, Uuid::new_v4(), alice.id, "hi")
            .await
            .is_err()
    );
    assert!(like_repo::create_like(&pool, Uuid::new_v4(), alice.id)
        .await
        .is_err());

    // Post by a nonexistent author likewise.
    assert!(post_repo::create_post(&pool, "T", "B", Uuid::new_v4())
        .await
        .is_err());
}

#[tokio::test]
async fn like_pair_uniqueness_is_enforced_by_the_store() {
    let pool = test_pool().await;
    let (alice, _) = register_user(&pool, "alice").await;
    let (bob, _) = register_user(&pool, "bob").await;
    let post = post_repo::create_post(&pool, "T", "B", alice.id).await.unwrap();

    like_repo::create_like(&pool, post.id, bob.id).await.unwrap();
    let err = like_repo::create_like(&pool, post.id, bob.id)
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err));

    assert_eq!(like_repo::count_likes(&pool, post.id).await.unwrap(), 1);
    assert!(like_repo::exists(&pool, post.id, bob.id).await.unwrap());
    assert!(!like_repo::exists(&pool, post.id, alice.id).await.unwrap());

    let found = like_repo::find_like(&pool, post.id, bob.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.post_id, post.id);
    assert_eq!(found.user_id, bob.id);
}

#[tokio::test]
async fn comment_lookups_and_counts() {
    let pool = test_pool().await;
    let (alice, _) = register_user(&pool, "alice").await;
    let post = post_repo::create_post(&pool, "T", "B", alice.id).await.unwrap();

    let c1 = comment_repo::create_comment(&pool, post.id, alice.id, "one")
        .await
        .unwrap();
    comment_repo::create_comment(&pool, post.id, alice.id, "two")
        .await
        .unwrap();

    assert_eq!(
        comment_repo::count_comments_for_post(&pool, post.id)
            .await
            .unwrap(),
        2
    );

    let found = comment_repo::find_comment(&pool, c1.id).await.unwrap().unwrap();
    assert_eq!(found.content, "one");

    assert!(comment_repo::delete_comment(&pool, c1.id).await.unwrap());
    assert!(!comment_repo::delete_comment(&pool, c1.id).await.unwrap());
    assert_eq!(
        comment_repo::count_comments_for_post(&pool, post.id)
            .await
            .unwrap(),
        1
    );
}
