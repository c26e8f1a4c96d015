//! HTTP-level integration tests for set creation, listing, detail, deletion
//! and the admin daily limit.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, body_text, build_test_app, build_test_app_with_limit, delete, get, location,
    post_form, post_untyped,
};
use flashcards_db::models::comment::CreateComment;
use flashcards_db::models::flashcard::CreateFlashcard;
use flashcards_db::models::flashcard_set::{CreateFlashcardSet, FlashcardSet};
use flashcards_db::models::review::CreateReview;
use flashcards_db::repositories::{CommentRepo, FlashcardRepo, FlashcardSetRepo, ReviewRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_set(pool: &PgPool, name: &str) -> FlashcardSet {
    FlashcardSetRepo::create(
        pool,
        &CreateFlashcardSet {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Set creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_set_redirects_and_lists_it(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let response = post_form(app.clone(), "/sets/new", "name=History").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/sets");
    assert_eq!(FlashcardSetRepo::count(&pool).await.unwrap(), 1);

    let response = get(app, "/sets").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("History"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_new_set_form_renders(pool: PgPool) {
    let response = get(build_test_app(pool), "/sets/new").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("name=\"name\""));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_set_without_name_redisplays_form(pool: PgPool) {
    let app = build_test_app(pool.clone());

    for body in ["", "name="] {
        let response = post_form(app.clone(), "/sets/new", body).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Name is required."));
    }

    assert_eq!(FlashcardSetRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_set_without_content_type_redisplays_form(pool: PgPool) {
    let response = post_untyped(build_test_app(pool.clone()), "/sets/new", "").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Name is required."));
    assert_eq!(FlashcardSetRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_set_with_over_long_name_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let body = format!("name={}", "a".repeat(101));

    let response = post_form(app, "/sets/new", &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("at most 100 characters"));
    assert_eq!(FlashcardSetRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_set_at_daily_limit_is_refused(pool: PgPool) {
    let app = build_test_app_with_limit(pool.clone(), 2);

    for name in ["One", "Two"] {
        let response = post_form(app.clone(), "/sets/new", &format!("name={name}")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let response = post_form(app, "/sets/new", "name=Three").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "Daily limit reached! Try again tomorrow."
    );
    assert_eq!(FlashcardSetRepo::count(&pool).await.unwrap(), 2);
}

// ---------------------------------------------------------------------------
// Admin daily limit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_raising_limit_allows_more_sets(pool: PgPool) {
    let app = build_test_app_with_limit(pool.clone(), 1);

    post_form(app.clone(), "/sets/new", "name=First").await;
    let refused = post_form(app.clone(), "/sets/new", "name=Second").await;
    assert!(body_text(refused).await.contains("Daily limit reached"));

    let response = post_form(app.clone(), "/admin/daily_limit", "daily_limit=50").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/sets");

    let response = post_form(app.clone(), "/sets/new", "name=Second").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(FlashcardSetRepo::count(&pool).await.unwrap(), 2);

    let page = body_text(get(app, "/admin/daily_limit").await).await;
    assert!(page.contains("<strong>50</strong>"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_rejects_non_integer_limit(pool: PgPool) {
    let app = build_test_app_with_limit(pool, 7);

    for body in ["daily_limit=lots", "daily_limit=", "daily_limit=2.5", ""] {
        let response = post_form(app.clone(), "/admin/daily_limit", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid limit");
    }

    let page = body_text(get(app, "/admin/daily_limit").await).await;
    assert!(page.contains("<strong>7</strong>"));
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_set_detail_shows_cards_comments_reviews(pool: PgPool) {
    let set = seed_set(&pool, "Chemistry").await;
    FlashcardRepo::create(
        &pool,
        &CreateFlashcard {
            set_id: set.id,
            question: "H2O?".to_string(),
            answer: "Water".to_string(),
            hidden: false,
        },
    )
    .await
    .unwrap();
    CommentRepo::create(
        &pool,
        &CreateComment {
            set_id: set.id,
            comment: "Helpful".to_string(),
            author: None,
        },
    )
    .await
    .unwrap();
    ReviewRepo::create(
        &pool,
        &CreateReview {
            set_id: set.id,
            rating: 4,
            review_text: Some("Solid".to_string()),
            author: Some("Marie".to_string()),
        },
    )
    .await
    .unwrap();

    let response = get(build_test_app(pool), &format!("/sets/{}", set.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    for expected in ["Chemistry", "H2O?", "Water", "Helpful", "4/5", "Solid", "Marie"] {
        assert!(html.contains(expected), "detail page should contain {expected}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_set_detail_missing_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/sets/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unparseable_set_id_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    for uri in [
        "/sets/abc",
        "/sets/99999999999999999999999",
        "/sets/abc/cards/new",
        "/sets/abc/comment",
        "/sets/abc/review",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    }

    let response = post_form(app, "/sets/abc/comment", "comment=Hi").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_set_cascades_and_returns_204(pool: PgPool) {
    let set = seed_set(&pool, "Temporary").await;
    let other = seed_set(&pool, "Other").await;
    let app = build_test_app(pool.clone());

    post_form(
        app.clone(),
        &format!("/sets/{}/cards/new", set.id),
        "question=Q&answer=A",
    )
    .await;
    post_form(app.clone(), &format!("/sets/{}/comment", set.id), "comment=Hi").await;
    post_form(app.clone(), &format!("/sets/{}/review", set.id), "rating=3").await;
    post_form(app.clone(), &format!("/sets/{}/review", other.id), "rating=5").await;

    let response = delete(app.clone(), &format!("/sets/{}", set.id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_text(response).await.is_empty());

    let response = get(app, &format!("/sets/{}", set.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert!(FlashcardRepo::list_by_set(&pool, set.id).await.unwrap().is_empty());
    assert!(CommentRepo::list_by_set(&pool, set.id).await.unwrap().is_empty());
    assert!(ReviewRepo::list_by_set(&pool, set.id).await.unwrap().is_empty());
    assert_eq!(ReviewRepo::count(&pool).await.unwrap(), 1);
    assert_eq!(FlashcardSetRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_set_returns_404_message(pool: PgPool) {
    let set = seed_set(&pool, "Survivor").await;

    let response = delete(build_test_app(pool.clone()), &format!("/sets/{}", set.id + 1)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"message": "Flashcard set not found"})
    );
    assert_eq!(FlashcardSetRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_unparseable_set_id_returns_404_message(pool: PgPool) {
    seed_set(&pool, "Survivor").await;

    let response = delete(build_test_app(pool.clone()), "/sets/abc").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"message": "Flashcard set not found"})
    );
    assert_eq!(FlashcardSetRepo::count(&pool).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// JSON listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_api_sets_lists_every_set(pool: PgPool) {
    let first = seed_set(&pool, "Alpha").await;
    let second = seed_set(&pool, "Beta").await;

    let response = get(build_test_app(pool), "/api/sets").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"].as_i64(), Some(first.id));
    assert_eq!(items[0]["name"], "Alpha");
    assert_eq!(items[1]["id"].as_i64(), Some(second.id));

    let created_at = items[0]["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    assert_eq!(items[0].as_object().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_api_sets_empty(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/sets").await;
    assert_eq!(body_json(response).await, serde_json::json!([]));
}
