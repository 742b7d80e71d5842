use sqlx::SqlitePool;
use std::sync::Arc;

use linkdir::domain::entities::{NewUser, UserUpdate};
use linkdir::domain::repositories::UserRepository;
use linkdir::error::AppError;
use linkdir::infrastructure::persistence::SqliteUserRepository;

fn repository(pool: SqlitePool) -> SqliteUserRepository {
    SqliteUserRepository::new(Arc::new(pool))
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$placeholderhashvalue".to_string(),
    }
}

#[sqlx::test]
async fn test_create_assigns_increasing_ids(pool: SqlitePool) {
    let repo = repository(pool);

    let first = repo.create(new_user("A", "a@example.com")).await.unwrap();
    let second = repo.create(new_user("B", "b@example.com")).await.unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.name, "A");
    assert_eq!(first.email, "a@example.com");
}

#[sqlx::test]
async fn test_create_duplicate_email_is_conflict(pool: SqlitePool) {
    let repo = repository(pool);

    repo.create(new_user("A", "a@example.com")).await.unwrap();

    let err = repo
        .create(new_user("B", "a@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));

    // The losing insert left no row behind.
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[sqlx::test]
async fn test_deleted_id_is_never_reused(pool: SqlitePool) {
    let repo = repository(pool);

    let first = repo.create(new_user("A", "a@example.com")).await.unwrap();
    assert!(repo.delete(first.id).await.unwrap());

    let second = repo.create(new_user("B", "b@example.com")).await.unwrap();

    assert!(second.id > first.id);
}

#[sqlx::test]
async fn test_find_by_id(pool: SqlitePool) {
    let repo = repository(pool);

    let created = repo.create(new_user("A", "a@example.com")).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.email, "a@example.com");

    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_email(pool: SqlitePool) {
    let repo = repository(pool);

    repo.create(new_user("A", "a@example.com")).await.unwrap();

    let found = repo.find_by_email("a@example.com").await.unwrap().unwrap();
    assert_eq!(found.name, "A");

    assert!(
        repo.find_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_search_by_name_is_case_sensitive_substring(pool: SqlitePool) {
    let repo = repository(pool);

    repo.create(new_user("Alice Smith", "alice@example.com"))
        .await
        .unwrap();
    repo.create(new_user("Bob Smith", "bob@example.com"))
        .await
        .unwrap();
    repo.create(new_user("carol jones", "carol@example.com"))
        .await
        .unwrap();

    let smiths = repo.search_by_name("Smith").await.unwrap();
    assert_eq!(smiths.len(), 2);

    let lower = repo.search_by_name("smith").await.unwrap();
    assert!(lower.is_empty());

    let inner = repo.search_by_name("lice").await.unwrap();
    assert_eq!(inner.len(), 1);
    assert_eq!(inner[0].name, "Alice Smith");
}

#[sqlx::test]
async fn test_update_replaces_name_and_email_only(pool: SqlitePool) {
    let repo = repository(pool);

    let created = repo.create(new_user("A", "a@example.com")).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UserUpdate {
                name: "A2".to_string(),
                email: "a2@example.com".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "A2");
    assert_eq!(updated.email, "a2@example.com");
    assert_eq!(updated.password_hash, created.password_hash);
}

#[sqlx::test]
async fn test_update_missing_user_is_none(pool: SqlitePool) {
    let repo = repository(pool);

    let result = repo
        .update(
            9999,
            UserUpdate {
                name: "X".to_string(),
                email: "x@example.com".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_update_to_taken_email_is_conflict(pool: SqlitePool) {
    let repo = repository(pool);

    repo.create(new_user("A", "a@example.com")).await.unwrap();
    let b = repo.create(new_user("B", "b@example.com")).await.unwrap();

    let err = repo
        .update(
            b.id,
            UserUpdate {
                name: "B".to_string(),
                email: "a@example.com".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[sqlx::test]
async fn test_update_keeping_own_email_is_allowed(pool: SqlitePool) {
    let repo = repository(pool);

    let a = repo.create(new_user("A", "a@example.com")).await.unwrap();

    let updated = repo
        .update(
            a.id,
            UserUpdate {
                name: "Renamed".to_string(),
                email: "a@example.com".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Renamed");
}

#[sqlx::test]
async fn test_delete(pool: SqlitePool) {
    let repo = repository(pool);

    let a = repo.create(new_user("A", "a@example.com")).await.unwrap();

    assert!(repo.delete(a.id).await.unwrap());
    assert!(repo.find_by_id(a.id).await.unwrap().is_none());

    // Second delete finds nothing to remove.
    assert!(!repo.delete(a.id).await.unwrap());
}
