// ABOUTME: Integration tests for the user directory database module
// ABOUTME: Covers validated creation, lookups, partial updates, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

#![allow(missing_docs, clippy::unwrap_used)]

use biblio_server::database::Database;
use biblio_server::models::{UserRole, UserUpdate};

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

#[tokio::test]
async fn create_user_and_get_by_email() {
    let db = create_test_db().await;

    let user = db
        .create_user(
            "reader@example.com",
            "secret",
            Some("Ada"),
            None,
            Some("Lovelace"),
        )
        .await
        .unwrap()
        .unwrap();

    assert!(user.id > 0);
    assert_eq!(user.role, UserRole::Visitor);
    assert!(!user.is_active);
    assert_eq!(user.password, "secret");
    assert!(user.created_at > 0);
    assert_eq!(user.created_at, user.updated_at);

    let found = db
        .get_user_by_email("reader@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.first_name.as_deref(), Some("Ada"));
    assert_eq!(found.middle_name, None);
    assert_eq!(found.last_name.as_deref(), Some("Lovelace"));
}

#[tokio::test]
async fn create_user_rejects_malformed_email() {
    let db = create_test_db().await;

    let no_at = db
        .create_user("reader.example.com", "pw", None, None, None)
        .await
        .unwrap();
    assert!(no_at.is_none());

    let no_dot = db
        .create_user("reader@example", "pw", None, None, None)
        .await
        .unwrap();
    assert!(no_dot.is_none());

    assert!(db.get_all_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_user_rejects_long_name_part() {
    let db = create_test_db().await;
    let long = "x".repeat(21);

    let user = db
        .create_user("a@b.c", "pw", Some(&long), None, None)
        .await
        .unwrap();
    assert!(user.is_none());

    let boundary = db
        .create_user("a@b.c", "pw", Some(&"x".repeat(20)), None, None)
        .await
        .unwrap();
    assert!(boundary.is_some());
}

#[tokio::test]
async fn create_user_rejects_duplicate_email() {
    let db = create_test_db().await;

    let first = db
        .create_user("reader@example.com", "pw", None, None, None)
        .await
        .unwrap();
    assert!(first.is_some());

    let second = db
        .create_user("reader@example.com", "other", None, None, None)
        .await
        .unwrap();
    assert!(second.is_none());

    assert_eq!(db.get_all_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_user_applies_only_provided_fields() {
    let db = create_test_db().await;
    let user = db
        .create_user("reader@example.com", "pw", Some("Ada"), None, None)
        .await
        .unwrap()
        .unwrap();

    let update = UserUpdate {
        role: Some(UserRole::Admin),
        is_active: Some(true),
        ..UserUpdate::default()
    };
    db.update_user(user.id, &update).await.unwrap();

    let reloaded = db.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.role, UserRole::Admin);
    assert!(reloaded.is_active);
    assert_eq!(reloaded.email, "reader@example.com");
    assert_eq!(reloaded.first_name.as_deref(), Some("Ada"));
    assert_eq!(reloaded.password, "pw");
    assert!(reloaded.updated_at >= reloaded.created_at);
}

#[tokio::test]
async fn update_user_can_set_empty_password() {
    let db = create_test_db().await;
    let user = db
        .create_user("reader@example.com", "pw", None, None, None)
        .await
        .unwrap()
        .unwrap();

    let update = UserUpdate {
        password: Some(String::new()),
        ..UserUpdate::default()
    };
    db.update_user(user.id, &update).await.unwrap();

    let reloaded = db.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.password, "");
}

#[tokio::test]
async fn delete_user_returns_true_exactly_once() {
    let db = create_test_db().await;
    let user = db
        .create_user("reader@example.com", "pw", None, None, None)
        .await
        .unwrap()
        .unwrap();

    assert!(db.delete_user(user.id).await.unwrap());
    assert!(!db.delete_user(user.id).await.unwrap());
    assert!(!db.delete_user(9999).await.unwrap());
    assert!(db.get_user(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn get_all_users_ordered_by_id() {
    let db = create_test_db().await;
    db.create_user("a@b.c", "pw", None, None, None)
        .await
        .unwrap();
    db.create_user("b@c.d", "pw", None, None, None)
        .await
        .unwrap();

    let all = db.get_all_users().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].id < all[1].id);
    assert_eq!(all[0].email, "a@b.c");
}
