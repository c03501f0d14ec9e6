// ABOUTME: Integration tests for the book catalog database module
// ABOUTME: Covers creation with author sets, association management, and cascade behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

#![allow(missing_docs, clippy::unwrap_used)]

use biblio_server::database::Database;
use biblio_server::models::BookUpdate;
use serde_json::json;

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

#[tokio::test]
async fn create_book_with_authors_lists_their_ids() {
    let db = create_test_db().await;
    let a1 = db.create_author("Ilf", "", "").await.unwrap().unwrap();
    let a2 = db.create_author("Petrov", "", "").await.unwrap().unwrap();

    let book = db
        .create_book("The Twelve Chairs", "satire", Some(5), Some(&[a1.id, a2.id]))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(book.count, 5);

    let ids = db.get_book_author_ids(book.id).await.unwrap();
    assert_eq!(ids, vec![a1.id, a2.id]);

    let dict = db.book_to_dict(&book).await.unwrap();
    assert_eq!(dict["authors"], json!([a1.id, a2.id]));
}

#[tokio::test]
async fn create_book_defaults_count_to_ten() {
    let db = create_test_db().await;
    let book = db
        .create_book("Short Stories", "", None, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(book.count, 10);
    assert!(db.get_book_author_ids(book.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_book_rejects_long_name() {
    let db = create_test_db().await;

    let long = "x".repeat(129);
    assert!(db.create_book(&long, "", None, None).await.unwrap().is_none());
    assert!(db.get_all_books().await.unwrap().is_empty());

    let boundary = "x".repeat(128);
    assert!(db
        .create_book(&boundary, "", None, None)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn add_and_remove_authors() {
    let db = create_test_db().await;
    let author = db.create_author("Gogol", "", "").await.unwrap().unwrap();
    let book = db
        .create_book("Dead Souls", "", None, None)
        .await
        .unwrap()
        .unwrap();

    db.add_book_authors(book.id, &[author.id]).await.unwrap();
    // Re-adding the same author is a no-op
    db.add_book_authors(book.id, &[author.id]).await.unwrap();
    assert_eq!(db.get_book_author_ids(book.id).await.unwrap(), vec![author.id]);

    db.remove_book_authors(book.id, &[author.id]).await.unwrap();
    assert!(db.get_book_author_ids(book.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_book_applies_provided_fields_without_validation() {
    let db = create_test_db().await;
    let book = db
        .create_book("Draft", "first pass", None, None)
        .await
        .unwrap()
        .unwrap();

    let update = BookUpdate {
        description: Some("second pass".into()),
        count: Some(3),
        ..BookUpdate::default()
    };
    let updated = db.update_book(book.id, &update).await.unwrap().unwrap();

    assert_eq!(updated.name, "Draft");
    assert_eq!(updated.description, "second pass");
    assert_eq!(updated.count, 3);
}

#[tokio::test]
async fn update_book_missing_returns_none() {
    let db = create_test_db().await;
    let update = BookUpdate {
        name: Some("Ghost".into()),
        ..BookUpdate::default()
    };
    assert!(db.update_book(42, &update).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_book_cascades_associations_but_keeps_authors() {
    let db = create_test_db().await;
    let author = db.create_author("Gogol", "", "").await.unwrap().unwrap();
    let book = db
        .create_book("Dead Souls", "", None, Some(&[author.id]))
        .await
        .unwrap()
        .unwrap();

    assert!(db.delete_book(book.id).await.unwrap());
    assert!(!db.delete_book(book.id).await.unwrap());

    let orphaned: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_authors")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(orphaned, 0);

    assert!(db.get_author(author.id).await.unwrap().is_some());
}

#[tokio::test]
async fn get_all_books_ordered_by_id() {
    let db = create_test_db().await;
    db.create_book("A", "", None, None).await.unwrap();
    db.create_book("B", "", None, None).await.unwrap();

    let all = db.get_all_books().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].id < all[1].id);
}
