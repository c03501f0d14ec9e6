// ABOUTME: Integration tests for the per-entity repository seams
// ABOUTME: Exercises trait-object access and the DatabaseError surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

#![allow(missing_docs, clippy::unwrap_used)]

use biblio_server::database::repositories::{
    AuthorRepository, AuthorRepositoryImpl, BookRepository, BookRepositoryImpl, OrderRepository,
    OrderRepositoryImpl, UserRepository, UserRepositoryImpl,
};
use biblio_server::database::{Database, DatabaseError};
use biblio_server::models::UserUpdate;
use chrono::{Duration, Utc};

async fn create_test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

#[tokio::test]
async fn user_repository_round_trip() {
    let db = create_test_db().await;
    let repo: Box<dyn UserRepository> = Box::new(UserRepositoryImpl::new(db));

    let user = repo
        .create("reader@example.com", "pw", Some("Ada"), None, None)
        .await
        .unwrap()
        .unwrap();

    let by_email = repo
        .get_by_email("reader@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);

    let update = UserUpdate {
        is_active: Some(true),
        ..UserUpdate::default()
    };
    repo.update(user.id, &update).await.unwrap();
    assert!(repo.get_by_id(user.id).await.unwrap().unwrap().is_active);

    assert_eq!(repo.get_all().await.unwrap().len(), 1);
    assert!(repo.delete_by_id(user.id).await.unwrap());
    assert!(!repo.delete_by_id(user.id).await.unwrap());
}

#[tokio::test]
async fn book_repository_manages_associations() {
    let db = create_test_db().await;
    let authors: Box<dyn AuthorRepository> = Box::new(AuthorRepositoryImpl::new(db.clone()));
    let books: Box<dyn BookRepository> = Box::new(BookRepositoryImpl::new(db));

    let author = authors.create("Gogol", "", "").await.unwrap().unwrap();
    let book = books
        .create("Dead Souls", "a poem", None, None)
        .await
        .unwrap()
        .unwrap();

    books.add_authors(book.id, &[author.id]).await.unwrap();
    let dict = books.to_dict(&book).await.unwrap();
    assert_eq!(dict["authors"], serde_json::json!([author.id]));

    books.remove_authors(book.id, &[author.id]).await.unwrap();
    let dict = books.to_dict(&book).await.unwrap();
    assert_eq!(dict["authors"], serde_json::json!([]));
}

#[tokio::test]
async fn order_repository_enforces_single_outstanding_loan() {
    let db = create_test_db().await;
    let users: Box<dyn UserRepository> = Box::new(UserRepositoryImpl::new(db.clone()));
    let books: Box<dyn BookRepository> = Box::new(BookRepositoryImpl::new(db.clone()));
    let orders: Box<dyn OrderRepository> = Box::new(OrderRepositoryImpl::new(db));

    let user = users
        .create("reader@example.com", "pw", None, None, None)
        .await
        .unwrap()
        .unwrap();
    let book = books
        .create("Dead Souls", "", None, None)
        .await
        .unwrap()
        .unwrap();
    let deadline = Utc::now() + Duration::days(30);

    let order = orders
        .create(user.id, book.id, deadline)
        .await
        .unwrap()
        .unwrap();
    assert!(orders.create(user.id, book.id, deadline).await.unwrap().is_none());

    let outstanding = orders.get_not_returned().await.unwrap();
    assert_eq!(outstanding.len(), 1);
    assert_eq!(outstanding[0].id, order.id);
}

#[test]
fn database_error_messages_name_the_failure() {
    let connection = DatabaseError::ConnectionError {
        context: "refused".into(),
    };
    let query = DatabaseError::QueryError {
        context: "syntax".into(),
    };
    let migration = DatabaseError::MigrationError {
        context: "locked".into(),
    };

    assert_eq!(connection.to_string(), "database connection failed: refused");
    assert_eq!(query.to_string(), "database query failed: syntax");
    assert_eq!(migration.to_string(), "database migration failed: locked");
}
