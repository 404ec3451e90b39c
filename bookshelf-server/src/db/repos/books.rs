//! Book repository
//!
//! One statement per operation, no transactions:
//! - create: INSERT ... RETURNING for the assigned id
//! - delete: DELETE by primary key, reports rows affected
//! - list: every row, ordered by id
//! - get: single row or NotFound

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Book, BookId, NewBook};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Storage operations behind the book endpoints
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book and return it with its assigned id.
    async fn create(&self, book: NewBook) -> Result<Book, DbError>;

    /// Delete by id. Returns the number of rows removed (0 or 1).
    async fn delete(&self, id: BookId) -> Result<u64, DbError>;

    /// Every stored book, ordered by id.
    async fn list(&self) -> Result<Vec<Book>, DbError>;

    /// Fetch one book, or `DbError::NotFound`.
    async fn get(&self, id: BookId) -> Result<Book, DbError>;

    /// Number of stored books. Doubles as a storage liveness check.
    async fn count(&self) -> Result<i64, DbError>;
}

/// Shared handle stored in router state
pub type BookRepositoryArc = Arc<dyn BookRepository>;

/// PostgreSQL-backed book repository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, book: NewBook) -> Result<Book, DbError> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (author, title, publisher)
            VALUES ($1, $2, $3)
            RETURNING id, author, title, publisher
            "#,
        )
        .bind(&book.author)
        .bind(&book.title)
        .bind(&book.publisher)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: BookId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list(&self) -> Result<Vec<Book>, DbError> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, author, title, publisher FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get(&self, id: BookId) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>(
            "SELECT id, author, title, publisher FROM books WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "book",
            id: id.to_string(),
        })
    }

    async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p bookshelf-server -- --ignored

    async fn repo() -> PgBookRepository {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("connect failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgBookRepository::new(pool)
    }

    fn sample() -> NewBook {
        NewBook {
            author: "A".into(),
            title: "T".into(),
            publisher: "P".into(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_get_delete_cycle() {
        let repo = repo().await;

        let created = repo.create(sample()).await.unwrap();
        assert!(created.id > 0);

        let fetched = repo.get(BookId::from(created.id)).await.unwrap();
        assert_eq!(fetched, created);

        let removed = repo.delete(BookId::from(created.id)).await.unwrap();
        assert_eq!(removed, 1);

        let err = repo.get(BookId::from(created.id)).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_missing_affects_nothing() {
        let repo = repo().await;
        let removed = repo.delete(BookId::from(-1)).await.unwrap();
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_contains_created() {
        let repo = repo().await;
        let created = repo.create(sample()).await.unwrap();

        let books = repo.list().await.unwrap();
        assert!(books.contains(&created));
        assert_eq!(repo.count().await.unwrap(), books.len() as i64);
        assert!(books.windows(2).all(|w| w[0].id < w[1].id));

        repo.delete(BookId::from(created.id)).await.unwrap();
    }
}
