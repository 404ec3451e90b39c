//! Repository whose every call fails, for error-path tests

use async_trait::async_trait;

use super::books::{BookRepository, DbError};
use crate::models::{Book, BookId, NewBook};

/// Every call fails with a pool timeout
pub(crate) struct FailingBookRepository;

#[async_trait]
impl BookRepository for FailingBookRepository {
    async fn create(&self, _book: NewBook) -> Result<Book, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: BookId) -> Result<u64, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list(&self) -> Result<Vec<Book>, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn get(&self, _id: BookId) -> Result<Book, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn count(&self) -> Result<i64, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
