//! In-process book repository

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::books::{BookRepository, DbError};
use crate::models::{Book, BookId, NewBook};

/// In-memory implementation of the book repository.
///
/// Ids start at 1 and are never reused, matching a `BIGSERIAL` column.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookRepository {
    inner: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    books: BTreeMap<i64, Book>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn create(&self, book: NewBook) -> Result<Book, DbError> {
        let mut state = self.inner.write().await;
        state.last_id += 1;
        let book = book.into_book(BookId::from(state.last_id));
        state.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: BookId) -> Result<u64, DbError> {
        let mut state = self.inner.write().await;
        Ok(state.books.remove(&id.get()).map_or(0, |_| 1))
    }

    async fn list(&self) -> Result<Vec<Book>, DbError> {
        Ok(self.inner.read().await.books.values().cloned().collect())
    }

    async fn get(&self, id: BookId) -> Result<Book, DbError> {
        self.inner
            .read()
            .await
            .books
            .get(&id.get())
            .cloned()
            .ok_or_else(|| DbError::NotFound {
                resource: "book",
                id: id.to_string(),
            })
    }

    async fn count(&self) -> Result<i64, DbError> {
        Ok(self.inner.read().await.books.len() as i64)
    }
}
