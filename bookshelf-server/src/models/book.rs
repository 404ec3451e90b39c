//! Book record and its identifier

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Stored book, as returned by every read endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub publisher: String,
}

/// Create request body.
///
/// Absent fields become empty strings; wrong JSON types are rejected by
/// the deserializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewBook {
    pub author: String,
    pub title: String,
    pub publisher: String,
}

impl NewBook {
    /// Attach a server-assigned id.
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id: id.get(),
            author: self.author,
            title: self.title,
            publisher: self.publisher,
        }
    }
}

/// Validated primary key taken from a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(i64);

impl BookId {
    /// Parse a path segment into an id.
    ///
    /// # Example
    /// ```
    /// use bookshelf_server::models::BookId;
    ///
    /// assert_eq!(BookId::parse("42").unwrap().get(), 42);
    /// assert!(BookId::parse("").is_err());
    /// assert!(BookId::parse("abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        s.parse::<i64>().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
