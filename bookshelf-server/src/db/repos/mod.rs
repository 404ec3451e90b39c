//! Repository implementations for database access
//!
//! `BookRepository` is the seam between handlers and storage:
//! - `PgBookRepository` issues SQL against the pool
//! - `MemoryBookRepository` keeps rows in process (tests, `serve --in-memory`)

pub mod books;
pub mod memory;

#[cfg(test)]
pub(crate) mod failing;

pub use books::{BookRepository, BookRepositoryArc, DbError, PgBookRepository};
pub use memory::MemoryBookRepository;
