//! Domain models with validation at construction
//!
//! Path and body input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod book;
pub mod validation;

pub use book::{Book, BookId, NewBook};
pub use validation::ValidationError;
