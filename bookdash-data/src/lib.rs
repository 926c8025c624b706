//! Book catalog loading and filtering.
//!
//! This crate owns the data side of the dashboard:
//! - [`catalog::BookCatalog`]: parses the raw books CSV into an immutable
//!   in-memory collection and derives the widget bounds (distinct authors,
//!   maximum page count).
//! - [`filter::filter_books`]: the pure reducer applied on every widget
//!   change before the chart is rebuilt.
//!
//! Everything here is plain Rust with no WASM dependencies, so it is
//! testable natively. Fetching the CSV over HTTP is the app's concern.

pub mod catalog;
pub mod error;
pub mod filter;

pub use catalog::{Book, BookCatalog};
pub use error::{LoadError, Result};
pub use filter::filter_books;
