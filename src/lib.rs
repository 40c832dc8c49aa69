//! # Bookshelf
//!
//! A small in-memory catalog of books: validated records, opaque generated
//! identifiers, and ordered CRUD operations over a single owned sequence.
//!
//! The catalog is a library-level component with no persistence, no
//! networking, and no concurrency story beyond `&mut self` - one logical
//! caller at a time, enforced by the borrow checker. Consumers sit on top
//! of it (a CLI shell, an HTTP handler, a test harness) and translate its
//! two error kinds into whatever their surface needs.
//!
//! ## Example
//!
//! ```rust
//! use bookshelf::{BookDraft, BookPatch, Library};
//!
//! let mut library = Library::new();
//! let id = library
//!     .add(BookDraft::new(
//!         "The Dispossessed",
//!         "An ambiguous utopia",
//!         "Ursula K. Le Guin",
//!     ))
//!     .id()
//!     .clone();
//!
//! library.update(&id, BookPatch::default().with_author("U. K. Le Guin"))?;
//! assert_eq!(library.get(&id)?.author(), "U. K. Le Guin");
//!
//! library.remove(&id)?;
//! assert!(library.is_empty());
//! # Ok::<(), bookshelf::CatalogError>(())
//! ```
//!
//! ## Untyped input
//!
//! Typed drafts and patches are valid by construction. Where input arrives
//! untyped (deserialized JSON from an external caller), the runtime text
//! checks live at that boundary and report every offending field at once:
//!
//! ```rust
//! use bookshelf::{CatalogError, Field, Library};
//! use serde_json::json;
//!
//! let mut library = Library::new();
//! let err = library
//!     .add_value(&json!({ "title": 42, "description": "d", "author": "a" }))
//!     .unwrap_err();
//! assert_eq!(err, CatalogError::FieldType { fields: vec![Field::Title] });
//! assert!(library.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod book;
pub mod error;
pub mod id;
pub mod library;

pub use book::{Book, BookDraft, BookPatch};
pub use error::{CatalogError, Field};
pub use id::{BookId, IdSource, RandomIds};
pub use library::Library;
