//! The ordered book collection and its CRUD operations.

use crate::book::{Book, BookDraft, BookPatch};
use crate::error::CatalogError;
use crate::id::{BookId, IdSource, RandomIds};
use serde_json::Value;
use std::fmt;

/// An ordered, in-memory collection of [`Book`]s.
///
/// ### Ordering
/// Books keep insertion order. [`remove`](Library::remove) deletes exactly
/// one element and preserves the relative order of the rest; no operation
/// reorders the sequence. Every lookup is a linear scan for the first
/// matching identifier.
///
/// ### Identity
/// Identifiers come from the library's [`IdSource`] as books are added,
/// never from the caller, so the sequence cannot hold duplicates.
///
/// ### Ownership
/// Each `Library` owns its own independent sequence; there is no shared
/// or process-wide state. All mutation goes through `&mut self`, which is
/// the whole concurrency story: one logical caller at a time, enforced by
/// the borrow checker. Exposing a library to concurrent callers requires
/// external synchronization and is out of scope here.
///
/// ### Examples
/// ```rust
/// use bookshelf::{BookDraft, BookPatch, Library};
///
/// let mut library = Library::new();
/// let id = library
///     .add(BookDraft::new("Dune", "Desert planet epic", "Frank Herbert"))
///     .id()
///     .clone();
///
/// library.update(&id, BookPatch::default().with_title("Dune Messiah"))?;
/// assert_eq!(library.get(&id)?.title(), "Dune Messiah");
/// library.remove(&id)?;
/// # Ok::<(), bookshelf::CatalogError>(())
/// ```
pub struct Library {
    books: Vec<Book>,
    ids: Box<dyn IdSource>,
}

impl Library {
    /// Creates an empty library using the default random id generator.
    pub fn new() -> Self {
        Self::with_id_source(RandomIds)
    }

    /// Creates an empty library with an injected id generator.
    ///
    /// Collection logic does not depend on the generator; tests can pass
    /// a deterministic source, e.g. a closure over a counter.
    pub fn with_id_source(ids: impl IdSource + 'static) -> Self {
        Self {
            books: Vec::new(),
            ids: Box::new(ids),
        }
    }

    /// Adds a book built from a typed draft and returns it, id assigned.
    ///
    /// The new book becomes the last element of the sequence.
    pub fn add(&mut self, draft: BookDraft) -> &Book {
        let id = self.ids.next_id();
        let index = self.books.len();
        self.books.push(Book::new(id, draft));
        &self.books[index]
    }

    /// Adds a book from an untyped record.
    ///
    /// Validation happens in [`BookDraft::from_value`]; a type failure
    /// propagates unchanged and nothing is added.
    pub fn add_value(&mut self, value: &Value) -> Result<&Book, CatalogError> {
        let draft = BookDraft::from_value(value)?;
        Ok(self.add(draft))
    }

    /// The full ordered sequence of books, as a direct read-only view.
    #[inline]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books currently in the library.
    #[inline]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns whether the library holds no books.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Finds the book with the given id.
    ///
    /// Fails with [`CatalogError::NotFound`], carrying the requested id,
    /// if no book matches.
    pub fn get(&self, id: &BookId) -> Result<&Book, CatalogError> {
        self.books
            .iter()
            .find(|book| book.id() == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.clone() })
    }

    /// Removes the book with the given id.
    ///
    /// Exactly one element leaves the sequence; the relative order of
    /// every other book is preserved. Fails with
    /// [`CatalogError::NotFound`] if no book matches, in which case the
    /// sequence is untouched.
    pub fn remove(&mut self, id: &BookId) -> Result<(), CatalogError> {
        let index = self.index_of(id)?;
        self.books.remove(index);
        Ok(())
    }

    /// Applies a typed patch to the book with the given id and returns
    /// the updated book.
    ///
    /// Fields the patch carries are overwritten in place; `None` fields
    /// keep their current value. The empty patch changes nothing and
    /// still returns the book. Lookup failures propagate unchanged from
    /// the same logic as [`get`](Library::get).
    pub fn update(&mut self, id: &BookId, patch: BookPatch) -> Result<&Book, CatalogError> {
        let index = self.index_of(id)?;
        self.books[index].apply(patch);
        Ok(&self.books[index])
    }

    /// Updates a book from an untyped partial record.
    ///
    /// The id is resolved first, so an absent id fails with
    /// [`CatalogError::NotFound`] before any field is examined. The patch
    /// is then validated in full; only a fully valid patch mutates the
    /// book, a type failure leaves it untouched.
    pub fn update_value(&mut self, id: &BookId, value: &Value) -> Result<&Book, CatalogError> {
        let index = self.index_of(id)?;
        let patch = BookPatch::from_value(value)?;
        self.books[index].apply(patch);
        Ok(&self.books[index])
    }

    fn index_of(&self, id: &BookId) -> Result<usize, CatalogError> {
        self.books
            .iter()
            .position(|book| book.id() == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.clone() })
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
