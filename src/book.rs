//! The book entity and its input records.

use crate::error::{CatalogError, Field};
use crate::id::BookId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated book record with a catalog-assigned identifier.
///
/// ### Identity
/// The identifier is assigned exactly once, when the book enters a
/// [`Library`](crate::Library), and is never reassigned. The three text
/// fields may change through [`Library::update`](crate::Library::update);
/// the identifier may not, which the lack of any public mutator enforces
/// statically.
///
/// ### Validation
/// Field values are stored verbatim: no trimming, no normalization, and
/// empty text is accepted. Type checks happen where untyped input enters
/// the crate, in [`BookDraft::from_value`] and [`BookPatch::from_value`];
/// a `Book` in hand is always well-formed.
///
/// ### Serialization
/// Serializes to a flat record with `id`, `title`, `description`, and
/// `author` keys, ready for a consumer-facing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    description: String,
    author: String,
}

impl Book {
    pub(crate) fn new(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            author: draft.author,
        }
    }

    /// The identifier assigned when this book entered the catalog.
    #[inline]
    pub fn id(&self) -> &BookId {
        &self.id
    }

    /// The book's title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The book's author.
    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    // Overwrites each field the patch carries; `None` fields keep their
    // current value.
    pub(crate) fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
    }
}

/// The full input record for creating a book.
///
/// A draft is valid by construction at the typed layer - the field types
/// are the first validation layer. Untyped input goes through
/// [`BookDraft::from_value`], which performs the runtime text checks and
/// reports every offending field at once.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookDraft {
    /// Title text, stored verbatim.
    pub title: String,
    /// Description text, stored verbatim.
    pub description: String,
    /// Author text, stored verbatim.
    pub author: String,
}

impl BookDraft {
    /// Creates a draft from the three field values.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author: author.into(),
        }
    }

    /// Reads a full record out of an untyped value.
    ///
    /// Each of the three fields must be present and textual. A field that
    /// is missing or carries a non-text value (including `null`) fails the
    /// check; the returned [`CatalogError::FieldType`] lists all failures
    /// in record order.
    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        let title = value.get(Field::Title.as_str()).and_then(Value::as_str);
        let description = value
            .get(Field::Description.as_str())
            .and_then(Value::as_str);
        let author = value.get(Field::Author.as_str()).and_then(Value::as_str);

        match (title, description, author) {
            (Some(title), Some(description), Some(author)) => Ok(Self {
                title: title.to_owned(),
                description: description.to_owned(),
                author: author.to_owned(),
            }),
            _ => {
                let mut fields = Vec::new();
                if title.is_none() {
                    fields.push(Field::Title);
                }
                if description.is_none() {
                    fields.push(Field::Description);
                }
                if author.is_none() {
                    fields.push(Field::Author);
                }
                Err(CatalogError::FieldType { fields })
            }
        }
    }
}

/// A partial input record for updating a book.
///
/// Each field is independently optional; `None` means "leave the current
/// value unchanged". The empty patch is valid and changes nothing.
/// Present-but-empty text counts as a value and overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookPatch {
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement description, if any.
    pub description: Option<String>,
    /// Replacement author, if any.
    pub author: Option<String>,
}

impl BookPatch {
    /// Reads a partial record out of an untyped value.
    ///
    /// A key that is absent maps to `None`; a key that is present with a
    /// non-text value (including `null`) fails the check. The returned
    /// [`CatalogError::FieldType`] lists all failures in record order.
    /// Keys other than the three fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        let mut fields = Vec::new();
        let title = optional_text(value, Field::Title, &mut fields);
        let description = optional_text(value, Field::Description, &mut fields);
        let author = optional_text(value, Field::Author, &mut fields);

        if fields.is_empty() {
            Ok(Self {
                title,
                description,
                author,
            })
        } else {
            Err(CatalogError::FieldType { fields })
        }
    }

    /// Returns the patch with a replacement title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the patch with a replacement description.
    #[inline]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the patch with a replacement author.
    #[inline]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Returns whether the patch carries no replacement values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.author.is_none()
    }
}

fn optional_text(value: &Value, field: Field, failed: &mut Vec<Field>) -> Option<String> {
    match value.get(field.as_str()) {
        None => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            failed.push(field);
            None
        }
    }
}
