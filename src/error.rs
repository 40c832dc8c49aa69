//! Error kinds surfaced by catalog operations.

use crate::id::BookId;
use std::fmt;

/// Names one of the three textual fields of a book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The `title` field.
    Title,
    /// The `description` field.
    Description,
    /// The `author` field.
    Author,
}

impl Field {
    /// Returns the field name as it appears in input records.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Author => "author",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by catalog operations.
///
/// Both kinds are terminal for the catalog itself: nothing is retried,
/// logged, or suppressed here, and a failing operation leaves no partial
/// side effect behind. The caller decides whether to correct the input,
/// abort, or report to an end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// One or more record fields were expected to be text and were not.
    FieldType {
        /// Every offending field, in record order. Never empty.
        fields: Vec<Field>,
    },
    /// An operation referenced an identifier absent from the catalog.
    NotFound {
        /// The identifier that had no match.
        id: BookId,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::FieldType { fields } => {
                let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
                write!(f, "expected text for {}", names.join(", "))
            }
            CatalogError::NotFound { id } => write!(f, "no book with id {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Title.as_str(), "title");
        assert_eq!(Field::Description.as_str(), "description");
        assert_eq!(Field::Author.as_str(), "author");
    }

    #[test]
    fn test_field_type_display() {
        let single = CatalogError::FieldType {
            fields: vec![Field::Author],
        };
        assert_eq!(format!("{single}"), "expected text for author");

        let several = CatalogError::FieldType {
            fields: vec![Field::Title, Field::Description],
        };
        assert_eq!(format!("{several}"), "expected text for title, description");
    }

    #[test]
    fn test_not_found_display() {
        let err = CatalogError::NotFound {
            id: BookId::from("abc123xyz"),
        };
        assert_eq!(format!("{err}"), "no book with id abc123xyz");
    }
}
