//! Tests for the untyped-input boundary: draft/patch validation and the
//! serialized shape of catalog records.

use bookshelf::{BookDraft, BookId, BookPatch, CatalogError, Field, IdSource, Library};
use pretty_assertions::assert_eq;
use serde_json::json;

struct SequentialIds(u32);

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> BookId {
        self.0 += 1;
        BookId::from(format!("book-{:04}", self.0))
    }
}

#[test]
fn test_draft_from_value_accepts_text_fields() {
    let draft = BookDraft::from_value(&json!({
        "title": "Solaris",
        "description": "A sentient ocean",
        "author": "Stanislaw Lem",
    }))
    .expect("all fields are text");

    assert_eq!(draft, BookDraft::new("Solaris", "A sentient ocean", "Stanislaw Lem"));
}

#[test]
fn test_draft_from_value_accepts_empty_text() {
    let draft = BookDraft::from_value(&json!({
        "title": "",
        "description": "",
        "author": "",
    }))
    .expect("empty text is still text");

    assert_eq!(draft, BookDraft::new("", "", ""));
}

#[test]
fn test_draft_from_value_ignores_extra_keys() {
    let draft = BookDraft::from_value(&json!({
        "title": "t",
        "description": "d",
        "author": "a",
        "year": 1961,
    }))
    .expect("the three fields are text");

    assert_eq!(draft, BookDraft::new("t", "d", "a"));
}

#[test]
fn test_draft_from_value_rejects_one_bad_field() {
    let err = BookDraft::from_value(&json!({
        "title": "t",
        "description": 7,
        "author": "a",
    }))
    .expect_err("description is not text");

    assert_eq!(
        err,
        CatalogError::FieldType {
            fields: vec![Field::Description]
        }
    );
}

#[test]
fn test_draft_from_value_reports_every_bad_field_in_order() {
    let err = BookDraft::from_value(&json!({
        "title": 1,
        "description": true,
        "author": ["not", "text"],
    }))
    .expect_err("no field is text");

    assert_eq!(
        err,
        CatalogError::FieldType {
            fields: vec![Field::Title, Field::Description, Field::Author]
        }
    );
}

#[test]
fn test_draft_from_value_treats_missing_and_null_as_type_failures() {
    let err = BookDraft::from_value(&json!({
        "title": null,
        "author": "a",
    }))
    .expect_err("title is null and description is absent");

    assert_eq!(
        err,
        CatalogError::FieldType {
            fields: vec![Field::Title, Field::Description]
        }
    );
}

#[test]
fn test_patch_from_value_absent_keys_leave_fields_untouched() {
    let patch = BookPatch::from_value(&json!({ "title": "renamed" }))
        .expect("title is text, the rest absent");

    assert_eq!(patch.title.as_deref(), Some("renamed"));
    assert_eq!(patch.description, None);
    assert_eq!(patch.author, None);
}

#[test]
fn test_patch_from_value_empty_record_is_the_empty_patch() {
    let patch = BookPatch::from_value(&json!({})).expect("nothing to validate");
    assert!(patch.is_empty());
    assert_eq!(patch, BookPatch::default());
}

#[test]
fn test_patch_from_value_rejects_present_non_text() {
    let err = BookPatch::from_value(&json!({ "author": 42 })).expect_err("author is not text");
    assert_eq!(
        err,
        CatalogError::FieldType {
            fields: vec![Field::Author]
        }
    );
}

#[test]
fn test_patch_from_value_rejects_present_null() {
    let err = BookPatch::from_value(&json!({ "title": null })).expect_err("null is not text");
    assert_eq!(
        err,
        CatalogError::FieldType {
            fields: vec![Field::Title]
        }
    );
}

#[test]
fn test_patch_from_value_reports_every_bad_field() {
    let err = BookPatch::from_value(&json!({
        "title": 1,
        "author": false,
    }))
    .expect_err("two fields are not text");

    assert_eq!(
        err,
        CatalogError::FieldType {
            fields: vec![Field::Title, Field::Author]
        }
    );
}

#[test]
fn test_add_value_appends_validated_record() {
    let mut library = Library::with_id_source(SequentialIds(0));
    let book = library
        .add_value(&json!({
            "title": "Roadside Picnic",
            "description": "The Zone and its stalkers",
            "author": "Arkady and Boris Strugatsky",
        }))
        .expect("all fields are text");

    assert_eq!(book.id(), &BookId::from("book-0001"));
    assert_eq!(book.title(), "Roadside Picnic");
    assert_eq!(library.len(), 1);
}

#[test]
fn test_add_value_failure_adds_nothing() {
    let mut library = Library::new();
    let err = library
        .add_value(&json!({ "title": 42, "description": "d", "author": "a" }))
        .expect_err("title is not text");

    assert_eq!(
        err,
        CatalogError::FieldType {
            fields: vec![Field::Title]
        }
    );
    assert!(library.is_empty());
}

#[test]
fn test_update_value_applies_partial_record() {
    let mut library = Library::new();
    let id = library
        .add(BookDraft::new("t", "d", "a"))
        .id()
        .clone();

    let book = library
        .update_value(&id, &json!({ "description": "rewritten" }))
        .expect("description is text");
    assert_eq!(book.description(), "rewritten");
    assert_eq!(book.title(), "t");
    assert_eq!(book.author(), "a");
}

#[test]
fn test_update_value_checks_existence_before_field_types() {
    let mut library = Library::new();
    let missing = BookId::from("not-there");

    // Even with an invalid record, the unknown id decides the outcome.
    let err = library
        .update_value(&missing, &json!({ "title": 42 }))
        .expect_err("nothing was added");
    assert_eq!(err, CatalogError::NotFound { id: missing });
}

#[test]
fn test_update_value_type_failure_mutates_nothing() {
    let mut library = Library::new();
    let before = library.add(BookDraft::new("t", "d", "a")).clone();
    let id = before.id().clone();

    let err = library
        .update_value(&id, &json!({ "title": "new", "author": 42 }))
        .expect_err("author is not text");
    assert_eq!(
        err,
        CatalogError::FieldType {
            fields: vec![Field::Author]
        }
    );

    // The valid title replacement must not have been applied either.
    let after = library.get(&id).expect("book is still there");
    assert_eq!(after, &before);
}

#[test]
fn test_book_serializes_as_flat_record() {
    let mut library = Library::with_id_source(SequentialIds(0));
    let book = library.add(BookDraft::new("t", "d", "a"));

    let value = serde_json::to_value(book).expect("test serialization");
    assert_eq!(
        value,
        json!({
            "id": "book-0001",
            "title": "t",
            "description": "d",
            "author": "a",
        })
    );
}

#[test]
fn test_draft_deserializes_from_typed_boundary() {
    let draft: BookDraft = serde_json::from_value(json!({
        "title": "t",
        "description": "d",
        "author": "a",
    }))
    .expect("well-formed record");
    assert_eq!(draft, BookDraft::new("t", "d", "a"));

    let missing: Result<BookDraft, _> =
        serde_json::from_value(json!({ "title": "t", "description": "d" }));
    assert!(missing.is_err());
}

#[test]
fn test_patch_deserializes_from_typed_boundary() {
    let patch: BookPatch = serde_json::from_value(json!({ "author": "a" }))
        .expect("well-formed partial record");
    assert_eq!(patch, BookPatch::default().with_author("a"));
}
