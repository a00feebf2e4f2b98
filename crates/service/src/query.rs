//! Translates request parameters into store filter predicates.
//!
//! Exactly three shapes exist: match-all, case-insensitive substring on a
//! text field, and exact field equality. No ranges, sorting, or
//! pagination; result sets are unbounded.

use serde_json::Value;

use crate::store::Document;

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document.
    All,
    /// Case-insensitive substring match on a text field. Documents where
    /// the field is absent or not a string never match.
    Contains { field: String, term: String },
    /// Exact equality on a field value.
    Eq { field: String, value: Value },
}

impl Filter {
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::Contains { field, term } => doc
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|s| s.to_lowercase().contains(&term.to_lowercase())),
            Filter::Eq { field, value } => doc.get(field) == Some(value),
        }
    }
}

/// Free-text search on a field; an empty or missing term matches all.
pub fn search_filter(field: &str, term: Option<&str>) -> Filter {
    match term {
        Some(t) if !t.is_empty() => Filter::Contains {
            field: field.to_string(),
            term: t.to_string(),
        },
        _ => Filter::All,
    }
}

/// Exact string equality on a field.
pub fn field_eq(field: &str, value: &str) -> Filter {
    Filter::Eq {
        field: field.to_string(),
        value: Value::String(value.to_string()),
    }
}
