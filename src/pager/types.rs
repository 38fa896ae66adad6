//! Paging types
//!
//! Defines the page value object and the cursor lifecycle state.

use crate::types::OptionStringExt;
use serde::Deserialize;

/// An ordered slice of a listing plus the token for the next fetch
///
/// A page with no continuation token is the last page. Item order is the
/// server response order; the pager never reorders or buffers beyond one
/// page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    continuation_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a final page (no continuation)
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            continuation_token: None,
        }
    }

    /// Create a page with a continuation token
    ///
    /// An empty token is normalized to "no continuation": servers that
    /// return `""` instead of omitting the field mean the same thing.
    pub fn with_token(items: Vec<T>, token: impl Into<String>) -> Self {
        Self {
            items,
            continuation_token: token.into().none_if_empty(),
        }
    }

    /// Items in server order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, yielding its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The continuation token, if any
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }

    /// Check if this is the last page
    pub fn is_last(&self) -> bool {
        self.continuation_token.is_none()
    }

    /// Number of items in the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Wire shape of a paged listing body
///
/// `{ "items": [...], "continuation_token": "..." }`; the token field may
/// be absent, null, or empty, all meaning "last page".
#[derive(Debug, Clone, Deserialize)]
pub struct PageBody<T> {
    /// Result items in server order
    #[serde(default)]
    pub items: Vec<T>,
    /// Opaque cursor for the next page
    #[serde(default)]
    pub continuation_token: Option<String>,
}

impl<T> From<PageBody<T>> for Page<T> {
    fn from(body: PageBody<T>) -> Self {
        match body.continuation_token.none_if_empty() {
            Some(token) => Page::with_token(body.items, token),
            None => Page::new(body.items),
        }
    }
}

/// Lifecycle of a pager's cursor
///
/// Created `NotStarted`, advances through `Continuation` tokens, and ends
/// `Exhausted`: after the last page, after an error, or after an
/// empty-token short-circuit. There is no way back from `Exhausted`;
/// re-listing means building a fresh pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorState {
    /// No fetch issued yet
    NotStarted,
    /// Last fetched page pointed at this token
    Continuation(String),
    /// Sequence over; no further fetches will be issued
    Exhausted,
}

impl CursorState {
    /// Check if the cursor is exhausted
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
