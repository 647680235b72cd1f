use crate::pagination::directive::PageDirective;
use serde::Serialize;

/// Pagination metadata returned alongside a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// The `{data: [...], pagination: {cursor: ...}}` response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Wraps fetched rows, offering the directive's cursor only when the
    /// page came back full.
    pub fn from_rows(rows: Vec<T>, directive: &PageDirective) -> Self {
        let cursor = directive.finish(rows.len());
        Self {
            data: rows,
            pagination: Pagination { cursor },
        }
    }
}
