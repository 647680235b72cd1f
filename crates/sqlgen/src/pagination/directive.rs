//! Offset/limit paging driven by opaque cursors.

use crate::pagination::request::PageRequest;
use model::pagination::{
    cursor::{Cursor, CursorError},
    settings::PageSettings,
};
use tracing::{debug, warn};

/// What a list query should fetch and which cursor to hand back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDirective {
    pub limit: u32,
    /// `None` when there is no page in the requested direction.
    pub offset: Option<u64>,
    /// Outbound cursor for this page.
    pub cursor: Option<String>,
    /// `LIMIT <limit> OFFSET <offset>`
    pub sql: Option<String>,
}

impl PageDirective {
    fn at(cursor: Cursor) -> Self {
        let token = match cursor.encode() {
            Ok(token) => Some(token),
            Err(err) => {
                warn!(error = %err, "Failed to encode cursor");
                None
            }
        };
        Self {
            limit: cursor.limit,
            offset: Some(cursor.offset),
            cursor: token,
            sql: Some(format!("LIMIT {} OFFSET {}", cursor.limit, cursor.offset)),
        }
    }

    fn suppressed(limit: u32) -> Self {
        Self {
            limit,
            offset: None,
            cursor: None,
            sql: None,
        }
    }

    /// True when the request stepped past the first row; no query should be
    /// paged and no pagination metadata offered.
    pub fn is_suppressed(&self) -> bool {
        self.offset.is_none()
    }

    /// Appends the LIMIT/OFFSET fragment to `query`.
    pub fn apply(&self, query: &str) -> String {
        match &self.sql {
            Some(fragment) => format!("{} {}", query.trim_end(), fragment),
            None => query.to_string(),
        }
    }

    /// The cursor to return once `returned` rows came back. A short page
    /// means the result set is exhausted, so no cursor is offered.
    pub fn finish(&self, returned: usize) -> Option<String> {
        if returned < self.limit as usize {
            return None;
        }
        self.cursor.clone()
    }
}

/// Resolves page requests against one endpoint's [`PageSettings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator {
    settings: PageSettings,
}

impl Paginator {
    pub fn new(settings: PageSettings) -> Self {
        Self {
            settings: settings.validated(),
        }
    }

    /// Computes the page to serve.
    ///
    /// A fresh request starts at offset 0. `after` moves one page forward
    /// from the decoded cursor and `before` one page back; the page size is
    /// `first` when usable, otherwise the default limit. A malformed cursor
    /// falls back to a fresh request; a step before the first row yields a
    /// suppressed directive.
    pub fn directive(&self, request: &PageRequest) -> PageDirective {
        let limit = self
            .settings
            .requested_limit(request.first.as_deref())
            .unwrap_or(self.settings.default_limit);
        if request.has_both_cursors() {
            debug!("Both after and before given; following after");
        }

        let Some((direction, token)) = request.cursor() else {
            debug!(limit, "Fresh page request");
            return PageDirective::at(Cursor::new(0, limit));
        };

        match Cursor::decode(token) {
            Ok(cursor) => match cursor.step(direction, limit) {
                Some(next) => {
                    debug!(?direction, offset = next.offset, limit, "Following cursor");
                    PageDirective::at(next)
                }
                None => {
                    debug!(?direction, offset = cursor.offset, limit, "No page in this direction");
                    PageDirective::suppressed(limit)
                }
            },
            Err(CursorError::Negative { offset }) => {
                debug!(offset, "Cursor points before the first row");
                PageDirective::suppressed(limit)
            }
            Err(err) => {
                warn!(error = %err, "Ignoring malformed cursor");
                PageDirective::at(Cursor::new(0, limit))
            }
        }
    }
}
