use model::pagination::cursor::Direction;
use serde::Deserialize;

/// Pagination parameters as received on a list endpoint's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    /// Requested page size.
    pub first: Option<String>,
    /// Cursor of the page to continue after.
    pub after: Option<String>,
    /// Cursor of the page to step back from.
    pub before: Option<String>,
}

impl PageRequest {
    pub fn first(first: u32) -> Self {
        Self {
            first: Some(first.to_string()),
            ..Default::default()
        }
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// The cursor to follow, if any. `after` wins when both are present.
    pub fn cursor(&self) -> Option<(Direction, &str)> {
        non_empty(&self.after)
            .map(|c| (Direction::After, c))
            .or_else(|| non_empty(&self.before).map(|c| (Direction::Before, c)))
    }

    pub fn has_both_cursors(&self) -> bool {
        non_empty(&self.after).is_some() && non_empty(&self.before).is_some()
    }
}

fn non_empty(cursor: &Option<String>) -> Option<&str> {
    cursor.as_deref().filter(|c| !c.trim().is_empty())
}
