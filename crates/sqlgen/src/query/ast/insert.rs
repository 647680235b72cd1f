//! Defines the AST for an INSERT statement.

use crate::query::ast::expr::Assignment;

/// A single-row INSERT.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub table: String,
    /// Column/value pairs in declaration order.
    pub values: Vec<Assignment>,
    /// Optional ON CONFLICT clause turning the insert into an upsert.
    pub on_conflict: Option<OnConflict>,
}

/// `on conflict(<column>) do update set ...`
#[derive(Debug, Clone, PartialEq)]
pub struct OnConflict {
    pub column: String,
    pub assignments: Vec<Assignment>,
}
