//! Defines the AST for an UPDATE statement.

use crate::query::ast::expr::Assignment;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    pub table: String,
    /// The SET list.
    pub assignments: Vec<Assignment>,
    /// Key predicates, joined with `and`. Empty means no WHERE clause.
    pub keys: Vec<Assignment>,
}
