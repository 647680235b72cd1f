//! Defines the AST for bind parameters and column assignments.

use model::core::value::Value;

/// A bind parameter, rendered through the dialect's placeholder syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: Value,
}

/// Pairs a column with the parameter it is compared to or set from.
///
/// The same node backs filter predicates, SET lists, VALUES lists and key
/// predicates; each statement renders it in its own spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub param: Param,
}

impl Assignment {
    pub fn new(column: impl Into<String>, param: impl Into<String>, value: Value) -> Self {
        Self {
            column: column.into(),
            param: Param {
                name: param.into(),
                value,
            },
        }
    }
}
