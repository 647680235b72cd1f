//! Defines the AST for a filtered SELECT.

use crate::{error::QueryError, query::ast::expr::Assignment};
use std::str::FromStr;

/// Keyword combining filter predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Joiner {
    #[default]
    And,
    Or,
}

impl Joiner {
    pub fn keyword(&self) -> &'static str {
        match self {
            Joiner::And => "and",
            Joiner::Or => "or",
        }
    }
}

impl FromStr for Joiner {
    type Err = QueryError;

    /// An empty string selects the default, `AND`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "and" => Ok(Joiner::And),
            "or" => Ok(Joiner::Or),
            _ => Err(QueryError::InvalidJoiner(s.to_string())),
        }
    }
}

/// A caller-supplied base query plus the equality predicates to append.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    /// e.g. `select * from categories`
    pub base: String,
    pub joiner: Joiner,
    pub predicates: Vec<Assignment>,
}
