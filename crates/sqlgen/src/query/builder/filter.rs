//! Provides a builder that turns a record into filter predicates.

use crate::query::ast::{
    expr::Assignment,
    filter::{Filter, Joiner},
};
use model::core::column::Record;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct FilterBuilder {
    ast: Filter,
}

impl FilterBuilder {
    pub fn new(base: &str) -> Self {
        Self {
            ast: Filter {
                base: base.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn joiner(mut self, joiner: Joiner) -> Self {
        self.ast.joiner = joiner;
        self
    }

    /// Adds one `column = :field` predicate per non-zero mapped field.
    ///
    /// Zero-valued fields mean "no filter on this attribute", so an explicit
    /// `false`, `0` or `""` can only be matched through an `Option` field.
    /// The predicate uses the column's filter name when one is set.
    pub fn criteria<R: Record + ?Sized>(mut self, criteria: &R) -> Self {
        for column in criteria.columns() {
            if column.zero {
                trace!(field = column.field, "Skipping zero-valued filter field");
                continue;
            }
            self.ast.predicates.push(Assignment::new(
                column.opts.filter_name(),
                column.field,
                column.value,
            ));
        }
        self
    }

    pub fn build(self) -> Filter {
        self.ast
    }
}
