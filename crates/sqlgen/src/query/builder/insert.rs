//! Provides a builder for constructing `Insert` ASTs from a record.

use crate::{
    error::QueryError,
    query::ast::{
        expr::Assignment,
        insert::{Insert, OnConflict},
    },
};
use model::core::column::Record;

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    ast: Insert,
    conflict: Option<String>,
}

impl InsertBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            ast: Insert {
                table: table.to_string(),
                ..Default::default()
            },
            conflict: None,
        }
    }

    /// Adds every insertable column, zero-valued or not.
    pub fn record<R: Record + ?Sized>(mut self, record: &R) -> Self {
        self.ast.values.extend(
            record
                .columns()
                .into_iter()
                .filter(|c| c.opts.insertable)
                .map(|c| Assignment::new(c.name(), c.name(), c.value)),
        );
        self
    }

    /// Turns the insert into an upsert on `column`. Every inserted column is
    /// re-assigned on conflict.
    pub fn upsert(mut self, column: &str) -> Self {
        self.conflict = Some(column.to_string());
        self
    }

    pub fn build(mut self) -> Result<Insert, QueryError> {
        if self.ast.values.is_empty() {
            return Err(QueryError::NothingToInsert {
                table: self.ast.table,
            });
        }

        if let Some(column) = self.conflict {
            self.ast.on_conflict = Some(OnConflict {
                column,
                assignments: self.ast.values.clone(),
            });
        }
        Ok(self.ast)
    }
}
