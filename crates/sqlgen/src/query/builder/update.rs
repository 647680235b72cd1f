//! Provides a builder for partial `Update` ASTs.

use crate::{
    error::QueryError,
    query::ast::{expr::Assignment, update::Update},
};
use model::core::column::{Column, Record};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table: String,
    keys: Vec<String>,
    columns: Vec<Column>,
}

impl UpdateBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            keys: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Columns that scope the update. They always appear in the WHERE
    /// clause, whatever they hold.
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    /// Takes the record's columns, with nested groups flattened in place.
    pub fn record<R: Record + ?Sized>(mut self, record: &R) -> Self {
        self.columns.extend(record.columns());
        self
    }

    /// Builds the SET list and key predicates.
    ///
    /// A column is set when it is insertable and either forced, non-zero, or
    /// one of the keys. Zero-valued columns are left alone so a partial
    /// record does not overwrite stored values with defaults.
    pub fn build(self) -> Result<Update, QueryError> {
        let is_key = |column: &Column| self.keys.iter().any(|k| k == column.name());

        let mut assignments = Vec::new();
        for column in self.columns.iter().filter(|c| c.opts.insertable) {
            if column.zero && !column.opts.force && !is_key(column) {
                trace!(column = column.name(), "Leaving zero-valued column out of SET");
                continue;
            }
            assignments.push(Assignment::new(
                column.name(),
                column.name(),
                column.value.clone(),
            ));
        }

        let mut keys = Vec::with_capacity(self.keys.len());
        for key in &self.keys {
            let column = self
                .columns
                .iter()
                .find(|c| c.name() == key)
                .ok_or_else(|| QueryError::UnknownKeyColumn {
                    table: self.table.clone(),
                    column: key.clone(),
                })?;
            keys.push(Assignment::new(key, key, column.value.clone()));
        }

        if assignments.is_empty() {
            return Err(QueryError::NothingToUpdate { table: self.table });
        }

        Ok(Update {
            table: self.table,
            assignments,
            keys,
        })
    }
}
