//! Turns records into filter, insert and update statements.

use crate::{
    error::QueryError,
    query::{
        ast::filter::Joiner,
        builder::{filter::FilterBuilder, insert::InsertBuilder, update::UpdateBuilder},
        dialect::{Dialect, Named},
        renderer::{Render, Renderer, Statement},
    },
};
use model::core::column::Record;
use tracing::{debug, trace, warn};

static NAMED: Named = Named;

/// Stateless statement generator bound to a placeholder dialect.
///
/// Safe to share across threads; every call works only on its inputs.
#[derive(Clone, Copy)]
pub struct QueryGenerator<'a> {
    dialect: &'a dyn Dialect,
}

impl Default for QueryGenerator<'static> {
    fn default() -> Self {
        Self { dialect: &NAMED }
    }
}

impl<'a> QueryGenerator<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Appends `where col = :field ...` to `base` for each non-zero field of
    /// `criteria`. Returns `base` unchanged when nothing survives.
    pub fn build_filter<R: Record + ?Sized>(
        &self,
        base: &str,
        criteria: &R,
        joiner: Joiner,
    ) -> Statement {
        let ast = FilterBuilder::new(base)
            .joiner(joiner)
            .criteria(criteria)
            .build();
        let stmt = self.render_ast(&ast);
        debug!(sql = %stmt.sql, "Generated filter");
        stmt
    }

    /// Generates `insert into table (...) values(...)` over every insertable
    /// column. With `upsert`, adds `on conflict(primary_key) do update set`
    /// for the same columns.
    pub fn build_insert<R: Record + ?Sized>(
        &self,
        table: &str,
        primary_key: &str,
        record: &R,
        upsert: bool,
    ) -> Result<Statement, QueryError> {
        let mut builder = InsertBuilder::new(table).record(record);
        if upsert {
            if primary_key.is_empty() {
                warn!(table, "Upsert requested without a conflict column; generating a plain insert");
            } else {
                builder = builder.upsert(primary_key);
            }
        }

        let stmt = self.render_ast(&builder.build()?);
        debug!(table, sql = %stmt.sql, "Generated insert");
        Ok(stmt)
    }

    /// Generates a partial `update table set ... where ...` scoped by
    /// `primary_keys`.
    pub fn build_update<R: Record + ?Sized>(
        &self,
        table: &str,
        primary_keys: &[&str],
        record: &R,
    ) -> Result<Statement, QueryError> {
        let ast = UpdateBuilder::new(table)
            .keys(primary_keys)
            .record(record)
            .build()?;
        let stmt = self.render_ast(&ast);
        debug!(table, sql = %stmt.sql, "Generated update");
        Ok(stmt)
    }

    fn render_ast(&self, ast: &dyn Render) -> Statement {
        let mut renderer = Renderer::new(self.dialect);
        ast.render(&mut renderer);
        let stmt = renderer.finish();
        trace!(
            dialect = self.dialect.name(),
            binds = %stmt.binds.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", "),
            "Rendered statement"
        );
        stmt
    }
}
