//! Defines the core rendering trait and context for converting AST to SQL.

use crate::{
    pagination::directive::PageDirective,
    query::{
        ast::expr::{Assignment, Param},
        dialect::Dialect,
    },
};
use model::core::value::Value;
use std::fmt;

pub mod filter;
pub mod insert;
pub mod update;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Bind {
    pub name: String,
    pub value: Value,
}

impl fmt::Display for Bind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Rendered SQL text and the values to bind, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub binds: Vec<Bind>,
}

impl Statement {
    /// Appends a page's `LIMIT .. OFFSET ..` fragment, if it has one.
    pub fn paginate(mut self, page: &PageDirective) -> Self {
        self.sql = page.apply(&self.sql);
        self
    }
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the binds, and provides access to the
/// dialect for placeholder syntax.
pub struct Renderer<'a> {
    pub sql: String,
    pub binds: Vec<Bind>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            binds: Vec::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final statement.
    pub fn finish(self) -> Statement {
        Statement {
            sql: self.sql,
            binds: self.binds,
        }
    }

    /// Writes the placeholder for `param` and records its bind.
    ///
    /// Named dialects bind a repeated name once when the value matches. A
    /// repeated name carrying a different value (e.g. `id` on a record and on
    /// one of its groups) is renamed `id_2`, `id_3`, ... so neither value is lost.
    pub fn add_param(&mut self, param: &Param) {
        if !self.dialect.binds_by_name() {
            let placeholder = self.dialect.placeholder(&param.name, self.binds.len());
            self.sql.push_str(&placeholder);
            self.push_bind(param.name.clone(), &param.value);
            return;
        }

        let name = self.bind_name(param);
        let placeholder = self.dialect.placeholder(&name, self.binds.len());
        self.sql.push_str(&placeholder);
        if !self.binds.iter().any(|b| b.name == name) {
            self.push_bind(name, &param.value);
        }
    }

    fn bind_name(&self, param: &Param) -> String {
        let mut name = param.name.clone();
        let mut suffix = 1;
        loop {
            let bound = self.binds.iter().find(|b| b.name == name).map(|b| &b.value);
            match bound {
                Some(value) if *value != param.value => {
                    suffix += 1;
                    name = format!("{}_{suffix}", param.name);
                }
                _ => return name,
            }
        }
    }

    fn push_bind(&mut self, name: String, value: &Value) {
        self.binds.push(Bind {
            name,
            value: value.clone(),
        });
    }

    /// Renders `column<op>placeholder`.
    pub fn render_assignment(&mut self, assignment: &Assignment, op: &str) {
        self.sql.push_str(&assignment.column);
        self.sql.push_str(op);
        self.add_param(&assignment.param);
    }

    /// Renders assignments joined by `separator`.
    pub fn render_assignments(&mut self, assignments: &[Assignment], op: &str, separator: &str) {
        for (i, assignment) in assignments.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(separator);
            }
            self.render_assignment(assignment, op);
        }
    }
}
