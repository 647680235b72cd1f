//! Defines the `Dialect` trait for placeholder syntax.

pub trait Dialect: Send + Sync {
    /// Returns the placeholder for a parameter.
    ///
    /// - Named (SQLite, sqlx-style) uses `:name`
    /// - Positional uses `?`
    /// - Numbered (PostgreSQL) uses `$1`, `$2`, etc.
    ///
    /// `index` is the zero-based position of the bind being added.
    fn placeholder(&self, name: &str, index: usize) -> String;

    /// Whether parameters are bound by name. Repeated names are then bound
    /// once instead of once per occurrence.
    fn binds_by_name(&self) -> bool {
        false
    }

    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Named;

impl Dialect for Named {
    fn placeholder(&self, name: &str, _index: usize) -> String {
        format!(":{name}")
    }

    fn binds_by_name(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "named"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Positional;

impl Dialect for Positional {
    fn placeholder(&self, _name: &str, _index: usize) -> String {
        "?".into()
    }

    fn name(&self) -> &'static str {
        "positional"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Numbered;

impl Dialect for Numbered {
    fn placeholder(&self, _name: &str, index: usize) -> String {
        format!("${}", index + 1)
    }

    fn name(&self) -> &'static str {
        "numbered"
    }
}
