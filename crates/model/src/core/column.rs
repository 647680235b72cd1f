//! Column descriptors and the `Record` trait that exposes a struct's mapped
//! fields to statement generation.

use crate::core::value::{ColumnValue, Value};

/// Mapping options for one struct field.
///
/// Built with `const` chaining so descriptor tables can live in statics:
///
/// ```
/// use model::core::column::ColumnOpts;
///
/// const NAME: ColumnOpts = ColumnOpts::new("category_name").filter_as("c.category_name");
/// assert_eq!(NAME.filter_name(), "c.category_name");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnOpts {
    /// The mapped SQL column.
    pub name: &'static str,
    /// Alternate (usually alias-qualified) name used only in filter predicates.
    pub filter_as: Option<&'static str>,
    /// `false` keeps the column out of INSERT and UPDATE.
    pub insertable: bool,
    /// Always written by UPDATE, even when zero.
    pub force: bool,
}

impl ColumnOpts {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            filter_as: None,
            insertable: true,
            force: false,
        }
    }

    pub const fn filter_as(mut self, qualified: &'static str) -> Self {
        self.filter_as = Some(qualified);
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.insertable = false;
        self
    }

    pub const fn force(mut self) -> Self {
        self.force = true;
        self
    }

    pub fn filter_name(&self) -> &'static str {
        self.filter_as.unwrap_or(self.name)
    }
}

/// A mapped field together with the value it currently holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Rust field name; filters bind their placeholder under this name.
    pub field: &'static str,
    pub opts: ColumnOpts,
    pub value: Value,
    pub zero: bool,
}

impl Column {
    pub fn new<V: ColumnValue>(field: &'static str, opts: ColumnOpts, value: &V) -> Self {
        Self {
            field,
            opts,
            value: value.to_value(),
            zero: value.is_zero(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.opts.name
    }
}

/// One entry of a record's field list, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Column(Column),
    /// An embedded group of fields, spliced in place when flattened.
    Group {
        name: &'static str,
        fields: Vec<Field>,
    },
}

/// A struct whose fields map onto table columns.
///
/// Implement it by hand or through [`record!`](crate::record). Unmapped
/// fields are simply left out of [`Record::fields`].
pub trait Record {
    fn fields(&self) -> Vec<Field>;

    /// Mapped columns with groups flattened, in declaration order.
    fn columns(&self) -> Vec<Column> {
        let mut out = Vec::new();
        flatten_into(self.fields(), &mut out);
        out
    }
}

fn flatten_into(fields: Vec<Field>, out: &mut Vec<Column>) {
    for field in fields {
        match field {
            Field::Column(column) => out.push(column),
            Field::Group { fields, .. } => flatten_into(fields, out),
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }
}
