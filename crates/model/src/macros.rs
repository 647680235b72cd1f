/// Implements [`Record`](crate::core::column::Record) for a struct from a
/// declarative field table.
///
/// Entries are listed in declaration order. `column` maps a field to a
/// column and accepts the [`ColumnOpts`](crate::core::column::ColumnOpts)
/// modifiers; `group` splices in a nested field whose type is itself a
/// `Record`. Fields not listed are unmapped.
///
/// ```
/// use model::{core::column::Record, record};
///
/// #[derive(Default)]
/// struct Category {
///     id: String,
///     name: String,
///     owner_name: String,
/// }
///
/// record!(Category {
///     column id = "id",
///     column name = "category_name".filter_as("c.category_name"),
///     column owner_name = "owner_name".read_only(),
/// });
///
/// let names: Vec<_> = Category::default().columns().iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["id", "category_name", "owner_name"]);
/// ```
#[macro_export]
macro_rules! record {
    (@field $this:ident, column $field:ident = $col:literal $(. $opt:ident ( $($arg:literal)? ))*) => {
        $crate::core::column::Field::Column($crate::core::column::Column::new(
            stringify!($field),
            $crate::core::column::ColumnOpts::new($col) $(. $opt ( $($arg)? ))*,
            &$this.$field,
        ))
    };

    (@field $this:ident, group $field:ident) => {
        $crate::core::column::Field::Group {
            name: stringify!($field),
            fields: $crate::core::column::Record::fields(&$this.$field),
        }
    };

    ($ty:ty {
        $(
            $kind:ident $field:ident $(= $col:literal $(. $opt:ident ( $($arg:literal)? ))*)?
        ),* $(,)?
    }) => {
        impl $crate::core::column::Record for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::core::column::Field> {
                ::std::vec![
                    $(
                        $crate::record!(@field self, $kind $field $(= $col $(. $opt ( $($arg)? ))*)?)
                    ),*
                ]
            }
        }
    };
}
