use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A bindable column value lifted out of a record field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Boolean(bool),
    Json(serde_json::Value),
    Uuid(Uuid),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "'{}'", v.replace('\'', "''")),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Json(v) => write!(f, "'{}'", v.to_string().replace('\'', "''")),
            Value::Uuid(v) => write!(f, "'{v}'"),
            Value::Bytes(v) => {
                let hex = v
                    .iter()
                    .fold(String::new(), |acc, byte| acc + &format!("{byte:02x}"));
                write!(f, "x'{hex}'")
            }
            Value::Date(v) => write!(f, "'{v}'"),
            Value::Timestamp(v) => write!(f, "'{}'", v.to_rfc3339()),
            Value::Null => write!(f, "NULL"),
        }
    }
}

/// How a field type decides whether it holds its "zero" value.
///
/// Zero-valued fields are treated as "not set" by filter and update
/// generation. Types without a meaningful zero are classified as
/// [`ZeroRule::Never`] and are therefore always included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroRule {
    /// Zero when equal to the type's `Default`.
    Default,
    /// Zero when absent (`None`). A present value is never zero, even if it
    /// wraps the inner type's default.
    Absent,
    /// Never zero.
    Never,
}

/// A Rust type that can sit behind a mapped column.
pub trait ColumnValue {
    const ZERO_RULE: ZeroRule;

    fn to_value(&self) -> Value;

    fn is_zero(&self) -> bool;
}

macro_rules! zero_by_default {
    ($($ty:ty => |$v:ident| $conv:expr),* $(,)?) => {
        $(
            impl ColumnValue for $ty {
                const ZERO_RULE: ZeroRule = ZeroRule::Default;

                fn to_value(&self) -> Value {
                    let $v = self;
                    $conv
                }

                fn is_zero(&self) -> bool {
                    *self == <$ty>::default()
                }
            }
        )*
    };
}

macro_rules! never_zero {
    ($($ty:ty => |$v:ident| $conv:expr),* $(,)?) => {
        $(
            impl ColumnValue for $ty {
                const ZERO_RULE: ZeroRule = ZeroRule::Never;

                fn to_value(&self) -> Value {
                    let $v = self;
                    $conv
                }

                fn is_zero(&self) -> bool {
                    false
                }
            }
        )*
    };
}

zero_by_default! {
    String => |v| Value::String(v.clone()),
    bool => |v| Value::Boolean(*v),
    i8 => |v| Value::Int(i64::from(*v)),
    i16 => |v| Value::Int(i64::from(*v)),
    i32 => |v| Value::Int(i64::from(*v)),
    i64 => |v| Value::Int(*v),
    isize => |v| Value::Int(*v as i64),
    u8 => |v| Value::Uint(u64::from(*v)),
    u16 => |v| Value::Uint(u64::from(*v)),
    u32 => |v| Value::Uint(u64::from(*v)),
    u64 => |v| Value::Uint(*v),
    usize => |v| Value::Uint(*v as u64),
    f32 => |v| Value::Float(f64::from(*v)),
    f64 => |v| Value::Float(*v),
    DateTime<Utc> => |v| Value::Timestamp(*v),
    NaiveDateTime => |v| Value::Timestamp(v.and_utc()),
    NaiveDate => |v| Value::Date(*v),
}

never_zero! {
    serde_json::Value => |v| Value::Json(v.clone()),
    Vec<u8> => |v| Value::Bytes(v.clone()),
    Uuid => |v| Value::Uuid(*v),
}

/// `Option<T>` stands in for both pointer fields and nullable wrappers:
/// `Some` is always a deliberate value, `None` is the zero.
impl<T: ColumnValue> ColumnValue for Option<T> {
    const ZERO_RULE: ZeroRule = ZeroRule::Absent;

    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}
