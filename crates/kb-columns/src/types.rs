use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar kind of a declared column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer64,
    Float64,
    Text,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Integer64 => "integer64",
            FieldKind::Float64 => "float64",
            FieldKind::Text => "text",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field value of a row, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Integer(_) => FieldKind::Integer64,
            Value::Float(_) => FieldKind::Float64,
            Value::Text(_) => FieldKind::Text,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

/// Rust storage type of a column.
///
/// `Na` is the type of the compile-time "not available" constant (`&'static str` for text so
/// it can be a `const`), and `Ref` is what a typed getter hands out.
pub trait FieldValue: Sized {
    const KIND: FieldKind;

    type Na: Copy;

    type Ref<'a>
    where
        Self: 'a;

    fn from_na(na: Self::Na) -> Self;

    fn field_ref(&self) -> Self::Ref<'_>;

    fn to_value(&self) -> Value;

    fn into_value(self) -> Value;

    fn from_value(value: Value) -> Option<Self>;

    fn na_value(na: Self::Na) -> Value {
        Self::from_na(na).into_value()
    }
}

impl FieldValue for i64 {
    const KIND: FieldKind = FieldKind::Integer64;
    type Na = i64;
    type Ref<'a> = i64;

    fn from_na(na: i64) -> Self {
        na
    }

    fn field_ref(&self) -> i64 {
        *self
    }

    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }

    fn into_value(self) -> Value {
        Value::Integer(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FieldValue for f64 {
    const KIND: FieldKind = FieldKind::Float64;
    type Na = f64;
    type Ref<'a> = f64;

    fn from_na(na: f64) -> Self {
        na
    }

    fn field_ref(&self) -> f64 {
        *self
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::Text;
    type Na = &'static str;
    type Ref<'a> = &'a str;

    fn from_na(na: &'static str) -> Self {
        na.to_string()
    }

    fn field_ref(&self) -> &str {
        self
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}
