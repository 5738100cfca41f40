use crate::types::FieldKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{table}: column `{field}` is declared more than once")]
    DuplicateField { table: String, field: String },
    #[error("{table}: invalid format `{pattern}` for column `{field}`: {reason}")]
    InvalidFormat {
        table: String,
        field: String,
        pattern: String,
        reason: String,
    },
    #[error("{table}: invalid declaration of column `{field}`: {reason}")]
    InvalidDeclaration {
        table: String,
        field: String,
        reason: String,
    },
    #[error("{table}: `{field}` is not a column of this table")]
    UnknownField { table: String, field: String },
    #[error("{table}: column `{field}` is {declared}, not {requested}")]
    WrongKind {
        table: String,
        field: String,
        declared: FieldKind,
        requested: FieldKind,
    },
    #[error("{table}: input column name `{column}` is not valid")]
    InvalidColumnSet { table: String, column: String },
    #[error("{table}: column names do not include required columns {missing:?}")]
    MissingRequiredColumns { table: String, missing: Vec<String> },
    #[error("column ordering for `{found}` cannot be used with `{table}`")]
    OrderingMismatch { table: String, found: String },
    #[error("{table}: expected {expected} tokens but found {found} in line `{line}`")]
    MalformedLine {
        table: String,
        expected: usize,
        found: usize,
        line: String,
    },
    #[error("{table}: cannot assign `{raw}` to {kind} column `{field}`")]
    FieldParseError {
        table: String,
        field: String,
        kind: FieldKind,
        raw: String,
    },
    #[error("{table}: `{value}` in column `{field}` cannot be written as a text token: {reason}")]
    UnencodableText {
        table: String,
        field: String,
        value: String,
        reason: &'static str,
    },
    #[error("{table}: binary record truncated while reading `{field}`")]
    TruncatedRecord { table: String, field: String },
    #[error("{table}: text in column `{field}` is not valid UTF-8")]
    InvalidText { table: String, field: String },
    #[error("{table}: {field}={value} but cannot be {limit}")]
    OutOfRange {
        table: String,
        field: String,
        value: String,
        limit: String,
    },
    #[error("{table}: failed to read cursor position {position}: {source}")]
    CursorRead {
        table: String,
        position: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{table}: sqlite error: {source}\n{statement}")]
    SqlExecution {
        table: String,
        statement: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
