//! Column registry and record codec for relational table rows.
//!
//! A record type declares its ordered, typed columns once (see [`define_table!`]) and every
//! representation is derived from that declaration:
//! - whitespace- or separator-delimited text lines, optionally reordered/subset through a `#`
//!   header
//! - a fixed, declaration-order binary layout (streams and in-memory buffers)
//! - positional reads from a SQL query cursor (`rusqlite::Row`)
//! - literal and parameterized `INSERT` statements, and `CREATE TABLE` scripts
//!
//! Column orderings used by the text codec are explicit values ([`ColumnOrdering`],
//! [`Orderings`]) owned by the caller; [`OrderingScope`] restores them after a temporary
//! override.

#![forbid(unsafe_code)]

pub mod binary;
mod columns;
pub mod cursor;
mod error;
mod format;
mod macros;
mod ordering;
mod row;
pub mod sql;
pub mod text;
mod types;

pub use crate::columns::{Column, ColumnSpec, Columns, Limit, SqlType};
pub use crate::cursor::{from_cursor, Cursor};
pub use crate::error::{CodecError, Result};
pub use crate::format::TextFormat;
pub use crate::ordering::{ColumnOrdering, OrderingScope, Orderings};
pub use crate::row::{Accessor, DigestCache, Row, Schema, SchemaBuilder};
pub use crate::sql::{DdlOptions, Dialect};
pub use crate::text::{Delimiter, TextOptions};
pub use crate::types::{FieldKind, FieldValue, Value};
