use crate::error::{CodecError, Result};
use crate::row::Row;
use crate::types::{FieldKind, Value};

/// Positional, typed access to the current row of a query result. Positions are 1-based.
pub trait Cursor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get_i64(&self, position: usize) -> std::result::Result<i64, Self::Error>;

    fn get_f64(&self, position: usize) -> std::result::Result<f64, Self::Error>;

    /// `None` for SQL NULL.
    fn get_text(&self, position: usize) -> std::result::Result<Option<String>, Self::Error>;
}

fn column_index(position: usize) -> rusqlite::Result<usize> {
    position
        .checked_sub(1)
        .ok_or(rusqlite::Error::InvalidColumnIndex(position))
}

impl Cursor for rusqlite::Row<'_> {
    type Error = rusqlite::Error;

    fn get_i64(&self, position: usize) -> rusqlite::Result<i64> {
        self.get(column_index(position)?)
    }

    fn get_f64(&self, position: usize) -> rusqlite::Result<f64> {
        self.get(column_index(position)?)
    }

    fn get_text(&self, position: usize) -> rusqlite::Result<Option<String>> {
        self.get(column_index(position)?)
    }
}

/// Decode a record from cursor positions `offset + 1 ..= offset + N`, in declaration order.
/// NULL text decodes to the empty string. Column limits are not applied.
pub fn from_cursor<R, C>(cursor: &C, offset: usize) -> Result<R>
where
    R: Row,
    C: Cursor + ?Sized,
{
    let schema = R::schema();
    let mut row = R::default();

    for (index, column) in schema.columns().iter().enumerate() {
        let position = offset + index + 1;
        let value = match column.kind() {
            FieldKind::Integer64 => cursor.get_i64(position).map(Value::Integer),
            FieldKind::Float64 => cursor.get_f64(position).map(Value::Float),
            FieldKind::Text => cursor
                .get_text(position)
                .map(|text| Value::Text(text.unwrap_or_default())),
        }
        .map_err(|source| CodecError::CursorRead {
            table: schema.table().to_string(),
            position,
            source: Box::new(source),
        })?;
        schema.set_unchecked(&mut row, index, value)?;
    }

    Ok(row)
}
