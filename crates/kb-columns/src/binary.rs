//! Fixed-order binary records.
//!
//! Fields are written in declaration order: integers as big-endian `i64`, floats as big-endian
//! IEEE-754 doubles, text as a big-endian `i32` byte length followed by UTF-8 bytes. A zero
//! length is the empty string.

use crate::error::{CodecError, Result};
use crate::row::Row;
use crate::types::{FieldKind, Value};
use std::io::{self, BufRead, Read, Write};

pub fn write<R: Row, W: Write>(writer: &mut W, row: &R) -> Result<()> {
    for value in row.values() {
        match value {
            Value::Integer(v) => writer.write_all(&v.to_be_bytes())?,
            Value::Float(v) => writer.write_all(&v.to_be_bytes())?,
            Value::Text(text) => {
                let len = i32::try_from(text.len()).map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidInput, "text field longer than i32::MAX")
                })?;
                writer.write_all(&len.to_be_bytes())?;
                writer.write_all(text.as_bytes())?;
            }
        }
    }
    Ok(())
}

/// Encode into a new buffer sized for the table's declared worst case.
pub fn encode<R: Row>(row: &R) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(R::max_bytes());
    write(&mut buf, row)?;
    Ok(buf)
}

/// Append one record to `buf`.
pub fn encode_into<R: Row>(buf: &mut Vec<u8>, row: &R) -> Result<()> {
    write(buf, row)
}

fn read_array<const N: usize, R: Row, T: Read>(
    reader: &mut T,
    position: usize,
) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    reader
        .read_exact(&mut bytes)
        .map_err(|err| truncated::<R>(err, position))?;
    Ok(bytes)
}

fn truncated<R: Row>(err: io::Error, position: usize) -> CodecError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        CodecError::TruncatedRecord {
            table: R::table_name().to_string(),
            field: R::schema().column_name(position).to_string(),
        }
    } else {
        CodecError::Io(err)
    }
}

/// Read one record. Column limits are not applied.
pub fn read<R: Row, T: Read>(reader: &mut T) -> Result<R> {
    let schema = R::schema();
    let mut row = R::default();

    for (position, column) in schema.columns().iter().enumerate() {
        let value = match column.kind() {
            FieldKind::Integer64 => {
                Value::Integer(i64::from_be_bytes(read_array::<8, R, T>(reader, position)?))
            }
            FieldKind::Float64 => {
                Value::Float(f64::from_be_bytes(read_array::<8, R, T>(reader, position)?))
            }
            FieldKind::Text => {
                let len = i32::from_be_bytes(read_array::<4, R, T>(reader, position)?);
                let len = u64::try_from(len).map_err(|_| CodecError::TruncatedRecord {
                    table: schema.table().to_string(),
                    field: column.name().to_string(),
                })?;
                let mut bytes = Vec::new();
                (&mut *reader).take(len).read_to_end(&mut bytes)?;
                if (bytes.len() as u64) < len {
                    return Err(CodecError::TruncatedRecord {
                        table: schema.table().to_string(),
                        field: column.name().to_string(),
                    });
                }
                let text = String::from_utf8(bytes).map_err(|_| CodecError::InvalidText {
                    table: schema.table().to_string(),
                    field: column.name().to_string(),
                })?;
                Value::Text(text)
            }
        };
        schema.set_unchecked(&mut row, position, value)?;
    }

    Ok(row)
}

/// Decode one record from the front of `buf`, advancing it past the bytes consumed.
pub fn decode<R: Row>(buf: &mut &[u8]) -> Result<R> {
    read::<R, &[u8]>(buf)
}

/// Write records back to back.
pub fn write_all<'a, R, W, I>(writer: &mut W, rows: I) -> Result<()>
where
    R: Row,
    W: Write,
    I: IntoIterator<Item = &'a R>,
{
    for row in rows {
        write(writer, row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read back-to-back records until the stream ends on a record boundary. A stream that ends
/// inside a record is an error.
pub fn read_to_end<R, C, B>(reader: &mut B) -> Result<C>
where
    R: Row,
    B: BufRead,
    C: Default + Extend<R>,
{
    let mut rows = C::default();
    while !reader.fill_buf()?.is_empty() {
        rows.extend(std::iter::once(read::<R, B>(reader)?));
    }
    Ok(rows)
}
