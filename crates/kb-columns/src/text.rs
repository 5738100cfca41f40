//! Delimited text lines, one record per line.
//!
//! Field order on a line follows a [`ColumnOrdering`]; a file may override the input ordering
//! with a `#` header on its first line. With the default [`Delimiter::Whitespace`], fields are
//! separated by runs of whitespace and text values that would otherwise split, disappear or read
//! as a comment are quoted. With [`Delimiter::Separator`], lines are split on a fixed string,
//! tokens are trimmed and text is never quoted. The empty string is written as the token `null`.
//!
//! Encoding fails with [`CodecError::UnencodableText`] rather than write a line that would not
//! decode back to the same record.

use crate::error::{CodecError, Result};
use crate::ordering::{ColumnOrdering, Orderings};
use crate::row::Row;
use crate::types::{FieldKind, Value};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

const EMPTY_TEXT: &str = "null";

/// How fields are separated on a line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Runs of whitespace on read, a single space on write.
    #[default]
    Whitespace,
    /// A fixed separator such as `"\t"` or `"|"`. An empty separator behaves as `Whitespace`.
    Separator(String),
}

impl Delimiter {
    pub fn tab() -> Self {
        Delimiter::Separator("\t".to_string())
    }

    fn separator(&self) -> Option<&str> {
        match self {
            Delimiter::Separator(separator) if !separator.is_empty() => Some(separator),
            _ => None,
        }
    }

    fn join(&self) -> &str {
        self.separator().unwrap_or(" ")
    }
}

/// Space-separated delimiter names: `tab`, `comma` and `space` stand for their characters and
/// anything else is taken literally, so `"comma tab"` is `",\t"`. A lone `space` is
/// [`Delimiter::Whitespace`] and an empty list is a tab.
impl FromStr for Delimiter {
    type Err = Infallible;

    fn from_str(names: &str) -> std::result::Result<Self, Infallible> {
        let separator: String = names
            .split(' ')
            .map(|name| match name.to_ascii_lowercase().as_str() {
                "tab" => "\t".to_string(),
                "comma" => ",".to_string(),
                "space" => " ".to_string(),
                _ => name.to_string(),
            })
            .collect();
        Ok(match separator.as_str() {
            "" => Delimiter::tab(),
            " " => Delimiter::Whitespace,
            _ => Delimiter::Separator(separator),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    pub delimiter: Delimiter,
}

impl TextOptions {
    pub fn tab_delimited() -> Self {
        Self {
            delimiter: Delimiter::tab(),
        }
    }
}

struct Token<'a> {
    text: &'a str,
    quoted: bool,
}

fn whitespace_tokens(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '"' || c == '\'' {
            chars.next();
            let mut end = line.len();
            for (i, next) in chars.by_ref() {
                if next == c {
                    end = i;
                    break;
                }
            }
            tokens.push(Token {
                text: &line[start + 1..end],
                quoted: true,
            });
            continue;
        }

        let mut end = line.len();
        while let Some(&(i, next)) = chars.peek() {
            if next.is_whitespace() {
                end = i;
                break;
            }
            chars.next();
        }
        let text = &line[start..end];
        if text != "," {
            tokens.push(Token {
                text,
                quoted: false,
            });
        }
    }

    tokens
}

fn line_tokens<'a>(line: &'a str, delimiter: &Delimiter) -> Vec<Token<'a>> {
    match delimiter.separator() {
        None => whitespace_tokens(line),
        Some(separator) => line
            .split(separator)
            .map(str::trim)
            .filter(|text| !text.is_empty() && *text != ",")
            .map(|text| Token {
                text,
                quoted: false,
            })
            .collect(),
    }
}

/// Split a whitespace-delimited line into tokens. A token wrapped in double or single quotes
/// may contain whitespace; the quotes are removed. Bare `,` tokens are dropped.
pub fn tokenize(line: &str) -> Vec<String> {
    tokenize_with(line, &Delimiter::Whitespace)
}

pub fn tokenize_with(line: &str, delimiter: &Delimiter) -> Vec<String> {
    line_tokens(line, delimiter)
        .into_iter()
        .map(|token| token.text.to_string())
        .collect()
}

fn quote(text: &str) -> std::result::Result<String, &'static str> {
    let needs_quotes = text == ","
        || text == EMPTY_TEXT
        || text.starts_with(['"', '\'', '#'])
        || text.chars().any(char::is_whitespace);
    if !needs_quotes {
        Ok(text.to_string())
    } else if !text.contains('"') {
        Ok(format!("\"{text}\""))
    } else if !text.contains('\'') {
        Ok(format!("'{text}'"))
    } else {
        Err("needs quotes but contains both quote characters")
    }
}

/// The token for one text value. `first` marks the first field on the line, where a leading
/// `#` would turn the line into a comment.
fn text_token(
    text: &str,
    delimiter: &Delimiter,
    first: bool,
) -> std::result::Result<String, &'static str> {
    if text.contains(['\n', '\r']) {
        return Err("contains a line break");
    }
    if text.is_empty() {
        return Ok(EMPTY_TEXT.to_string());
    }
    let Some(separator) = delimiter.separator() else {
        return quote(text);
    };
    if text == EMPTY_TEXT {
        Err("reads back as the empty string")
    } else if text == "," {
        Err("a lone comma is skipped on read")
    } else if text.contains(separator) {
        Err("contains the delimiter")
    } else if text.trim() != text {
        Err("has leading or trailing whitespace")
    } else if first && text.starts_with('#') {
        Err("starts the line with `#`")
    } else {
        Ok(text.to_string())
    }
}

fn parse_token<R: Row>(position: usize, token: &Token<'_>) -> Result<Value> {
    let schema = R::schema();
    let Some(column) = schema.columns().column_at(position) else {
        return Err(CodecError::UnknownField {
            table: schema.table().to_string(),
            field: position.to_string(),
        });
    };
    let raw = token.text;
    let parsed = match column.kind() {
        FieldKind::Integer64 => raw.parse::<i64>().ok().map(Value::Integer),
        FieldKind::Float64 => raw.parse::<f64>().ok().map(Value::Float),
        FieldKind::Text if raw == EMPTY_TEXT && !token.quoted => Some(Value::Text(String::new())),
        FieldKind::Text => Some(Value::Text(raw.to_string())),
    };
    parsed.ok_or_else(|| CodecError::FieldParseError {
        table: schema.table().to_string(),
        field: column.name().to_string(),
        kind: column.kind(),
        raw: raw.to_string(),
    })
}

fn check_table<R: Row>(ordering: &ColumnOrdering) -> Result<()> {
    if ordering.table() == R::table_name() {
        Ok(())
    } else {
        Err(CodecError::OrderingMismatch {
            table: R::table_name().to_string(),
            found: ordering.table().to_string(),
        })
    }
}

/// Decode one whitespace-delimited line whose tokens follow `ordering`. Columns the ordering
/// leaves out keep their NA sentinel. Column limits are not applied.
pub fn decode_line<R: Row>(line: &str, ordering: &ColumnOrdering) -> Result<R> {
    decode_line_with(line, ordering, &TextOptions::default())
}

pub fn decode_line_with<R: Row>(
    line: &str,
    ordering: &ColumnOrdering,
    options: &TextOptions,
) -> Result<R> {
    check_table::<R>(ordering)?;
    let tokens = line_tokens(line, &options.delimiter);
    if tokens.len() != ordering.len() {
        return Err(CodecError::MalformedLine {
            table: R::table_name().to_string(),
            expected: ordering.len(),
            found: tokens.len(),
            line: line.to_string(),
        });
    }

    let schema = R::schema();
    let mut row = R::default();
    for (token, &position) in tokens.iter().zip(ordering.positions()) {
        let value = parse_token::<R>(position, token)?;
        schema.set_unchecked(&mut row, position, value)?;
    }
    Ok(row)
}

/// Render the fields at `positions`. With `strict` unset, text that has no readable token is
/// written double-quoted as it is.
fn render<R: Row>(
    row: &R,
    positions: &[usize],
    delimiter: &Delimiter,
    strict: bool,
) -> Result<String> {
    let schema = R::schema();
    let mut fields = Vec::with_capacity(positions.len());

    for (index, &position) in positions.iter().enumerate() {
        let Some(column) = schema.columns().column_at(position) else {
            continue;
        };
        let value = match schema.get(row, position) {
            Value::Text(text) => match text_token(&text, delimiter, index == 0) {
                Ok(token) => Value::Text(token),
                Err(_) if !strict => Value::Text(format!("\"{text}\"")),
                Err(reason) => {
                    return Err(CodecError::UnencodableText {
                        table: schema.table().to_string(),
                        field: column.name().to_string(),
                        value: text,
                        reason,
                    })
                }
            },
            other => other,
        };
        fields.push(column.format().render(&value));
    }

    Ok(fields.join(delimiter.join()))
}

/// Render the fields named by `ordering`, space-separated, without a line terminator.
pub fn encode_line<R: Row>(row: &R, ordering: &ColumnOrdering) -> Result<String> {
    encode_line_with(row, ordering, &TextOptions::default())
}

pub fn encode_line_with<R: Row>(
    row: &R,
    ordering: &ColumnOrdering,
    options: &TextOptions,
) -> Result<String> {
    check_table::<R>(ordering)?;
    render(row, ordering.positions(), &options.delimiter, true)
}

/// Every field in declaration order, space-separated. This is the `Display` form and never
/// fails; use [`encode_line`] for lines that must be read back.
pub fn encode_canonical<R: Row>(row: &R) -> String {
    let positions: Vec<usize> = (0..R::columns().len()).collect();
    render(row, &positions, &Delimiter::Whitespace, false).unwrap_or_default()
}

/// Column names of `ordering`, space-separated.
pub fn header_line(ordering: &ColumnOrdering) -> String {
    header_line_with(ordering, &TextOptions::default())
}

pub fn header_line_with(ordering: &ColumnOrdering, options: &TextOptions) -> String {
    ordering.names().join(options.delimiter.join())
}

/// Write `ordering` as a `#` header line.
pub fn write_header<W: Write>(writer: &mut W, ordering: &ColumnOrdering) -> Result<()> {
    write_header_with(writer, ordering, &TextOptions::default())
}

pub fn write_header_with<W: Write>(
    writer: &mut W,
    ordering: &ColumnOrdering,
    options: &TextOptions,
) -> Result<()> {
    writeln!(writer, "#{}", header_line_with(ordering, options))?;
    Ok(())
}

pub fn write_line<R: Row, W: Write>(
    writer: &mut W,
    row: &R,
    ordering: &ColumnOrdering,
) -> Result<()> {
    write_line_with(writer, row, ordering, &TextOptions::default())
}

pub fn write_line_with<R: Row, W: Write>(
    writer: &mut W,
    row: &R,
    ordering: &ColumnOrdering,
    options: &TextOptions,
) -> Result<()> {
    writeln!(writer, "{}", encode_line_with(row, ordering, options)?)?;
    Ok(())
}

/// Write a header for `ordering` followed by one line per row.
pub fn write_all<'a, R, W, I>(writer: &mut W, rows: I, ordering: &ColumnOrdering) -> Result<()>
where
    R: Row,
    W: Write,
    I: IntoIterator<Item = &'a R>,
{
    write_all_with(writer, rows, ordering, &TextOptions::default())
}

pub fn write_all_with<'a, R, W, I>(
    writer: &mut W,
    rows: I,
    ordering: &ColumnOrdering,
    options: &TextOptions,
) -> Result<()>
where
    R: Row,
    W: Write,
    I: IntoIterator<Item = &'a R>,
{
    check_table::<R>(ordering)?;
    write_header_with(writer, ordering, options)?;
    for row in rows {
        write_line_with(writer, row, ordering, options)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read every whitespace-delimited record from `reader`.
///
/// A `#` first line replaces the input ordering for the duration of the read; `orderings` is
/// back to its previous state when this returns, whether or not the read succeeded. Blank
/// lines and later `#` lines are skipped. The first bad line aborts the read.
pub fn read_all<R, C>(reader: impl BufRead, orderings: &mut Orderings) -> Result<C>
where
    R: Row,
    C: Default + Extend<R>,
{
    read_all_with(reader, orderings, &TextOptions::default())
}

/// [`read_all`] with a chosen delimiter. Header names may be separated by the delimiter as
/// well as by commas or whitespace.
pub fn read_all_with<R, C>(
    reader: impl BufRead,
    orderings: &mut Orderings,
    options: &TextOptions,
) -> Result<C>
where
    R: Row,
    C: Default + Extend<R>,
{
    let table = R::table_name();
    let mut scope = orderings.scoped();
    let mut rows = C::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let line_number = index + 1;

        if let Some(header) = line.strip_prefix('#') {
            if line_number == 1 {
                let names: Vec<String> = match options.delimiter.separator() {
                    Some(separator) => header
                        .split(separator)
                        .flat_map(ColumnOrdering::parse_header)
                        .collect(),
                    None => ColumnOrdering::parse_header(header),
                };
                let ordering = ColumnOrdering::for_input(R::columns(), &names)?;
                log::debug!("{table}: input columns from header: {}", names.join(" "));
                scope.replace_input(ordering);
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }

        match decode_line_with::<R>(line, scope.input(), options) {
            Ok(row) => rows.extend(std::iter::once(row)),
            Err(err) => {
                log::warn!("{table}: aborting read at line {line_number}: {err}");
                return Err(err);
            }
        }
    }

    Ok(rows)
}

/// Read every record using the declaration order as the default input ordering.
pub fn read_all_canonical<R, C>(reader: impl BufRead) -> Result<C>
where
    R: Row,
    C: Default + Extend<R>,
{
    read_all(reader, &mut Orderings::for_row::<R>())
}

pub fn read_file<R, C>(path: impl AsRef<Path>, orderings: &mut Orderings) -> Result<C>
where
    R: Row,
    C: Default + Extend<R>,
{
    read_file_with(path, orderings, &TextOptions::default())
}

pub fn read_file_with<R, C>(
    path: impl AsRef<Path>,
    orderings: &mut Orderings,
    options: &TextOptions,
) -> Result<C>
where
    R: Row,
    C: Default + Extend<R>,
{
    let file = File::open(path)?;
    read_all_with(BufReader::new(file), orderings, options)
}

pub fn write_file<'a, R, I>(path: impl AsRef<Path>, rows: I, ordering: &ColumnOrdering) -> Result<()>
where
    R: Row,
    I: IntoIterator<Item = &'a R>,
{
    write_file_with(path, rows, ordering, &TextOptions::default())
}

pub fn write_file_with<'a, R, I>(
    path: impl AsRef<Path>,
    rows: I,
    ordering: &ColumnOrdering,
    options: &TextOptions,
) -> Result<()>
where
    R: Row,
    I: IntoIterator<Item = &'a R>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_all_with(&mut writer, rows, ordering, options)
}
