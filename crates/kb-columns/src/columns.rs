use crate::error::{CodecError, Result};
use crate::format::TextFormat;
use crate::types::{FieldKind, Value};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// SQL column type used by the generated `CREATE TABLE` script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    /// `number(precision)`
    Number(u8),
    /// `float(24)` for single-precision values, `float(53)` for doubles.
    Float(u8),
    /// `varchar2(max_len)`
    Varchar2(usize),
    /// Only used for the trailing `lddate` column.
    Date,
}

impl SqlType {
    pub fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Integer64 => SqlType::Number(9),
            FieldKind::Float64 => SqlType::Float(53),
            FieldKind::Text => SqlType::Varchar2(255),
        }
    }

    fn kind(self) -> Option<FieldKind> {
        match self {
            SqlType::Number(_) => Some(FieldKind::Integer64),
            SqlType::Float(_) => Some(FieldKind::Float64),
            SqlType::Varchar2(_) => Some(FieldKind::Text),
            SqlType::Date => None,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Number(precision) => write!(f, "number({precision})"),
            SqlType::Float(bits) => write!(f, "float({bits})"),
            SqlType::Varchar2(len) => write!(f, "varchar2({len})"),
            SqlType::Date => f.write_str("date"),
        }
    }
}

/// Bound enforced by the checked setters. Decoders never apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Unbounded,
    /// Integer values must be strictly below the ceiling.
    Below(i64),
    /// Text values may hold at most this many characters.
    MaxLen(usize),
}

impl Limit {
    /// Describes the violated bound, if any.
    pub fn violation(&self, value: &Value) -> Option<String> {
        match (self, value) {
            (Limit::Below(ceiling), Value::Integer(v)) if v >= ceiling => {
                Some(format!(">= {ceiling}"))
            }
            (Limit::MaxLen(max), Value::Text(s)) if s.chars().count() > *max => {
                Some(format!("longer than {max} characters"))
            }
            _ => None,
        }
    }
}

/// Full declaration of one column. [`ColumnSpec::new`] fills in per-kind defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: FieldKind,
    pub format: String,
    pub na: Value,
    pub sql_type: SqlType,
    pub limit: Limit,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind, format: impl Into<String>) -> Self {
        let na = match kind {
            FieldKind::Integer64 => Value::Integer(-1),
            FieldKind::Float64 => Value::Float(-999.0),
            FieldKind::Text => Value::Text("-".to_string()),
        };
        Self {
            name: name.into(),
            kind,
            format: format.into(),
            na,
            sql_type: SqlType::for_kind(kind),
            limit: Limit::Unbounded,
        }
    }

    pub fn na(mut self, na: Value) -> Self {
        self.na = na;
        self
    }

    pub fn sql_type(mut self, sql_type: SqlType) -> Self {
        self.sql_type = sql_type;
        self
    }

    pub fn limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    kind: FieldKind,
    format: TextFormat,
    na: Value,
    sql_type: SqlType,
    limit: Limit,
    required: bool,
}

impl Column {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    /// The "not available" sentinel a default-constructed row holds.
    pub fn na(&self) -> &Value {
        &self.na
    }

    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Ordered, typed column declarations of one record type.
///
/// Names are stored lower-cased and looked up case-insensitively.
#[derive(Debug, Clone)]
pub struct Columns {
    table: String,
    columns: Vec<Column>,
    index: HashMap<String, usize>,
}

impl Columns {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Append a column using the per-kind NA sentinel and SQL type.
    pub fn declare(&mut self, name: &str, kind: FieldKind, format: &str) -> Result<&Column> {
        self.declare_spec(ColumnSpec::new(name, kind, format))
    }

    pub fn declare_spec(&mut self, spec: ColumnSpec) -> Result<&Column> {
        let name = spec.name.to_ascii_lowercase();
        if self.index.contains_key(&name) {
            return Err(CodecError::DuplicateField {
                table: self.table.clone(),
                field: name,
            });
        }

        let format = TextFormat::parse(&spec.format).map_err(|reason| CodecError::InvalidFormat {
            table: self.table.clone(),
            field: name.clone(),
            pattern: spec.format.clone(),
            reason,
        })?;
        if format.kind() != spec.kind {
            return Err(CodecError::InvalidFormat {
                table: self.table.clone(),
                field: name,
                pattern: spec.format,
                reason: format!("pattern renders {} values", format.kind()),
            });
        }
        if spec.na.kind() != spec.kind {
            return Err(CodecError::WrongKind {
                table: self.table.clone(),
                field: name,
                declared: spec.kind,
                requested: spec.na.kind(),
            });
        }
        if spec.sql_type.kind() != Some(spec.kind) {
            return Err(CodecError::InvalidDeclaration {
                table: self.table.clone(),
                field: name,
                reason: format!("sql type {} cannot store {} values", spec.sql_type, spec.kind),
            });
        }

        let position = self.columns.len();
        self.index.insert(name.clone(), position);
        self.columns.push(Column {
            name,
            kind: spec.kind,
            format,
            na: spec.na,
            sql_type: spec.sql_type,
            limit: spec.limit,
            required: true,
        });
        Ok(&self.columns[position])
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    pub fn column_at(&self, position: usize) -> Option<&Column> {
        self.columns.get(position)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index
            .get(name)
            .or_else(|| self.index.get(&name.to_ascii_lowercase()))
            .copied()
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.index_of(name).map(|position| &self.columns[position])
    }

    /// Like [`Columns::index_of`], but an unknown name is an error.
    pub fn resolve(&self, name: &str) -> Result<usize> {
        self.index_of(name).ok_or_else(|| CodecError::UnknownField {
            table: self.table.clone(),
            field: name.to_string(),
        })
    }

    pub fn format_of(&self, name: &str) -> Result<&TextFormat> {
        self.resolve(name).map(|position| &self.columns[position].format)
    }

    pub fn kind_of(&self, name: &str) -> Result<FieldKind> {
        self.resolve(name).map(|position| self.columns[position].kind)
    }

    pub fn required_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.required)
            .map(Column::name)
            .collect()
    }

    /// Mark columns as required (`true`) or optional in input orderings.
    pub fn set_required<S: AsRef<str>>(&mut self, names: &[S], required: bool) -> Result<()> {
        let positions = names
            .iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        for position in positions {
            self.columns[position].required = required;
        }
        Ok(())
    }

    /// Every candidate must be a declared column, and none may repeat.
    pub fn validate_names<S: AsRef<str>>(&self, candidates: &[S]) -> Result<()> {
        let mut seen = HashSet::new();
        for candidate in candidates {
            let candidate = candidate.as_ref();
            let valid = self
                .index_of(candidate)
                .is_some_and(|position| seen.insert(position));
            if !valid {
                return Err(CodecError::InvalidColumnSet {
                    table: self.table.clone(),
                    column: candidate.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The candidates must include every required column.
    pub fn validate_required<S: AsRef<str>>(&self, candidates: &[S]) -> Result<()> {
        let present: HashSet<usize> = candidates
            .iter()
            .filter_map(|candidate| self.index_of(candidate.as_ref()))
            .collect();
        let missing: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(position, column)| column.required && !present.contains(position))
            .map(|(_, column)| column.name.clone())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CodecError::MissingRequiredColumns {
                table: self.table.clone(),
                missing,
            })
        }
    }

    pub fn validate<S: AsRef<str>>(&self, candidates: &[S]) -> Result<()> {
        self.validate_names(candidates)?;
        self.validate_required(candidates)
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Columns {
        let mut columns = Columns::new("sample");
        columns.declare("id", FieldKind::Integer64, "%d").unwrap();
        columns.declare("Name", FieldKind::Text, "%s").unwrap();
        columns.declare("value", FieldKind::Float64, "%1.2f").unwrap();
        columns
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let columns = sample();
        assert_eq!(columns.names(), vec!["id", "name", "value"]);
        assert_eq!(columns.index_of("NAME"), Some(1));
        assert_eq!(columns.kind_of("Value").unwrap(), FieldKind::Float64);
    }

    #[test]
    fn declaration_checks_kind_consistency() {
        let mut columns = sample();
        assert!(matches!(
            columns.declare("count", FieldKind::Integer64, "%1.2f"),
            Err(CodecError::InvalidFormat { .. })
        ));
        assert!(matches!(
            columns.declare_spec(
                ColumnSpec::new("flag", FieldKind::Text, "%s").na(Value::Integer(0))
            ),
            Err(CodecError::WrongKind { .. })
        ));
        assert!(matches!(
            columns.declare_spec(
                ColumnSpec::new("flag", FieldKind::Text, "%s").sql_type(SqlType::Number(1))
            ),
            Err(CodecError::InvalidDeclaration { .. })
        ));
        // Failed declarations leave the registry untouched.
        assert_eq!(columns.len(), 3);
    }

    #[test]
    fn set_required_is_all_or_nothing() {
        let mut columns = sample();
        assert!(columns.set_required(&["value", "bogus"], false).is_err());
        assert_eq!(columns.required_names(), vec!["id", "name", "value"]);

        columns.set_required(&["value"], false).unwrap();
        assert_eq!(columns.required_names(), vec!["id", "name"]);
        columns.validate(&["name", "id"]).unwrap();
    }

    #[test]
    fn limits_report_the_violated_bound() {
        assert_eq!(
            Limit::Below(10).violation(&Value::Integer(10)).as_deref(),
            Some(">= 10")
        );
        assert_eq!(Limit::Below(10).violation(&Value::Integer(9)), None);
        assert!(Limit::MaxLen(2).violation(&Value::from("abc")).is_some());
        assert_eq!(Limit::Unbounded.violation(&Value::Integer(i64::MAX)), None);
    }
}
