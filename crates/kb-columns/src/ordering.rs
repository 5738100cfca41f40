use crate::columns::Columns;
use crate::error::Result;
use crate::row::Row;
use std::ops::{Deref, DerefMut};

/// A validated subset/permutation of a table's columns, used for one text read or write pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOrdering {
    table: String,
    names: Vec<String>,
    positions: Vec<usize>,
}

impl ColumnOrdering {
    /// Declaration order.
    pub fn canonical(columns: &Columns) -> Self {
        Self {
            table: columns.table().to_string(),
            names: columns.names().into_iter().map(str::to_string).collect(),
            positions: (0..columns.len()).collect(),
        }
    }

    /// An input ordering must name declared columns only and cover every required column.
    pub fn for_input<S: AsRef<str>>(columns: &Columns, names: &[S]) -> Result<Self> {
        columns.validate(names)?;
        Ok(Self::resolved(columns, names))
    }

    /// An output ordering may be any subset of the declared columns.
    pub fn for_output<S: AsRef<str>>(columns: &Columns, names: &[S]) -> Result<Self> {
        columns.validate_names(names)?;
        Ok(Self::resolved(columns, names))
    }

    fn resolved<S: AsRef<str>>(columns: &Columns, names: &[S]) -> Self {
        let positions: Vec<usize> = names
            .iter()
            .filter_map(|name| columns.index_of(name.as_ref()))
            .collect();
        let names = positions
            .iter()
            .filter_map(|&position| columns.column_at(position))
            .map(|column| column.name().to_string())
            .collect();
        Self {
            table: columns.table().to_string(),
            names,
            positions,
        }
    }

    /// Split the body of a `#` header line into column names. Names may be separated by
    /// commas, whitespace, or both.
    pub fn parse_header(header: &str) -> Vec<String> {
        header
            .trim_start_matches('#')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Declaration positions, in ordering order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// The current input and output orderings of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orderings {
    input: ColumnOrdering,
    output: ColumnOrdering,
}

impl Orderings {
    pub fn new(columns: &Columns) -> Self {
        let canonical = ColumnOrdering::canonical(columns);
        Self {
            input: canonical.clone(),
            output: canonical,
        }
    }

    pub fn for_row<R: Row>() -> Self {
        Self::new(R::columns())
    }

    pub fn input(&self) -> &ColumnOrdering {
        &self.input
    }

    pub fn output(&self) -> &ColumnOrdering {
        &self.output
    }

    /// Replace the input ordering, returning the previous one.
    pub fn replace_input(&mut self, ordering: ColumnOrdering) -> ColumnOrdering {
        std::mem::replace(&mut self.input, ordering)
    }

    /// Replace the output ordering, returning the previous one.
    pub fn replace_output(&mut self, ordering: ColumnOrdering) -> ColumnOrdering {
        std::mem::replace(&mut self.output, ordering)
    }

    pub fn set_input<S: AsRef<str>>(&mut self, columns: &Columns, names: &[S]) -> Result<()> {
        self.input = ColumnOrdering::for_input(columns, names)?;
        Ok(())
    }

    pub fn set_output<S: AsRef<str>>(&mut self, columns: &Columns, names: &[S]) -> Result<()> {
        self.output = ColumnOrdering::for_output(columns, names)?;
        Ok(())
    }

    /// Temporarily override orderings; both are restored when the scope is dropped, on every
    /// exit path.
    pub fn scoped(&mut self) -> OrderingScope<'_> {
        let saved = self.clone();
        OrderingScope {
            orderings: self,
            saved,
        }
    }
}

pub struct OrderingScope<'a> {
    orderings: &'a mut Orderings,
    saved: Orderings,
}

impl Deref for OrderingScope<'_> {
    type Target = Orderings;

    fn deref(&self) -> &Orderings {
        self.orderings
    }
}

impl DerefMut for OrderingScope<'_> {
    fn deref_mut(&mut self) -> &mut Orderings {
        self.orderings
    }
}

impl Drop for OrderingScope<'_> {
    fn drop(&mut self) {
        std::mem::swap(self.orderings, &mut self.saved);
    }
}
