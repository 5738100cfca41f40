use crate::columns::{ColumnSpec, Columns};
use crate::error::{CodecError, Result};
use crate::types::{FieldKind, Value};
use md5::{Digest, Md5};
use std::any::Any;
use std::fmt;
use std::sync::OnceLock;

/// Typed access to one column of `R`, looked up by declaration position.
///
/// `set` returns `false` when the value has the wrong kind for the column.
pub struct Accessor<R> {
    pub get: fn(&R) -> Value,
    pub set: fn(&mut R, Value) -> bool,
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Accessor<R> {}

/// Everything the codecs need to know about one record type.
pub struct Schema<R> {
    columns: Columns,
    accessors: Vec<Accessor<R>>,
    primary_key: Vec<usize>,
    unique_key: Vec<usize>,
    max_bytes: usize,
}

impl<R> Schema<R> {
    pub fn builder(table: &str) -> SchemaBuilder<R> {
        SchemaBuilder {
            columns: Columns::new(table),
            accessors: Vec::new(),
            primary_key: Vec::new(),
            unique_key: Vec::new(),
            max_bytes: 0,
            error: None,
        }
    }

    pub fn table(&self) -> &str {
        self.columns.table()
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn primary_key(&self) -> Vec<&str> {
        self.key_names(&self.primary_key)
    }

    pub fn unique_key(&self) -> Vec<&str> {
        self.key_names(&self.unique_key)
    }

    /// Declared worst-case size of one binary record.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    fn key_names(&self, positions: &[usize]) -> Vec<&str> {
        positions
            .iter()
            .filter_map(|&position| self.columns.column_at(position))
            .map(|column| column.name())
            .collect()
    }

    pub(crate) fn get(&self, row: &R, position: usize) -> Value {
        (self.accessors[position].get)(row)
    }

    /// Store a value without applying the column's limit. Decoders use this path.
    pub(crate) fn set_unchecked(&self, row: &mut R, position: usize, value: Value) -> Result<()> {
        let declared = self.accessors_kind(position);
        let requested = value.kind();
        if (self.accessors[position].set)(row, value) {
            Ok(())
        } else {
            Err(CodecError::WrongKind {
                table: self.table().to_string(),
                field: self.column_name(position).to_string(),
                declared,
                requested,
            })
        }
    }

    fn validate_value(&self, position: usize, value: &Value) -> Result<()> {
        let Some(column) = self.columns.column_at(position) else {
            return Ok(());
        };
        if column.kind() != value.kind() {
            return Err(CodecError::WrongKind {
                table: self.table().to_string(),
                field: column.name().to_string(),
                declared: column.kind(),
                requested: value.kind(),
            });
        }
        match column.limit().violation(value) {
            Some(limit) => Err(CodecError::OutOfRange {
                table: self.table().to_string(),
                field: column.name().to_string(),
                value: value.to_string(),
                limit,
            }),
            None => Ok(()),
        }
    }

    fn keys_equal(&self, positions: &[usize], a: &R, b: &R) -> bool {
        !positions.is_empty()
            && positions
                .iter()
                .all(|&position| self.get(a, position) == self.get(b, position))
    }

    fn accessors_kind(&self, position: usize) -> FieldKind {
        self.columns
            .column_at(position)
            .map(|column| column.kind())
            .unwrap_or(FieldKind::Text)
    }

    pub(crate) fn column_name(&self, position: usize) -> &str {
        self.columns
            .column_at(position)
            .map(|column| column.name())
            .unwrap_or_default()
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("columns", &self.columns)
            .field("primary_key", &self.primary_key())
            .field("unique_key", &self.unique_key())
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}

/// Collects column declarations; the first error is reported by [`SchemaBuilder::build`].
pub struct SchemaBuilder<R> {
    columns: Columns,
    accessors: Vec<Accessor<R>>,
    primary_key: Vec<String>,
    unique_key: Vec<String>,
    max_bytes: usize,
    error: Option<CodecError>,
}

impl<R> SchemaBuilder<R> {
    pub fn column(
        mut self,
        spec: ColumnSpec,
        get: fn(&R) -> Value,
        set: fn(&mut R, Value) -> bool,
    ) -> Self {
        if self.error.is_none() {
            match self.columns.declare_spec(spec) {
                Ok(_) => self.accessors.push(Accessor { get, set }),
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    pub fn primary_key(mut self, names: &[&str]) -> Self {
        self.primary_key = names.iter().map(|name| name.to_string()).collect();
        self
    }

    pub fn unique_key(mut self, names: &[&str]) -> Self {
        self.unique_key = names.iter().map(|name| name.to_string()).collect();
        self
    }

    pub fn max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn build(self) -> Result<Schema<R>> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let resolve = |names: &[String]| {
            names
                .iter()
                .map(|name| self.columns.resolve(name))
                .collect::<Result<Vec<_>>>()
        };
        let primary_key = resolve(&self.primary_key)?;
        let unique_key = resolve(&self.unique_key)?;

        Ok(Schema {
            columns: self.columns,
            accessors: self.accessors,
            primary_key,
            unique_key,
            max_bytes: self.max_bytes,
        })
    }
}

/// Lazily computed MD5 digest of a row's contents. Setters clear it. Rows stay `Send + Sync`.
#[derive(Clone, Default)]
pub struct DigestCache(OnceLock<[u8; 16]>);

impl DigestCache {
    pub fn get_or_compute(&self, compute: impl FnOnce() -> [u8; 16]) -> [u8; 16] {
        *self.0.get_or_init(compute)
    }

    pub fn clear(&mut self) {
        self.0.take();
    }

    pub fn is_cached(&self) -> bool {
        self.0.get().is_some()
    }
}

impl fmt::Debug for DigestCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DigestCache").field(&self.is_cached()).finish()
    }
}

/// A record type declared with [`define_table!`](crate::define_table).
pub trait Row: Clone + Default + 'static {
    fn schema() -> &'static Schema<Self>;

    #[doc(hidden)]
    fn digest_cache(&self) -> &DigestCache;

    #[doc(hidden)]
    fn digest_cache_mut(&mut self) -> &mut DigestCache;

    fn table_name() -> &'static str {
        Self::schema().table()
    }

    fn columns() -> &'static Columns {
        Self::schema().columns()
    }

    fn max_bytes() -> usize {
        Self::schema().max_bytes()
    }

    fn value(&self, name: &str) -> Result<Value> {
        let schema = Self::schema();
        let position = schema.columns().resolve(name)?;
        Ok(schema.get(self, position))
    }

    /// All field values in declaration order.
    fn values(&self) -> Vec<Value> {
        let schema = Self::schema();
        (0..schema.columns().len())
            .map(|position| schema.get(self, position))
            .collect()
    }

    fn long_field(&self, name: &str) -> Result<i64> {
        let value = self.value(name)?;
        value
            .as_i64()
            .ok_or_else(|| wrong_kind::<Self>(name, &value, FieldKind::Integer64))
    }

    fn double_field(&self, name: &str) -> Result<f64> {
        let value = self.value(name)?;
        value
            .as_f64()
            .ok_or_else(|| wrong_kind::<Self>(name, &value, FieldKind::Float64))
    }

    fn string_field(&self, name: &str) -> Result<String> {
        match self.value(name)? {
            Value::Text(text) => Ok(text),
            other => Err(wrong_kind::<Self>(name, &other, FieldKind::Text)),
        }
    }

    /// Checked assignment: either the value passes the kind and limit checks and is stored
    /// (clearing the digest), or the row is left untouched.
    fn set_value(&mut self, name: &str, value: Value) -> Result<()> {
        let schema = Self::schema();
        let position = schema.columns().resolve(name)?;
        schema.validate_value(position, &value)?;
        schema.set_unchecked(self, position, value)?;
        self.digest_cache_mut().clear();
        Ok(())
    }

    fn set_long_field(&mut self, name: &str, value: i64) -> Result<()> {
        self.set_value(name, Value::Integer(value))
    }

    fn set_double_field(&mut self, name: &str, value: f64) -> Result<()> {
        self.set_value(name, Value::Float(value))
    }

    fn set_string_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.set_value(name, Value::Text(value.to_string()))
    }

    /// True when `other` is the same record type and every primary-key column matches.
    fn equal_primary_key(&self, other: &dyn Any) -> bool {
        let schema = Self::schema();
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| schema.keys_equal(&schema.primary_key, self, other))
    }

    /// True when `other` is the same record type and every unique-key column matches. Always
    /// false for record types without a unique key.
    fn equal_unique_key(&self, other: &dyn Any) -> bool {
        let schema = Self::schema();
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| schema.keys_equal(&schema.unique_key, self, other))
    }

    fn content_digest(&self) -> [u8; 16] {
        self.digest_cache().get_or_compute(|| {
            let mut hasher = Md5::new();
            for value in self.values() {
                match value {
                    Value::Integer(v) => hasher.update(v.to_be_bytes()),
                    Value::Float(v) => hasher.update(v.to_be_bytes()),
                    Value::Text(text) => {
                        hasher.update((text.len() as u64).to_be_bytes());
                        hasher.update(text.as_bytes());
                    }
                }
            }
            let mut digest = [0u8; 16];
            digest.copy_from_slice(&hasher.finalize());
            digest
        })
    }
}

fn wrong_kind<R: Row>(name: &str, value: &Value, requested: FieldKind) -> CodecError {
    CodecError::WrongKind {
        table: R::table_name().to_string(),
        field: name.to_ascii_lowercase(),
        declared: value.kind(),
        requested,
    }
}
