//! SQL statements for record types: `CREATE TABLE` scripts, literal and parameterized inserts,
//! and batch reads and writes over a `rusqlite` connection.
//!
//! Every table gets a trailing `lddate` column holding the load date.

use crate::columns::SqlType;
use crate::cursor::from_cursor;
use crate::error::{CodecError, Result};
use crate::row::Row;
use crate::types::Value;
use chrono::NaiveDateTime;
use rusqlite::types::ToSqlOutput;
use rusqlite::{params_from_iter, Connection, ToSql};
use serde::{Deserialize, Serialize};

const LDDATE: &str = "lddate";
const LDDATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which database the generated statements target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Constraints added by `alter table`, load date `SYSDATE`, select granted to public.
    #[default]
    Oracle,
    /// Constraints inline in `create table`, load date `CURRENT_TIMESTAMP`, no grants.
    Sqlite,
}

impl Dialect {
    fn now(self) -> &'static str {
        match self {
            Dialect::Oracle => "SYSDATE",
            Dialect::Sqlite => "CURRENT_TIMESTAMP",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DdlOptions {
    pub dialect: Dialect,
    pub primary_key: bool,
    pub unique_key: bool,
    /// Ignored for [`Dialect::Sqlite`].
    pub grant_public: bool,
}

impl Default for DdlOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::Oracle,
            primary_key: true,
            unique_key: true,
            grant_public: true,
        }
    }
}

impl DdlOptions {
    pub fn sqlite() -> Self {
        Self {
            dialect: Dialect::Sqlite,
            ..Self::default()
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Integer(v) => ToSqlOutput::from(*v),
            Value::Float(v) => ToSqlOutput::from(*v),
            Value::Text(v) => ToSqlOutput::from(v.as_str()),
        })
    }
}

fn sql_error<R: Row>(statement: &str) -> impl Fn(rusqlite::Error) -> CodecError + '_ {
    move |source| CodecError::SqlExecution {
        table: R::table_name().to_string(),
        statement: statement.to_string(),
        source,
    }
}

fn column_list<R: Row>() -> String {
    let mut names = R::columns().names();
    names.push(LDDATE);
    names.join(", ")
}

fn literal(value: &Value) -> String {
    match value {
        Value::Integer(v) => v.to_string(),
        Value::Float(v) if v.is_finite() => format!("{v:?}"),
        Value::Float(_) => "NULL".to_string(),
        Value::Text(v) => format!("'{}'", v.replace('\'', "''")),
    }
}

/// A literal single-row insert, for display and logging. Use [`write_rows`] to load data.
pub fn insert_sql<R: Row>(row: &R, table: &str, dialect: Dialect) -> String {
    let values: Vec<String> = row.values().iter().map(literal).collect();
    format!(
        "insert into {table} ({}) values ({}, {})",
        column_list::<R>(),
        values.join(", "),
        dialect.now()
    )
}

/// Parameterized insert naming every column plus `lddate`, with one placeholder each.
pub fn insert_statement<R: Row>(table: &str) -> String {
    let placeholders = vec!["?"; R::columns().len() + 1];
    format!(
        "insert into {table} ({}) values ({})",
        column_list::<R>(),
        placeholders.join(",")
    )
}

/// Insert `rows` into `table`, stamping each with `lddate`.
///
/// With `commit`, the batch runs in its own transaction and is committed only if every row
/// was inserted. Otherwise rows go straight to `conn`, inside whatever transaction the caller
/// holds. Returns the number of rows inserted.
pub fn write_rows<'a, R, I>(
    conn: &Connection,
    table: &str,
    rows: I,
    lddate: NaiveDateTime,
    commit: bool,
) -> Result<usize>
where
    R: Row,
    I: IntoIterator<Item = &'a R>,
{
    let statement = insert_statement::<R>(table);
    let tx = if commit {
        Some(
            conn.unchecked_transaction()
                .map_err(sql_error::<R>(&statement))?,
        )
    } else {
        None
    };

    let lddate = Value::Text(lddate.format(LDDATE_FORMAT).to_string());
    let mut prepared = conn
        .prepare(&statement)
        .map_err(sql_error::<R>(&statement))?;
    let mut written = 0;
    for row in rows {
        let mut values = row.values();
        values.push(lddate.clone());
        prepared
            .execute(params_from_iter(values.iter()))
            .map_err(sql_error::<R>(&statement))?;
        written += 1;
    }
    drop(prepared);

    if let Some(tx) = tx {
        tx.commit().map_err(sql_error::<R>(&statement))?;
    }
    log::debug!("{}: inserted {written} rows into {table}", R::table_name());
    Ok(written)
}

/// Run `select` and decode every result row. The select must return complete rows in
/// declaration order; extra trailing columns such as `lddate` are ignored.
pub fn read_rows<R, C>(conn: &Connection, select: &str) -> Result<C>
where
    R: Row,
    C: Default + Extend<R>,
{
    let mut statement = conn.prepare(select).map_err(sql_error::<R>(select))?;
    let mut cursor = statement.query([]).map_err(sql_error::<R>(select))?;
    let mut rows = C::default();
    while let Some(row) = cursor.next().map_err(sql_error::<R>(select))? {
        rows.extend(std::iter::once(from_cursor::<R, _>(row, 0)?));
    }
    Ok(rows)
}

fn column_definition(name: &str, sql_type: SqlType) -> String {
    format!("{name:<13}{:<21}NOT NULL", sql_type.to_string())
}

/// Statements that create `table` for record type `R`.
///
/// Constraint names are the last dot-separated segment of `table` suffixed with `_pk` / `_uk`.
pub fn create_table_script<R: Row>(table: &str, options: &DdlOptions) -> Vec<String> {
    let schema = R::schema();
    let constraint = table.rsplit('.').next().unwrap_or(table);

    let mut lines: Vec<String> = schema
        .columns()
        .iter()
        .map(|column| column_definition(column.name(), column.sql_type()))
        .collect();
    lines.push(column_definition(LDDATE, SqlType::Date));

    let mut constraints = Vec::new();
    if options.primary_key && !schema.primary_key().is_empty() {
        constraints.push(format!(
            "constraint {constraint}_pk primary key ({})",
            schema.primary_key().join(",")
        ));
    }
    if options.unique_key && !schema.unique_key().is_empty() {
        constraints.push(format!(
            "constraint {constraint}_uk unique ({})",
            schema.unique_key().join(",")
        ));
    }

    let mut script = Vec::new();
    match options.dialect {
        Dialect::Oracle => {
            script.push(format!("create table {table} (\n{}\n)", lines.join(",\n")));
            script.extend(
                constraints
                    .into_iter()
                    .map(|constraint| format!("alter table {table} add {constraint}")),
            );
            if options.grant_public {
                script.push(format!("grant select on {table} to public"));
            }
        }
        Dialect::Sqlite => {
            lines.extend(constraints);
            script.push(format!("create table {table} (\n{}\n)", lines.join(",\n")));
        }
    }
    script
}

/// Execute [`create_table_script`] on `conn`.
pub fn create_table<R: Row>(conn: &Connection, table: &str, options: &DdlOptions) -> Result<()> {
    for statement in create_table_script::<R>(table, options) {
        log::debug!("{}: {statement}", R::table_name());
        conn.execute(&statement, [])
            .map_err(sql_error::<R>(&statement))?;
    }
    Ok(())
}
