//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a table layout.

use super::table::{Table, TIMESTAMP_COLUMNS};
use super::PgBindValue;

/// Quote identifier for PostgreSQL (safe: identifiers only come from `Table` impls).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Identity, writable columns, then timestamps.
fn select_column_list<T: Table>() -> String {
    std::iter::once(T::ID_COLUMN)
        .chain(T::COLUMNS.iter().copied())
        .chain(TIMESTAMP_COLUMNS)
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

fn order_clause<T: Table>() -> String {
    format!(" ORDER BY {}, {} ASC", T::ORDER_BY, quoted(T::ID_COLUMN))
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id<T: Table>(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list::<T>(),
        quoted(T::TABLE),
        quoted(T::ID_COLUMN),
        n
    );
    q
}

/// SELECT every row in listing order.
pub fn select_all<T: Table>() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {}{}",
        select_column_list::<T>(),
        quoted(T::TABLE),
        order_clause::<T>()
    );
    q
}

/// SELECT rows matching one column filter, in listing order.
pub fn select_where<T: Table>(filter: &T::Filter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let (column, value) = T::filter_column(filter);
    let condition = match value {
        PgBindValue::NullInt => format!("{} IS NULL", quoted(column)),
        value => format!("{} = ${}", quoted(column), q.push_param(value)),
    };
    q.sql = format!(
        "SELECT {} FROM {} WHERE {}{}",
        select_column_list::<T>(),
        quoted(T::TABLE),
        condition,
        order_clause::<T>()
    );
    q
}

/// INSERT all writable columns; the database assigns identity and timestamps and returns the row.
pub fn insert<T: Table>(record: &T) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut placeholders = Vec::with_capacity(T::COLUMNS.len());
    for value in record.values() {
        placeholders.push(format!("${}", q.push_param(value)));
    }
    let cols: Vec<String> = T::COLUMNS.iter().map(|c| quoted(c)).collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(T::TABLE),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list::<T>()
    );
    q
}

/// UPDATE every writable column by id and refresh `updated_at`. Returns no row when the id is unknown.
pub fn update<T: Table>(record: &T) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(T::COLUMNS.len() + 1);
    for (column, value) in T::COLUMNS.iter().zip(record.values()) {
        let n = q.push_param(value);
        sets.push(format!("{} = ${}", quoted(column), n));
    }
    sets.push(format!("{} = NOW()", quoted("updated_at")));
    let id_param = q.push_param(PgBindValue::Int(record.id()));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(T::TABLE),
        sets.join(", "),
        quoted(T::ID_COLUMN),
        id_param,
        select_column_list::<T>()
    );
    q
}

/// DELETE by id.
pub fn delete<T: Table>(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}",
        quoted(T::TABLE),
        quoted(T::ID_COLUMN),
        n
    );
    q
}
