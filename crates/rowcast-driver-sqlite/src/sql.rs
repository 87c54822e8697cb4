//! Renders driver operations as SQLite statements.

use rowcast_core::{
    driver::operation::{Delete, Insert, Query, Update},
    stmt::{Filter, Value},
    ID_COLUMN,
};

/// A statement ready to prepare, with its bound parameters in order.
#[derive(Debug, PartialEq)]
pub(crate) struct Statement {
    pub(crate) sql: String,
    pub(crate) params: Vec<Value>,
}

pub(crate) fn create_table(table: &str, columns: &str) -> String {
    format!("CREATE TABLE IF NOT EXISTS {table} ({columns})")
}

pub(crate) fn drop_table(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {table}")
}

pub(crate) fn query(table: &str, op: Query) -> Statement {
    let columns = if op.projection.is_empty() {
        "*".to_string()
    } else {
        op.projection.join(", ")
    };

    let mut sql = format!("SELECT {columns} FROM {table}");
    let params = push_where(&mut sql, op.filter);

    if !op.sort.is_empty() {
        sql.push_str(" ORDER BY ");
        sql.push_str(&op.sort.to_sql());
    }

    if let Some(limit) = op.limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }

    Statement { sql, params }
}

pub(crate) fn insert(table: &str, op: Insert) -> Statement {
    if op.values.is_empty() {
        return Statement {
            sql: format!("INSERT INTO {table} DEFAULT VALUES"),
            params: vec![],
        };
    }

    // An assigned identifier overwrites the row stored under it
    let verb = if op.values.contains(ID_COLUMN) {
        "INSERT OR REPLACE"
    } else {
        "INSERT"
    };

    let columns = op.values.columns().collect::<Vec<_>>().join(", ");
    let placeholders = vec!["?"; op.values.len()].join(", ");

    Statement {
        sql: format!("{verb} INTO {table} ({columns}) VALUES ({placeholders})"),
        params: op.values.values().cloned().collect(),
    }
}

/// `None` when there is nothing to assign.
pub(crate) fn update(table: &str, op: Update) -> Option<Statement> {
    if op.values.is_empty() {
        return None;
    }

    let assignments = op
        .values
        .columns()
        .map(|column| format!("{column} = ?"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut sql = format!("UPDATE {table} SET {assignments}");
    let mut params: Vec<Value> = op.values.values().cloned().collect();
    params.extend(push_where(&mut sql, op.filter));

    Some(Statement { sql, params })
}

pub(crate) fn delete(table: &str, op: Delete) -> Statement {
    let mut sql = format!("DELETE FROM {table}");
    let params = push_where(&mut sql, op.filter);
    Statement { sql, params }
}

fn push_where(sql: &mut String, filter: Filter) -> Vec<Value> {
    if filter.is_empty() {
        return vec![];
    }

    let (expr, args) = filter.into_parts();
    sql.push_str(" WHERE ");
    sql.push_str(&expr);
    args
}
