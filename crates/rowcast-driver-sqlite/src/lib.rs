mod sql;

mod value;
pub(crate) use value::Value;

use rowcast_core::{
    driver::{Driver, Operation, Response, ResultSet},
    stmt::Target,
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};
use url::Url;

/// Where a SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL does not name a database file; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    /// Opens the database.
    pub fn connect(&self) -> Result<Connection> {
        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

/// An open SQLite database.
///
/// Statements run one at a time behind a mutex; every call is a single
/// statement with no transaction spanning calls.
#[derive(Debug)]
pub struct Connection {
    connection: Mutex<RusqliteConnection>,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self::from(connection))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self::from(connection))
    }

    fn execute(&self, sql: &str, params: Vec<rowcast_core::stmt::Value>) -> Result<u64> {
        tracing::trace!(sql = %sql, "execute");

        let connection = self.connection.lock().unwrap_or_else(PoisonError::into_inner);
        let mut stmt = connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();
        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        Ok(count as u64)
    }

    fn insert(&self, sql: &str, params: Vec<rowcast_core::stmt::Value>) -> Result<i64> {
        tracing::trace!(sql = %sql, "insert");

        let connection = self.connection.lock().unwrap_or_else(PoisonError::into_inner);
        let mut stmt = connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();
        stmt.execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        Ok(connection.last_insert_rowid())
    }

    fn query(&self, sql: &str, params: Vec<rowcast_core::stmt::Value>) -> Result<ResultSet> {
        tracing::trace!(sql = %sql, "query");

        let connection = self.connection.lock().unwrap_or_else(PoisonError::into_inner);
        let mut stmt = connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let columns = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        let width = columns.len();
        let mut ret = ResultSet::new(columns);

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();
        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);

                    for index in 0..width {
                        let value: rusqlite::types::Value =
                            row.get(index).map_err(Error::driver_operation_failed)?;
                        items.push(Value::from(value).into_inner());
                    }

                    ret.push(items)?;
                }
                Ok(None) => break,
                Err(err) => return Err(Error::driver_operation_failed(err)),
            }
        }

        Ok(ret)
    }
}

impl From<RusqliteConnection> for Connection {
    fn from(connection: RusqliteConnection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }
}

impl Driver for Connection {
    fn exec(&self, op: Operation) -> Result<Response> {
        let target = op.target();
        let Some(table) = target.as_table() else {
            return Err(unsupported_target(&target));
        };

        match op {
            Operation::CreateTable(op) => {
                self.execute(&sql::create_table(&op.table, &op.columns), vec![])?;
                Ok(Response::empty())
            }
            Operation::DropTable(op) => {
                self.execute(&sql::drop_table(&op.table), vec![])?;
                Ok(Response::empty())
            }
            Operation::Query(op) => {
                let stmt = sql::query(table, op);
                Ok(Response::values(self.query(&stmt.sql, stmt.params)?))
            }
            Operation::Insert(op) => {
                let stmt = sql::insert(table, op);
                Ok(Response::inserted_id(self.insert(&stmt.sql, stmt.params)?))
            }
            Operation::Update(op) => match sql::update(table, op) {
                Some(stmt) => Ok(Response::count(self.execute(&stmt.sql, stmt.params)?)),
                None => Ok(Response::count(0)),
            },
            Operation::Delete(op) => {
                let stmt = sql::delete(table, op);
                Ok(Response::count(self.execute(&stmt.sql, stmt.params)?))
            }
        }
    }
}

fn unsupported_target(target: &Target) -> Error {
    Error::invalid_query(format!(
        "the sqlite driver only addresses local tables, not `{target}`"
    ))
}
