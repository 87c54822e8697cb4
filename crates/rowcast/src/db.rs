mod builder;
pub use builder::Builder;

use crate::{
    dispatch::Dispatcher,
    query::{Delete, Insert, Query, Select, Update},
    Model,
};

use rowcast_core::{
    driver::{operation, Operation, Response},
    stmt::Target,
    Driver, Error, Result,
};

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
};
use tokio::task::JoinHandle;

/// Shared state between all `Db` clones.
struct Shared {
    driver: Box<dyn Driver>,

    /// Tables already created through this handle
    tables: Mutex<HashSet<String>>,

    /// Where asynchronous callbacks are delivered, if anywhere
    dispatcher: Option<Dispatcher>,
}

/// A handle to a storage backend.
///
/// Cloning is cheap; clones share the backend and the record of created
/// tables.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    fn new(driver: Box<dyn Driver>, dispatcher: Option<Dispatcher>) -> Db {
        Db {
            shared: Arc::new(Shared {
                driver,
                tables: Mutex::new(HashSet::new()),
                dispatcher,
            }),
        }
    }

    /// Selects rows of `M` from its table.
    pub fn select<M: Model>(&self) -> Query<'static, M, Select> {
        self.select_from(Target::table(M::TABLE))
    }

    pub fn select_from<M: Model>(&self, target: impl Into<Target>) -> Query<'static, M, Select> {
        Query::new(self.clone(), target.into())
    }

    /// Inserts rows of `M` into its table.
    pub fn insert<'a, M: Model>(&self) -> Query<'a, M, Insert> {
        self.insert_into(Target::table(M::TABLE))
    }

    pub fn insert_into<'a, M: Model>(&self, target: impl Into<Target>) -> Query<'a, M, Insert> {
        Query::new(self.clone(), target.into())
    }

    /// Updates rows of `M` in its table.
    pub fn update<'a, M: Model>(&self) -> Query<'a, M, Update> {
        self.update_in(Target::table(M::TABLE))
    }

    pub fn update_in<'a, M: Model>(&self, target: impl Into<Target>) -> Query<'a, M, Update> {
        Query::new(self.clone(), target.into())
    }

    /// Deletes rows of `M` from its table.
    /// Inserts owned `rows` on a blocking worker. The callback receives the
    /// rows back, with generated identifiers written onto them, alongside the
    /// identifiers themselves.
    pub fn insert_async<M: Model>(
        &self,
        rows: Vec<M>,
        callback: impl FnOnce(Result<(Vec<M>, Vec<i64>)>) + Send + 'static,
    ) -> Result<JoinHandle<()>> {
        let db = self.clone();
        self.spawn(
            move || {
                let mut rows = rows;
                let ids = db.insert::<M>().values(rows.iter_mut()).run()?;
                Ok((rows, ids))
            },
            callback,
        )
    }

    /// Updates owned `rows` by identifier on a blocking worker. The callback
    /// receives the rows back with the number of rows changed.
    pub fn update_async<M: Model>(
        &self,
        rows: Vec<M>,
        callback: impl FnOnce(Result<(Vec<M>, u64)>) + Send + 'static,
    ) -> Result<JoinHandle<()>> {
        let db = self.clone();
        self.spawn(
            move || {
                let mut rows = rows;
                let changed = db.update::<M>().values(rows.iter_mut()).run()?;
                Ok((rows, changed))
            },
            callback,
        )
    }

    pub fn delete<'a, M: Model>(&self) -> Query<'a, M, Delete> {
        self.delete_from(Target::table(M::TABLE))
    }

    pub fn delete_from<'a, M: Model>(&self, target: impl Into<Target>) -> Query<'a, M, Delete> {
        Query::new(self.clone(), target.into())
    }

    /// Drops `M`'s table. The next operation on it recreates it empty.
    pub fn drop_table<M: Model>(&self) -> Result<()> {
        self.exec(
            operation::DropTable {
                table: M::TABLE.to_string(),
            }
            .into(),
        )?;

        self.tables().remove(M::TABLE);
        Ok(())
    }

    /// Verifies `M` and creates the table behind `target` if this handle has
    /// not done so yet. Endpoint targets manage their own storage.
    pub(crate) fn ensure_table<M: Model>(&self, target: &Target) -> Result<()> {
        let schema = M::fields().schema();
        schema.verify()?;

        let Some(table) = target.as_table() else {
            return Ok(());
        };

        if self.tables().contains(table) {
            return Ok(());
        }

        let columns = schema.ddl()?;
        self.exec(
            operation::CreateTable {
                table: table.to_string(),
                columns,
            }
            .into(),
        )?;

        self.tables().insert(table.to_string());
        Ok(())
    }

    pub(crate) fn exec(&self, op: Operation) -> Result<Response> {
        tracing::debug!(op = op.name(), table = %op.target(), "exec");
        self.shared.driver.exec(op)
    }

    /// Runs `work` on a blocking worker and delivers its result to `callback`
    /// through the configured dispatcher, or on the worker when there is none.
    pub(crate) fn spawn<T, W, C>(&self, work: W, callback: C) -> Result<JoinHandle<()>>
    where
        T: Send + 'static,
        W: FnOnce() -> T + Send + 'static,
        C: FnOnce(T) + Send + 'static,
    {
        let handle = tokio::runtime::Handle::try_current().map_err(|_| {
            Error::invalid_query("asynchronous calls must be made inside a tokio runtime")
        })?;

        let dispatcher = self.shared.dispatcher.clone();

        Ok(handle.spawn_blocking(move || {
            let result = work();
            match dispatcher {
                Some(dispatcher) => dispatcher.post(Box::new(move || callback(result))),
                None => callback(result),
            }
        }))
    }

    fn tables(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        self.shared
            .tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for Db {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Db")
            .field("driver", &self.shared.driver)
            .finish_non_exhaustive()
    }
}
