mod exec_log;
pub use exec_log::ExecLog;

pub mod logging_driver;
use logging_driver::{DriverOp, LoggingDriver};

use rowcast::{db::Builder, Db};
use rowcast_core::{
    driver::{operation, Driver, ResultSet},
    stmt::Filter,
};
use rowcast_driver_sqlite::{Connection, Sqlite};
use std::sync::{Arc, Mutex, Once};

#[macro_export]
macro_rules! models {
    (
        $( $model:ident ),*
    ) => {{
        let mut builder = rowcast::Db::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}

/// A fresh in-memory database whose driver operations are logged.
pub struct DbTest {
    pub db: Db,

    /// Direct handle on the database, bypassing the log
    raw: Arc<Connection>,

    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl DbTest {
    pub fn setup(builder: Builder) -> DbTest {
        Self::try_setup(builder).unwrap()
    }

    pub fn try_setup(mut builder: Builder) -> rowcast::Result<DbTest> {
        init_logging();

        let raw = Arc::new(Sqlite::in_memory().connect()?);
        let driver = LoggingDriver::new(raw.clone());
        let ops_log = driver.ops_log_handle();
        let db = builder.build(driver)?;

        Ok(DbTest { db, raw, ops_log })
    }

    /// Get the operations log for assertions
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }

    /// Reads `columns` of every row of `table` where `column = value`,
    /// without going through the model layer.
    pub fn raw_rows(
        &self,
        table: &str,
        columns: &[&str],
        filter: Option<(&str, i64)>,
    ) -> ResultSet {
        let mut query = operation::Query::new(table);
        query.projection = columns.iter().map(|c| c.to_string()).collect();
        if let Some((column, value)) = filter {
            query.filter = Filter::eq(column, value);
        }

        self.raw
            .exec(query.into())
            .unwrap()
            .rows
            .into_values()
            .unwrap()
    }
}

fn init_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
