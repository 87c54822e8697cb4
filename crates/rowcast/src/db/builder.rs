use super::Db;
use crate::{dispatch::Dispatcher, Model};

use rowcast_core::{Driver, Result};

type Register = fn(&Db) -> Result<()>;

/// Configures a [`Db`].
#[derive(Default)]
pub struct Builder {
    /// Models whose tables are created when the handle is built
    models: Vec<Register>,

    dispatcher: Option<Dispatcher>,
}

impl Builder {
    /// Verifies `M` and creates its table when the handle is built.
    pub fn register<M: Model>(&mut self) -> &mut Self {
        self.models
            .push(|db| db.ensure_table::<M>(&rowcast_core::stmt::Target::table(M::TABLE)));
        self
    }

    /// Delivers asynchronous callbacks through `dispatcher`.
    pub fn dispatcher(&mut self, dispatcher: Dispatcher) -> &mut Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let db = Db::new(Box::new(driver), self.dispatcher.take());

        for register in &self.models {
            register(&db)?;
        }

        Ok(db)
    }
}

impl core::fmt::Debug for Builder {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Builder")
            .field("models", &self.models.len())
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}
