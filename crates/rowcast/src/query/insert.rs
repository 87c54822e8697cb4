use super::{Insert, Query};
use crate::{model::CascadeMode, Model};

use rowcast_core::{driver::operation, Error, Result};

impl<'a, M: Model> Query<'a, M, Insert> {
    /// Writes every row, returning the identifiers the store assigned.
    ///
    /// Each identifier is written back onto its row before the row's
    /// relationships cascade. Rows are written one statement at a time; a
    /// failure leaves earlier rows in place.
    pub fn run(self) -> Result<Vec<i64>> {
        if self.values.is_empty() {
            return Err(Error::invalid_query(format!(
                "no values were provided to insert into `{}`",
                self.target
            )));
        }

        let db = self.db;
        db.ensure_table::<M>(&self.target)?;

        let fields = M::fields();
        let mut ids = Vec::with_capacity(self.values.len());

        for row in self.values {
            let values = fields.write_values(&db, row, &self.projection)?;

            let id = db
                .exec(
                    operation::Insert {
                        target: self.target.clone(),
                        values,
                    }
                    .into(),
                )?
                .rows
                .into_inserted_id()?;

            fields.set_id(row, id)?;
            fields.cascade(&db, row, id, CascadeMode::Insert)?;
            ids.push(id);
        }

        Ok(ids)
    }
}
