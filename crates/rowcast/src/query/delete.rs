use super::{Delete, Query};
use crate::Model;

use rowcast_core::{
    driver::operation,
    stmt::{Join, Sort, Value},
    Error, Result, ID_COLUMN,
};

use tokio::task::JoinHandle;

impl<'a, M: Model> Query<'a, M, Delete> {
    /// Deletes the matching rows, returning how many were removed.
    ///
    /// Rows passed through `values` are matched by identifier and cannot be
    /// combined with a filter. Without either, every row is deleted. Children
    /// of the removed rows are deleted first, one level deep.
    pub fn run(self) -> Result<u64> {
        let db = self.db;
        db.ensure_table::<M>(&self.target)?;

        let fields = M::fields();
        let mut filter = self.filter;

        if !self.values.is_empty() {
            if !filter.is_empty() {
                return Err(Error::invalid_query(
                    "rows with identifiers cannot be combined with an explicit filter",
                ));
            }

            let mut ids = Vec::with_capacity(self.values.len());
            for row in &self.values {
                let id = fields.id_of(row)?;
                if id <= 0 {
                    return Err(Error::invalid_query(format!(
                        "cannot delete a `{}` row that has no identifier",
                        M::NAME
                    )));
                }
                ids.push(Value::Integer(id));
            }

            filter.push_in(Join::And, ID_COLUMN, false, ids)?;
        }

        if fields.has_relations() {
            let doomed = db
                .exec(
                    operation::Query {
                        target: self.target.clone(),
                        projection: vec![ID_COLUMN.to_string()],
                        filter: filter.clone(),
                        sort: Sort::new(),
                        limit: None,
                    }
                    .into(),
                )?
                .rows
                .into_values()?;

            for row in doomed.iter() {
                let Some(Value::Integer(id)) = row.get(0) else {
                    continue;
                };

                for field in fields.relations() {
                    (field.delete)(&db, &field.relation, *id)?;
                }
            }
        }

        db.exec(
            operation::Delete {
                target: self.target,
                filter,
            }
            .into(),
        )?
        .rows
        .into_count()
    }
}

impl<M: Model> Query<'static, M, Delete> {
    /// Runs [`Query::run`] on a blocking worker and hands the result to
    /// `callback` on the completion context.
    pub fn run_async(
        self,
        callback: impl FnOnce(Result<u64>) + Send + 'static,
    ) -> Result<JoinHandle<()>> {
        let db = self.db.clone();
        db.spawn(move || self.run(), callback)
    }
}
