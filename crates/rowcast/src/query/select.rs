use super::{Query, Select};
use crate::{hydrate::hydrate, Model};

use rowcast_core::{
    driver::operation,
    stmt::{Filter, Value},
    Error, Result, ID_COLUMN,
};

use tokio::task::JoinHandle;

impl<'a, M: Model> Query<'a, M, Select> {
    /// Returns every matching row.
    pub fn all(self) -> Result<Vec<M>> {
        let limit = self.limit;
        self.fetch(limit)
    }

    /// Returns the first matching row, if any.
    pub fn first(self) -> Result<Option<M>> {
        Ok(self.fetch(Some(1))?.into_iter().next())
    }

    /// Returns `true` if at least one row matches.
    pub fn any(self) -> Result<bool> {
        Ok(self.first()?.is_some())
    }

    /// Returns `true` if no row matches.
    pub fn none(self) -> Result<bool> {
        Ok(self.first()?.is_none())
    }

    /// Returns `true` if any matching row satisfies `predicate`.
    pub fn any_match(self, predicate: impl FnMut(&M) -> bool) -> Result<bool> {
        Ok(self.all()?.iter().any(predicate))
    }

    /// Returns `true` if no matching row satisfies `predicate`.
    pub fn none_match(self, mut predicate: impl FnMut(&M) -> bool) -> Result<bool> {
        Ok(!self.all()?.iter().any(|row| predicate(row)))
    }

    /// Narrows the query to the row at `position` among the rows currently
    /// matching, in the current sort order.
    ///
    /// The position is resolved immediately by reading the identifiers of the
    /// matching rows.
    pub fn at_position(mut self, position: usize) -> Result<Self> {
        self.db.ensure_table::<M>(&self.target)?;

        let ids = self
            .db
            .exec(
                operation::Query {
                    target: self.target.clone(),
                    projection: vec![ID_COLUMN.to_string()],
                    filter: self.filter.clone(),
                    sort: self.sort.clone(),
                    limit: None,
                }
                .into(),
            )?
            .rows
            .into_values()?;

        let Some(row) = ids.row(position) else {
            return Err(Error::invalid_query(format!(
                "position {position} is out of bounds for {} matching row(s)",
                ids.len()
            )));
        };

        let id = match row.get_by_name(ID_COLUMN) {
            Some(Value::Integer(id)) => *id,
            _ => {
                return Err(Error::invalid_query(format!(
                    "rows of `{}` have no `{ID_COLUMN}` column to position by",
                    M::NAME
                )))
            }
        };

        // The identifier alone selects the row
        self.filter = Filter::eq(ID_COLUMN, id);
        Ok(self)
    }

    fn fetch(self, limit: Option<u64>) -> Result<Vec<M>> {
        let db = self.db;
        db.ensure_table::<M>(&self.target)?;

        let projection = if self.projection.is_empty() {
            M::fields().column_names()
        } else {
            self.projection
        };

        let rows = db
            .exec(
                operation::Query {
                    target: self.target,
                    projection,
                    filter: self.filter,
                    sort: self.sort,
                    limit,
                }
                .into(),
            )?
            .rows
            .into_values()?;

        rows.iter().map(|row| hydrate::<M>(&db, row)).collect()
    }
}

impl<M: Model> Query<'static, M, Select> {
    /// Runs [`Query::all`] on a blocking worker and hands the result to
    /// `callback` on the completion context.
    ///
    /// Must be called inside a tokio runtime. There is no cancellation: the
    /// query runs to completion once dispatched.
    pub fn all_async(
        self,
        callback: impl FnOnce(Result<Vec<M>>) + Send + 'static,
    ) -> Result<JoinHandle<()>> {
        let db = self.db.clone();
        db.spawn(move || self.all(), callback)
    }

    /// Runs [`Query::first`] on a blocking worker and hands the result to
    /// `callback` on the completion context.
    pub fn first_async(
        self,
        callback: impl FnOnce(Result<Option<M>>) + Send + 'static,
    ) -> Result<JoinHandle<()>> {
        let db = self.db.clone();
        db.spawn(move || self.first(), callback)
    }
}
