use super::{Query, Update};
use crate::{model::CascadeMode, Model};

use rowcast_core::{
    driver::operation,
    stmt::Filter,
    Error, Result, ID_COLUMN,
};

impl<'a, M: Model> Query<'a, M, Update> {
    /// Writes the rows' values, returning the number of rows changed.
    ///
    /// When every row carries an identifier and no filter was given, each
    /// row updates the stored row holding its identifier. Otherwise the last
    /// row's values are applied to every row matching the filter. Only
    /// projected columns are written when a projection is set.
    pub fn run(self) -> Result<u64> {
        if self.values.is_empty() {
            return Err(Error::invalid_query(format!(
                "no values were provided to update `{}`",
                self.target
            )));
        }

        let db = self.db;
        db.ensure_table::<M>(&self.target)?;

        let fields = M::fields();

        let mut identified = fields.id().is_some();
        for row in &self.values {
            identified &= fields.id_of(row)? > 0;
        }

        let mut values = self.values;

        if !identified {
            let Some(row) = values.pop() else {
                return Ok(0);
            };

            let count = db
                .exec(
                    operation::Update {
                        target: self.target,
                        values: fields.write_values(&db, row, &self.projection)?,
                        filter: self.filter,
                    }
                    .into(),
                )?
                .rows
                .into_count()?;

            let id = fields.id_of(row)?;
            fields.cascade(&db, row, id, CascadeMode::Update)?;
            return Ok(count);
        }

        if !self.filter.is_empty() {
            return Err(Error::invalid_query(
                "rows with identifiers cannot be combined with an explicit filter",
            ));
        }

        let mut count = 0;
        for row in values {
            let id = fields.id_of(row)?;

            count += db
                .exec(
                    operation::Update {
                        target: self.target.clone(),
                        values: fields.write_values(&db, row, &self.projection)?,
                        filter: Filter::eq(ID_COLUMN, id),
                    }
                    .into(),
                )?
                .rows
                .into_count()?;

            fields.cascade(&db, row, id, CascadeMode::Update)?;
        }

        Ok(count)
    }
}
