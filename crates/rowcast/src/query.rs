mod delete;
mod insert;
mod select;
mod update;

use crate::{stmt::IntoArgs, Db, Model};

use rowcast_core::{
    stmt::{Filter, Join, Sort, Target},
    Result,
};

use std::marker::PhantomData;

/// Marker for a query reading rows.
#[derive(Debug)]
pub struct Select;

/// Marker for a query writing new rows.
#[derive(Debug)]
pub struct Insert;

/// Marker for a query updating stored rows.
#[derive(Debug)]
pub struct Update;

/// Marker for a query deleting stored rows.
#[derive(Debug)]
pub struct Delete;

/// Which builder calls each query kind accepts.
pub mod kind {
    use super::{Delete, Insert, Select, Update};

    mod sealed {
        pub trait Sealed {}
    }

    /// Kinds that narrow their rows with a filter.
    pub trait Filtered: sealed::Sealed {}

    /// Kinds that restrict the columns they touch.
    pub trait Projected: sealed::Sealed {}

    /// Kinds that operate on row values.
    pub trait Writes: sealed::Sealed {}

    impl sealed::Sealed for Select {}
    impl sealed::Sealed for Insert {}
    impl sealed::Sealed for Update {}
    impl sealed::Sealed for Delete {}

    impl Filtered for Select {}
    impl Filtered for Update {}
    impl Filtered for Delete {}

    impl Projected for Select {}
    impl Projected for Insert {}
    impl Projected for Update {}

    impl Writes for Insert {}
    impl Writes for Update {}
    impl Writes for Delete {}
}

/// A single-use operation on rows of `M`.
///
/// State accumulates through chained calls and is consumed by exactly one
/// terminal call (`all`, `first`, `run`, ...).
#[must_use = "a query does nothing until a terminal method is called"]
pub struct Query<'a, M: Model, K> {
    db: Db,
    target: Target,

    /// Columns to read or write. Empty means every column.
    projection: Vec<String>,

    filter: Filter,
    sort: Sort,
    limit: Option<u64>,

    /// Rows to write
    values: Vec<&'a mut M>,

    _kind: PhantomData<fn() -> K>,
}

impl<'a, M: Model, K> Query<'a, M, K> {
    pub(crate) fn new(db: Db, target: Target) -> Self {
        Query {
            db,
            target,
            projection: vec![],
            filter: Filter::new(),
            sort: Sort::new(),
            limit: None,
            values: vec![],
            _kind: PhantomData,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}

impl<'a, M: Model, K: kind::Filtered> Query<'a, M, K> {
    /// Narrows the rows with `expr`, joined to earlier clauses with `AND`.
    ///
    /// Fails when `expr` does not carry one `?` per argument.
    pub fn filter(mut self, expr: &str, args: impl IntoArgs) -> Result<Self> {
        self.filter.push(Join::And, expr, args.into_args()?)?;
        Ok(self)
    }

    /// Like [`Query::filter`], joined with `OR`.
    pub fn or_filter(mut self, expr: &str, args: impl IntoArgs) -> Result<Self> {
        self.filter.push(Join::Or, expr, args.into_args()?)?;
        Ok(self)
    }

    /// Narrows the rows to those whose `column` equals one of `args`.
    pub fn filter_in(self, column: &str, args: impl IntoArgs) -> Result<Self> {
        self.push_in(Join::And, column, false, args)
    }

    pub fn or_filter_in(self, column: &str, args: impl IntoArgs) -> Result<Self> {
        self.push_in(Join::Or, column, false, args)
    }

    /// Narrows the rows to those whose `column` equals none of `args`.
    pub fn filter_not_in(self, column: &str, args: impl IntoArgs) -> Result<Self> {
        self.push_in(Join::And, column, true, args)
    }

    pub fn or_filter_not_in(self, column: &str, args: impl IntoArgs) -> Result<Self> {
        self.push_in(Join::Or, column, true, args)
    }

    pub fn clear_filter(mut self) -> Self {
        self.filter.clear();
        self
    }

    fn push_in(
        mut self,
        join: Join,
        column: &str,
        negated: bool,
        args: impl IntoArgs,
    ) -> Result<Self> {
        self.filter
            .push_in(join, column, negated, args.into_args()?)?;
        Ok(self)
    }
}

impl<'a, M: Model, K: kind::Projected> Query<'a, M, K> {
    /// Restricts the columns read or written. Replaces any earlier projection.
    pub fn projection<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection = columns.into_iter().map(Into::into).collect();
        self
    }
}

impl<'a, M: Model, K: kind::Writes> Query<'a, M, K> {
    /// Sets the rows to operate on. Replaces any earlier values.
    pub fn values(mut self, rows: impl IntoIterator<Item = &'a mut M>) -> Self {
        self.values = rows.into_iter().collect();
        self
    }
}

impl<'a, M: Model> Query<'a, M, Select> {
    /// Appends an ordering term such as `name` or `age DESC`.
    pub fn sort(mut self, term: &str) -> Self {
        self.sort.push(term);
        self
    }

    /// Appends `column ASC` for each column.
    pub fn sort_asc<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sort.push_asc(columns);
        self
    }

    /// Appends `column DESC` for each column.
    pub fn sort_desc<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sort.push_desc(columns);
        self
    }

    pub fn clear_sort(mut self) -> Self {
        self.sort.clear();
        self
    }

    /// Caps the number of rows returned. Replaces any earlier limit.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl<M: Model, K> core::fmt::Debug for Query<'_, M, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Query")
            .field("model", &M::NAME)
            .field("target", &self.target)
            .field("projection", &self.projection)
            .field("filter", &self.filter)
            .field("sort", &self.sort)
            .field("limit", &self.limit)
            .field("values", &self.values.len())
            .finish()
    }
}
