use super::Operation;

use crate::stmt::{Filter, Sort, Target};

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub target: Target,

    /// Columns to return, in order. Empty returns every column.
    pub projection: Vec<String>,

    pub filter: Filter,

    pub sort: Sort,

    pub limit: Option<u64>,
}

impl Query {
    pub fn new(target: impl Into<Target>) -> Query {
        Query {
            target: target.into(),
            projection: vec![],
            filter: Filter::default(),
            sort: Sort::default(),
            limit: None,
        }
    }
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
