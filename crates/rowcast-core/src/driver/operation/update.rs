use super::Operation;

use crate::stmt::{Filter, RowValues, Target};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub target: Target,

    /// Columns to assign
    pub values: RowValues,

    /// Rows to update. Empty updates every row.
    pub filter: Filter,
}

impl From<Update> for Operation {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
