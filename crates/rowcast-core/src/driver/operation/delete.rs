use super::Operation;

use crate::stmt::{Filter, Target};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub target: Target,

    /// Rows to delete. Empty deletes every row.
    pub filter: Filter,
}

impl From<Delete> for Operation {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
