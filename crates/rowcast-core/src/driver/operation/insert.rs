use super::Operation;

use crate::stmt::{RowValues, Target};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub target: Target,

    /// Row to write. A present identifier replaces the row holding it.
    pub values: RowValues,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
