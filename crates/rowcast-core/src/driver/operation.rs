mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod query;
pub use query::Query;

mod update;
pub use update::Update;

use crate::stmt::Target;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Create a table unless it already exists
    CreateTable(CreateTable),

    /// Drop a table if it exists
    DropTable(DropTable),

    /// Read rows matching a filter
    Query(Query),

    /// Write a single row, returning its identifier
    Insert(Insert),

    /// Update every row matching a filter
    Update(Update),

    /// Delete every row matching a filter
    Delete(Delete),
}

impl Operation {
    /// Short name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateTable(_) => "create_table",
            Operation::DropTable(_) => "drop_table",
            Operation::Query(_) => "query",
            Operation::Insert(_) => "insert",
            Operation::Update(_) => "update",
            Operation::Delete(_) => "delete",
        }
    }

    /// Where the operation is addressed.
    pub fn target(&self) -> Target {
        match self {
            Operation::CreateTable(op) => Target::Table(op.table.clone()),
            Operation::DropTable(op) => Target::Table(op.table.clone()),
            Operation::Query(op) => op.target.clone(),
            Operation::Insert(op) => op.target.clone(),
            Operation::Update(op) => op.target.clone(),
            Operation::Delete(op) => op.target.clone(),
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Operation::Query(_))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Operation::Insert(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Operation::Update(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Operation::Delete(_))
    }
}
