use crate::{stmt::StorageClass, ID_COLUMN};

/// A persisted, non-relationship member of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// The name of the column in the table.
    pub name: &'static str,

    /// Storage class the member's type maps onto.
    pub storage: StorageClass,

    /// True if the column is the table's primary key
    pub primary_key: bool,

    /// True if the store assigns the value on insert
    pub auto_increment: bool,

    /// True if the column is declared `NOT NULL`
    pub not_null: bool,
}

impl Column {
    pub const fn new(name: &'static str, storage: StorageClass) -> Column {
        Column {
            name,
            storage,
            primary_key: false,
            auto_increment: false,
            not_null: false,
        }
    }

    pub const fn primary_key(mut self) -> Column {
        self.primary_key = true;
        self
    }

    pub const fn auto_increment(mut self) -> Column {
        self.auto_increment = true;
        self
    }

    pub const fn not_null(mut self) -> Column {
        self.not_null = true;
        self
    }

    /// Returns `true` if this column qualifies as the model's identifier.
    pub fn is_id(&self) -> bool {
        self.name == ID_COLUMN
            && self.primary_key
            && self.auto_increment
            && self.storage == StorageClass::Integer
    }

    /// Column definition as it appears inside `CREATE TABLE (...)`.
    pub fn to_ddl(&self) -> String {
        let mut out = format!("{} {}", self.name, self.storage.as_sql());
        if self.primary_key {
            out.push_str(" PRIMARY KEY");
        }
        if self.auto_increment {
            out.push_str(" AUTOINCREMENT");
        }
        if self.not_null {
            out.push_str(" NOT NULL");
        }
        out
    }
}
