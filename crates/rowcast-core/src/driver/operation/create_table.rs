use super::Operation;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub table: String,

    /// Column definitions, already joined by `, `
    pub columns: String,
}

impl From<CreateTable> for Operation {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
