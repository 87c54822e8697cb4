use super::Operation;

#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    pub table: String,
}

impl From<DropTable> for Operation {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
