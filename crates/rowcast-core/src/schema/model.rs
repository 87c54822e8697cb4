use super::{Column, Relation};
use crate::Result;

/// Storage-level description of a model: its table, ordered columns and
/// relationships.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Name of the Rust type, used in error messages
    pub name: &'static str,

    /// Table the model's rows live in
    pub table: &'static str,

    /// Persisted columns, in declaration order
    pub columns: Vec<Column>,

    /// Relationship members, in declaration order
    pub relations: Vec<Relation>,
}

impl Model {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// The identifier column, if the model declares one.
    pub fn id_column(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.is_id())
    }

    pub fn relation(&self, member: &str) -> Option<&Relation> {
        self.relations.iter().find(|rel| rel.member == member)
    }

    /// Column definitions for `CREATE TABLE`, joined by `, `.
    pub fn ddl(&self) -> Result<String> {
        if self.columns.is_empty() {
            return Err(crate::Error::invalid_declaration(format!(
                "`{}` has no persisted columns",
                self.name
            )));
        }

        let schema = self
            .columns
            .iter()
            .map(Column::to_ddl)
            .collect::<Vec<_>>()
            .join(", ");

        tracing::debug!(model = self.name, table = self.table, schema = %schema, "generated table schema");
        Ok(schema)
    }
}
