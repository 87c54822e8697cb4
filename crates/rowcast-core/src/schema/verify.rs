use super::Model;
use crate::{stmt::StorageClass, Error, Result, ID_COLUMN};

use std::collections::HashSet;

struct Verify<'a> {
    model: &'a Model,
}

impl Model {
    /// Checks that the declaration can be mapped onto a table.
    pub fn verify(&self) -> Result<()> {
        Verify { model: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_has_columns()?;
        self.verify_column_names_are_unique()?;
        self.verify_id_column()?;
        self.verify_relations()?;
        Ok(())
    }

    fn verify_has_columns(&self) -> Result<()> {
        if self.model.columns.is_empty() {
            return Err(self.error("declares no persisted columns"));
        }
        Ok(())
    }

    fn verify_column_names_are_unique(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for column in &self.model.columns {
            if !seen.insert(column.name) {
                return Err(self.error(format!("declares column `{}` twice", column.name)));
            }
        }
        Ok(())
    }

    fn verify_id_column(&self) -> Result<()> {
        let Some(column) = self.model.column(ID_COLUMN) else {
            return Ok(());
        };

        if column.storage != StorageClass::Integer {
            return Err(self.error(format!(
                "`{ID_COLUMN}` must be stored as INTEGER, not {}",
                column.storage
            )));
        }

        if !column.primary_key || !column.auto_increment {
            return Err(self.error(format!(
                "`{ID_COLUMN}` must be both primary key and auto-increment"
            )));
        }

        Ok(())
    }

    fn verify_relations(&self) -> Result<()> {
        if self.model.relations.is_empty() {
            return Ok(());
        }

        if self.model.id_column().is_none() {
            return Err(self.error(format!(
                "declares relationships but has no `{ID_COLUMN}` identifier column"
            )));
        }

        for rel in &self.model.relations {
            if rel.table.is_empty() || rel.foreign_column.is_empty() {
                return Err(self.error(format!(
                    "relationship `{}` needs both a target table and a foreign column",
                    rel.member
                )));
            }
        }

        Ok(())
    }

    fn error(&self, message: impl core::fmt::Display) -> Error {
        Error::invalid_declaration(format!("`{}` {message}", self.model.name))
    }
}
