use crate::Db;

use rowcast_core::{
    schema::{self, Column, Reference, Relation},
    stmt::{RowValues, StorageClass, Value},
    Error, Result,
};

/// A row type that can be written to and read from a table.
///
/// Implemented by `#[derive(Model)]`; the derive generates the ordered field
/// accessor table returned by [`Model::fields`].
pub trait Model: Sized + Send + 'static {
    /// Type rows are assembled in while being hydrated. `Self` unless the
    /// model declares `#[builder(...)]`.
    type Builder;

    /// Name of the Rust type
    const NAME: &'static str;

    /// Default table the model is stored in
    const TABLE: &'static str;

    /// Persisted members, in declaration order.
    fn fields() -> &'static Fields<Self>;

    /// Starts hydrating a new row.
    fn builder() -> Self::Builder;

    /// Finishes hydrating a row.
    fn build(builder: Self::Builder) -> Result<Self>;
}

/// Whether a cascade follows an insert or an update of its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeMode {
    Insert,
    Update,
}

/// A uniform handle over one persisted member of `M`.
pub enum Field<M: Model> {
    Column(ColumnField<M>),
    Reference(ReferenceField<M>),
    Relation(RelationField<M>),
}

/// Accessor for a column-backed member, either a field or a getter/setter pair.
pub struct ColumnField<M: Model> {
    pub column: Column,

    /// Name of the Rust member
    pub member: &'static str,

    /// Reads the member for writing. `None` is a null value.
    pub get: fn(&M) -> Result<Option<Value>>,

    /// Assigns the member on a built row.
    pub set: fn(&mut M, &Value) -> Result<()>,

    /// Assigns the member on a row still being hydrated.
    pub build: fn(&mut M::Builder, &Value) -> Result<()>,
}

/// Accessor for a member stored in another table and linked by identifier.
pub struct ReferenceField<M: Model> {
    /// INTEGER column holding the referenced row's identifier
    pub column: Column,

    pub reference: Reference,

    /// Writes the referenced row and returns the value stored in the column.
    pub write: fn(&Db, &Reference, &mut M) -> Result<Value>,

    /// Resolves the referenced row on a row still being hydrated.
    pub read: fn(&Db, &Reference, &mut M::Builder, &Value) -> Result<()>,
}

/// Accessor for a relationship member.
pub struct RelationField<M: Model> {
    pub relation: Relation,

    /// Populates the member from the child table.
    pub load: fn(&Db, &Relation, &mut M, i64) -> Result<()>,

    /// Writes the member's children after the parent row was written.
    pub cascade: fn(&Db, &Relation, &mut M, i64, CascadeMode) -> Result<()>,

    /// Deletes every child row stored under a parent identifier.
    pub delete: fn(&Db, &Relation, i64) -> Result<u64>,
}

/// The resolved field accessor table of a model.
pub struct Fields<M: Model> {
    schema: schema::Model,
    fields: Vec<Field<M>>,
}

impl<M: Model> ColumnField<M> {
    pub fn is_id(&self) -> bool {
        self.column.is_id()
    }
}

impl<M: Model> Fields<M> {
    pub fn new(name: &'static str, table: &'static str, fields: Vec<Field<M>>) -> Fields<M> {
        let mut columns = vec![];
        let mut relations = vec![];

        for field in &fields {
            match field {
                Field::Column(field) => columns.push(field.column),
                Field::Reference(field) => columns.push(field.column),
                Field::Relation(field) => relations.push(field.relation),
            }
        }

        Fields {
            schema: schema::Model {
                name,
                table,
                columns,
                relations,
            },
            fields,
        }
    }

    /// Storage-level description of the model.
    pub fn schema(&self) -> &schema::Model {
        &self.schema
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field<M>> + '_ {
        self.fields.iter()
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnField<M>> + '_ {
        self.fields.iter().filter_map(|field| match field {
            Field::Column(field) => Some(field),
            _ => None,
        })
    }

    pub fn references(&self) -> impl Iterator<Item = &ReferenceField<M>> + '_ {
        self.fields.iter().filter_map(|field| match field {
            Field::Reference(field) => Some(field),
            _ => None,
        })
    }

    pub fn relations(&self) -> impl Iterator<Item = &RelationField<M>> + '_ {
        self.fields.iter().filter_map(|field| match field {
            Field::Relation(field) => Some(field),
            _ => None,
        })
    }

    pub fn has_relations(&self) -> bool {
        !self.schema.relations.is_empty()
    }

    /// Column accessor for `name`. Column names compare case-insensitively.
    pub fn column(&self, name: &str) -> Option<&ColumnField<M>> {
        self.columns()
            .find(|field| field.column.name.eq_ignore_ascii_case(name))
    }

    /// Reference accessor stored in column `name`, compared case-insensitively.
    pub fn reference(&self, name: &str) -> Option<&ReferenceField<M>> {
        self.references()
            .find(|field| field.column.name.eq_ignore_ascii_case(name))
    }

    /// The identifier accessor, if the model declares one.
    pub fn id(&self) -> Option<&ColumnField<M>> {
        self.columns().find(|field| field.is_id())
    }

    /// Every column name, reference columns included, in declaration order.
    pub fn column_names(&self) -> Vec<String> {
        self.schema
            .columns
            .iter()
            .map(|column| column.name.to_string())
            .collect()
    }

    /// Current identifier of `row`; `0` when unset or when the model has none.
    pub fn id_of(&self, row: &M) -> Result<i64> {
        let Some(field) = self.id() else {
            return Ok(0);
        };

        match (field.get)(row)? {
            Some(Value::Integer(id)) => Ok(id),
            _ => Ok(0),
        }
    }

    pub fn set_id(&self, row: &mut M, id: i64) -> Result<()> {
        match self.id() {
            Some(field) => (field.set)(row, &Value::Integer(id)),
            None => Ok(()),
        }
    }

    /// Converts `row` into the values written for it.
    ///
    /// Skips columns outside a non-empty `projection`, null values and
    /// auto-increment columns that hold no assigned value yet. Reference and
    /// relationship members never contribute.
    pub fn to_row_values(&self, row: &M, projection: &[String]) -> Result<RowValues> {
        let mut values = RowValues::new();

        for field in self.columns() {
            if projected(field.column.name, projection) {
                push_column(&mut values, field, row)?;
            }
        }

        Ok(values)
    }

    /// Like [`Fields::to_row_values`], also writing every referenced row and
    /// storing its identifier in the reference column.
    pub(crate) fn write_values(
        &self,
        db: &Db,
        row: &mut M,
        projection: &[String],
    ) -> Result<RowValues> {
        let mut values = RowValues::new();

        for field in &self.fields {
            match field {
                Field::Column(field) if projected(field.column.name, projection) => {
                    push_column(&mut values, field, row)?;
                }
                Field::Reference(field) if projected(field.column.name, projection) => {
                    // A cleared member writes NULL
                    let value = (field.write)(db, &field.reference, row)?;
                    values.insert(field.column.name, value);
                }
                _ => {}
            }
        }

        Ok(values)
    }

    /// Runs every relationship cascade of `row` after it was written under `id`.
    pub(crate) fn cascade(&self, db: &Db, row: &mut M, id: i64, mode: CascadeMode) -> Result<()> {
        for field in self.relations() {
            (field.cascade)(db, &field.relation, row, id, mode)?;
        }
        Ok(())
    }

    /// Populates every relationship member of a freshly built row.
    pub(crate) fn load_relations(&self, db: &Db, row: &mut M) -> Result<()> {
        if !self.has_relations() {
            return Ok(());
        }

        // Rows read without their identifier have no children to find
        let id = self.id_of(row)?;
        if id <= 0 {
            return Ok(());
        }

        for field in self.relations() {
            (field.load)(db, &field.relation, row, id)?;
        }
        Ok(())
    }

    /// Accessor for a child's foreign column, which must hold an integer.
    pub(crate) fn foreign_column(&self, name: &str) -> Result<&ColumnField<M>> {
        let field = self.column(name).ok_or_else(|| {
            Error::invalid_declaration(format!(
                "`{}` has no column `{name}` to hold its parent's identifier",
                M::NAME
            ))
        })?;

        if field.column.storage != StorageClass::Integer {
            return Err(Error::invalid_declaration(format!(
                "foreign column `{}.{name}` must be stored as INTEGER",
                M::NAME
            )));
        }

        Ok(field)
    }
}

fn projected(name: &str, projection: &[String]) -> bool {
    projection.is_empty() || projection.iter().any(|p| p.eq_ignore_ascii_case(name))
}

/// Skips null values and auto-increment columns that hold no assigned value yet.
fn push_column<M: Model>(values: &mut RowValues, field: &ColumnField<M>, row: &M) -> Result<()> {
    let Some(value) = (field.get)(row)? else {
        return Ok(());
    };

    if field.column.auto_increment && matches!(value, Value::Integer(v) if v <= 0) {
        return Ok(());
    }

    values.insert(field.column.name, value);
    Ok(())
}

impl<M: Model> core::fmt::Debug for Fields<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Fields").field("schema", &self.schema).finish()
    }
}

impl<M: Model> core::fmt::Debug for Field<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Field::Column(field) => core::fmt::Debug::fmt(field, f),
            Field::Reference(field) => core::fmt::Debug::fmt(field, f),
            Field::Relation(field) => core::fmt::Debug::fmt(field, f),
        }
    }
}

impl<M: Model> core::fmt::Debug for ColumnField<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ColumnField")
            .field("column", &self.column)
            .field("member", &self.member)
            .finish_non_exhaustive()
    }
}

impl<M: Model> core::fmt::Debug for ReferenceField<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ReferenceField")
            .field("column", &self.column)
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}

impl<M: Model> core::fmt::Debug for RelationField<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("RelationField")
            .field("relation", &self.relation)
            .finish_non_exhaustive()
    }
}
