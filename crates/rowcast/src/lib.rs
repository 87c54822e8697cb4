pub mod db;
pub use db::Db;

mod dispatch;
pub use dispatch::{completion_context, CompletionQueue, Dispatcher};

mod hydrate;

mod model;
pub use model::{CascadeMode, ColumnField, Field, Fields, Model, ReferenceField, RelationField};

mod reference;

pub mod query;
pub use query::Query;

pub mod relation;
pub use relation::{InverseRef, Lazy, RelationSlot};

pub mod stmt;
pub use stmt::{IntoArg, IntoArgs, Primitive, Serialized};

pub use rowcast_core::{driver, schema, Driver, Error, Result, ID_COLUMN};

pub use rowcast_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        model::{CascadeMode, ColumnField, Field, Fields, ReferenceField, RelationField},
        reference::{read_reference, write_reference},
        relation::{cascade_slot, delete_children, inverse, Inverse, InverseRef, RelationSlot},
        stmt::{read_cell, Primitive},
        Db, Error, Model, Result,
    };
    pub use rowcast_core::{
        schema::{Column, Reference, Relation, Shape},
        stmt::{StorageClass, Value},
    };
    pub use std::{
        clone::Clone,
        default::Default,
        option::Option,
        result::Result::Ok,
        sync::OnceLock,
        vec::Vec,
    };
}
