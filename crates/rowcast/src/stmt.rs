mod into_args;
pub use into_args::{IntoArg, IntoArgs};

mod primitive;
pub use primitive::{read_cell, Primitive};

mod serialized;
pub use serialized::Serialized;

pub use rowcast_core::stmt::{Filter, Join, RowValues, Sort, StorageClass, Target, Value};
