use super::Primitive;

use rowcast_core::{
    stmt::{StorageClass, Value},
    Error, Result,
};
use serde::{de::DeserializeOwned, Serialize};

/// Stores any serde-serializable value as a JSON-encoded blob.
///
/// This is the fallback for field types that have no storage class of their
/// own. A null cell reads back as `T::default()`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Serialized<T>(pub T);

impl<T> Serialized<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Serialized<T> {
    fn from(value: T) -> Self {
        Serialized(value)
    }
}

impl<T> std::ops::Deref for Serialized<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Serialized<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Primitive for Serialized<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    const STORAGE: StorageClass = StorageClass::Blob;

    fn to_value(&self, column: &str) -> Result<Option<Value>> {
        let bytes =
            serde_json::to_vec(&self.0).map_err(|err| Error::serialization_failed(column, err))?;
        Ok(Some(Value::Blob(bytes)))
    }

    fn from_cell(cell: &Value, column: &str) -> Result<Self> {
        let Value::Blob(bytes) = cell else {
            return Err(Error::type_mismatch(
                column,
                cell.storage_class().unwrap_or(StorageClass::Blob),
                std::any::type_name::<T>(),
            ));
        };

        serde_json::from_slice(bytes)
            .map(Serialized)
            .map_err(|err| Error::serialization_failed(column, err))
    }

    fn null() -> Self {
        Serialized(T::default())
    }
}
