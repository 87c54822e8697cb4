use rowcast_core::{
    stmt::{StorageClass, Value},
    Error, Result,
};

/// A field type that maps onto a single column.
///
/// `to_value` produces the cell written for the field; `None` means the field
/// is null and the column is left out of the write. Reading goes through
/// [`read_cell`], which handles null cells before `from_cell` is reached.
pub trait Primitive: Sized {
    /// Storage class the column is declared with.
    const STORAGE: StorageClass;

    fn to_value(&self, column: &str) -> Result<Option<Value>>;

    /// Converts a non-null cell.
    fn from_cell(cell: &Value, column: &str) -> Result<Self>;

    /// Value a field takes when its cell is null.
    fn null() -> Self;
}

/// Reads `cell` into a field of type `T`, substituting `T::null()` for null cells.
pub fn read_cell<T: Primitive>(cell: &Value, column: &str) -> Result<T> {
    if cell.is_null() {
        Ok(T::null())
    } else {
        T::from_cell(cell, column)
    }
}

fn mismatch<T>(cell: &Value, column: &str) -> Error {
    // Null never reaches a mismatch, read_cell handles it first
    let storage = cell.storage_class().unwrap_or(StorageClass::Blob);
    Error::type_mismatch(column, storage, std::any::type_name::<T>())
}

macro_rules! impl_integer {
    ( $( $ty:ty ),* ) => {
        $(
            impl Primitive for $ty {
                const STORAGE: StorageClass = StorageClass::Integer;

                fn to_value(&self, _column: &str) -> Result<Option<Value>> {
                    Ok(Some(Value::Integer(i64::from(*self))))
                }

                fn from_cell(cell: &Value, column: &str) -> Result<Self> {
                    match *cell {
                        Value::Integer(v) => {
                            <$ty>::try_from(v).map_err(|_| mismatch::<$ty>(cell, column))
                        }
                        // Stored floats truncate toward zero
                        Value::Real(v) => Ok(v as $ty),
                        _ => Err(mismatch::<$ty>(cell, column)),
                    }
                }

                fn null() -> Self {
                    0
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u16, u32);

macro_rules! impl_float {
    ( $( $ty:ty ),* ) => {
        $(
            impl Primitive for $ty {
                const STORAGE: StorageClass = StorageClass::Real;

                fn to_value(&self, _column: &str) -> Result<Option<Value>> {
                    Ok(Some(Value::Real(f64::from(*self))))
                }

                fn from_cell(cell: &Value, column: &str) -> Result<Self> {
                    match *cell {
                        Value::Real(v) => Ok(v as $ty),
                        Value::Integer(v) => Ok(v as $ty),
                        _ => Err(mismatch::<$ty>(cell, column)),
                    }
                }

                fn null() -> Self {
                    0.0
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl Primitive for bool {
    const STORAGE: StorageClass = StorageClass::Integer;

    fn to_value(&self, _column: &str) -> Result<Option<Value>> {
        Ok(Some(Value::Integer(i64::from(*self))))
    }

    fn from_cell(cell: &Value, column: &str) -> Result<Self> {
        match *cell {
            Value::Integer(v) => Ok(v == 1),
            _ => Err(mismatch::<bool>(cell, column)),
        }
    }

    fn null() -> Self {
        false
    }
}

impl Primitive for String {
    const STORAGE: StorageClass = StorageClass::Text;

    fn to_value(&self, _column: &str) -> Result<Option<Value>> {
        Ok(Some(Value::Text(self.clone())))
    }

    fn from_cell(cell: &Value, column: &str) -> Result<Self> {
        match cell {
            Value::Text(v) => Ok(v.clone()),
            _ => Err(mismatch::<String>(cell, column)),
        }
    }

    fn null() -> Self {
        String::new()
    }
}

impl Primitive for char {
    const STORAGE: StorageClass = StorageClass::Text;

    fn to_value(&self, _column: &str) -> Result<Option<Value>> {
        Ok(Some(Value::Text(self.to_string())))
    }

    fn from_cell(cell: &Value, column: &str) -> Result<Self> {
        match cell {
            Value::Text(v) => Ok(v.chars().next().unwrap_or_default()),
            _ => Err(mismatch::<char>(cell, column)),
        }
    }

    fn null() -> Self {
        char::default()
    }
}

/// A single byte, stored as a one-byte blob.
impl Primitive for u8 {
    const STORAGE: StorageClass = StorageClass::Blob;

    fn to_value(&self, _column: &str) -> Result<Option<Value>> {
        Ok(Some(Value::Blob(vec![*self])))
    }

    fn from_cell(cell: &Value, column: &str) -> Result<Self> {
        match cell {
            Value::Blob(v) => Ok(v.first().copied().unwrap_or_default()),
            _ => Err(mismatch::<u8>(cell, column)),
        }
    }

    fn null() -> Self {
        0
    }
}

impl Primitive for Vec<u8> {
    const STORAGE: StorageClass = StorageClass::Blob;

    fn to_value(&self, _column: &str) -> Result<Option<Value>> {
        Ok(Some(Value::Blob(self.clone())))
    }

    fn from_cell(cell: &Value, column: &str) -> Result<Self> {
        match cell {
            Value::Blob(v) => Ok(v.clone()),
            _ => Err(mismatch::<Vec<u8>>(cell, column)),
        }
    }

    fn null() -> Self {
        Vec::new()
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const STORAGE: StorageClass = T::STORAGE;

    fn to_value(&self, column: &str) -> Result<Option<Value>> {
        match self {
            Some(v) => v.to_value(column),
            None => Ok(None),
        }
    }

    fn from_cell(cell: &Value, column: &str) -> Result<Self> {
        T::from_cell(cell, column).map(Some)
    }

    fn null() -> Self {
        None
    }
}
