use super::StorageClass;

/// A single cell, either written to or read from storage.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    #[default]
    Null,

    /// Signed 64-bit integer
    Integer(i64),

    /// 64-bit float
    Real(f64),

    /// UTF-8 text
    Text(String),

    /// Raw bytes
    Blob(Vec<u8>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Storage class of the cell, or `None` for null.
    pub const fn storage_class(&self) -> Option<StorageClass> {
        match self {
            Self::Null => None,
            Self::Integer(_) => Some(StorageClass::Integer),
            Self::Real(_) => Some(StorageClass::Real),
            Self::Text(_) => Some(StorageClass::Text),
            Self::Blob(_) => Some(StorageClass::Blob),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match *self {
            Self::Real(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Self::Blob(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::Integer(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::Integer(src.into())
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Integer(src as i64)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::Real(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::Text(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::Text(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Blob(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        src.map(Into::into).unwrap_or(Value::Null)
    }
}
