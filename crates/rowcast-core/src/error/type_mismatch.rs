use super::Error;
use crate::stmt::StorageClass;

/// Error when a stored cell cannot be read into the field declared for it.
///
/// For example a TEXT cell read into an `i32`, or a REAL cell read into a
/// `String`.
#[derive(Debug)]
pub(super) struct TypeMismatch {
    column: Box<str>,
    storage: StorageClass,
    field_type: &'static str,
}

impl std::error::Error for TypeMismatch {}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}` of storage class {} cannot be read into a field of type `{}`",
            self.column, self.storage, self.field_type
        )
    }
}

impl Error {
    /// Creates a type mismatch error for `column`.
    pub fn type_mismatch(column: &str, storage: StorageClass, field_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatch {
            column: column.into(),
            storage,
            field_type,
        }))
    }

    /// Returns `true` if this error, or any context beneath it, is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::TypeMismatch(_)))
    }
}
