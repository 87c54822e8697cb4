use super::Error;

/// Error when a field value cannot be encoded into, or decoded from, a blob.
#[derive(Debug)]
pub(super) struct SerializationFailed {
    column: Box<str>,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for SerializationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for SerializationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to serialize column `{}`: {}", self.column, self.inner)
    }
}

impl Error {
    /// Creates a serialization error for `column`.
    pub fn serialization_failed(
        column: &str,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::SerializationFailed(SerializationFailed {
            column: column.into(),
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error, or any context beneath it, is a serialization failure.
    pub fn is_serialization_failed(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::SerializationFailed(_)))
    }
}
