use super::Error;

/// Error when a query is malformed before it ever reaches the driver.
///
/// Typical causes are a placeholder count that does not match the argument
/// count, an empty `IN` list, a write without values, or a row position past
/// the end of the result.
#[derive(Debug)]
pub(super) struct InvalidQuery {
    message: Box<str>,
}

impl std::error::Error for InvalidQuery {}

impl core::fmt::Display for InvalidQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid query: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid query error.
    pub fn invalid_query(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidQuery(InvalidQuery {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any context beneath it, is an invalid query.
    pub fn is_invalid_query(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidQuery(_)))
    }
}
