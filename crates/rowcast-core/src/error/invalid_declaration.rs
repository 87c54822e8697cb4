use super::Error;

/// Error when a model declaration cannot be turned into a table.
///
/// This occurs when:
/// - A model declares no columns at all
/// - The identifier column is not an auto-increment integer primary key
/// - A relation's foreign column does not exist or is not an integer
///
/// These are raised when a model is registered, before any row is touched.
#[derive(Debug)]
pub(super) struct InvalidDeclaration {
    message: Box<str>,
}

impl std::error::Error for InvalidDeclaration {}

impl core::fmt::Display for InvalidDeclaration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid declaration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid declaration error.
    pub fn invalid_declaration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDeclaration(InvalidDeclaration {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any context beneath it, is an invalid declaration.
    pub fn is_invalid_declaration(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidDeclaration(_)))
    }
}
