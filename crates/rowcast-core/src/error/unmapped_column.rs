use super::Error;

/// Error when a result column has no field or setter on the target model.
#[derive(Debug)]
pub(super) struct UnmappedColumn {
    column: Box<str>,
    model: &'static str,
}

impl std::error::Error for UnmappedColumn {}

impl core::fmt::Display for UnmappedColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unable to map column `{}` to a field of `{}`",
            self.column, self.model
        )
    }
}

impl Error {
    /// Creates an unmapped column error.
    pub fn unmapped_column(column: &str, model: &'static str) -> Error {
        Error::from(super::ErrorKind::UnmappedColumn(UnmappedColumn {
            column: column.into(),
            model,
        }))
    }

    /// Returns `true` if this error, or any context beneath it, is an unmapped column.
    pub fn is_unmapped_column(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::UnmappedColumn(_)))
    }
}
