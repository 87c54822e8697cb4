use super::Error;

/// Error when children cannot be written or cleared along with their parent.
///
/// Raised when a relation carries pending children but the parent row has no
/// persisted identifier to stamp into the child's foreign column.
#[derive(Debug)]
pub(super) struct CascadeFailed {
    model: Box<str>,
    member: Box<str>,
    parent_id: i64,
}

impl std::error::Error for CascadeFailed {}

impl core::fmt::Display for CascadeFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot cascade `{}.{}`: parent identifier {} is not persisted",
            self.model, self.member, self.parent_id
        )
    }
}

impl Error {
    /// Creates a cascade failure for the relation `member` of `model`.
    pub fn cascade_failed(model: &str, member: &str, parent_id: i64) -> Error {
        Error::from(super::ErrorKind::CascadeFailed(CascadeFailed {
            model: model.into(),
            member: member.into(),
            parent_id,
        }))
    }

    /// Returns `true` if this error, or any context beneath it, is a cascade failure.
    pub fn is_cascade_failed(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::CascadeFailed(_)))
    }
}
