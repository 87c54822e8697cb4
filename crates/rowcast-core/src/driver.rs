mod response;
pub use response::{Response, ResultSet, Row, Rows};

pub mod operation;
pub use operation::Operation;

use std::fmt::Debug;

/// A storage backend.
///
/// Each call executes exactly one statement; drivers own their locking and
/// never span a transaction across calls.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a storage operation
    fn exec(&self, op: Operation) -> crate::Result<Response>;
}

impl<T: Driver + ?Sized> Driver for std::sync::Arc<T> {
    fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op)
    }
}

impl<T: Driver + ?Sized> Driver for Box<T> {
    fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op)
    }
}
