pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses Rowcast's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Name of the reserved identifier column.
///
/// A column qualifies as a model's identifier when it carries this name, is
/// stored as an integer and is flagged both primary key and auto-increment.
pub const ID_COLUMN: &str = "_id";
