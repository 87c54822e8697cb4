mod filter;
pub use filter::{Filter, Join};

mod row_values;
pub use row_values::RowValues;

mod sort;
pub use sort::Sort;

mod storage_class;
pub use storage_class::StorageClass;

mod target;
pub use target::Target;

mod value;
pub use value::Value;
