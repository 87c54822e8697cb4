mod column;
pub use column::Column;

mod model;
pub use model::Model;

mod reference;
pub use reference::Reference;

mod relation;
pub use relation::{Relation, Shape};

mod verify;
