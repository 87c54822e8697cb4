/// How a relationship member holds the rows it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Holds at most one child, the first matching row.
    Scalar,

    /// Holds every matching child, loaded eagerly.
    FixedList,

    /// Holds every matching child, loaded on first access.
    DeferredList,
}

/// Links a member to the rows of another table that store this row's
/// identifier in `foreign_column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    /// Member of the owning model that holds the children
    pub member: &'static str,

    /// Table the children live in
    pub table: &'static str,

    /// Column of the child table holding the parent's identifier
    pub foreign_column: &'static str,

    /// Member of the child that receives a copy of the parent, if any
    pub inverse: Option<&'static str>,

    pub shape: Shape,
}

impl Relation {
    pub fn is_deferred(&self) -> bool {
        self.shape == Shape::DeferredList
    }
}
