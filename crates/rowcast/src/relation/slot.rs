use super::{fetch_children, Inverse, Lazy};
use crate::{Db, Model};

use rowcast_core::{
    schema::{Relation, Shape},
    Result,
};

/// A member type able to hold the rows of a relationship.
///
/// The shape is fixed by the member's type: `Option<C>` holds the first
/// child, `Vec<C>` every child loaded eagerly, and [`Lazy<C>`] every child
/// loaded on first access.
pub trait RelationSlot: Sized {
    /// The child model
    type Target: Model;

    const SHAPE: Shape;

    /// Resolves the member for the parent stored under `parent_id`.
    fn resolve(
        db: &Db,
        rel: &Relation,
        parent_id: i64,
        inverse: Option<Inverse<Self::Target>>,
    ) -> Result<Self>;

    /// Children to write when the parent is written.
    fn pending(&mut self) -> Pending<'_, Self::Target>;
}

/// What a relationship member asks to be written alongside its parent.
pub enum Pending<'a, C> {
    /// Never accessed since it was loaded; stored children stay as they are.
    Untouched,

    /// The complete set of children. Empty clears the relationship.
    Children(&'a mut [C]),
}

impl<C: Model> RelationSlot for Vec<C> {
    type Target = C;

    const SHAPE: Shape = Shape::FixedList;

    fn resolve(
        db: &Db,
        rel: &Relation,
        parent_id: i64,
        inverse: Option<Inverse<C>>,
    ) -> Result<Self> {
        fetch_children(db, rel, parent_id, inverse.as_ref())
    }

    fn pending(&mut self) -> Pending<'_, C> {
        Pending::Children(self.as_mut_slice())
    }
}

impl<C: Model> RelationSlot for Option<C> {
    type Target = C;

    const SHAPE: Shape = Shape::Scalar;

    fn resolve(
        db: &Db,
        rel: &Relation,
        parent_id: i64,
        inverse: Option<Inverse<C>>,
    ) -> Result<Self> {
        Ok(fetch_children(db, rel, parent_id, inverse.as_ref())?
            .into_iter()
            .next())
    }

    fn pending(&mut self) -> Pending<'_, C> {
        Pending::Children(self.as_mut_slice())
    }
}

impl<C: Model> RelationSlot for Lazy<C> {
    type Target = C;

    const SHAPE: Shape = Shape::DeferredList;

    fn resolve(
        db: &Db,
        rel: &Relation,
        parent_id: i64,
        inverse: Option<Inverse<C>>,
    ) -> Result<Self> {
        let db = db.clone();
        let rel = *rel;

        Ok(Lazy::deferred(move || {
            tracing::debug!(
                table = rel.table,
                foreign_column = rel.foreign_column,
                parent_id,
                "loading deferred relationship"
            );
            fetch_children(&db, &rel, parent_id, inverse.as_ref())
        }))
    }

    fn pending(&mut self) -> Pending<'_, C> {
        match self.loaded_mut() {
            Some(children) => Pending::Children(children.as_mut_slice()),
            None => Pending::Untouched,
        }
    }
}
