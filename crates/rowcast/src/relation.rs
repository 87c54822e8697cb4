mod inverse;
pub use inverse::{inverse, Inverse, InverseRef};

mod lazy;
pub use lazy::Lazy;

mod slot;
pub use slot::{Pending, RelationSlot};

use crate::{model::CascadeMode, Db, Model};

use rowcast_core::{
    driver::operation,
    schema::Relation,
    stmt::{Filter, Target},
    Error, Result,
};

/// Reads every child stored under `parent_id`, back-assigning the parent
/// through `inverse` when the relationship declares one.
pub(crate) fn fetch_children<C: Model>(
    db: &Db,
    rel: &Relation,
    parent_id: i64,
    inverse: Option<&Inverse<C>>,
) -> Result<Vec<C>> {
    let mut children = db
        .select_from::<C>(Target::table(rel.table))
        .filter(&format!("{} = ?", rel.foreign_column), [parent_id])?
        .all()?;

    if let Some(inverse) = inverse {
        for child in &mut children {
            inverse(child);
        }
    }

    Ok(children)
}

/// Deletes every row of `rel.table` stored under `parent_id`.
///
/// This is a single scoped delete; the children's own relationships are not
/// visited.
pub fn delete_children<C: Model>(db: &Db, rel: &Relation, parent_id: i64) -> Result<u64> {
    let target = Target::table(rel.table);
    db.ensure_table::<C>(&target)?;

    db.exec(
        operation::Delete {
            target,
            filter: Filter::eq(rel.foreign_column, parent_id),
        }
        .into(),
    )?
    .rows
    .into_count()
}

/// Writes the pending children held by `slot` after their parent was written
/// under `parent_id`.
///
/// An untouched slot is skipped. An empty slot deletes the stored children.
/// Otherwise every child is stamped with the parent's identifier and inserted;
/// on update the stored children are deleted first.
pub fn cascade_slot<S: RelationSlot>(
    db: &Db,
    owner: &'static str,
    rel: &Relation,
    slot: &mut S,
    parent_id: i64,
    mode: CascadeMode,
) -> Result<()> {
    let children = match slot.pending() {
        Pending::Untouched => return Ok(()),
        Pending::Children(children) => children,
    };

    if children.is_empty() {
        if parent_id > 0 {
            delete_children::<S::Target>(db, rel, parent_id)?;
        }
        return Ok(());
    }

    if parent_id <= 0 {
        return Err(Error::cascade_failed(owner, rel.member, parent_id));
    }

    let foreign = S::Target::fields().foreign_column(rel.foreign_column)?;
    let parent = rowcast_core::stmt::Value::Integer(parent_id);
    for child in children.iter_mut() {
        (foreign.set)(child, &parent)?;
    }

    if mode == CascadeMode::Update {
        delete_children::<S::Target>(db, rel, parent_id)?;
    }

    db.insert_into::<S::Target>(Target::table(rel.table))
        .values(children.iter_mut())
        .run()?;

    Ok(())
}
