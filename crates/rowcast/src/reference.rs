use crate::{Db, Model};

use rowcast_core::{
    schema::Reference,
    stmt::{StorageClass, Target, Value},
    Error, Result, ID_COLUMN,
};

/// Writes the row held by `slot` into the referenced table and returns the
/// value stored in the reference column.
///
/// A row that already carries an identifier replaces the stored row with
/// that identifier. An empty slot stores NULL.
pub fn write_reference<C: Model>(
    db: &Db,
    owner: &'static str,
    reference: &Reference,
    slot: &mut Option<C>,
) -> Result<Value> {
    let Some(row) = slot else {
        return Ok(Value::Null);
    };

    verify_target::<C>(owner, reference)?;

    let ids = db
        .insert_into::<C>(Target::table(reference.table))
        .values([row])
        .run()?;

    Ok(ids.first().map_or(Value::Null, |id| Value::Integer(*id)))
}

/// Reads the row whose identifier is stored in `cell`.
///
/// NULL, non-positive identifiers and identifiers with no stored row all
/// resolve to `None`.
pub fn read_reference<C: Model>(
    db: &Db,
    owner: &'static str,
    reference: &Reference,
    cell: &Value,
) -> Result<Option<C>> {
    let id = match cell {
        Value::Null => return Ok(None),
        Value::Integer(id) => *id,
        _ => {
            return Err(Error::type_mismatch(
                reference.column,
                cell.storage_class().unwrap_or(StorageClass::Blob),
                std::any::type_name::<Option<C>>(),
            ))
        }
    };

    if id <= 0 {
        return Ok(None);
    }

    verify_target::<C>(owner, reference)?;

    tracing::debug!(
        table = reference.table,
        column = reference.column,
        id,
        "resolving reference"
    );

    db.select_from::<C>(Target::table(reference.table))
        .filter(&format!("{ID_COLUMN} = ?"), [id])?
        .first()
}

fn verify_target<C: Model>(owner: &'static str, reference: &Reference) -> Result<()> {
    if C::fields().id().is_none() {
        return Err(Error::invalid_declaration(format!(
            "`{owner}.{}` references `{}`, which has no `{ID_COLUMN}` identifier column",
            reference.member,
            C::NAME
        )));
    }
    Ok(())
}
