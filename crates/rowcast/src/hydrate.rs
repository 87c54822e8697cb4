use crate::{Db, Model};

use rowcast_core::{driver::Row, Error, Result};

/// Builds an `M` from one result row.
///
/// Every column in the row must map onto a column or reference accessor of
/// `M`. Referenced rows are read as their column is reached; relationship
/// members are resolved once the row is built, using the identifier it was
/// read with.
pub(crate) fn hydrate<M: Model>(db: &Db, row: Row<'_>) -> Result<M> {
    let fields = M::fields();
    let mut builder = M::builder();

    for (name, cell) in row.cells() {
        if let Some(field) = fields.column(name) {
            (field.build)(&mut builder, cell)?;
        } else if let Some(field) = fields.reference(name) {
            (field.read)(db, &field.reference, &mut builder, cell)?;
        } else {
            return Err(Error::unmapped_column(name, M::NAME));
        }
    }

    let mut instance = M::build(builder)?;
    fields.load_relations(db, &mut instance)?;
    Ok(instance)
}
