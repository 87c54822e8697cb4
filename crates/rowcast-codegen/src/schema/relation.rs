/// Arguments of a `#[has_many(...)]` or `#[has_one(...)]` attribute.
///
/// Whether the member holds one child or many is decided by its type, so
/// both attributes accept the same arguments.
#[derive(Debug)]
pub(crate) struct Relation {
    /// Table the children are stored in
    pub(crate) table: syn::LitStr,

    /// Child column holding the parent's identifier
    pub(crate) foreign_column: syn::LitStr,

    /// Child member receiving a copy of the parent
    pub(crate) inverse: Option<syn::Ident>,
}

impl Relation {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Relation> {
        let mut table = None;
        let mut foreign_column = None;
        let mut inverse = None;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                if table.is_some() {
                    return Err(meta.error("duplicate `table`"));
                }
                table = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("foreign_column") {
                if foreign_column.is_some() {
                    return Err(meta.error("duplicate `foreign_column`"));
                }
                foreign_column = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("inverse") {
                if inverse.is_some() {
                    return Err(meta.error("duplicate `inverse`"));
                }
                inverse = Some(meta.value()?.parse()?);
            } else {
                return Err(syn::Error::new_spanned(
                    &meta.path,
                    "expected `table`, `foreign_column` or `inverse`",
                ));
            }

            Ok(())
        })?;

        let Some(table) = table else {
            return Err(syn::Error::new_spanned(attr, "relation is missing `table = \"...\"`"));
        };

        let Some(foreign_column) = foreign_column else {
            return Err(syn::Error::new_spanned(
                attr,
                "relation is missing `foreign_column = \"...\"`",
            ));
        };

        Ok(Relation {
            table,
            foreign_column,
            inverse,
        })
    }
}
