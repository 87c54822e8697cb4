/// Arguments of a `#[reference(...)]` attribute.
#[derive(Debug)]
pub(crate) struct Reference {
    /// Table the referenced row is stored in
    pub(crate) table: syn::LitStr,

    /// Column holding the referenced identifier. Defaults to the field name.
    pub(crate) column: Option<syn::LitStr>,
}

impl Reference {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Reference> {
        let mut table: Option<syn::LitStr> = None;
        let mut column = None;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                if table.is_some() {
                    return Err(meta.error("duplicate `table`"));
                }
                table = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("column") {
                if column.is_some() {
                    return Err(meta.error("duplicate `column`"));
                }
                column = Some(meta.value()?.parse()?);
            } else {
                return Err(syn::Error::new_spanned(
                    &meta.path,
                    "expected `table` or `column`",
                ));
            }

            Ok(())
        })?;

        let Some(table) = table else {
            return Err(syn::Error::new_spanned(attr, "reference is missing `table = \"...\"`"));
        };

        if table.value().is_empty() {
            return Err(syn::Error::new_spanned(&table, "reference table must not be empty"));
        }

        Ok(Reference { table, column })
    }
}
