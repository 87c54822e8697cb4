use super::{Column, ErrorSet, Reference, Relation};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// How the field is persisted
    pub(crate) kind: FieldTy,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Set if the field is annotated with `#[auto]`
    pub(crate) auto: Option<syn::Attribute>,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// Stored in a column of the model's table
    Column(Column),

    /// Stored in another table, linked through an identifier column
    Reference(Reference),

    /// Resolved from the rows of another table
    Relation(Relation),

    /// Not persisted
    Transient,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();
        let mut column: Option<(Column, &syn::Attribute)> = None;
        let mut relation: Option<(Relation, &syn::Attribute)> = None;
        let mut reference: Option<(Reference, &syn::Attribute)> = None;

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                if attrs.auto.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[auto] attribute"));
                } else {
                    attrs.auto = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(parsed) => column = Some((parsed, attr)),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("reference") {
                if reference.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[reference] attribute",
                    ));
                } else {
                    match Reference::from_ast(attr) {
                        Ok(parsed) => reference = Some((parsed, attr)),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("has_many") || attr.path().is_ident("has_one") {
                if relation.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field has more than one relation attribute",
                    ));
                } else {
                    match Relation::from_ast(attr) {
                        Ok(parsed) => relation = Some((parsed, attr)),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        if let Some((reference, attr)) = reference {
            if column.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "a field cannot be both a column and a reference",
                ));
            }
            if relation.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "a field cannot be both a relation and a reference",
                ));
            }
            if let Some(key) = attrs.key.as_ref().or(attrs.auto.as_ref()) {
                return Err(syn::Error::new_spanned(
                    key,
                    "reference fields cannot carry #[key] or #[auto]",
                ));
            }

            return Ok(Field {
                ident: ident.clone(),
                ty: field.ty.clone(),
                attrs,
                kind: FieldTy::Reference(reference),
            });
        }

        let kind = match (column, relation) {
            (Some(_), Some((_, attr))) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "a field cannot be both a column and a relation",
                ));
            }
            (None, Some((relation, attr))) => {
                if let Some(key) = attrs.key.as_ref().or(attrs.auto.as_ref()) {
                    return Err(syn::Error::new_spanned(
                        key,
                        "relation fields cannot carry #[key] or #[auto]",
                    ));
                }

                if relation.table.value().is_empty() {
                    return Err(syn::Error::new_spanned(attr, "relation table must not be empty"));
                }

                FieldTy::Relation(relation)
            }
            (Some((column, _)), None) => FieldTy::Column(column),
            // `#[key]` and `#[auto]` only make sense on a column
            (None, None) if attrs.key.is_some() || attrs.auto.is_some() => {
                FieldTy::Column(Column::default())
            }
            (None, None) => FieldTy::Transient,
        };

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
            kind,
        })
    }

    /// The column the field is stored in, if any.
    pub(crate) fn column(&self) -> Option<&Column> {
        match &self.kind {
            FieldTy::Column(column) => Some(column),
            _ => None,
        }
    }

    /// Returns `true` if the field occupies a column of the model's table.
    pub(crate) fn has_column(&self) -> bool {
        matches!(self.kind, FieldTy::Column(_) | FieldTy::Reference(_))
    }

    /// Column name, either declared or taken from the field name.
    pub(crate) fn column_name(&self) -> String {
        let declared = match &self.kind {
            FieldTy::Reference(reference) => reference.column.as_ref(),
            _ => self.column().and_then(|column| column.name.as_ref()),
        };

        match declared {
            Some(name) => name.value(),
            None => self.ident.unraw().to_string(),
        }
    }

    /// Member name as written in the struct.
    pub(crate) fn member_name(&self) -> String {
        self.ident.unraw().to_string()
    }
}
