use super::{name, ErrorSet, Field, FieldTy, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Table the model is stored in
    pub(crate) table: String,

    /// Type rows are hydrated through
    pub(crate) builder: Option<syn::Type>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in &node.named {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        if !fields
            .iter()
            .any(|field| matches!(field.kind, FieldTy::Column(_)))
        {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "model must declare at least one #[column] field",
            ));
        }

        let mut seen = vec![];
        for field in fields.iter().filter(|field| field.has_column()) {
            let name = field.column_name();
            if seen.iter().any(|other: &String| other.eq_ignore_ascii_case(&name)) {
                return Err(syn::Error::new_spanned(
                    &field.ident,
                    format!("column `{name}` is declared more than once"),
                ));
            }
            seen.push(name);
        }

        let table = match &model_attr.table {
            Some(lit) => lit.value(),
            None => name::default_table(&ast.ident),
        };

        Ok(Model {
            ident: ast.ident.clone(),
            fields,
            table,
            builder: model_attr.builder,
        })
    }
}
