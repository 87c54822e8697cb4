/// Arguments of a `#[column]` attribute.
#[derive(Debug, Default)]
pub(crate) struct Column {
    /// Column name, defaults to the field name
    pub(crate) name: Option<syn::LitStr>,

    /// True if the column is declared `NOT NULL`
    pub(crate) not_null: bool,

    /// Methods the column is read and written through instead of the field
    pub(crate) accessor: Option<Accessor>,
}

/// A getter/setter pair standing in for direct field access.
#[derive(Debug)]
pub(crate) struct Accessor {
    pub(crate) get: syn::Ident,
    pub(crate) set: syn::Ident,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        match &attr.meta {
            syn::Meta::Path(_) => Ok(Column::default()),
            _ => attr.parse_args(),
        }
    }
}

mod kw {
    syn::custom_keyword!(not_null);
    syn::custom_keyword!(get);
    syn::custom_keyword!(set);
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Column::default();
        let mut get: Option<syn::Ident> = None;
        let mut set: Option<syn::Ident> = None;

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column("name", not_null)]
        // #[column(get = method, set = method)]
        while !input.is_empty() {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(kw::not_null) {
                let token: kw::not_null = input.parse()?;
                if result.not_null {
                    return Err(syn::Error::new_spanned(token, "duplicate `not_null`"));
                }
                result.not_null = true;
            } else if lookahead.peek(kw::get) {
                let token: kw::get = input.parse()?;
                if get.is_some() {
                    return Err(syn::Error::new_spanned(token, "duplicate `get` method"));
                }
                let _eq_token: syn::Token![=] = input.parse()?;
                get = Some(input.parse()?);
            } else if lookahead.peek(kw::set) {
                let token: kw::set = input.parse()?;
                if set.is_some() {
                    return Err(syn::Error::new_spanned(token, "duplicate `set` method"));
                }
                let _eq_token: syn::Token![=] = input.parse()?;
                set = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        result.accessor = match (get, set) {
            (Some(get), Some(set)) => Some(Accessor { get, set }),
            (None, None) => None,
            (Some(get), None) => {
                return Err(syn::Error::new_spanned(
                    get,
                    "`get` requires a matching `set` method",
                ))
            }
            (None, Some(set)) => {
                return Err(syn::Error::new_spanned(
                    set,
                    "`set` requires a matching `get` method",
                ))
            }
        };

        Ok(result)
    }
}
