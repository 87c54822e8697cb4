use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let rowcast = &self.rowcast;
        let model_ident = &self.model.ident;
        let name = model_ident.to_string();
        let table = &self.model.table;
        let fields = self.expand_fields();
        let hydrate = self.expand_hydrate_fns();

        quote! {
            impl #rowcast::Model for #model_ident {
                #hydrate

                const NAME: &'static str = #name;
                const TABLE: &'static str = #table;

                fn fields() -> &'static #rowcast::Fields<Self> {
                    static FIELDS: #rowcast::OnceLock<#rowcast::Fields<#model_ident>> =
                        #rowcast::OnceLock::new();

                    FIELDS.get_or_init(|| {
                        #rowcast::Fields::new(
                            <Self as #rowcast::Model>::NAME,
                            <Self as #rowcast::Model>::TABLE,
                            #rowcast::Vec::from([ #( #fields, )* ]),
                        )
                    })
                }
            }
        }
    }

    /// `Builder` type plus the `builder`/`build` pair.
    ///
    /// Without `#[builder]` rows are hydrated in place, starting from every
    /// field's default.
    fn expand_hydrate_fns(&self) -> TokenStream {
        let rowcast = &self.rowcast;
        let model_ident = &self.model.ident;

        match &self.model.builder {
            Some(builder) => quote! {
                type Builder = #builder;

                fn builder() -> #builder {
                    <#builder as #rowcast::Default>::default()
                }

                fn build(builder: #builder) -> #rowcast::Result<Self> {
                    #rowcast::Ok(builder.build())
                }
            },
            None => {
                let inits = self.model.fields.iter().map(|field| {
                    let ident = &field.ident;
                    quote!(#ident: #rowcast::Default::default())
                });

                quote! {
                    type Builder = Self;

                    fn builder() -> Self {
                        #model_ident {
                            #( #inits, )*
                        }
                    }

                    fn build(builder: Self) -> #rowcast::Result<Self> {
                        #rowcast::Ok(builder)
                    }
                }
            }
        }
    }
}
