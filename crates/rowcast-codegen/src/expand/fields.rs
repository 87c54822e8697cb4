use super::Expand;
use crate::schema::{Column, Field, FieldTy, Reference, Relation};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// One `Field` entry per persisted member, in declaration order.
    pub(super) fn expand_fields(&self) -> Vec<TokenStream> {
        self.model
            .fields
            .iter()
            .filter_map(|field| match &field.kind {
                FieldTy::Column(column) => Some(self.expand_column_field(field, column)),
                FieldTy::Reference(reference) => {
                    Some(self.expand_reference_field(field, reference))
                }
                FieldTy::Relation(relation) => Some(self.expand_relation_field(field, relation)),
                FieldTy::Transient => None,
            })
            .collect()
    }

    fn expand_column_field(&self, field: &Field, column: &Column) -> TokenStream {
        let rowcast = &self.rowcast;
        let model_ident = &self.model.ident;
        let ident = &field.ident;
        let ty = &field.ty;
        let name = field.column_name();
        let member = field.member_name();

        let mut schema = quote! {
            #rowcast::Column::new(#name, <#ty as #rowcast::Primitive>::STORAGE)
        };
        if field.attrs.key.is_some() {
            schema.extend(quote!(.primary_key()));
        }
        if field.attrs.auto.is_some() {
            schema.extend(quote!(.auto_increment()));
        }
        if column.not_null {
            schema.extend(quote!(.not_null()));
        }

        let read = quote!(#rowcast::read_cell::<#ty>(cell, #name)?);

        let (get, set) = match &column.accessor {
            Some(accessor) => {
                let getter = &accessor.get;
                let setter = &accessor.set;
                (
                    quote!(#rowcast::Primitive::to_value(&row.#getter(), #name)),
                    quote!(row.#setter(#read);),
                )
            }
            None => (
                quote!(#rowcast::Primitive::to_value(&row.#ident, #name)),
                quote!(row.#ident = #read;),
            ),
        };

        let build = match &self.model.builder {
            Some(builder) => quote! {
                |builder: &mut #builder, cell: &#rowcast::Value| {
                    builder.#ident(#read);
                    #rowcast::Ok(())
                }
            },
            None => quote! {
                |row: &mut #model_ident, cell: &#rowcast::Value| {
                    #set
                    #rowcast::Ok(())
                }
            },
        };

        quote! {
            #rowcast::Field::Column(#rowcast::ColumnField {
                column: #schema,
                member: #member,
                get: |row: &#model_ident| #get,
                set: |row: &mut #model_ident, cell: &#rowcast::Value| {
                    #set
                    #rowcast::Ok(())
                },
                build: #build,
            })
        }
    }

    fn expand_reference_field(&self, field: &Field, reference: &Reference) -> TokenStream {
        let rowcast = &self.rowcast;
        let model_ident = &self.model.ident;
        let ident = &field.ident;
        let name = field.column_name();
        let member = field.member_name();
        let table = &reference.table;
        let owner = quote!(<#model_ident as #rowcast::Model>::NAME);

        let read = quote!(#rowcast::read_reference(db, #owner, reference, cell)?);

        let read = match &self.model.builder {
            Some(builder) => quote! {
                |db: &#rowcast::Db,
                 reference: &#rowcast::Reference,
                 builder: &mut #builder,
                 cell: &#rowcast::Value| {
                    builder.#ident(#read);
                    #rowcast::Ok(())
                }
            },
            None => quote! {
                |db: &#rowcast::Db,
                 reference: &#rowcast::Reference,
                 row: &mut #model_ident,
                 cell: &#rowcast::Value| {
                    row.#ident = #read;
                    #rowcast::Ok(())
                }
            },
        };

        quote! {
            #rowcast::Field::Reference(#rowcast::ReferenceField {
                column: #rowcast::Column::new(#name, #rowcast::StorageClass::Integer),
                reference: #rowcast::Reference {
                    member: #member,
                    table: #table,
                    column: #name,
                },
                write: |db: &#rowcast::Db,
                        reference: &#rowcast::Reference,
                        row: &mut #model_ident| {
                    #rowcast::write_reference(db, #owner, reference, &mut row.#ident)
                },
                read: #read,
            })
        }
    }

    fn expand_relation_field(&self, field: &Field, relation: &Relation) -> TokenStream {
        let rowcast = &self.rowcast;
        let model_ident = &self.model.ident;
        let ident = &field.ident;
        let ty = &field.ty;
        let member = field.member_name();
        let table = &relation.table;
        let foreign_column = &relation.foreign_column;
        let target = quote!(<#ty as #rowcast::RelationSlot>::Target);

        let (inverse_name, inverse) = match &relation.inverse {
            Some(inverse) => {
                let name = inverse.to_string();
                (
                    quote!(#rowcast::Option::Some(#name)),
                    quote! {
                        #rowcast::Option::Some(#rowcast::inverse(
                            #rowcast::Clone::clone(&*row),
                            |child: &mut #target, parent: #model_ident| {
                                #rowcast::InverseRef::assign(&mut child.#inverse, parent)
                            },
                        ))
                    },
                )
            }
            None => (
                quote!(#rowcast::Option::None),
                quote!(#rowcast::Option::None),
            ),
        };

        quote! {
            #rowcast::Field::Relation(#rowcast::RelationField {
                relation: #rowcast::Relation {
                    member: #member,
                    table: #table,
                    foreign_column: #foreign_column,
                    inverse: #inverse_name,
                    shape: <#ty as #rowcast::RelationSlot>::SHAPE,
                },
                load: |db: &#rowcast::Db,
                       rel: &#rowcast::Relation,
                       row: &mut #model_ident,
                       id: i64| {
                    let inverse = #inverse;
                    row.#ident = <#ty as #rowcast::RelationSlot>::resolve(db, rel, id, inverse)?;
                    #rowcast::Ok(())
                },
                cascade: |db: &#rowcast::Db,
                          rel: &#rowcast::Relation,
                          row: &mut #model_ident,
                          id: i64,
                          mode: #rowcast::CascadeMode| {
                    #rowcast::cascade_slot(
                        db,
                        <#model_ident as #rowcast::Model>::NAME,
                        rel,
                        &mut row.#ident,
                        id,
                        mode,
                    )
                },
                delete: |db: &#rowcast::Db, rel: &#rowcast::Relation, id: i64| {
                    #rowcast::delete_children::<#target>(db, rel, id)
                },
            })
        }
    }
}
