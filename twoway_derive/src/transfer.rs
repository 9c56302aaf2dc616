use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Error};

use crate::{
    attributes::{Attributes, FieldAttributes},
    util::field_member,
};

pub fn derive(input: DeriveInput) -> Result<TokenStream, Error> {
    let attributes = Attributes::parse(&input)?;
    derive_transfer_impl(&input, &attributes)
}

fn derive_transfer_impl(
    input: &DeriveInput,
    attributes: &Attributes,
) -> Result<TokenStream, Error> {
    let twoway_path = attributes.crate_path();

    let fields = match input.data {
        Data::Struct(ref data) => &data.fields,
        Data::Enum(ref data) => {
            return Err(Error::new_spanned(
                data.enum_token,
                "Transfer cannot be derived for enums",
            ))
        }
        Data::Union(ref data) => {
            return Err(Error::new_spanned(
                data.union_token,
                "Transfer cannot be derived for unions",
            ))
        }
    };

    let mut generics = input.generics.clone();
    let where_clause = generics.make_where_clause();
    if let Some(ref bounds) = attributes.bounds {
        where_clause.predicates.extend(bounds.iter().cloned());
    }

    let mut transfers = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let field_attributes = FieldAttributes::parse(field)?;

        if field_attributes.needs_bound() {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote! { #ty: #twoway_path::Transfer });
        }

        if !field_attributes.skip {
            let member = field_member(index, field);
            transfers.push(quote! {
                #twoway_path::Transfer::transfer(&mut self.#member, engine)?;
            });
        }
    }

    // Unit structs and fully skipped structs never touch the engine.
    if transfers.is_empty() {
        transfers.push(quote! { let _ = engine; });
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #twoway_path::Transfer for #name #ty_generics
        #where_clause
        {
            fn transfer<__E: #twoway_path::Engine + ?::core::marker::Sized>(
                &mut self,
                engine: &mut __E,
            ) -> ::core::result::Result<
                (),
                <__E as #twoway_path::Engine>::Error,
            > {
                #(#transfers)*
                ::core::result::Result::Ok(())
            }
        }
    })
}
