use quote::ToTokens;
use syn::{
    meta::ParseNestedMeta, parse_quote, punctuated::Punctuated, DeriveInput,
    Error, Field, LitStr, Path, Token, WherePredicate,
};

fn try_set_attribute<T: ToTokens>(
    attribute: &mut Option<T>,
    value: T,
    name: &'static str,
) -> Result<(), Error> {
    if attribute.is_none() {
        *attribute = Some(value);
        Ok(())
    } else {
        Err(Error::new_spanned(
            value,
            format!("{} already specified", name),
        ))
    }
}

fn try_set_flag(
    flag: &mut bool,
    meta: &ParseNestedMeta<'_>,
    name: &'static str,
) -> Result<(), Error> {
    if *flag {
        Err(meta.error(format!("{} already specified", name)))
    } else {
        *flag = true;
        Ok(())
    }
}

#[derive(Default)]
pub struct Attributes {
    pub bounds: Option<Punctuated<WherePredicate, Token![,]>>,
    pub crate_path: Option<Path>,
}

impl Attributes {
    fn parse_meta(&mut self, meta: ParseNestedMeta<'_>) -> Result<(), Error> {
        if meta.path.is_ident("bound") {
            let bounds = meta.value()?.parse::<LitStr>()?;
            let bounds = bounds.parse_with(
                Punctuated::<WherePredicate, Token![,]>::parse_terminated,
            )?;
            try_set_attribute(&mut self.bounds, bounds, "bound")
        } else if meta.path.is_ident("crate") {
            let path = meta.value()?.parse::<Path>()?;
            try_set_attribute(&mut self.crate_path, path, "crate")
        } else if meta.path.is_ident("skip")
            || meta.path.is_ident("omit_bounds")
        {
            Err(meta.error("this argument applies to fields, not structs"))
        } else {
            Err(meta.error("unrecognized transfer argument"))
        }
    }

    pub fn parse(input: &DeriveInput) -> Result<Self, Error> {
        let mut result = Self::default();

        for attr in input.attrs.iter() {
            if attr.path().is_ident("transfer") {
                attr.parse_nested_meta(|meta| result.parse_meta(meta))?;
            }
        }

        Ok(result)
    }

    pub fn crate_path(&self) -> Path {
        self.crate_path
            .clone()
            .unwrap_or_else(|| parse_quote! { ::twoway })
    }
}

#[derive(Default)]
pub struct FieldAttributes {
    pub skip: bool,
    pub omit_bounds: bool,
}

impl FieldAttributes {
    fn parse_meta(&mut self, meta: ParseNestedMeta<'_>) -> Result<(), Error> {
        if meta.path.is_ident("skip") {
            try_set_flag(&mut self.skip, &meta, "skip")
        } else if meta.path.is_ident("omit_bounds") {
            try_set_flag(&mut self.omit_bounds, &meta, "omit_bounds")
        } else {
            Err(meta.error("unrecognized transfer field argument"))
        }
    }

    pub fn parse(field: &Field) -> Result<Self, Error> {
        let mut result = Self::default();

        for attr in field.attrs.iter() {
            if attr.path().is_ident("transfer") {
                attr.parse_nested_meta(|meta| result.parse_meta(meta))?;
            }
        }

        Ok(result)
    }

    pub fn needs_bound(&self) -> bool {
        !self.skip && !self.omit_bounds
    }
}
