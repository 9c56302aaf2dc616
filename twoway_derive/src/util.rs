use syn::{Field, Index, Member};

pub fn field_member(index: usize, field: &Field) -> Member {
    match field.ident {
        Some(ref ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(index)),
    }
}
