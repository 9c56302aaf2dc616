//! Procedural macros for `twoway`.

#![deny(
    rustdoc::broken_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

mod attributes;
mod transfer;
mod util;

extern crate proc_macro;

use syn::{parse_macro_input, DeriveInput};

/// Derives `Transfer` for the labeled struct.
///
/// The generated implementation transfers every field in declaration order,
/// so encoding writes the fields back to back and decoding overwrites them
/// in the same order. Named, tuple and unit structs are supported. Enums and
/// unions are rejected.
///
/// # Attributes
///
/// Container arguments are passed with `#[transfer(...)]` on the struct:
///
/// - `bound = "..."`: Adds the given where predicates to the generated
///   implementation.
/// - `crate = path`: Chooses an alternative path to import `twoway` from.
///
/// Field arguments are passed with `#[transfer(...)]` on a field:
///
/// - `skip`: The field is neither written nor read. Decoding leaves it
///   untouched.
/// - `omit_bounds`: Suppresses the `FieldTy: Transfer` bound for the field.
///
/// # Recursive types
///
/// The macro adds a bound `FieldTy: Transfer` for each transferred field.
/// When a struct eventually contains itself, evaluating those bounds
/// overflows. Marking the recursive field with `#[transfer(omit_bounds)]`
/// breaks the cycle; `bound = "..."` can restore any bound that is still
/// needed.
#[proc_macro_derive(Transfer, attributes(transfer))]
pub fn derive_transfer(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);

    match transfer::derive(derive_input) {
        Ok(result) => result.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
