mod choice;

use syn::{parse_macro_input, Item};

/// Implements `EnumChoice` and value semantics for an enum with unit variants.
///
/// Enum attributes, under `#[enum_choice(...)]`:
/// - `base = "Type"`: type of the member values. Without it, values are `enum_choice::Value`.
/// - `process_name = "path::to::function"`: name normalization hook used by lookups.
///
/// Variant attributes, under `#[choice(...)]`:
/// - `value = <literal>`: the member's value. Falls back to the variant's discriminant.
/// - `label = <literal>`: the member's label, in the literal's string form. Falls back to the
///   variant name in title case.
///
/// Variants with fields, variants with neither a value nor a discriminant, and values that don't
/// fit the base type are compile errors. Examples of each are on the `EnumChoice` trait in
/// `enum_choice`.
#[proc_macro_derive(EnumChoice, attributes(enum_choice, choice))]
pub fn derive_enum_choice(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(item as Item);

    choice::derive_enum_choice_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
