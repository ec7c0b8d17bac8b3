use darling::FromAttributes;
use heck::ToTitleCase;
use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::{Expr, Fields, Item, ItemEnum, Lit, LitStr, Path, Type, Variant};

pub fn derive_enum_choice_impl(item: Item) -> syn::Result<TokenStream> {
    match item {
        Item::Enum(item) => for_enum(item),
        _ => Err(syn::Error::new_spanned(
            &item,
            "EnumChoice can only be derived for enums",
        )),
    }
}

#[derive(Debug, FromAttributes)]
#[darling(attributes(enum_choice))]
struct EnumChoiceAttrs {
    #[darling(default)]
    base: Option<Type>,
    #[darling(default)]
    process_name: Option<Path>,
}

#[derive(Debug, FromAttributes)]
#[darling(attributes(choice))]
struct ChoiceAttrs {
    #[darling(default)]
    value: Option<Lit>,
    #[darling(default)]
    label: Option<Lit>,
}

struct Member {
    ident: Ident,
    name: LitStr,
    value: TokenStream,
    label: LitStr,
}

fn for_enum(item: ItemEnum) -> syn::Result<TokenStream> {
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "EnumChoice cannot be derived for generic enums",
        ));
    }

    let EnumChoiceAttrs { base, process_name } = EnumChoiceAttrs::from_attributes(&item.attrs)?;
    // Naming the dynamic value type explicitly is the same as leaving the base out.
    let base = base.filter(|ty| !is_dynamic_value(ty));

    let members = item
        .variants
        .iter()
        .map(|variant| member(variant, base.as_ref()))
        .collect::<syn::Result<Vec<_>>>()?;

    let type_name = &item.ident;
    let type_name_str = LitStr::new(&type_name.to_string(), type_name.span());
    let value_type = base
        .as_ref()
        .map(ToTokens::to_token_stream)
        .unwrap_or_else(|| quote! { ::enum_choice::Value });

    let idents: Vec<_> = members.iter().map(|member| &member.ident).collect();
    let names: Vec<_> = members.iter().map(|member| &member.name).collect();
    let values: Vec<_> = members.iter().map(|member| &member.value).collect();
    let labels: Vec<_> = members.iter().map(|member| &member.label).collect();

    let process_name = process_name.map(|path| {
        quote! {
            fn process_name(name: &str) -> ::std::borrow::Cow<'_, str> {
                #path(name)
            }
        }
    });

    // Members compare against their own value type, plus whatever that type usefully compares
    // against: the dynamic value for typed bases, and the common primitives for dynamic ones.
    let comparisons: TokenStream = if base.is_some() {
        [
            comparison(type_name, &value_type, quote! { value }),
            comparison(
                type_name,
                &quote! { ::enum_choice::Value },
                quote! { ::enum_choice::ChoiceValue::to_value(&value) },
            ),
        ]
        .into_iter()
        .collect()
    } else {
        [
            quote! { ::enum_choice::Value },
            quote! { i64 },
            quote! { f64 },
            quote! { bool },
            quote! { &'static str },
        ]
        .iter()
        .map(|target| comparison(type_name, target, quote! { value }))
        .collect()
    };

    Ok(quote! {
        impl ::enum_choice::EnumChoice for #type_name {
            type Value = #value_type;

            const NAME: &'static str = #type_name_str;
            const MEMBERS: &'static [Self] = &[#(Self::#idents),*];

            fn name(self) -> &'static str {
                match self {
                    #(Self::#idents => #names,)*
                }
            }

            fn value(self) -> Self::Value {
                match self {
                    #(Self::#idents => #values,)*
                }
            }

            fn label(self) -> &'static str {
                match self {
                    #(Self::#idents => #labels,)*
                }
            }

            #process_name
        }

        impl ::std::cmp::PartialEq for #type_name {
            fn eq(&self, other: &Self) -> bool {
                ::enum_choice::EnumChoice::value(*self) == ::enum_choice::EnumChoice::value(*other)
            }
        }

        impl ::std::cmp::Eq for #type_name {}

        impl ::std::cmp::PartialOrd for #type_name {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::cmp::PartialOrd::partial_cmp(
                    &::enum_choice::EnumChoice::value(*self),
                    &::enum_choice::EnumChoice::value(*other),
                )
            }
        }

        impl ::std::hash::Hash for #type_name {
            fn hash<H>(&self, state: &mut H)
            where
                H: ::std::hash::Hasher,
            {
                ::enum_choice::ChoiceValue::hash_value(&::enum_choice::EnumChoice::value(*self), state)
            }
        }

        impl ::std::fmt::Display for #type_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&::enum_choice::EnumChoice::value(*self), f)
            }
        }

        impl ::std::convert::From<#type_name> for #value_type {
            fn from(member: #type_name) -> Self {
                ::enum_choice::EnumChoice::value(member)
            }
        }

        #comparisons
    })
}

/// `PartialEq` and `PartialOrd` between the enum and `target`, in both directions. `lhs` turns
/// the member's `value` into something comparable with `target`.
fn comparison(type_name: &Ident, target: &TokenStream, lhs: TokenStream) -> TokenStream {
    quote! {
        impl ::std::cmp::PartialEq<#target> for #type_name {
            fn eq(&self, other: &#target) -> bool {
                let value = ::enum_choice::EnumChoice::value(*self);
                #lhs == *other
            }
        }

        impl ::std::cmp::PartialEq<#type_name> for #target {
            fn eq(&self, other: &#type_name) -> bool {
                other == self
            }
        }

        impl ::std::cmp::PartialOrd<#target> for #type_name {
            fn partial_cmp(&self, other: &#target) -> ::std::option::Option<::std::cmp::Ordering> {
                let value = ::enum_choice::EnumChoice::value(*self);
                ::std::cmp::PartialOrd::partial_cmp(&#lhs, other)
            }
        }

        impl ::std::cmp::PartialOrd<#type_name> for #target {
            fn partial_cmp(&self, other: &#type_name) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::cmp::PartialOrd::partial_cmp(other, self).map(::std::cmp::Ordering::reverse)
            }
        }
    }
}

fn member(variant: &Variant, base: Option<&Type>) -> syn::Result<Member> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            variant,
            "EnumChoice members must be unit variants",
        ));
    }

    let ChoiceAttrs { value, label } = ChoiceAttrs::from_attributes(&variant.attrs)?;
    let ident = variant.ident.clone();
    let name = ident.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name).to_owned();

    let value = match (value, &variant.discriminant) {
        (Some(lit), _) => value_from_literal(&lit, base)?,
        (None, Some((_, expr))) => value_from_discriminant(expr, base),
        (None, None) => {
            return Err(syn::Error::new_spanned(
                variant,
                format!(
                    "member `{name}` needs a value: add `#[choice(value = ...)]` or a discriminant"
                ),
            ))
        }
    };

    let label = match label {
        Some(lit) => label_text(&lit)?,
        None => None,
    }
    .unwrap_or_else(|| default_label(&name));

    Ok(Member {
        name: LitStr::new(&name, ident.span()),
        label: LitStr::new(&label, ident.span()),
        ident,
        value,
    })
}

fn value_from_literal(lit: &Lit, base: Option<&Type>) -> syn::Result<TokenStream> {
    if base.is_some() {
        return Ok(lit.to_token_stream());
    }
    Ok(match lit {
        Lit::Int(_) => quote! { ::enum_choice::Value::Int(#lit) },
        Lit::Float(_) => quote! { ::enum_choice::Value::Float(#lit) },
        Lit::Bool(_) => quote! { ::enum_choice::Value::Bool(#lit) },
        Lit::Str(_) | Lit::Char(_) => quote! { ::enum_choice::Value::from(#lit) },
        _ => {
            return Err(syn::Error::new_spanned(
                lit,
                "member values must be integer, float, bool, string or char literals",
            ))
        }
    })
}

fn value_from_discriminant(expr: &Expr, base: Option<&Type>) -> TokenStream {
    if base.is_some() {
        expr.to_token_stream()
    } else {
        quote! { ::enum_choice::Value::Int(#expr) }
    }
}

/// String form of a label literal. Falsy literals (`""`, `0`, `0.0`, `false`) yield `None`, so
/// the default label is used instead.
fn label_text(lit: &Lit) -> syn::Result<Option<String>> {
    let (text, truthy) = match lit {
        Lit::Str(s) => {
            let text = s.value();
            let truthy = !text.is_empty();
            (text, truthy)
        }
        Lit::Int(i) => (i.base10_digits().to_owned(), i.base10_parse::<u128>()? != 0),
        Lit::Float(f) => (f.base10_digits().to_owned(), f.base10_parse::<f64>()? != 0.0),
        Lit::Bool(b) => (if b.value { "True" } else { "False" }.to_owned(), b.value),
        Lit::Char(c) => (c.value().to_string(), true),
        _ => {
            return Err(syn::Error::new_spanned(
                lit,
                "member labels must be string, integer, float, bool or char literals",
            ))
        }
    };
    Ok(truthy.then_some(text))
}

fn default_label(name: &str) -> String {
    let label = name.to_title_case();
    if label.is_empty() {
        name.to_owned()
    } else {
        label
    }
}

fn is_dynamic_value(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => {
            path.qself.is_none()
                && path
                    .path
                    .segments
                    .last()
                    .map_or(false, |segment| segment.ident == "Value")
        }
        _ => false,
    }
}
