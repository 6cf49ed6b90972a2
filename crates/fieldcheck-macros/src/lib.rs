//! Procedural macros for fieldcheck
//!
//! This crate provides the derive used by `fieldcheck`:
//!
//! - `#[derive(Validate)]` - implements `fieldcheck::Record` from
//!   `#[validate("...")]` field annotations

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident, LitStr};

type Result<T> = std::result::Result<T, syn::Error>;

/// Derive macro generating a `fieldcheck::Record` implementation.
///
/// Every field carrying a `#[validate(...)]` attribute is exposed to the
/// validator, in declaration order. Fields without the attribute have no
/// rules and are left out.
///
/// # Attribute forms
///
/// ```rust
/// use fieldcheck::Validate;
///
/// #[derive(Validate)]
/// struct Avenger {
///     // Bare annotation string
///     #[validate("required,minLen=3,maxLen=50")]
///     name: String,
///
///     // Keyed form, with the name used in reports
///     #[validate(rules = "required,min=18,max=100", rename = "Age")]
///     age: i32,
///
///     // No attribute: never checked
///     callsign: Option<String>,
/// }
/// ```
///
/// Several `#[validate]` attributes on one field are joined with `,`, so a
/// later duplicate rule overrides an earlier one.
///
/// # Errors
///
/// Enums, unions, tuple structs and unit structs are rejected at compile
/// time, as are unknown keys and non-string annotations.
///
/// ```compile_fail
/// use fieldcheck::Validate;
///
/// #[derive(Validate)]
/// enum Status {
///     Active,
///     Retired,
/// }
/// ```
///
/// ```compile_fail
/// use fieldcheck::Validate;
///
/// #[derive(Validate)]
/// struct Point(#[validate("min=0")] i32, i32);
/// ```
///
/// ```compile_fail
/// use fieldcheck::Validate;
///
/// #[derive(Validate)]
/// struct Ticket {
///     #[validate(foo = "required")]
///     title: String,
/// }
/// ```
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Rules and report name collected for one field.
struct FieldRules {
    ident: Ident,
    name: String,
    rules: Vec<String>,
}

fn expand(input: DeriveInput) -> Result<TokenStream2> {
    let ident = &input.ident;

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "Validate: input must be a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Validate: input must be a struct with named fields",
            ))
        }
    };

    let mut annotated = Vec::new();
    for field in named {
        // Named fields always carry an ident.
        let Some(field_ident) = field.ident.clone() else {
            continue;
        };
        if let Some(rules) = field_rules(field_ident, &field.attrs)? {
            annotated.push(rules);
        }
    }

    let entries = annotated.iter().map(|f| {
        let field_ident = &f.ident;
        let name = &f.name;
        let rules = f.rules.join(",");
        quote! {
            ::fieldcheck::Field::new(#name, &self.#field_ident, #rules)
        }
    });

    let record_name = ident.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::fieldcheck::Record for #ident #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #record_name
            }

            fn fields(&self) -> ::std::vec::Vec<::fieldcheck::Field<'_>> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

/// Collect every `#[validate]` attribute on a field.
///
/// Returns `None` when the field has no such attribute.
fn field_rules(ident: Ident, attrs: &[Attribute]) -> Result<Option<FieldRules>> {
    let mut found = false;
    let mut name = ident.unraw().to_string();
    let mut rules = Vec::new();

    for attr in attrs.iter().filter(|a| a.path().is_ident("validate")) {
        found = true;

        // #[validate("required,min=1")]
        if let Ok(lit) = attr.parse_args::<LitStr>() {
            rules.push(lit.value());
            continue;
        }

        // #[validate(rules = "...", rename = "...")]
        attr.parse_nested_meta(|meta| {
            let value: LitStr = meta.value()?.parse()?;
            if meta.path.is_ident("rules") {
                rules.push(value.value());
            } else if meta.path.is_ident("rename") {
                name = value.value();
            } else {
                return Err(meta.error("Unknown key in #[validate]; expected `rules` or `rename`"));
            }
            Ok(())
        })?;
    }

    if !found {
        return Ok(None);
    }

    Ok(Some(FieldRules { ident, name, rules }))
}
