//! apigen-macros - Procedural macros for apigen parameter structs
//!
//! This crate provides:
//! - `#[derive(Validate)]` - Registers the `#[apivalidator = "..."]` field
//!   attribute and checks every tag at compile time
//!
//! The derive generates no code. Decoding and validation are emitted by the
//! apigen generator into a separate unit; the derive only makes annotated
//! source compile and reports bad tags where they are written.

use apigen_core::FieldType;
use proc_macro::TokenStream;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Lit, LitStr, Meta, Type, parse_macro_input};

/// Field attribute recognised by the derive
const TAG_KEY: &str = "apivalidator";

/// Derive macro for parameter structs
///
/// # Example
///
/// ```ignore
/// #[derive(Validate)]
/// pub struct ProfileParams {
///     #[apivalidator = "required,paramname=user_login,min=3"]
///     pub login: String,
///
///     #[apivalidator = "min=0,max=150"]
///     pub age: i64,
/// }
/// ```
#[proc_macro_derive(Validate, attributes(apivalidator))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match check_tags(&input) {
        Ok(()) => TokenStream::new(),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

/// Compile every field tag of `input`, failing on the first bad one
fn check_tags(input: &DeriveInput) -> syn::Result<()> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Validate can only be derived for structs",
        ));
    };

    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Validate requires a struct with named fields",
        ));
    };

    for field in &fields.named {
        let Some(tag) = find_tag(&field.attrs)? else {
            continue;
        };

        let field_type = plain_ident(&field.ty)
            .and_then(|ident| FieldType::from_ident(&ident))
            .ok_or_else(|| {
                syn::Error::new_spanned(
                    &field.ty,
                    "validated fields must be `String` or an integer primitive",
                )
            })?;

        let name = field
            .ident
            .as_ref()
            .map(|i| i.to_string())
            .unwrap_or_default();
        apigen_core::rules::compile(&name, field_type, &tag.value())
            .map_err(|e| syn::Error::new_spanned(&tag, format!("invalid {TAG_KEY} tag: {e}")))?;
    }

    Ok(())
}

/// Find the `#[apivalidator = "..."]` string on a field
fn find_tag(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    for attr in attrs {
        if !attr.path().is_ident(TAG_KEY) {
            continue;
        }
        if let Meta::NameValue(meta) = &attr.meta {
            if let Expr::Lit(expr_lit) = &meta.value {
                if let Lit::Str(lit) = &expr_lit.lit {
                    return Ok(Some(lit.clone()));
                }
            }
        }
        return Err(syn::Error::new_spanned(
            attr,
            format!("expected `#[{TAG_KEY} = \"...\"]`"),
        ));
    }
    Ok(None)
}

/// The identifier of a single-segment path type without generics
fn plain_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .get_ident()
            .map(|ident| ident.to_string()),
        _ => None,
    }
}
