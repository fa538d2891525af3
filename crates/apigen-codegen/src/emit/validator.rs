//! Decode/validate functions.
//!
//! Each validated struct gets a `FromParams` impl. Every tagged field is
//! decoded and checked in [`CHECK_ORDER`]; the first failing check returns a
//! 400 error and the rest of the struct is never built.
//!
//! Generated shape for `#[apivalidator = "paramname=user_login,required,min=3"]`:
//!
//! ```rust,ignore
//! let field_login: String = params.get("user_login").to_owned();
//! if field_login.is_empty() {
//!     return Err(ApiError::bad_request("user_login must be not empty"));
//! }
//! if field_login.chars().count() < 3 {
//!     return Err(ApiError::bad_request("user_login len must be >= 3"));
//! }
//! ```
//!
//! Integer fields are decoded into an `Option` first, so that an empty input
//! can still be defaulted or rejected as missing before the value settles
//! into the declared type (`0` when neither applies).

use crate::naming;
use apigen_core::rules::{CHECK_ORDER, Check};
use apigen_core::{FieldRule, FieldType, GenResult, IntKind, ValidatedStruct};
use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

/// Emit the `FromParams` impl for one struct
pub fn emit_validator(item: &ValidatedStruct, rt: &syn::Path) -> GenResult<TokenStream> {
    let name = naming::ident(&item.name)?;

    let mut blocks = Vec::with_capacity(item.fields.len());
    let mut inits = Vec::with_capacity(item.fields.len());
    for rule in &item.fields {
        let field = naming::ident(&rule.field_name)?;
        let local = format_ident!("{}", naming::field_local(&rule.field_name));
        blocks.push(emit_field(rule, &local, rt));
        inits.push(quote! { #field: #local });
    }

    let rest = item
        .has_untagged_fields
        .then(|| quote! { ..::core::default::Default::default() });

    Ok(quote! {
        impl #rt::FromParams for #name {
            fn from_params(
                params: &#rt::Params,
            ) -> ::core::result::Result<Self, #rt::ApiError> {
                #(#blocks)*
                ::core::result::Result::Ok(Self { #(#inits,)* #rest })
            }
        }
    })
}

/// Decode and check one field, binding the result to `local`
fn emit_field(rule: &FieldRule, local: &Ident, rt: &syn::Path) -> TokenStream {
    let steps = CHECK_ORDER.iter().filter_map(|check| match rule.field_type {
        FieldType::String => string_step(*check, rule, local, rt),
        FieldType::Int(kind) => int_step(*check, kind, rule, local, rt),
    });
    quote! { #(#steps)* }
}

fn string_step(check: Check, rule: &FieldRule, local: &Ident, rt: &syn::Path) -> Option<TokenStream> {
    let param = rule.param_name.as_str();
    match check {
        Check::Decode => {
            let mutability = rule.default_value.is_some().then(|| quote!(mut));
            Some(quote! {
                let #mutability #local: ::std::string::String = params.get(#param).to_owned();
            })
        }
        Check::Default => {
            let default = rule.default_value.as_deref()?;
            Some(quote! {
                if #local.is_empty() {
                    #local = ::std::string::String::from(#default);
                }
            })
        }
        Check::Required if rule.required => Some(reject(
            quote!(#local.is_empty()),
            format!("{param} must be not empty"),
            rt,
        )),
        Check::Min => {
            // A zero lower bound on a length always holds.
            let min = rule.min.filter(|min| *min > 0)?;
            let bound = Literal::i64_unsuffixed(min);
            Some(reject(
                quote!(#local.chars().count() < #bound),
                format!("{param} len must be >= {min}"),
                rt,
            ))
        }
        Check::Max => {
            let max = rule.max?;
            let bound = Literal::i64_unsuffixed(max);
            Some(reject(
                quote!(#local.chars().count() > #bound),
                format!("{param} len must be <= {max}"),
                rt,
            ))
        }
        Check::Enum => {
            let values = rule.enum_values.as_ref()?;
            Some(reject(
                quote!(![#(#values),*].contains(&#local.as_str())),
                format!("{param} must be one of [{}]", values.join(", ")),
                rt,
            ))
        }
        Check::Required => None,
    }
}

fn int_step(
    check: Check,
    kind: IntKind,
    rule: &FieldRule,
    local: &Ident,
    rt: &syn::Path,
) -> Option<TokenStream> {
    let param = rule.param_name.as_str();
    let ty = format_ident!("{}", kind.as_str());
    let (lo, hi) = kind.range();
    match check {
        Check::Decode => {
            let raw = format_ident!("{}", naming::raw_local(&rule.field_name));
            let mutability = rule.default_value.is_some().then(|| quote!(mut));
            let message = format!("{param} must be int");
            Some(quote! {
                let #raw: &str = params.get(#param);
                let #mutability #local: ::core::option::Option<#ty> = if #raw.is_empty() {
                    ::core::option::Option::None
                } else {
                    match #raw.parse::<#ty>() {
                        ::core::result::Result::Ok(value) => ::core::option::Option::Some(value),
                        ::core::result::Result::Err(_) => {
                            return ::core::result::Result::Err(#rt::ApiError::bad_request(#message));
                        }
                    }
                };
            })
        }
        Check::Default => {
            let default: i128 = rule.default_value.as_deref()?.parse().ok()?;
            let value = int_literal(default);
            Some(quote! {
                if #local.is_none() {
                    #local = ::core::option::Option::Some(#value);
                }
            })
        }
        // Settles the Option whether or not the field is required.
        Check::Required if rule.required => {
            let message = format!("{param} must be not empty");
            Some(quote! {
                let #local: #ty = match #local {
                    ::core::option::Option::Some(value) => value,
                    ::core::option::Option::None => {
                        return ::core::result::Result::Err(#rt::ApiError::bad_request(#message));
                    }
                };
            })
        }
        Check::Required => Some(quote! {
            let #local: #ty = #local.unwrap_or_default();
        }),
        Check::Min => {
            let min = i128::from(rule.min?);
            if min <= lo {
                return None;
            }
            let bound = int_literal(min);
            Some(reject(
                quote!(#local < #bound),
                format!("{param} must be >= {min}"),
                rt,
            ))
        }
        Check::Max => {
            let max = i128::from(rule.max?);
            if max >= hi {
                return None;
            }
            let bound = int_literal(max);
            Some(reject(
                quote!(#local > #bound),
                format!("{param} must be <= {max}"),
                rt,
            ))
        }
        Check::Enum => {
            let values = rule.enum_values.as_ref()?;
            Some(reject(
                quote!(![#(#values),*].contains(&#local.to_string().as_str())),
                format!("{param} must be one of [{}]", values.join(", ")),
                rt,
            ))
        }
    }
}

/// `if cond { return Err(ApiError::bad_request(message)); }`
fn reject(cond: TokenStream, message: String, rt: &syn::Path) -> TokenStream {
    quote! {
        if #cond {
            return ::core::result::Result::Err(#rt::ApiError::bad_request(#message));
        }
    }
}

/// Unsuffixed integer literal; the field type fixes its type.
fn int_literal(value: i128) -> TokenStream {
    let magnitude = Literal::u128_unsuffixed(value.unsigned_abs());
    if value < 0 {
        quote!(-#magnitude)
    } else {
        quote!(#magnitude)
    }
}
