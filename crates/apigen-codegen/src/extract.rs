//! Source metadata extraction.
//!
//! Walks the top-level items of a parsed Rust file and builds an
//! [`ApiManifest`]:
//!
//! - methods in `impl` blocks whose doc comment carries the endpoint marker
//!   become [`EndpointDescriptor`]s
//! - structs with at least one tagged field become [`ValidatedStruct`]s
//!
//! # Endpoint marker
//!
//! ```rust,ignore
//! impl MyApi {
//!     /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
//!     fn create(&self, ctx: &RequestContext, params: CreateParams) -> anyhow::Result<NewUser> {
//!         // ...
//!     }
//! }
//! ```
//!
//! The payload is JSON. `url` is required; `auth` defaults to `false` and
//! `method` to empty (any method). The capitalised keys `URL`, `Auth`, and
//! `Method` are accepted as well. A payload that does not decode is fatal.
//!
//! # Field tags
//!
//! ```rust,ignore
//! #[derive(Validate)]
//! pub struct CreateParams {
//!     #[apivalidator = "required,min=10"]
//!     login: String,
//!     #[apivalidator = "min=0,max=128"]
//!     age: i32,
//! }
//! ```
//!
//! # Limitations
//!
//! - Only top-level items are scanned (no inline modules)
//! - Validated field types must be `String` or an integer primitive
//! - The parameter type must be a plain identifier

use apigen_core::rules;
use apigen_core::{
    ApiManifest, EndpointDescriptor, FieldType, GenError, GenResult, GeneratorConfig,
    ValidatedStruct,
};
use quote::ToTokens;
use serde::Deserialize;
use syn::ext::IdentExt;
use syn::{Attribute, Expr, FnArg, ImplItem, ImplItemFn, Item, ItemImpl, ItemStruct, Lit, Meta, Type};

/// Payload following the endpoint marker
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Annotation {
    #[serde(alias = "URL")]
    url: String,

    #[serde(default, alias = "Auth")]
    auth: bool,

    #[serde(default, alias = "Method")]
    method: String,
}

/// Parse Rust source and extract its manifest
pub fn extract_source(source: &str, config: &GeneratorConfig) -> GenResult<ApiManifest> {
    let file = syn::parse_file(source).map_err(|e| GenError::Parse(e.to_string()))?;
    extract(&file, config)
}

/// Extract the manifest of a parsed source unit.
///
/// The returned manifest has passed [`ApiManifest::validate`].
pub fn extract(file: &syn::File, config: &GeneratorConfig) -> GenResult<ApiManifest> {
    let mut endpoints = Vec::new();
    let mut structs = Vec::new();

    for item in &file.items {
        match item {
            Item::Impl(item_impl) => endpoints.extend(endpoints_from_impl(item_impl, config)?),
            Item::Struct(item_struct) => {
                if let Some(validated) = validated_struct(item_struct, &config.tag_key)? {
                    structs.push(validated);
                }
            }
            _ => {}
        }
    }

    tracing::debug!(
        endpoints = endpoints.len(),
        structs = structs.len(),
        "extracted descriptors"
    );

    let manifest = ApiManifest::new(endpoints, structs);
    manifest.validate()?;
    Ok(manifest)
}

/// Endpoints declared in one `impl` block, in declaration order
fn endpoints_from_impl(
    item_impl: &ItemImpl,
    config: &GeneratorConfig,
) -> GenResult<Vec<EndpointDescriptor>> {
    let mut endpoints = Vec::new();
    let receiver = receiver_name(&item_impl.self_ty);

    for impl_item in &item_impl.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let method_name = method.sig.ident.to_string();

        let docs = extract_docs(&method.attrs);
        if docs.is_empty() {
            tracing::debug!(method = %method_name, "skip: no doc comment");
            continue;
        }

        let Some(payload) = docs
            .iter()
            .find_map(|line| line.find(&config.marker).map(|at| &line[at + config.marker.len()..]))
        else {
            tracing::debug!(method = %method_name, marker = %config.marker, "skip: no marker");
            continue;
        };

        if method.sig.receiver().is_none() {
            tracing::debug!(method = %method_name, "skip: not a method");
            continue;
        }

        let Some(receiver) = receiver.clone() else {
            return Err(GenError::BadSignature {
                receiver: item_impl.self_ty.to_token_stream().to_string(),
                method: method_name,
                reason: "receiver type must be a plain type name".into(),
            });
        };

        if !item_impl.generics.params.is_empty() {
            return Err(GenError::BadSignature {
                receiver,
                method: method_name,
                reason: "generic receivers are not supported".into(),
            });
        }

        let annotation: Annotation =
            serde_json::from_str(payload.trim()).map_err(|e| GenError::MalformedAnnotation {
                receiver: receiver.clone(),
                method: method_name.clone(),
                reason: e.to_string(),
            })?;

        let param_type_name = param_type(method).map_err(|reason| GenError::BadSignature {
            receiver: receiver.clone(),
            method: method_name.clone(),
            reason,
        })?;

        tracing::debug!(
            receiver = %receiver,
            method = %method_name,
            url = %annotation.url,
            "found endpoint"
        );

        endpoints.push(EndpointDescriptor {
            receiver_type: receiver,
            method_name,
            url_path: annotation.url,
            http_method: annotation.method,
            requires_auth: annotation.auth,
            param_type_name,
        });
    }

    Ok(endpoints)
}

/// Name of the `impl` self type, if it is a plain path
fn receiver_name(self_ty: &Type) -> Option<String> {
    match self_ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            type_path.path.get_ident().map(|ident| ident.to_string())
        }
        _ => None,
    }
}

/// Type name of the parameter argument in `(&self, ctx, params)`
fn param_type(method: &ImplItemFn) -> Result<String, String> {
    let typed: Vec<&Type> = method
        .sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(pat_type) => Some(pat_type.ty.as_ref()),
            FnArg::Receiver(_) => None,
        })
        .collect();

    let [_ctx, params] = typed.as_slice() else {
        return Err(format!(
            "expected `(&self, ctx, params)`, found {} argument(s) after self",
            typed.len()
        ));
    };

    plain_ident(params).ok_or_else(|| {
        format!(
            "parameter type `{}` must be a plain type name",
            params.to_token_stream()
        )
    })
}

/// The identifier of a single-segment path type without generics
fn plain_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            type_path.path.get_ident().map(|ident| ident.to_string())
        }
        _ => None,
    }
}

/// Build a validated struct from a struct with at least one tagged field
fn validated_struct(item: &ItemStruct, tag_key: &str) -> GenResult<Option<ValidatedStruct>> {
    let struct_name = item.ident.to_string();
    let syn::Fields::Named(named) = &item.fields else {
        return Ok(None);
    };

    let mut fields = Vec::new();
    let mut has_untagged_fields = false;

    for field in &named.named {
        let Some(ident) = &field.ident else { continue };
        let field_name = ident.to_string();

        let Some(tag) = find_tag(&field.attrs, tag_key).map_err(|()| GenError::MalformedTag {
            struct_name: struct_name.clone(),
            field: field_name.clone(),
            tag_key: tag_key.to_string(),
        })?
        else {
            has_untagged_fields = true;
            continue;
        };

        let field_type = plain_ident(&field.ty)
            .and_then(|name| FieldType::from_ident(&name))
            .ok_or_else(|| GenError::UnsupportedFieldType {
                struct_name: struct_name.clone(),
                field: field_name.clone(),
                ty: field.ty.to_token_stream().to_string(),
            })?;

        let mut rule = rules::compile(&ident.unraw().to_string(), field_type, &tag).map_err(
            |reason| GenError::InvalidRule {
                struct_name: struct_name.clone(),
                field: field_name.clone(),
                reason,
            },
        )?;
        rule.field_name = field_name;
        fields.push(rule);
    }

    if fields.is_empty() {
        return Ok(None);
    }

    Ok(Some(ValidatedStruct {
        name: struct_name,
        has_untagged_fields,
        fields,
    }))
}

/// Value of `#[tag_key = "..."]`; `Err` if the attribute has another shape
fn find_tag(attrs: &[Attribute], tag_key: &str) -> Result<Option<String>, ()> {
    for attr in attrs {
        if !attr.path().is_ident(tag_key) {
            continue;
        }
        if let Meta::NameValue(meta) = &attr.meta {
            if let Expr::Lit(expr_lit) = &meta.value {
                if let Lit::Str(lit_str) = &expr_lit.lit {
                    return Ok(Some(lit_str.value()));
                }
            }
        }
        return Err(());
    }
    Ok(None)
}

/// Extract documentation comment lines from attributes.
fn extract_docs(attrs: &[Attribute]) -> Vec<String> {
    let mut docs = Vec::new();

    for attr in attrs {
        if attr.path().is_ident("doc") {
            if let Meta::NameValue(meta) = &attr.meta {
                if let Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        let doc = lit_str.value();
                        let doc = doc.trim();
                        if !doc.is_empty() {
                            docs.push(doc.to_string());
                        }
                    }
                }
            }
        }
    }

    docs
}
