//! Per-endpoint wrapper methods.
//!
//! A wrapper runs its gates in a fixed order and stops at the first failure:
//!
//! 1. credential header (403 `unauthorized`), only when auth is required
//! 2. HTTP method (406 `bad method`), only when a method is declared
//! 3. parameter decode/validate (400, error from the validator untouched)
//! 4. the business method, whose error is passed through unchanged
//!
//! The request query and body are not read before the first two gates pass.

use crate::naming;
use apigen_core::{EndpointDescriptor, GenResult, GeneratorConfig};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit one `impl Receiver` block holding the wrappers of `endpoints`
pub fn emit_wrappers(
    receiver: &str,
    endpoints: &[&EndpointDescriptor],
    rt: &syn::Path,
    config: &GeneratorConfig,
) -> GenResult<TokenStream> {
    let receiver = naming::ident(receiver)?;
    let wrappers = endpoints
        .iter()
        .map(|endpoint| emit_wrapper(endpoint, rt, config))
        .collect::<GenResult<Vec<_>>>()?;

    Ok(quote! {
        impl #receiver {
            #(#wrappers)*
        }
    })
}

fn emit_wrapper(
    endpoint: &EndpointDescriptor,
    rt: &syn::Path,
    config: &GeneratorConfig,
) -> GenResult<TokenStream> {
    let method = naming::ident(&endpoint.method_name)?;
    let wrapper = format_ident!("{}", naming::wrapper_name(&endpoint.method_name));
    let params_type = naming::ident(&endpoint.param_type_name)?;

    let auth_gate = endpoint.requires_auth.then(|| {
        let header = config.auth_header.as_str();
        let token = config.auth_token.as_str();
        quote! {
            if req.header(#header) != ::core::option::Option::Some(#token) {
                return ::core::result::Result::Err(#rt::ApiError::forbidden("unauthorized").into());
            }
        }
    });

    let method_gate = (!endpoint.accepts_any_method()).then(|| {
        let http_method = endpoint.http_method.as_str();
        quote! {
            if req.method() != #http_method {
                return ::core::result::Result::Err(#rt::ApiError::not_acceptable("bad method").into());
            }
        }
    });

    let doc = format!(" Serves `{}` with `Self::{}`.", endpoint.url_path, endpoint.method_name);

    Ok(quote! {
        #[doc = #doc]
        pub fn #wrapper(
            &self,
            ctx: &#rt::RequestContext,
            req: &dyn #rt::Request,
        ) -> #rt::anyhow::Result<#rt::serde_json::Value> {
            #auth_gate
            #method_gate
            let params = #rt::Params::from_request(req);
            let input = <#params_type as #rt::FromParams>::from_params(&params)?;
            #rt::to_payload(self.#method(ctx, input)?)
        }
    })
}
