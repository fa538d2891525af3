//! Per-receiver routers.
//!
//! Each receiver gets a `Handler` impl that matches the exact request path
//! against its endpoints in declaration order and hands the wrapper's result
//! to `respond`, which builds the envelope. Unknown paths are a 404.

use crate::naming;
use apigen_core::{EndpointDescriptor, GenResult};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the `Handler` impl for one receiver
pub fn emit_router(
    receiver: &str,
    endpoints: &[&EndpointDescriptor],
    rt: &syn::Path,
) -> GenResult<TokenStream> {
    let receiver = naming::ident(receiver)?;
    let arms = endpoints.iter().map(|endpoint| {
        let url = endpoint.url_path.as_str();
        let wrapper = format_ident!("{}", naming::wrapper_name(&endpoint.method_name));
        quote! { #url => self.#wrapper(&ctx, req), }
    });

    Ok(quote! {
        impl #rt::Handler for #receiver {
            fn serve_http(&self, req: &dyn #rt::Request) -> #rt::Response {
                let ctx = #rt::RequestContext::from_request(req);
                let result = match req.path() {
                    #(#arms)*
                    _ => ::core::result::Result::Err(#rt::ApiError::not_found("unknown method").into()),
                };
                #rt::respond(result)
            }
        }
    })
}

#[cfg(test)]
#[path = "router/router_tests.rs"]
mod router_tests;
