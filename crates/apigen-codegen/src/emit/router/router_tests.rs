#![allow(non_snake_case)]

use super::*;

fn endpoint(method: &str, url: &str) -> EndpointDescriptor {
    EndpointDescriptor {
        receiver_type: "MyApi".into(),
        method_name: method.into(),
        url_path: url.into(),
        http_method: String::new(),
        requires_auth: false,
        param_type_name: "Params".into(),
    }
}

fn render(endpoints: &[EndpointDescriptor]) -> String {
    let refs: Vec<&EndpointDescriptor> = endpoints.iter().collect();
    let tokens = emit_router("MyApi", &refs, &syn::parse_quote!(::apigen)).unwrap();
    prettyplease::unparse(&syn::parse2(tokens).unwrap())
}

#[test]
fn emit_router___implements_handler() {
    let code = render(&[endpoint("profile", "/user/profile")]);

    assert!(code.contains("impl ::apigen::Handler for MyApi"));
    assert!(code.contains("fn serve_http(&self, req: &dyn ::apigen::Request) -> ::apigen::Response"));
    assert!(code.contains("::apigen::respond(result)"));
}

#[test]
fn emit_router___arms_follow_declaration_order() {
    let code = render(&[
        endpoint("profile", "/user/profile"),
        endpoint("create", "/user/create"),
    ]);

    let profile = code.find("\"/user/profile\" => self.wrapper_profile(&ctx, req)").unwrap();
    let create = code.find("\"/user/create\" => self.wrapper_create(&ctx, req)").unwrap();
    let fallback = code.find("\"unknown method\"").unwrap();

    assert!(profile < create);
    assert!(create < fallback);
}

#[test]
fn emit_router___unknown_path___is_not_found() {
    let code = render(&[endpoint("profile", "/user/profile")]);

    assert!(code.contains("ApiError::not_found(\"unknown method\")"));
}

#[test]
fn emit_router___invalid_receiver___is_error() {
    let e = endpoint("profile", "/user/profile");

    assert!(emit_router("my api", &[&e], &syn::parse_quote!(::apigen)).is_err());
}
