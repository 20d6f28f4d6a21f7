//! The `#[routes]` attribute.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Expr, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, Lit, ReturnType, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote,
};

/// Arguments for the `#[routes]` macro.
pub(crate) struct RoutesArgs {
    pub key: Option<Type>,
}

impl Parse for RoutesArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut key = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "key" => {
                    let ty: Type = input.parse()?;
                    key = Some(ty);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(RoutesArgs { key })
    }
}

/// A method that takes part in routing.
struct RouteMethod {
    ident: Ident,
    keys: Vec<Expr>,
    is_default: bool,
    arg_tys: Vec<Type>,
    output: Type,
}

/// Implementation of the `#[routes]` macro.
pub fn routes_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RoutesArgs);
    let mut input = parse_macro_input!(item as ItemImpl);

    match expand(args, &mut input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: RoutesArgs, input: &mut ItemImpl) -> syn::Result<proc_macro2::TokenStream> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[routes] must be placed on an inherent impl block",
        ));
    }

    let mut methods = Vec::new();
    for item in &mut input.items {
        if let ImplItem::Fn(method) = item {
            if let Some(route) = take_route(method)? {
                methods.push(route);
            }
        }
    }

    let Some(first) = methods.first() else {
        return Err(syn::Error::new_spanned(
            &input.self_ty,
            "#[routes] needs at least one #[handler] or #[default_handler] method",
        ));
    };

    let key_ty = match args.key {
        Some(ty) => ty,
        None => infer_key_type(&methods).ok_or_else(|| {
            syn::Error::new_spanned(
                &input.self_ty,
                "cannot infer the key type; use #[routes(key = Type)]",
            )
        })?,
    };
    // every method is registered into the same Registry<_, Self, Args, Output>
    for route in methods.iter().skip(1) {
        if route.arg_tys != first.arg_tys || route.output != first.output {
            return Err(syn::Error::new_spanned(
                &route.ident,
                "all #[handler]/#[default_handler] methods must share the same parameter and return types",
            ));
        }
    }

    let arg_tys = &first.arg_tys;
    let output = &first.output;

    let registrations = methods.iter().map(|route| {
        let ident = &route.ident;
        let binds: Vec<Ident> = (0..route.arg_tys.len())
            .map(|i| format_ident!("__arg{}", i))
            .collect();
        let call = quote! {
            |this: &Self, (#(#binds,)*): Self::Args| Self::#ident(this, #(#binds),*)
        };

        let keyed = route.keys.iter().map(|key| {
            quote! { routes.on(#key, #call); }
        });
        let default = route.is_default.then(|| {
            quote! { routes.on_default(#call); }
        });

        quote! {
            #(#keyed)*
            #default
        }
    });

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #input

        impl #impl_generics ::switchboard::Routable for #self_ty #where_clause {
            type Key = #key_ty;
            type Args = (#(#arg_tys,)*);
            type Output = #output;

            fn register(
                routes: &mut ::switchboard::Registry<Self::Key, Self, Self::Args, Self::Output>,
            ) {
                #(#registrations)*
            }
        }
    })
}

/// Strip `#[handler]`/`#[default_handler]` from `method` and describe it.
fn take_route(method: &mut ImplItemFn) -> syn::Result<Option<RouteMethod>> {
    let mut keys = Vec::new();
    let mut is_default = false;
    let mut error = None;

    method.attrs.retain(|attr| {
        if attr.path().is_ident("handler") {
            match attr.parse_args::<Expr>() {
                Ok(key) => keys.push(key),
                Err(e) => error = Some(e),
            }
            false
        } else if attr.path().is_ident("default_handler") {
            is_default = true;
            false
        } else {
            true
        }
    });

    if let Some(e) = error {
        return Err(e);
    }
    if keys.is_empty() && !is_default {
        return Ok(None);
    }

    let sig = &method.sig;
    match sig.inputs.first() {
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_none() => {}
        _ => {
            return Err(syn::Error::new_spanned(
                &sig.ident,
                "handler methods must take `&self`",
            ));
        }
    }

    let mut arg_tys = Vec::new();
    for arg in sig.inputs.iter().skip(1) {
        if let FnArg::Typed(pat_type) = arg {
            if let Type::Reference(_) = &*pat_type.ty {
                return Err(syn::Error::new_spanned(
                    &pat_type.ty,
                    "handler parameters must be owned types",
                ));
            }
            arg_tys.push((*pat_type.ty).clone());
        }
    }

    let output = match &sig.output {
        ReturnType::Default => parse_quote! { () },
        ReturnType::Type(_, ty) => (**ty).clone(),
    };

    Ok(Some(RouteMethod {
        ident: sig.ident.clone(),
        keys,
        is_default,
        arg_tys,
        output,
    }))
}

/// `&'static str` when the first key is a string literal.
fn infer_key_type(methods: &[RouteMethod]) -> Option<Type> {
    let key = methods.iter().flat_map(|m| m.keys.first()).next()?;
    match key {
        Expr::Lit(expr_lit) if matches!(expr_lit.lit, Lit::Str(_)) => {
            Some(parse_quote! { &'static str })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_impl(mut item: ItemImpl) -> syn::Result<proc_macro2::TokenStream> {
        expand(RoutesArgs { key: None }, &mut item)
    }

    #[test]
    fn mismatched_handler_signature_is_rejected() {
        let item: ItemImpl = parse_quote! {
            impl Reducer {
                #[handler("ADD")]
                fn add(&self, state: String, action: Action) -> String { state }

                #[default_handler]
                fn other(&self, state: u32, action: Action) -> String { action.kind }
            }
        };

        let err = expand_impl(item).unwrap_err();
        assert_eq!(
            err.to_string(),
            "all #[handler]/#[default_handler] methods must share the same parameter and return types"
        );
    }

    #[test]
    fn mismatched_return_type_is_rejected() {
        let item: ItemImpl = parse_quote! {
            impl Reducer {
                #[handler("ADD")]
                fn add(&self, state: String, action: Action) -> String { state }

                #[handler("REMOVE")]
                fn remove(&self, state: String, action: Action) {}
            }
        };

        assert!(expand_impl(item).is_err());
    }

    #[test]
    fn matching_signatures_expand_to_a_routable_impl() {
        let item: ItemImpl = parse_quote! {
            impl Reducer {
                #[handler("ADD")]
                #[handler("APPEND")]
                fn add(&self, state: String, action: Action) -> String { state }

                #[default_handler]
                fn keep(&self, _state: String, _action: Action) -> String { String::new() }

                fn helper(&self) -> u8 { 0 }
            }
        };

        let tokens = expand_impl(item).unwrap().to_string();
        assert!(tokens.contains("Routable for Reducer"));
        assert!(tokens.contains("on_default"));
        assert!(!tokens.contains("handler"));
    }

    #[test]
    fn trait_impls_are_rejected() {
        let item: ItemImpl = parse_quote! {
            impl Clone for Reducer {
                #[handler("ADD")]
                fn add(&self, state: String) -> String { state }
            }
        };

        assert!(expand_impl(item).is_err());
    }
}
