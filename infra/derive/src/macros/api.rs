use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

#[derive(Default)]
struct ApiModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
    params: bool,
}

struct SerdeMetaInfo {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands `#[api_model]`.
///
/// Adds the missing derives (`Debug`, `Serialize`, `Deserialize`), a server-only
/// `utoipa::ToSchema` (or `utoipa::IntoParams` for `params` models) and the serde
/// policy: `camelCase` plus `deny_unknown_fields` unless told otherwise.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let args = match parse_api_model_args(args) {
        Ok(args) => args,
        Err(err) => return err,
    };
    let derives = derived_trait_names(&input.attrs);
    let serde_meta = match serde_meta_info(&input.attrs) {
        Ok(info) => info,
        Err(err) => return err,
    };

    let derive_attr = derive_attr(&derives);
    let openapi_attr = openapi_attr(&derives, args.params);

    let rename_attr = match rename_attr(args.rename_all, &serde_meta) {
        Ok(attr) => attr,
        Err(err) => return err,
    };
    let deny_attr = match deny_unknown_attr(args.deny_unknown_fields, &serde_meta, &input) {
        Ok(attr) => attr,
        Err(err) => return err,
    };

    quote! {
        #derive_attr
        #openapi_attr
        #rename_attr
        #deny_attr
        #input
    }
}

/// Expands `#[api_handler]`: the arguments are forwarded to `utoipa::path`
/// when the consuming crate builds with its `server` feature.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn parse_api_model_args(args: TokenStream) -> Result<ApiModelArgs, TokenStream> {
    let parser = Punctuated::<Meta, Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut parsed = ApiModelArgs::default();

    for meta in metas {
        match meta {
            Meta::Path(path) if path.is_ident("params") => {
                if parsed.params {
                    return Err(duplicate(&path));
                }
                parsed.params = true;
            }
            Meta::NameValue(nv) if nv.path.is_ident("rename_all") => {
                if parsed.rename_all.is_some() {
                    return Err(duplicate(&nv));
                }
                parsed.rename_all = Some(string_literal(&nv, "rename_all")?);
            }
            Meta::NameValue(nv) if nv.path.is_ident("deny_unknown_fields") => {
                if parsed.deny_unknown_fields.is_some() {
                    return Err(duplicate(&nv));
                }
                parsed.deny_unknown_fields = Some(bool_literal(&nv, "deny_unknown_fields")?);
            }
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "Unsupported argument; expected `params`, `rename_all = \"...\"` or `deny_unknown_fields = <bool>`",
                )
                .to_compile_error());
            }
        }
    }

    Ok(parsed)
}

fn duplicate(tokens: &impl quote::ToTokens) -> TokenStream {
    syn::Error::new_spanned(tokens, "Duplicate argument").to_compile_error()
}

fn literal<'a>(nv: &'a MetaNameValue, label: &str, kind: &str) -> Result<&'a Lit, TokenStream> {
    match &nv.value {
        syn::Expr::Lit(expr_lit) => Ok(&expr_lit.lit),
        _ => Err(syn::Error::new_spanned(&nv.value, format!("{label} must be a {kind} literal"))
            .to_compile_error()),
    }
}

fn bool_literal(nv: &MetaNameValue, label: &str) -> Result<bool, TokenStream> {
    match literal(nv, label, "boolean")? {
        Lit::Bool(lit) => Ok(lit.value),
        other => Err(syn::Error::new_spanned(other, format!("{label} must be a boolean literal"))
            .to_compile_error()),
    }
}

fn string_literal(nv: &MetaNameValue, label: &str) -> Result<LitStr, TokenStream> {
    match literal(nv, label, "string")? {
        Lit::Str(lit) => Ok(lit.clone()),
        other => Err(syn::Error::new_spanned(other, format!("{label} must be a string literal"))
            .to_compile_error()),
    }
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let mut tokens = Vec::new();
    if !derives.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        tokens.push(quote! { ::serde::Serialize });
    }
    if !derives.contains("Deserialize") {
        tokens.push(quote! { ::serde::Deserialize });
    }

    if tokens.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#tokens),*)] }
    }
}

fn openapi_attr(derives: &FxHashSet<String>, params: bool) -> TokenStream {
    if params {
        if derives.contains("IntoParams") {
            return quote! {};
        }
        return quote! {
            #[cfg_attr(feature = "server", derive(::utoipa::IntoParams))]
            #[cfg_attr(feature = "server", into_params(parameter_in = Query))]
        };
    }

    if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    }
}

fn rename_attr(rename_all: Option<LitStr>, serde_meta: &SerdeMetaInfo) -> Result<TokenStream, TokenStream> {
    let rename_all_value =
        rename_all.unwrap_or_else(|| LitStr::new("camelCase", proc_macro2::Span::call_site()));

    match &serde_meta.rename_all {
        Some(existing) if existing.value() != rename_all_value.value() => Err(syn::Error::new_spanned(
            existing,
            "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
        )
        .to_compile_error()),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #rename_all_value)] }),
    }
}

fn deny_unknown_attr(
    deny_unknown_fields: Option<bool>,
    serde_meta: &SerdeMetaInfo,
    input: &ItemStruct,
) -> Result<TokenStream, TokenStream> {
    let deny_unknown = deny_unknown_fields.unwrap_or(true);
    if serde_meta.deny_unknown_fields {
        if !deny_unknown {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            )
            .to_compile_error());
        }
        return Ok(quote! {});
    }

    if deny_unknown { Ok(quote! { #[serde(deny_unknown_fields)] }) } else { Ok(quote! {}) }
}

fn serde_meta_info(attrs: &[Attribute]) -> Result<SerdeMetaInfo, TokenStream> {
    let mut rename_all = None;
    let mut deny_unknown_fields = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                rename_all = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                deny_unknown_fields = true;
            }
            Ok(())
        })
        .map_err(|err| err.to_compile_error())?;
    }

    Ok(SerdeMetaInfo { rename_all, deny_unknown_fields })
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.segments.last().map(|seg| seg.ident.to_string()) {
                traits.insert(ident);
            }
            Ok(())
        });
    }

    traits
}
