use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Expr, ExprLit, Ident, ItemStruct, Lit, LitStr, Meta, Token};

/// Expands `#[lectio_slice]` / `#[lectio_slice(name = "...")]`.
///
/// Splits `struct Name {..}` into `NameInner` (the fields) and an `Arc`-backed
/// `Name` handle registered as a kernel feature slice under a short name.
pub fn expand_slice(args: TokenStream, input: ItemStruct) -> TokenStream {
    let ItemStruct { attrs, vis, ident: wrapper_ident, generics, fields, semi_token, .. } = input;

    if !generics.params.is_empty() {
        return syn::Error::new_spanned(generics, "lectio_slice does not support generic slices")
            .to_compile_error();
    }

    let name = match parse_slice_name(args) {
        Ok(Some(name)) => name,
        Ok(None) => LitStr::new(&snake_case(&wrapper_ident), wrapper_ident.span()),
        Err(err) => return err,
    };
    let inner_ident = format_ident!("{wrapper_ident}Inner");
    let registry = quote! { ::lectio_kernel::domain::registry };

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner_ident #fields #semi_token

        #[derive(Debug, Clone)]
        #vis struct #wrapper_ident {
            inner: std::sync::Arc<#inner_ident>,
        }

        impl #wrapper_ident {
            /// Name the slice is registered under.
            pub const NAME: &'static str = #name;

            #[must_use]
            pub fn new(inner: #inner_ident) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }
        }

        impl From<#inner_ident> for #wrapper_ident {
            fn from(inner: #inner_ident) -> Self {
                Self::new(inner)
            }
        }

        impl std::ops::Deref for #wrapper_ident {
            type Target = #inner_ident;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl #registry::FeatureSlice for #wrapper_ident {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn name(&self) -> &'static str {
                Self::NAME
            }
        }

        impl From<#wrapper_ident> for #registry::InitializedSlice {
            fn from(slice: #wrapper_ident) -> Self {
                Self::new(slice)
            }
        }
    }
}

fn parse_slice_name(args: TokenStream) -> Result<Option<LitStr>, TokenStream> {
    let parser = Punctuated::<Meta, Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut name = None;
    for meta in metas {
        match meta {
            Meta::NameValue(nv) if nv.path.is_ident("name") => {
                if name.is_some() {
                    return Err(syn::Error::new_spanned(nv, "Duplicate argument").to_compile_error());
                }
                let Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) = &nv.value else {
                    return Err(syn::Error::new_spanned(&nv.value, "`name` expects a string literal")
                        .to_compile_error());
                };
                if lit.value().trim().is_empty() {
                    return Err(
                        syn::Error::new_spanned(lit, "slice name must not be blank").to_compile_error()
                    );
                }
                name = Some(lit.clone());
            },
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "Unsupported argument; expected `name = \"...\"`",
                )
                .to_compile_error());
            },
        }
    }

    Ok(name)
}

/// `Bible` -> `bible`, `VerseIndex` -> `verse_index`.
fn snake_case(ident: &Ident) -> String {
    let mut out = String::new();
    for (i, c) in ident.to_string().chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_are_snake_case() {
        assert_eq!(snake_case(&format_ident!("Bible")), "bible");
        assert_eq!(snake_case(&format_ident!("VerseIndex")), "verse_index");
    }

    #[test]
    fn explicit_name_is_used() {
        let name = parse_slice_name(quote! { name = "scripture" }).unwrap();
        assert_eq!(name.map(|lit| lit.value()), Some("scripture".to_owned()));
        assert!(parse_slice_name(TokenStream::new()).unwrap().is_none());
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse_slice_name(quote! { name = "" }).is_err());
        assert!(parse_slice_name(quote! { name = 3 }).is_err());
        assert!(parse_slice_name(quote! { title = "x" }).is_err());
        assert!(parse_slice_name(quote! { name = "a", name = "b" }).is_err());
    }
}
