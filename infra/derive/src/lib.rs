#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Lectio crates: error enums with context and
//! status codes, API models, `OpenAPI`-aware handlers and feature slices.
//!
//! See each macro's docstring for examples; they are `ignore`d because they only
//! compile inside crates that depend on `thiserror`, `serde` or `utoipa`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Defines a standard API data model.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize` and `Deserialize` when missing.
/// * **`OpenAPI`**: `utoipa::ToSchema` under the `server` feature, or
///   `utoipa::IntoParams` (query parameters) when `params` is given.
/// * **Serde Policy**: `rename_all = "camelCase"` and `deny_unknown_fields` by default.
///
/// # Arguments
///
/// * `params` - Documents the struct as query parameters instead of a schema.
/// * `rename_all = "snake_case"` - Overrides the default Serde rename policy.
/// * `deny_unknown_fields = false` - Disables strict field checking.
///
/// # Example
///
/// ```rust,ignore
/// use lectio_derive::api_model;
///
/// #[api_model(params, deny_unknown_fields = false)]
/// pub struct LookupQuery {
///     pub book: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Bridges an Axum handler with `OpenAPI` documentation.
///
/// Accepts standard `utoipa::path` arguments (`get`, `path = "..."`, `params(...)`,
/// `responses(...)`, `tag = ...`) and registers them when the `server` feature is on.
///
/// # Example
///
/// ```rust,ignore
/// use lectio_derive::api_handler;
///
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health_handler() -> Json<HealthResponse> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a fully wired error type.
///
/// # Features
///
/// * **Automatic Derives**: `Debug` and `thiserror::Error`.
/// * **Context Support**: a companion `<Name>Ext` trait adding `.context(..)` to
///   `Result<T, Name>` and to `Result<T, Source>` for every source-carrying variant.
/// * **Standard Conversions**: `From<Source>` for variants with a `source` field.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an
///   `Internal` variant exists.
/// * **Status Codes**: `#[status(404)]` fixes a variant's code, `#[status(field)]`
///   reads it from a `u16` field. With any annotation present the enum gains
///   `status_code(&self) -> u16`; unannotated variants answer 500.
///
/// # Requirements
///
/// 1. Only enums with named-field variants are accepted.
/// 2. A `context` field must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use lectio_derive::lectio_error;
/// use std::borrow::Cow;
///
/// #[lectio_error]
/// pub enum LookupError {
///     #[status(404)]
///     #[error("Not found{}: {message}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[status(status)]
///     #[error("Upstream failed{}: {source}", format_context(.context))]
///     Upstream { status: u16, source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn lectio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Defines a vertical slice handle.
///
/// Generates `<Name>Inner` holding the fields, an `Arc` wrapper with `Deref` and
/// `From<NameInner>`, and the kernel `FeatureSlice` registration. The slice is
/// registered as `name = "..."`, or the snake-cased struct name by default.
///
/// # Example
/// ```rust,ignore
/// #[lectio_derive::lectio_slice]
/// pub struct Bible {
///     pub upstream: String,
/// }
///
/// let slice = Bible::from(BibleInner { upstream: "https://example.org".to_owned() });
/// assert_eq!(Bible::NAME, "bible");
/// let registered: InitializedSlice = slice.into();
/// ```
#[proc_macro_attribute]
pub fn lectio_slice(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(attr.into(), input).into()
}
