#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate in the workspace:
//!
//! * [`macro@sprouts_error`] turns an enum into a `thiserror` error with `.context(...)` helpers.
//! * [`macro@sprouts_slice`] wraps a feature state struct into an `Arc` handle that can be
//!   registered in the server state.
//! * [`macro@main`] boots an `async fn main` on a pre-configured Tokio runtime.
//!
//! The examples are `ignore`d because proc-macro crates cannot run their own doctests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the async runtime from `sprouts-runtime`.
///
/// # Arguments
///
/// * `high_performance` - server profile.
/// * `memory_efficient` - small footprint profile for tooling.
/// * `default` or nothing - auto-detected worker threads.
///
/// # Examples
///
/// ```rust,ignore
/// #[sprouts_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines a domain error enum.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant that wraps a `source`.
/// * `From<Source>` for those variants, so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-private `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant with a `source` field must also carry
/// `context: Option<Cow<'static, str>>`. Only one `sprouts_error` enum per module,
/// since `format_context` is emitted next to it.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[sprouts_derive::sprouts_error]
/// pub enum ContentError {
///     #[error("Content parse error{}: {source}", format_context(.context))]
///     Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal content error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(raw: &str) -> Result<serde_json::Value, ContentError> {
///     serde_json::from_str(raw).context("Parsing bundle")
/// }
/// ```
#[proc_macro_attribute]
pub fn sprouts_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The struct body becomes `<Name>Inner`, and `<Name>` becomes a cheap-to-clone
/// `Arc` wrapper that derefs to it and implements `FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[sprouts_derive::sprouts_slice]
/// pub struct Booking {
///     pub rules: Vec<DiscountRule>,
/// }
///
/// let slice = Booking::new(BookingInner { rules: Vec::new() });
/// ```
#[proc_macro_attribute]
pub fn sprouts_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
