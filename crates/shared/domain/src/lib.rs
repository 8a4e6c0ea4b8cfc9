//! # Domain Models
//!
//! Pure types shared by every slice: supported locales, text direction, route visibility
//! and the site configuration tree. Dependencies stay at `serde` and `strum`; no I/O here.

pub mod config;
pub mod constants;
pub mod locale;
pub mod registry;
pub mod route;

pub use locale::{Direction, Locale};
pub use route::RouteVisibility;
