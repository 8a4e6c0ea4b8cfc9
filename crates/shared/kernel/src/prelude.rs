//! Common imports for feature crates.

pub use crate::config::{ConfigError, load_config};
pub use crate::security::links::{HrefKind, href_kind, is_external_href, is_http_href};
pub use crate::site::PublicSiteLinks;
pub use crate::submission::{SubmissionError, SubmissionResult};
pub use crate::ui::scroll_lock::{BodyScrollLock, ScrollLockGuard};
pub use sprouts_domain::config::SiteConfig;
pub use sprouts_domain::registry::{FeatureSlice, InitializedSlice};
pub use sprouts_domain::{Direction, Locale, RouteVisibility};

#[cfg(feature = "server")]
pub use crate::server::state::{SiteState, SiteStateError};
