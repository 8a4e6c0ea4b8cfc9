use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Whether a canonical route is advertised to search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RouteVisibility {
    /// Listed in the sitemap and indexable.
    Indexed,
    /// Reachable but unfinished: kept out of the sitemap and marked `noindex`.
    Placeholder,
}

impl RouteVisibility {
    #[must_use]
    pub const fn is_indexed(self) -> bool {
        matches!(self, Self::Indexed)
    }
}
