//! The static route table.
//!
//! Every canonical route is either indexed (advertised in the sitemap) or a placeholder
//! (reachable, but unfinished and kept out of search results).

use sprouts_domain::{Locale, RouteVisibility};
use sprouts_locale::content::{PageCopy, SiteContent};
use sprouts_locale::localize_path;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Route {
    Home,
    AboutUs,
    ContactUs,
    Events,
    TrainingCourse,
    Privacy,
    Workshops,
    Terms,
}

pub const INDEXED_ROUTES: [Route; 5] =
    [Route::Home, Route::AboutUs, Route::Events, Route::ContactUs, Route::TrainingCourse];

pub const PLACEHOLDER_ROUTES: [Route; 3] = [Route::Privacy, Route::Workshops, Route::Terms];

impl Route {
    /// Canonical path without a locale prefix.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::AboutUs => "/about-us",
            Self::ContactUs => "/contact-us",
            Self::Events => "/events",
            Self::TrainingCourse => "/services/my-best-auntie-training-course",
            Self::Privacy => "/privacy",
            Self::Workshops => "/services/workshops",
            Self::Terms => "/terms",
        }
    }

    pub const fn visibility(self) -> RouteVisibility {
        match self {
            Self::Privacy | Self::Workshops | Self::Terms => RouteVisibility::Placeholder,
            Self::Home | Self::AboutUs | Self::ContactUs | Self::Events | Self::TrainingCourse => {
                RouteVisibility::Indexed
            },
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::iter().find(|route| route.path() == path)
    }

    pub fn localized(self, locale: Locale) -> String {
        localize_path(self.path(), locale)
    }

    pub const fn page_copy(self, content: &SiteContent) -> &PageCopy {
        let pages = &content.pages;
        match self {
            Self::Home => &pages.home,
            Self::AboutUs => &pages.about_us,
            Self::ContactUs => &pages.contact_us,
            Self::Events => &pages.events,
            Self::TrainingCourse => &pages.training_course,
            Self::Privacy => &pages.privacy,
            Self::Workshops => &pages.workshops,
            Self::Terms => &pages.terms,
        }
    }
}

pub fn indexed_routes() -> impl Iterator<Item = Route> {
    INDEXED_ROUTES.into_iter()
}

pub fn placeholder_routes() -> impl Iterator<Item = Route> {
    PLACEHOLDER_ROUTES.into_iter()
}

/// Where a legacy path points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasTarget {
    Route(Route),
    /// A section anchor on a route, e.g. `/en#resources`.
    Anchor(Route, &'static str),
}

pub const ROUTE_ALIASES: [(&str, AliasTarget); 4] = [
    ("/about", AliasTarget::Route(Route::AboutUs)),
    ("/contact", AliasTarget::Route(Route::ContactUs)),
    ("/book", AliasTarget::Route(Route::TrainingCourse)),
    ("/resources", AliasTarget::Anchor(Route::Home, "resources")),
];

impl AliasTarget {
    pub fn href(self, locale: Locale) -> String {
        match self {
            Self::Route(route) => route.localized(locale),
            Self::Anchor(route, anchor) => format!("{}#{anchor}", route.localized(locale)),
        }
    }
}

/// Localized redirect target when `path` (without locale prefix) is a legacy alias.
pub fn alias_redirect(path: &str, locale: Locale) -> Option<String> {
    ROUTE_ALIASES.iter().find(|(alias, _)| *alias == path).map(|(_, target)| target.href(locale))
}

pub fn resources_hash_path(locale: Locale) -> String {
    AliasTarget::Anchor(Route::Home, "resources").href(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_in_exactly_one_partition() {
        for route in Route::iter() {
            let indexed = INDEXED_ROUTES.contains(&route);
            let placeholder = PLACEHOLDER_ROUTES.contains(&route);

            assert!(indexed ^ placeholder, "{route:?} must be in exactly one partition");
            assert_eq!(route.visibility().is_indexed(), indexed);
        }
        assert_eq!(INDEXED_ROUTES.len() + PLACEHOLDER_ROUTES.len(), Route::iter().len());
    }

    #[test]
    fn paths_are_unique_and_resolvable() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/about"), None);
        assert_eq!(Route::from_path("/services"), None);
    }

    #[test]
    fn aliases_redirect_to_localized_targets() {
        assert_eq!(alias_redirect("/about", Locale::ZhHk).as_deref(), Some("/zh-HK/about-us"));
        assert_eq!(alias_redirect("/contact", Locale::En).as_deref(), Some("/en/contact-us"));
        assert_eq!(
            alias_redirect("/book", Locale::ZhCn).as_deref(),
            Some("/zh-CN/services/my-best-auntie-training-course")
        );
        assert_eq!(alias_redirect("/resources", Locale::En).as_deref(), Some("/en#resources"));
        assert_eq!(alias_redirect("/about-us", Locale::En), None);
    }

    #[test]
    fn aliases_never_shadow_canonical_routes() {
        for (alias, _) in ROUTE_ALIASES {
            assert!(Route::from_path(alias).is_none(), "{alias} shadows a route");
        }
    }

    #[test]
    fn resources_anchor_is_on_localized_home() {
        assert_eq!(resources_hash_path(Locale::ZhHk), "/zh-HK#resources");
    }
}
