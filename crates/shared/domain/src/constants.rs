//! OpenAPI tags and site-wide identifiers.

pub const SYSTEM_TAG: &str = "System";
pub const LOCALE_TAG: &str = "Locale";
pub const SEO_TAG: &str = "SEO";
pub const BOOKING_TAG: &str = "Booking";
pub const IDENTITY_TAG: &str = "Identity";

pub const SITE_NAME: &str = "Evolve Sprouts";
pub const DEFAULT_ORIGIN: &str = "https://www.evolvesprouts.com";
pub const DEFAULT_HOST: &str = "www.evolvesprouts.com";
