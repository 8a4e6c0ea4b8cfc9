use crate::constants::{DEFAULT_HOST, DEFAULT_ORIGIN};
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level site configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub server: ServerConfig,
    pub site: SiteSection,
    pub social: SocialConfig,
    pub booking: BookingConfig,
    pub identity: IdentityConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into slices.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl SiteConfig {
    #[must_use]
    pub fn new(inner: SiteConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Public site identity used for canonical URLs, the sitemap and robots.txt.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Absolute origin without a trailing slash, e.g. `https://www.evolvesprouts.com`.
    pub origin: String,
    pub host: String,
    pub default_locale: Locale,
}

/// Social and contact details. Blank or malformed values are treated as absent.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub whatsapp_url: Option<String>,
    pub contact_email: Option<String>,
    pub business_address: Option<String>,
    pub business_phone_number: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    #[default]
    Percent,
    Amount,
}

/// A discount rule as written in configuration, before normalization.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StaticDiscountRule {
    pub code: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: DiscountKind,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub discounts: Vec<StaticDiscountRule>,
    /// Base URL of the CRM API; must be `https` to be used.
    pub crm_api_base_url: Option<String>,
}

/// Hosted sign-in (`OAuth2` authorization code + PKCE) settings for the admin portal.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub domain: Option<String>,
    pub client_id: Option<String>,
    pub redirect_uri: Option<String>,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_owned(),
            host: DEFAULT_HOST.to_owned(),
            default_locale: Locale::En,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            discounts: vec![StaticDiscountRule {
                code: "SPROUTS10".to_owned(),
                kind: DiscountKind::Percent,
                value: 10.0,
            }],
            crm_api_base_url: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, path: None }
    }
}
