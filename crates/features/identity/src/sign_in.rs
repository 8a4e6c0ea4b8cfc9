//! Hosted sign-in (authorization code + PKCE) for the admin portal.

use crate::error::{IdentityError, IdentityErrorExt};
use crate::pkce::{CHALLENGE_METHOD, PkcePair};
use sprouts_domain::config::IdentityConfig;
use url::Url;

const AUTHORIZE_PATH: &str = "/oauth2/authorize";
const DEFAULT_SCOPES: [&str; 3] = ["openid", "email", "profile"];

/// Human-readable list of missing identity settings; empty when complete.
pub fn config_errors(config: &IdentityConfig) -> Vec<String> {
    let checks = [
        ("identity.domain", &config.domain),
        ("identity.client_id", &config.client_id),
        ("identity.redirect_uri", &config.redirect_uri),
    ];

    checks
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(key, _)| format!("{key} is missing."))
        .collect()
}

/// Adds `https://` when no scheme is given and trims trailing slashes.
pub fn normalize_domain(domain: &str) -> Option<String> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return None;
    }

    let with_scheme =
        if trimmed.starts_with("http") { trimmed.to_owned() } else { format!("https://{trimmed}") };
    Some(with_scheme.trim_end_matches('/').to_owned())
}

/// Fully configured hosted sign-in client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInClient {
    pub domain: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
}

impl SignInClient {
    /// # Errors
    /// [`IdentityError::Config`] listing every missing setting, or
    /// [`IdentityError::Url`] when the domain or redirect URI does not parse.
    pub fn from_config(config: &IdentityConfig) -> Result<Self, IdentityError> {
        let errors = config_errors(config);
        if !errors.is_empty() {
            return Err(IdentityError::Config { message: errors.join(" ").into(), context: None });
        }

        let domain = normalize_domain(config.domain.as_deref().unwrap_or_default()).unwrap_or_default();
        let redirect_uri = config.redirect_uri.as_deref().unwrap_or_default().trim().to_owned();

        Url::parse(&domain).context("identity.domain")?;
        Url::parse(&redirect_uri).context("identity.redirect_uri")?;

        let scopes = if config.scopes.is_empty() {
            DEFAULT_SCOPES.into_iter().map(str::to_owned).collect()
        } else {
            config.scopes.iter().map(|s| s.trim().to_owned()).filter(|s| !s.is_empty()).collect()
        };

        Ok(Self {
            domain,
            client_id: config.client_id.as_deref().unwrap_or_default().trim().to_owned(),
            redirect_uri,
            scopes,
        })
    }

    /// Authorization URL carrying `pair`'s challenge and the caller's `state`.
    ///
    /// # Errors
    /// [`IdentityError::Url`] if the domain stopped being a valid base URL.
    pub fn authorize_url(&self, pair: &PkcePair, state: &str) -> Result<Url, IdentityError> {
        let mut url = Url::parse(&format!("{}{AUTHORIZE_PATH}", self.domain)).context("authorize URL")?;

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", &self.scopes.join(" "))
            .append_pair("state", state)
            .append_pair("code_challenge", &pair.challenge)
            .append_pair("code_challenge_method", CHALLENGE_METHOD);

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IdentityConfig {
        IdentityConfig {
            domain: Some(" auth.evolvesprouts.com/ ".into()),
            client_id: Some("admin-portal".into()),
            redirect_uri: Some("https://admin.evolvesprouts.com/callback".into()),
            scopes: Vec::new(),
        }
    }

    #[test]
    fn reports_every_missing_setting() {
        let errors = config_errors(&IdentityConfig { client_id: Some("  ".into()), ..IdentityConfig::default() });
        assert_eq!(
            errors,
            vec![
                "identity.domain is missing.",
                "identity.client_id is missing.",
                "identity.redirect_uri is missing."
            ]
        );
        assert!(config_errors(&config()).is_empty());
    }

    #[test]
    fn normalizes_domains() {
        assert_eq!(normalize_domain("auth.example.com//").as_deref(), Some("https://auth.example.com"));
        assert_eq!(normalize_domain("http://localhost:9229/").as_deref(), Some("http://localhost:9229"));
        assert_eq!(normalize_domain("   "), None);
    }

    #[test]
    fn incomplete_config_is_rejected() {
        let err = SignInClient::from_config(&IdentityConfig::default()).unwrap_err();
        assert!(matches!(err, IdentityError::Config { .. }));
    }

    #[test]
    fn authorize_url_carries_challenge() {
        let client = SignInClient::from_config(&config()).unwrap();
        let pair = PkcePair::from_verifier("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
        let url = client.authorize_url(&pair, "xyz").unwrap();

        assert_eq!(url.host_str(), Some("auth.evolvesprouts.com"));
        assert_eq!(url.path(), "/oauth2/authorize");

        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let get = |key: &str| query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
        assert_eq!(get("code_challenge"), Some("E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"));
        assert_eq!(get("code_challenge_method"), Some("S256"));
        assert_eq!(get("scope"), Some("openid email profile"));
        assert_eq!(get("state"), Some("xyz"));
    }
}
