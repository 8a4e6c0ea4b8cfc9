//! Identity feature slice.
//!
//! Generates PKCE pairs and hosted sign-in URLs for the admin portal. The slice always
//! initializes; without complete `identity.*` settings it only hands out PKCE pairs.

mod error;
pub mod pkce;
#[cfg(feature = "server")]
pub mod server;
pub mod sign_in;

pub use crate::error::{IdentityError, IdentityErrorExt};
pub use crate::pkce::{PkcePair, code_challenge};
pub use crate::sign_in::{SignInClient, config_errors, normalize_domain};

use sprouts_domain::config::SiteConfig;
use sprouts_kernel::domain::registry::InitializedSlice;
use tracing::{info, warn};

/// Identity feature state
#[sprouts_derive::sprouts_slice]
pub struct Identity {
    pub client: Option<SignInClient>,
}

/// Initialize the identity feature.
///
/// # Errors
/// [`IdentityError::Url`] when the settings are complete but not valid URLs.
pub fn init(config: &SiteConfig) -> Result<InitializedSlice, IdentityError> {
    let missing = config_errors(&config.identity);
    let client = if missing.is_empty() {
        Some(SignInClient::from_config(&config.identity)?)
    } else {
        warn!(missing = ?missing, "Hosted sign-in disabled");
        None
    };

    info!(sign_in = client.is_some(), "Identity slice initialized");

    Ok(InitializedSlice::new(Identity::new(IdentityInner { client })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    #[test]
    fn unconfigured_identity_still_initializes() {
        let slice = init(&SiteConfig::default()).unwrap();
        let identity = slice.downcast_ref::<Identity>().unwrap();

        assert_eq!(slice.id, TypeId::of::<Identity>());
        assert!(identity.client.is_none());
    }

    #[test]
    fn invalid_redirect_uri_fails_init() {
        let mut config = SiteConfig::default();
        config.identity.domain = Some("auth.evolvesprouts.com".into());
        config.identity.client_id = Some("admin".into());
        config.identity.redirect_uri = Some("not a url".into());

        assert!(matches!(init(&config), Err(IdentityError::Url { .. })));
    }
}
