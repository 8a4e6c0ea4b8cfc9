use crate::security::links::{build_whatsapp_href, normalize_email, normalize_public_url};
use serde::Serialize;
use sprouts_domain::config::SocialConfig;

/// Social and contact details that passed normalization and are safe to render.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSiteLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone_number: Option<String>,
}

fn trimmed(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::to_owned)
}

impl PublicSiteLinks {
    pub fn resolve(social: &SocialConfig) -> Self {
        Self {
            instagram_url: normalize_public_url(social.instagram_url.as_deref()),
            linkedin_url: normalize_public_url(social.linkedin_url.as_deref()),
            whatsapp_url: normalize_public_url(social.whatsapp_url.as_deref()),
            contact_email: normalize_email(social.contact_email.as_deref()),
            business_address: trimmed(social.business_address.as_ref()),
            business_phone_number: trimmed(social.business_phone_number.as_ref()),
        }
    }

    /// Profile URLs for the `sameAs` list of structured data.
    pub fn same_as(&self) -> Vec<&str> {
        [&self.instagram_url, &self.linkedin_url, &self.whatsapp_url]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .collect()
    }

    pub fn whatsapp_href(&self, message: Option<&str>) -> String {
        build_whatsapp_href(self.whatsapp_url.as_deref(), message)
    }

    pub fn mailto_href(&self) -> Option<String> {
        self.contact_email.as_ref().map(|email| format!("mailto:{email}"))
    }
}
