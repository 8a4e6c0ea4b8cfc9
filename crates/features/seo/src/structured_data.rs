//! schema.org JSON-LD for localized pages.
//!
//! Builders produce plain `serde_json` values; empty strings, arrays and objects are
//! compacted away so optional configuration never yields blank properties.

use crate::metadata::PageMetadata;
use crate::routes::Route;
use serde_json::{Map, Value, json};
use sprouts_domain::Locale;
use sprouts_kernel::site::PublicSiteLinks;
use sprouts_locale::SiteContent;

const SCHEMA_CONTEXT: &str = "https://schema.org";
const DEFAULT_LOGO_PATH: &str = "/images/evolvesprouts-logo.svg";

/// Drops nulls, blank strings, and arrays or objects left empty after compaction.
pub fn compact(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::Array(items) => {
            let items: Vec<Value> = items.into_iter().filter_map(compact).collect();
            (!items.is_empty()).then_some(Value::Array(items))
        },
        Value::Object(object) => {
            let object: Map<String, Value> =
                object.into_iter().filter_map(|(k, v)| compact(v).map(|v| (k, v))).collect();
            (!object.is_empty()).then_some(Value::Object(object))
        },
        other => Some(other),
    }
}

fn compact_object(value: Value) -> Value {
    compact(value).unwrap_or_else(|| Value::Object(Map::new()))
}

/// Absolute URLs and shared inputs for a site's schemas.
#[derive(Debug, Clone, Copy)]
pub struct SchemaContext<'a> {
    pub origin: &'a str,
    pub locale: Locale,
    pub content: &'a SiteContent,
    pub links: &'a PublicSiteLinks,
}

impl SchemaContext<'_> {
    fn organization_id(&self) -> String {
        format!("{}#organization", self.origin)
    }

    fn url(&self, route: Route) -> String {
        PageMetadata::absolute(self.origin, &route.localized(self.locale))
    }

    fn logo(&self) -> String {
        PageMetadata::absolute(self.origin, DEFAULT_LOGO_PATH)
    }

    pub fn organization(&self) -> Value {
        compact_object(json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Organization",
            "@id": self.organization_id(),
            "name": self.content.navbar.brand,
            "url": self.url(Route::Home),
            "logo": self.logo(),
            "description": self.content.seo.organization_description,
            "sameAs": self.links.same_as(),
        }))
    }

    pub fn local_business(&self) -> Value {
        let address = self.links.business_address.as_ref().map(|street| {
            json!({
                "@type": "PostalAddress",
                "streetAddress": street,
                "addressLocality": "Hong Kong",
                "addressCountry": "HK",
            })
        });

        compact_object(json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "LocalBusiness",
            "@id": format!("{}#local-business", self.origin),
            "name": self.content.navbar.brand,
            "description": self.content.seo.organization_description,
            "url": self.url(Route::Home),
            "image": self.logo(),
            "telephone": self.links.business_phone_number,
            "address": address,
            "sameAs": self.links.same_as(),
            "parentOrganization": { "@id": self.organization_id() },
        }))
    }

    pub fn course(&self) -> Value {
        let page = Route::TrainingCourse.page_copy(self.content);
        compact_object(json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Course",
            "@id": format!("{}#course", self.url(Route::TrainingCourse)),
            "name": page.title,
            "description": page.description,
            "url": self.url(Route::TrainingCourse),
            "provider": { "@id": self.organization_id() },
        }))
    }

    /// Breadcrumbs as `(name, route)` pairs, positions starting at 1.
    pub fn breadcrumbs(&self, items: &[(&str, Route)]) -> Value {
        let elements: Vec<Value> = items
            .iter()
            .enumerate()
            .map(|(index, (name, route))| {
                json!({
                    "@type": "ListItem",
                    "position": index + 1,
                    "name": name,
                    "item": self.url(*route),
                })
            })
            .collect();

        compact_object(json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "BreadcrumbList",
            "itemListElement": elements,
        }))
    }
}

/// Serializes a schema for a `<script type="application/ld+json">` block.
pub fn to_script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
