//! Server-rendered HTML shell for localized pages.

use crate::metadata::PageMetadata;
use crate::structured_data::to_script_json;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::Value;
use sprouts_locale::document::DOCUMENT_SCRIPT_PATH;
use sprouts_locale::{PageContext, localize_href};

/// Everything rendered into one page.
#[derive(Debug, Clone)]
pub struct PageDocument<'a> {
    pub origin: &'a str,
    pub page: PageContext<'a>,
    pub metadata: &'a PageMetadata,
    pub heading: &'a str,
    pub schemas: Vec<Value>,
}

impl PageDocument<'_> {
    pub fn render(&self) -> String {
        let locale = self.page.locale;
        let content = self.page.content;

        html! {
            (DOCTYPE)
            html lang=(locale.as_str()) dir=(self.page.direction.as_str()) {
                (self.head())
                body {
                    noscript { p { (content.noscript.message) } }
                    header {
                        nav {
                            a href=(localize_href("/", locale)) { (content.navbar.brand) }
                            @for item in &content.navbar.menu_items {
                                a href=(localize_href(&item.href, locale)) { (item.label) }
                            }
                            a href=(localize_href(&content.navbar.book_now.href, locale)) {
                                (content.navbar.book_now.label)
                            }
                        }
                    }
                    main {
                        h1 { (self.heading) }
                        p { (self.metadata.description) }
                    }
                    footer {
                        @for group in content.footer.groups() {
                            section {
                                h2 { (group.title) }
                                @for item in &group.items {
                                    a href=(localize_href(&item.href, locale)) { (item.label) }
                                }
                            }
                        }
                        p { (content.footer.copyright) }
                    }
                }
            }
        }
        .into_string()
    }

    fn head(&self) -> Markup {
        let meta = self.metadata;

        html! {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                meta name="robots" content=(meta.robots.to_string());
                link rel="canonical" href=(PageMetadata::absolute(self.origin, &meta.canonical));
                @for alternate in &meta.alternates {
                    link rel="alternate"
                        hreflang=(alternate.hreflang)
                        href=(PageMetadata::absolute(self.origin, &alternate.href));
                }
                script src=(DOCUMENT_SCRIPT_PATH) {}
                @for schema in &self.schemas {
                    script type="application/ld+json" { (PreEscaped(to_script_json(schema))) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::build_localized_metadata;
    use serde_json::json;
    use sprouts_domain::{Locale, RouteVisibility};
    use sprouts_locale::{ContentCatalog, resolve_page_context};

    fn render(heading: &str, title: &str, schemas: Vec<Value>) -> String {
        let catalog = ContentCatalog::embedded().unwrap();
        let page = resolve_page_context(&catalog, "zh-HK").unwrap();
        let metadata = build_localized_metadata(
            Locale::ZhHk,
            Locale::En,
            "/events",
            title,
            "Upcoming",
            RouteVisibility::Indexed,
        );
        PageDocument {
            origin: "https://www.evolvesprouts.com",
            page,
            metadata: &metadata,
            heading,
            schemas,
        }
        .render()
    }

    #[test]
    fn renders_localized_head_and_navigation() {
        let html = render("Events", "Events & more", vec![json!({ "@type": "Organization" })]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"zh-HK\" dir=\"ltr\">"));
        assert!(html.contains("<title>Events &amp; more</title>"));
        assert!(html.contains("<meta name=\"robots\" content=\"index,follow\">"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://www.evolvesprouts.com/zh-HK/events\">"));
        assert!(html.contains("hreflang=\"x-default\" href=\"https://www.evolvesprouts.com/en/events\""));
        assert!(html.contains("href=\"/zh-HK/about-us\""));
        assert!(html.contains("<script src=\"/scripts/locale-document.js\"></script>"));
        assert!(html.contains("<script type=\"application/ld+json\">{\"@type\":\"Organization\"}</script>"));
    }

    #[test]
    fn escapes_text_but_keeps_json_ld_raw() {
        let html = render(
            "<b>Sprouts</b>",
            "Title",
            vec![json!({ "name": "a </script> b" })],
        );

        assert!(html.contains("<h1>&lt;b&gt;Sprouts&lt;/b&gt;</h1>"));
        assert!(!html.contains("<b>Sprouts</b>"));
        assert!(html.contains("\"name\":\"a <\\/script> b\""));
        assert_eq!(html.matches("</script>").count(), 2);
    }
}
