use crate::content::{ContentCatalog, SiteContent};
use crate::error::LocaleError;
use sprouts_domain::{Direction, Locale};

/// What a localized page needs to render.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub locale: Locale,
    pub direction: Direction,
    pub content: &'a SiteContent,
}

/// Resolves the `{locale}` route parameter of a page.
///
/// # Errors
/// [`LocaleError::UnsupportedLocale`] for a parameter outside the supported set; callers
/// answer it with "not found" instead of falling back.
pub fn resolve_page_context<'a>(
    catalog: &'a ContentCatalog,
    param: &str,
) -> Result<PageContext<'a>, LocaleError> {
    let (locale, content) = catalog.content_for(param)?;
    Ok(PageContext { locale, direction: locale.direction(), content })
}

/// Navbar label for `href`, or `fallback`.
pub fn menu_label<'a>(content: &'a SiteContent, href: &str, fallback: &'a str) -> &'a str {
    content
        .navbar
        .menu_items
        .iter()
        .find(|item| item.href == href)
        .map_or(fallback, |item| item.label.as_str())
}

/// First non-blank footer label for `href` across the link groups, or `fallback`.
pub fn footer_link_label<'a>(content: &'a SiteContent, href: &str, fallback: &'a str) -> &'a str {
    content
        .footer
        .groups()
        .into_iter()
        .flat_map(|group| group.items.iter())
        .find(|item| item.href == href && !item.label.is_empty())
        .map_or(fallback, |item| item.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_context_requires_supported_param() {
        let catalog = ContentCatalog::embedded().unwrap();

        let ctx = resolve_page_context(&catalog, "zh-CN").unwrap();
        assert_eq!(ctx.locale, Locale::ZhCn);
        assert_eq!(ctx.direction, Direction::Ltr);
        assert_eq!(ctx.content.navbar.menu_items[0].label, "首页");

        assert!(resolve_page_context(&catalog, "de").is_err());
    }

    #[test]
    fn labels_fall_back_when_missing() {
        let catalog = ContentCatalog::embedded().unwrap();
        let content = catalog.content(Locale::ZhHk);

        assert_eq!(menu_label(content, "/events", "Events"), "活動");
        assert_eq!(menu_label(content, "/terms", "Terms"), "Terms");
        assert_eq!(footer_link_label(content, "/terms", "Terms"), "服務條款");
        assert_eq!(footer_link_label(content, "/services/workshops", "Workshops"), "工作坊");
        assert_eq!(footer_link_label(content, "/missing", "Missing"), "Missing");
    }
}
