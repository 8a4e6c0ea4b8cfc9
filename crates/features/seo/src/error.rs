use std::borrow::Cow;

#[sprouts_derive::sprouts_error]
pub enum SeoError {
    #[error("Invalid site origin{}: {source}", format_context(.context))]
    Origin { source: url::ParseError, context: Option<Cow<'static, str>> },

    #[error("Unsupported site origin{}: {message}", format_context(.context))]
    UnsupportedOrigin { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[cfg(feature = "server")]
    #[error("SEO slice unavailable{}: {source}", format_context(.context))]
    State {
        source: sprouts_kernel::server::SiteStateError,
        context: Option<Cow<'static, str>>,
    },
}
