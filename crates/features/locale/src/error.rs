use std::borrow::Cow;

/// Errors of the locale slice.
#[sprouts_derive::sprouts_error]
pub enum LocaleError {
    /// A route or API parameter named a locale outside the supported set.
    #[error("Unsupported locale{}: {code}", format_context(.context))]
    UnsupportedLocale { code: String, context: Option<Cow<'static, str>> },

    /// An embedded content bundle failed to parse.
    #[error("Content bundle error{}: {source}", format_context(.context))]
    Content { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// A content bundle parsed but is unusable.
    #[error("Content validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[cfg(feature = "server")]
    #[error("Locale slice unavailable{}: {source}", format_context(.context))]
    State {
        source: sprouts_kernel::server::SiteStateError,
        context: Option<Cow<'static, str>>,
    },
}
