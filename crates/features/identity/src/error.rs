use std::borrow::Cow;

/// A specialized [`IdentityError`] enum of this crate.
#[sprouts_derive::sprouts_error]
pub enum IdentityError {
    /// Hosted sign-in is not (fully) configured.
    #[error("Identity config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The configured domain or redirect URI is not a valid URL.
    #[error("Identity URL error{}: {source}", format_context(.context))]
    Url { source: url::ParseError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "server")]
    #[error("Identity slice unavailable{}: {source}", format_context(.context))]
    State {
        source: sprouts_kernel::server::SiteStateError,
        context: Option<Cow<'static, str>>,
    },
}
