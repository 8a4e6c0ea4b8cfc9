use std::borrow::Cow;

#[sprouts_derive::sprouts_error]
pub enum BookingError {
    #[error("Invalid quote request{}: {message}", format_context(.context))]
    InvalidQuote { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid reservation{}: {message}", format_context(.context))]
    InvalidReservation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[cfg(feature = "server")]
    #[error("Booking slice unavailable{}: {source}", format_context(.context))]
    State {
        source: sprouts_kernel::server::SiteStateError,
        context: Option<Cow<'static, str>>,
    },
}
