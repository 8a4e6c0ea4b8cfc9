mod health;
pub mod response;
pub mod router;
pub mod state;

pub use response::{ErrorBody, error_response};
pub use router::system_router;
pub use state::{SiteState, SiteStateBuilder, SiteStateError};
