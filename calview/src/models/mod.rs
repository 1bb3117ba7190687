mod requests;
mod session;

pub use requests::{CallbackParams, FormattedEvent, HealthResponse, DEFAULT_SUMMARY};
pub use session::{CredentialBundle, Session, SESSION_COOKIE};
