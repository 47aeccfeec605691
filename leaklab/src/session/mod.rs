mod config;
mod errors;
mod store;
mod types;

pub use config::SESSION_TTL;
pub use errors::SessionError;
pub use store::{
    create_session, delete_session, get_session_identity, replace_session_identity,
};
pub use types::SessionIdentity;
