//! Key lifecycle management for Satchel.
//!
//! Sits between the crypto primitives and the request-handling layer:
//!
//! - [`MasterKeyProvider`] loads the process-wide master secret from
//!   deployment configuration once at startup and hands it out by
//!   reference. A missing or malformed secret is a construction-time
//!   error, so a process that cannot decrypt PII refuses to serve it.
//! - [`manager`] provisions a fresh wrapped key at registration and
//!   unwraps it again at login.
//! - [`SessionKeyCache`] binds the unwrapped key to the authenticated
//!   session for its lifetime and drops it at logout.

mod error;
pub mod manager;
mod master;
mod session;

pub use error::{KeyringError, KeyringResult};
pub use manager::{ProvisionedKey, provision_for_new_user, unwrap_for_login};
pub use master::MasterKeyProvider;
pub use session::SessionKeyCache;
