//! Client session state: who is logged in and with which role.
//!
//! DESIGN
//! ======
//! `model` holds the value types, `store` owns the single mutable session and
//! its transitions, `provider` is the application-lifetime owner that runs the
//! boot-time restore. The auth backend and token persistence sit behind the
//! traits in `backend` so the whole state machine runs on the host in tests.

pub mod backend;
pub mod model;
pub mod provider;
pub mod store;
#[cfg(test)]
pub(crate) mod testing;

pub use backend::{AuthBackend, Grant, MemoryTokenStore, TokenStore};
pub use model::{Credentials, Identity, Role, Session, SessionStatus};
pub use provider::AuthProvider;
pub use store::{SessionReader, SessionStore, Subscription};
