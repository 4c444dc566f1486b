//! Auth feature module covering credential login, Google credential exchange,
//! registration, the OTP gate, and session hydration. It keeps authentication
//! logic out of the UI and must avoid logging secrets or token material.
//!
//! Flow overview: a password login returns a token pair whose access token may
//! still require OTP verification; the session watcher holds the session on
//! the verification route until the upgraded pair arrives. Reloads hydrate the
//! session from the localStorage mirror without re-authenticating.

pub(crate) mod client;
mod guards;
pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod types;
pub(crate) mod validate;
pub(crate) mod watcher;

pub(crate) use guards::RoleGuard;
