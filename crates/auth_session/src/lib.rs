//! Session and access-token lifecycle for the SwiftSend frontend.
//!
//! The frontend receives a bearer token pair from the API and keeps the access
//! token's decoded claims as the in-memory notion of "who is signed in". This
//! crate owns that lifecycle end to end:
//!
//! - [`claims`] decodes the access token's payload segment and answers expiry
//!   questions. Decoding is deliberately unverified: signature verification is
//!   the server's responsibility on every API call, and the client must not
//!   pretend otherwise.
//! - [`storage`] abstracts the durable token mirror (browser localStorage in
//!   the app, an in-memory slot in tests) behind the [`storage::TokenStore`]
//!   trait.
//! - [`store`] is the injectable session-state container: tokens, derived
//!   claims, request status, and the typed error surfaced to the UI, mutated
//!   only through named transitions and observable through subscriptions.
//! - [`watcher`] is the session watcher expressed as a pure state machine:
//!   given the current tokens, route, and clock it returns the next state and
//!   the effects (hydrate, clear, notify, navigate, arm the expiry timer) the
//!   host must execute.
//! - [`routes`] holds the path classification tables the watcher and the
//!   role-partitioned route guards share.
//!
//! Nothing in this crate touches the network or the browser, so every state
//! transition is testable natively with an injected clock.

pub mod claims;
pub mod error;
pub mod routes;
pub mod storage;
pub mod store;
pub mod watcher;

pub use claims::{AccessClaims, Role};
pub use error::{AuthError, AuthErrorKind, TokenError};
pub use storage::{MemoryTokenStore, StoredTokens, TokenStore};
pub use store::{Session, SessionStatus, SessionStore};
pub use watcher::{Effect, Reconciliation, WatcherInput, WatcherState};
