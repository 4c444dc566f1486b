//! Shared frontend utilities for API access, configuration, errors, theming,
//! and build metadata.
//!
//! ## Session model
//!
//! The API issues a bearer access/refresh token pair. The access token is a
//! signed claim set that the client decodes but never verifies; the server
//! re-verifies it on every request. Helpers here attach the token as an
//! `Authorization: Bearer` header when the caller passes one. There is no
//! automatic retry and no refresh-token exchange: a 401 surfaces to the
//! caller, and only the session watcher may force a logout.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated request setup in routes and features. Callers must still avoid
//! logging tokens or other sensitive data.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod format;
pub(crate) mod theme;

pub(crate) use api::{
    delete_json, get_json, get_text, patch_json, post_form, post_json, put_json,
};
pub(crate) use errors::AppError;
