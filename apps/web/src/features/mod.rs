//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while keeping security and API handling
//! in dedicated feature areas.

pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod beneficiaries;
pub(crate) mod kyc;
pub(crate) mod me;
pub(crate) mod support;
pub(crate) mod transactions;
pub(crate) mod transfers;
pub(crate) mod wallet;
