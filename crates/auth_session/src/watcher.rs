//! Session watcher state machine.
//!
//! Re-evaluated on every token or route change (and once at mount), the
//! watcher reconciles the in-memory session against the persisted token
//! mirror and the current route, and tells the host what to do next. It is
//! the single authority allowed to force a logout-and-redirect; screens only
//! report their own failures.
//!
//! The host executes the returned effects in order and owns the expiry timer
//! slot: `ArmExpiryTimer` replaces any previously armed timer, and the slot is
//! dropped on teardown so a stale timer can never log out a newer session.

use crate::claims;
use crate::routes::{self, paths};
use crate::storage::StoredTokens;

/// Notice shown when an expired session forces the user back to login.
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired. Please log in again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    /// No token anywhere; nothing to restore.
    NoSession,
    /// A usable persisted token is being loaded into memory.
    Hydrating,
    /// Valid, OTP-verified session.
    Active,
    /// Valid token whose OTP verification has not happened yet.
    PendingOtp,
    /// A token existed but is expired or unreadable.
    Expired,
}

/// Side effects the host must carry out, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Load the persisted pair into the session store, then re-evaluate.
    Hydrate(StoredTokens),
    /// Clear the session store (and with it the persisted mirror).
    ClearSession,
    /// Surface a user-visible notice.
    Notify(&'static str),
    /// Navigate to the given path.
    Navigate(&'static str),
    /// Arm the single-shot logout timer, replacing any armed one.
    ArmExpiryTimer { delay_ms: i64 },
}

/// Inputs sampled at evaluation time.
#[derive(Debug, Clone)]
pub struct WatcherInput<'a> {
    /// Access token currently held in the session store.
    pub memory_token: Option<&'a str>,
    /// Persisted mirror, if any.
    pub stored_tokens: Option<StoredTokens>,
    /// Current route pathname.
    pub route: &'a str,
    /// Clock, milliseconds since the epoch.
    pub now_ms: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub state: WatcherState,
    pub effects: Vec<Effect>,
}

/// Evaluate one watcher step.
///
/// Decode failures are never fatal: an unreadable token takes the same path
/// as an expired one and degrades to "no session".
#[must_use]
pub fn reconcile(input: &WatcherInput<'_>) -> Reconciliation {
    // Restore a persisted session before judging anything else. Navigation is
    // deliberately withheld here; the re-evaluation after hydration decides
    // where the session belongs.
    if input.memory_token.is_none() {
        if let Some(stored) = &input.stored_tokens {
            if !claims::is_expired(&stored.access, input.now_ms) {
                return Reconciliation {
                    state: WatcherState::Hydrating,
                    effects: vec![Effect::Hydrate(stored.clone())],
                };
            }
        }
    }

    let Some(token) = input.memory_token else {
        return signed_out(WatcherState::NoSession, input.route);
    };

    let Ok(claims) = claims::decode(token) else {
        return signed_out(WatcherState::Expired, input.route);
    };

    if claims.is_expired_at(input.now_ms) {
        return signed_out(WatcherState::Expired, input.route);
    }

    let delay_ms = claims.expires_at_ms() - input.now_ms;

    if !claims.otp_verified {
        if input.route == paths::VERIFY_OTP {
            return Reconciliation {
                state: WatcherState::PendingOtp,
                effects: vec![Effect::ArmExpiryTimer { delay_ms }],
            };
        }
        return Reconciliation {
            state: WatcherState::PendingOtp,
            effects: vec![Effect::Navigate(paths::VERIFY_OTP)],
        };
    }

    if routes::is_entry(input.route) {
        return Reconciliation {
            state: WatcherState::Active,
            effects: vec![Effect::Navigate(routes::landing(claims.role))],
        };
    }

    Reconciliation {
        state: WatcherState::Active,
        effects: vec![Effect::ArmExpiryTimer { delay_ms }],
    }
}

fn signed_out(state: WatcherState, route: &str) -> Reconciliation {
    let mut effects = vec![Effect::ClearSession];
    if !routes::is_public(route) {
        effects.push(Effect::Notify(SESSION_EXPIRED_NOTICE));
        effects.push(Effect::Navigate(paths::LOGIN));
    }
    Reconciliation { state, effects }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::test_tokens::{admin_token, user_token};

    const NOW_MS: i64 = 1_700_000_000_000;
    const NOW_SECS: i64 = 1_700_000_000;

    fn input<'a>(
        memory_token: Option<&'a str>,
        stored_tokens: Option<StoredTokens>,
        route: &'a str,
    ) -> WatcherInput<'a> {
        WatcherInput {
            memory_token,
            stored_tokens,
            route,
            now_ms: NOW_MS,
        }
    }

    #[test]
    fn hydrates_from_storage_without_navigating() {
        let stored = StoredTokens::new(user_token("a@b.c", true, NOW_SECS + 600), None);
        let result = reconcile(&input(None, Some(stored.clone()), "/transfer"));

        assert_eq!(result.state, WatcherState::Hydrating);
        assert_eq!(result.effects, vec![Effect::Hydrate(stored)]);
    }

    #[test]
    fn expired_stored_token_is_not_hydrated() {
        let stored = StoredTokens::new(user_token("a@b.c", true, NOW_SECS - 600), None);
        let result = reconcile(&input(None, Some(stored), "/dashboard"));

        assert_eq!(result.state, WatcherState::NoSession);
        assert_eq!(
            result.effects,
            vec![
                Effect::ClearSession,
                Effect::Notify(SESSION_EXPIRED_NOTICE),
                Effect::Navigate("/login"),
            ]
        );
    }

    #[test]
    fn no_tokens_on_public_route_clears_quietly() {
        let result = reconcile(&input(None, None, "/login"));

        assert_eq!(result.state, WatcherState::NoSession);
        assert_eq!(result.effects, vec![Effect::ClearSession]);
    }

    #[test]
    fn expired_memory_token_forces_login_with_notice() {
        let token = user_token("a@b.c", true, NOW_SECS - 1);
        let result = reconcile(&input(Some(&token), None, "/dashboard"));

        assert_eq!(result.state, WatcherState::Expired);
        assert_eq!(
            result.effects,
            vec![
                Effect::ClearSession,
                Effect::Notify(SESSION_EXPIRED_NOTICE),
                Effect::Navigate("/login"),
            ]
        );
    }

    #[test]
    fn unreadable_memory_token_degrades_to_expired() {
        let result = reconcile(&input(Some("garbage"), None, "/dashboard"));
        assert_eq!(result.state, WatcherState::Expired);
        assert!(result.effects.contains(&Effect::Navigate("/login")));
    }

    #[test]
    fn unverified_otp_redirects_from_any_other_route() {
        let token = user_token("a@b.c", false, NOW_SECS + 600);

        for route in ["/dashboard", "/login", "/", "/beneficiaries"] {
            let result = reconcile(&input(Some(&token), None, route));
            assert_eq!(result.state, WatcherState::PendingOtp, "route {route}");
            assert_eq!(result.effects, vec![Effect::Navigate("/verify-otp")]);
        }
    }

    #[test]
    fn unverified_otp_stays_on_verify_route_with_timer() {
        let token = user_token("a@b.c", false, NOW_SECS + 600);
        let result = reconcile(&input(Some(&token), None, "/verify-otp"));

        assert_eq!(result.state, WatcherState::PendingOtp);
        assert_eq!(
            result.effects,
            vec![Effect::ArmExpiryTimer {
                delay_ms: 600_000
            }]
        );
    }

    #[test]
    fn entry_routes_redirect_to_role_landing() {
        let admin = admin_token(NOW_SECS + 600);
        let result = reconcile(&input(Some(&admin), None, "/login"));
        assert_eq!(result.state, WatcherState::Active);
        assert_eq!(result.effects, vec![Effect::Navigate("/admin/dashboard")]);

        let user = user_token("a@b.c", true, NOW_SECS + 600);
        let result = reconcile(&input(Some(&user), None, "/login"));
        assert_eq!(result.effects, vec![Effect::Navigate("/dashboard")]);
    }

    #[test]
    fn settled_session_arms_the_expiry_timer() {
        let token = user_token("a@b.c", true, NOW_SECS + 2);
        let result = reconcile(&input(Some(&token), None, "/dashboard"));

        assert_eq!(result.state, WatcherState::Active);
        assert_eq!(
            result.effects,
            vec![Effect::ArmExpiryTimer { delay_ms: 2_000 }]
        );
    }

    #[test]
    fn reconcile_is_idempotent_for_a_settled_session() {
        let token = user_token("a@b.c", true, NOW_SECS + 600);
        let first = reconcile(&input(Some(&token), None, "/dashboard"));
        let second = reconcile(&input(Some(&token), None, "/dashboard"));
        assert_eq!(first, second);
    }
}
