//! End-to-end session lifecycle: the store and the watcher driven together
//! the way the frontend drives them, with an injected clock.

use std::rc::Rc;

use auth_session::{
    claims, watcher, Effect, MemoryTokenStore, SessionStore, StoredTokens, TokenStore,
    WatcherInput, WatcherState,
};
use base64ct::{Base64UrlUnpadded, Encoding};

const NOW_MS: i64 = 1_700_000_000_000;
const NOW_SECS: i64 = 1_700_000_000;

fn token(email: &str, role: &str, otp_verified: bool, exp: i64) -> String {
    let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = serde_json::json!({
        "sub": "42",
        "email": email,
        "role": role,
        "otp_verified": otp_verified,
        "exp": exp,
    });
    let payload = Base64UrlUnpadded::encode_string(payload.to_string().as_bytes());
    format!("{header}.{payload}.sig")
}

/// Run one watcher step against the store and apply the session-mutating
/// effects the way the frontend executor does, returning what is left for the
/// host (navigation, notices, timers).
fn step(store: &SessionStore, route: &str, now_ms: i64) -> (WatcherState, Vec<Effect>) {
    let memory = store.access_token();
    let reconciliation = watcher::reconcile(&WatcherInput {
        memory_token: memory.as_deref(),
        stored_tokens: store.stored_tokens(),
        route,
        now_ms,
    });

    let mut remaining = Vec::new();
    for effect in reconciliation.effects {
        match effect {
            Effect::Hydrate(tokens) => store.hydrate(tokens),
            Effect::ClearSession => store.logout(),
            other => remaining.push(other),
        }
    }
    (reconciliation.state, remaining)
}

#[test]
fn reload_restores_a_valid_persisted_session_in_place() {
    let tokens = Rc::new(MemoryTokenStore::default());
    let access = token("amina@inbox.im", "user", true, NOW_SECS + 900);
    tokens.save(&StoredTokens::new(access.clone(), Some("r-1".to_string())));

    let store = SessionStore::new(tokens);

    // First evaluation after mount: hydrate, no navigation.
    let (state, host_effects) = step(&store, "/beneficiaries", NOW_MS);
    assert_eq!(state, WatcherState::Hydrating);
    assert!(host_effects.is_empty());
    assert_eq!(store.access_token().as_deref(), Some(access.as_str()));

    // Re-evaluation settles on the current route and arms the timer.
    let (state, host_effects) = step(&store, "/beneficiaries", NOW_MS);
    assert_eq!(state, WatcherState::Active);
    assert_eq!(
        host_effects,
        vec![Effect::ArmExpiryTimer { delay_ms: 900_000 }]
    );

    // Hydration round-trip is consistent with the token's own expiry claim.
    assert!(!claims::is_expired(&access, NOW_MS));
}

#[test]
fn expired_token_at_mount_clears_and_redirects_once() {
    let tokens = Rc::new(MemoryTokenStore::default());
    tokens.save(&StoredTokens::new(
        token("amina@inbox.im", "user", true, NOW_SECS - 1),
        None,
    ));

    let store = SessionStore::new(tokens);
    let (state, host_effects) = step(&store, "/dashboard", NOW_MS);

    assert_eq!(state, WatcherState::NoSession);
    assert_eq!(
        host_effects,
        vec![
            Effect::Notify(watcher::SESSION_EXPIRED_NOTICE),
            Effect::Navigate("/login"),
        ]
    );
    assert_eq!(store.stored_tokens(), None, "mirror cleared");

    // The follow-up evaluation on /login stays quiet: no further redirect.
    let (state, host_effects) = step(&store, "/login", NOW_MS);
    assert_eq!(state, WatcherState::NoSession);
    assert!(host_effects.is_empty());
}

#[test]
fn expiry_timer_fire_ends_the_session_exactly_once() {
    let tokens = Rc::new(MemoryTokenStore::default());
    let store = SessionStore::new(tokens);
    store.login_succeeded(token("amina@inbox.im", "user", true, NOW_SECS + 2), None);

    let (_, host_effects) = step(&store, "/dashboard", NOW_MS);
    assert_eq!(
        host_effects,
        vec![Effect::ArmExpiryTimer { delay_ms: 2_000 }]
    );

    // ~2s later the timer fires; the fired evaluation sees an expired token.
    let fired_at = NOW_MS + 2_000;
    let (state, host_effects) = step(&store, "/dashboard", fired_at);
    assert_eq!(state, WatcherState::Expired);
    assert_eq!(
        host_effects,
        vec![
            Effect::Notify(watcher::SESSION_EXPIRED_NOTICE),
            Effect::Navigate("/login"),
        ]
    );

    // A second logout (e.g. a stale caller) is a no-op.
    store.logout();
    assert_eq!(store.access_token(), None);
}

#[test]
fn otp_gate_holds_until_the_upgraded_token_arrives() {
    let tokens = Rc::new(MemoryTokenStore::default());
    let store = SessionStore::new(tokens);

    // Login succeeded but OTP is not verified yet.
    store.login_succeeded(token("amina@inbox.im", "user", false, NOW_SECS + 900), None);

    let (state, host_effects) = step(&store, "/dashboard", NOW_MS);
    assert_eq!(state, WatcherState::PendingOtp);
    assert_eq!(host_effects, vec![Effect::Navigate("/verify-otp")]);

    // OTP verification exchanges the token for an upgraded pair.
    store.login_succeeded(token("amina@inbox.im", "user", true, NOW_SECS + 900), None);

    let (state, host_effects) = step(&store, "/verify-otp", NOW_MS);
    assert_eq!(state, WatcherState::Active);
    assert_eq!(
        host_effects,
        vec![Effect::ArmExpiryTimer { delay_ms: 900_000 }],
        "verify-otp is not an entry route; the session settles there"
    );

    let (state, _) = step(&store, "/dashboard", NOW_MS);
    assert_eq!(state, WatcherState::Active);
}
