//! Injectable session-state container.
//!
//! One `SessionStore` instance owns the in-memory session and the handle to
//! the durable token mirror. Every change goes through a named transition and
//! notifies subscribers with a snapshot, so the UI layer can mirror the state
//! into its own reactive primitives without reaching into the container.
//!
//! Subscriber callbacks receive a snapshot and may trigger further store
//! mutations, but must not call `subscribe`/`unsubscribe` re-entrantly.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::claims::{self, AccessClaims};
use crate::error::AuthError;
use crate::storage::{StoredTokens, TokenStore};

/// Progress of the most recent auth operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// In-memory session state. Cheap to clone; snapshots are handed to
/// subscribers on every transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<AccessClaims>,
    pub status: SessionStatus,
    pub error: Option<AuthError>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

pub type SubscriptionId = usize;

type Subscriber = Box<dyn Fn(&Session)>;

/// Holds the session and the durable token mirror.
pub struct SessionStore {
    session: RefCell<Session>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<SubscriptionId>,
    tokens: Rc<dyn TokenStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            session: RefCell::new(Session::default()),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            tokens,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.session.borrow().access_token.clone()
    }

    /// Read the persisted mirror. Used by the watcher during hydration; the
    /// store itself never hydrates spontaneously.
    #[must_use]
    pub fn stored_tokens(&self) -> Option<StoredTokens> {
        self.tokens.load()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&Session) + 'static) -> SubscriptionId {
        let id = self.next_subscription.get();
        self.next_subscription.set(id + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .borrow_mut()
            .retain(|(candidate, _)| *candidate != id);
    }

    /// Mark an auth operation as in flight and clear the previous error.
    pub fn begin(&self) {
        self.mutate(|session| {
            session.status = SessionStatus::Loading;
            session.error = None;
        });
    }

    /// Record a successful token exchange: persist the pair, load it into
    /// memory, and derive the user claims from the access token.
    pub fn login_succeeded(&self, access: String, refresh: Option<String>) {
        self.tokens
            .save(&StoredTokens::new(access.clone(), refresh.clone()));

        let user = match claims::decode(&access) {
            Ok(claims) => Some(claims),
            Err(err) => {
                // The watcher will clean this up as an unusable token.
                log::warn!("access token from server did not decode: {err}");
                None
            }
        };

        self.mutate(|session| {
            session.access_token = Some(access.clone());
            session.refresh_token = refresh.clone();
            session.user = user.clone();
            session.status = SessionStatus::Succeeded;
            session.error = None;
        });
    }

    /// Record a failed auth operation. Tokens are left untouched.
    pub fn login_failed(&self, error: AuthError) {
        self.mutate(|session| {
            session.status = SessionStatus::Failed;
            session.error = Some(error.clone());
        });
    }

    /// Load a persisted token pair into memory and re-derive the user claims.
    /// Durable storage is the source here, not the target, so it is not
    /// written back.
    pub fn hydrate(&self, tokens: StoredTokens) {
        let user = claims::decode(&tokens.access).ok();
        self.mutate(|session| {
            session.access_token = Some(tokens.access.clone());
            session.refresh_token = tokens.refresh.clone();
            session.user = user.clone();
            session.status = SessionStatus::Succeeded;
            session.error = None;
        });
    }

    /// Clear the session and the persisted mirror. Idempotent.
    pub fn logout(&self) {
        self.tokens.clear();
        self.mutate(|session| {
            *session = Session::default();
        });
    }

    /// Applies a transition and notifies subscribers if the session actually
    /// changed. No-op transitions (a second `logout`, re-clearing an empty
    /// session) stay silent, which keeps watcher-driven clears from
    /// re-triggering themselves.
    fn mutate(&self, apply: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.session.borrow_mut();
            let previous = session.clone();
            apply(&mut session);
            if *session == previous {
                return;
            }
            session.clone()
        };

        for (_, subscriber) in self.subscribers.borrow().iter() {
            subscriber(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::test_tokens::user_token;
    use crate::error::{AuthError, AuthErrorKind};
    use crate::storage::MemoryTokenStore;

    const NOW_SECS: i64 = 1_700_000_000;

    /// Token store that counts writes, to prove hydration never writes back.
    #[derive(Default)]
    struct CountingTokenStore {
        inner: MemoryTokenStore,
        saves: Cell<usize>,
        clears: Cell<usize>,
    }

    impl TokenStore for CountingTokenStore {
        fn load(&self) -> Option<StoredTokens> {
            self.inner.load()
        }

        fn save(&self, tokens: &StoredTokens) {
            self.saves.set(self.saves.get() + 1);
            self.inner.save(tokens);
        }

        fn clear(&self) {
            self.clears.set(self.clears.get() + 1);
            self.inner.clear();
        }
    }

    fn store_with_counters() -> (SessionStore, Rc<CountingTokenStore>) {
        let tokens = Rc::new(CountingTokenStore::default());
        (SessionStore::new(tokens.clone()), tokens)
    }

    #[test]
    fn login_success_persists_and_derives_user() {
        let (store, tokens) = store_with_counters();
        let access = user_token("amina@inbox.im", true, NOW_SECS + 600);

        store.begin();
        store.login_succeeded(access.clone(), Some("refresh-1".to_string()));

        let session = store.snapshot();
        assert_eq!(session.access_token.as_deref(), Some(access.as_str()));
        assert_eq!(session.status, SessionStatus::Succeeded);
        assert_eq!(
            session.user.expect("claims").email,
            "amina@inbox.im"
        );
        assert_eq!(tokens.saves.get(), 1);
        assert_eq!(
            tokens.load(),
            Some(StoredTokens::new(access, Some("refresh-1".to_string())))
        );
    }

    #[test]
    fn login_failure_leaves_tokens_untouched() {
        let (store, tokens) = store_with_counters();
        let access = user_token("amina@inbox.im", true, NOW_SECS + 600);
        store.login_succeeded(access.clone(), None);

        store.login_failed(AuthError::new(AuthErrorKind::Login, "Invalid credentials"));

        let session = store.snapshot();
        assert_eq!(session.status, SessionStatus::Failed);
        assert_eq!(
            session.error.expect("error").message,
            "Invalid credentials"
        );
        assert_eq!(session.access_token.as_deref(), Some(access.as_str()));
        assert_eq!(tokens.clears.get(), 0);
    }

    #[test]
    fn hydrate_reads_storage_without_writing() {
        let (store, tokens) = store_with_counters();
        let access = user_token("amina@inbox.im", true, NOW_SECS + 600);
        tokens.inner.save(&StoredTokens::new(access.clone(), None));

        let stored = store.stored_tokens().expect("stored tokens");
        store.hydrate(stored);

        let session = store.snapshot();
        assert_eq!(session.access_token.as_deref(), Some(access.as_str()));
        assert!(session.user.is_some());
        assert_eq!(tokens.saves.get(), 0, "hydration must not write storage");
    }

    #[test]
    fn logout_is_idempotent() {
        let (store, tokens) = store_with_counters();
        store.login_succeeded(user_token("amina@inbox.im", true, NOW_SECS + 600), None);

        store.logout();
        store.logout();

        assert_eq!(store.snapshot(), Session::default());
        assert_eq!(tokens.load(), None);
    }

    #[test]
    fn subscribers_see_every_transition_until_unsubscribed() {
        let (store, _) = store_with_counters();
        let seen: Rc<RefCell<Vec<SessionStatus>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let id = store.subscribe(move |session| sink.borrow_mut().push(session.status));

        store.begin();
        store.login_failed(AuthError::new(AuthErrorKind::Login, "nope"));
        store.unsubscribe(id);
        store.logout();

        assert_eq!(
            *seen.borrow(),
            vec![SessionStatus::Loading, SessionStatus::Failed]
        );
    }

    #[test]
    fn no_op_transitions_stay_silent() {
        let (store, _) = store_with_counters();
        let notifications = Rc::new(Cell::new(0usize));
        let sink = notifications.clone();
        store.subscribe(move |_| sink.set(sink.get() + 1));

        // Clearing an already-empty session changes nothing.
        store.logout();
        assert_eq!(notifications.get(), 0);

        store.begin();
        assert_eq!(notifications.get(), 1);
        // Re-entering the same state is silent too.
        store.begin();
        assert_eq!(notifications.get(), 1);
    }

    #[test]
    fn undecodable_server_token_yields_no_user() {
        let (store, _) = store_with_counters();
        store.login_succeeded("garbage".to_string(), None);

        let session = store.snapshot();
        assert!(session.user.is_none());
        // Token is still stored; the watcher decides what happens next.
        assert_eq!(session.access_token.as_deref(), Some("garbage"));
    }
}
