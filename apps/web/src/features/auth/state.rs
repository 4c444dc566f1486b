//! Auth session state and context for the frontend. The provider constructs
//! one session store backed by localStorage and exposes it through context;
//! routes and guards read the reactive session snapshot, while all mutations
//! go through the store's named transitions. Only the session watcher may
//! force a logout-and-redirect; screens report their own failures locally.

use std::rc::Rc;

use auth_session::{
    AuthError, AuthErrorKind, MemoryTokenStore, Session, SessionStore, StoredTokens,
};
use leptos::prelude::*;

use crate::app_lib::AppError;
use crate::features::auth::{
    client,
    storage::BrowserTokenStore,
    types::{GoogleLoginRequest, LoginRequest, TokenPairResponse, VerifyOtpRequest},
};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos. The store itself is not
/// thread-safe, so it lives in arena-local storage; the context handle stays
/// `Copy` for closures.
pub struct AuthContext {
    store: StoredValue<Rc<SessionStore>, LocalStorage>,
    /// Reactive mirror of the store, updated on every transition.
    pub session: RwSignal<Session>,
    /// Watcher-owned notice (session expiry), shown by the app shell.
    pub notice: RwSignal<Option<&'static str>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided store.
    fn new(store: Rc<SessionStore>) -> Self {
        let session = RwSignal::new(store.snapshot());
        store.subscribe(move |snapshot| session.set(snapshot.clone()));
        let is_authenticated = Signal::derive(move || session.get().is_authenticated());

        Self {
            store: StoredValue::new_local(store),
            session,
            notice: RwSignal::new(None),
            is_authenticated,
        }
    }

    fn with_store<R>(&self, read: impl FnOnce(&SessionStore) -> R) -> R {
        self.store.with_value(|store| read(store))
    }

    /// Non-reactive read of the current bearer token, for API calls.
    pub fn access_token(&self) -> Option<String> {
        self.with_store(SessionStore::access_token)
    }

    /// Non-reactive read of the persisted mirror, for the watcher.
    pub fn stored_tokens(&self) -> Option<StoredTokens> {
        self.with_store(SessionStore::stored_tokens)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<TokenPairResponse, AuthError> {
        self.with_store(SessionStore::begin);
        self.settle(AuthErrorKind::Login, client::login(request).await)
    }

    pub async fn google_login(
        &self,
        request: &GoogleLoginRequest,
    ) -> Result<TokenPairResponse, AuthError> {
        self.with_store(SessionStore::begin);
        self.settle(
            AuthErrorKind::GoogleLogin,
            client::google_login(request).await,
        )
    }

    pub async fn admin_login(
        &self,
        request: &LoginRequest,
    ) -> Result<TokenPairResponse, AuthError> {
        self.with_store(SessionStore::begin);
        self.settle(
            AuthErrorKind::AdminLogin,
            client::admin_login(request).await,
        )
    }

    /// Verifies the OTP with the pre-verification token and swaps in the
    /// upgraded pair. Failures surface locally on the verification screen.
    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<(), AppError> {
        let token = self
            .access_token()
            .ok_or_else(|| AppError::Config("No session to verify.".to_string()))?;
        let pair = client::verify_otp(request, &token).await?;
        self.with_store(|store| {
            store.login_succeeded(pair.access_token.clone(), pair.refresh_token.clone());
        });
        Ok(())
    }

    /// Requests a fresh OTP for the current pre-verification session.
    pub async fn resend_otp(&self) -> Result<(), AppError> {
        let token = self
            .access_token()
            .ok_or_else(|| AppError::Config("No session to verify.".to_string()))?;
        client::generate_otp(&token).await?;
        Ok(())
    }

    /// Loads a persisted token pair into the session (watcher hydration).
    pub fn hydrate(&self, tokens: StoredTokens) {
        self.with_store(|store| store.hydrate(tokens.clone()));
    }

    /// Clears the session and the persisted mirror. Safe to call repeatedly.
    pub fn logout(&self) {
        self.with_store(SessionStore::logout);
    }

    fn settle(
        &self,
        kind: AuthErrorKind,
        result: Result<TokenPairResponse, AppError>,
    ) -> Result<TokenPairResponse, AuthError> {
        match result {
            Ok(pair) => {
                self.with_store(|store| {
                    store.login_succeeded(pair.access_token.clone(), pair.refresh_token.clone());
                });
                Ok(pair)
            }
            Err(err) => {
                let error = AuthError::new(kind, err.user_message());
                self.with_store(|store| store.login_failed(error.clone()));
                Err(error)
            }
        }
    }
}

/// Provides the auth context for the whole app.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = Rc::new(SessionStore::new(Rc::new(BrowserTokenStore)));
    provide_context(AuthContext::new(store));

    view! { {children()} }
}

/// Returns the current auth context or a detached in-memory fallback so
/// components render outside the provider.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        AuthContext::new(Rc::new(SessionStore::new(Rc::new(
            MemoryTokenStore::default(),
        ))))
    })
}
