//! Auth session state and context for the frontend. The provider restores
//! the persisted session once on mount, verifies the stored token against
//! the API, and exposes derived auth signals for guards and routes. The
//! bearer token lives in `localStorage`; never log it.

use crate::app_lib::errors::AppError;
use crate::features::auth::{
    client,
    session::{Session, browser_store},
    types::{
        AuthPayload, ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
        User,
    },
};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
    /// True until the persisted session has been restored and verified.
    pub loading: RwSignal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided signals.
    fn new(session: RwSignal<Option<Session>>, loading: RwSignal<bool>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
            loading,
        }
    }

    /// Current user profile, if signed in.
    pub fn user(&self) -> Option<User> {
        self.session
            .with(|session| session.as_ref().map(|session| session.user.clone()))
    }

    /// Creates an account and signs it in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, AppError> {
        let payload = client::register(request).await?;
        self.apply_auth(&payload)
    }

    /// Signs in with email and password.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, AppError> {
        let payload = client::login(request).await?;
        self.apply_auth(&payload)
    }

    /// Refreshes the profile from the API. Failures propagate without
    /// touching the current session; callers decide whether to sign out.
    pub async fn refresh_current_user(&self) -> Result<User, AppError> {
        let user = client::current_user().await?;
        self.replace_user(user.clone())?;
        Ok(user)
    }

    /// Saves profile changes and updates the stored user.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, AppError> {
        let user = client::update_profile(request).await?;
        self.replace_user(user.clone())?;
        Ok(user)
    }

    /// Changes the account password. The current session stays untouched.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<bool, AppError> {
        client::change_password(request).await?;
        Ok(true)
    }

    /// Clears the session in memory and storage. Local only; never fails.
    pub fn logout(&self) {
        browser_store().clear();
        self.session.set(None);
        if cfg!(debug_assertions) {
            leptos::logging::log!("User logged out");
        }
    }

    /// Persists and exposes a freshly issued session pair.
    fn apply_auth(&self, payload: &AuthPayload) -> Result<User, AppError> {
        let session = browser_store().store(payload)?;
        let user = session.user.clone();
        self.session.set(Some(session));
        Ok(user)
    }

    /// Replaces the in-memory and persisted user, keeping the token.
    fn replace_user(&self, user: User) -> Result<(), AppError> {
        browser_store().replace_user(&user)?;
        self.session.update(|session| {
            if let Some(session) = session {
                session.user = user;
            }
        });
        Ok(())
    }
}

/// Provides auth context and restores the persisted session once on mount.
/// The stored token is exposed optimistically, then verified against the
/// API; a failed verification signs the session out again.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(None);
    let loading = RwSignal::new(true);
    let auth = AuthContext::new(session, loading);
    provide_context(auth);

    spawn_local(async move {
        if let Some(saved) = browser_store().load() {
            auth.session.set(Some(saved));
            if let Err(err) = auth.refresh_current_user().await {
                leptos::logging::error!("Token validation failed: {err}");
                auth.logout();
            }
        }
        loading.set(false);
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(None);
        AuthContext::new(session, RwSignal::new(false))
    })
}
