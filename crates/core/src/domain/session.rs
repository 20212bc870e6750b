use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;
use uuid::Uuid;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@hackathonspain.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const SESSION_TTL_HOURS: i64 = 24;

/// The single credential pair that identifies the administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email.trim() && self.password == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Checking,
    Unauthenticated,
    Authenticated(AdminSession),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&AdminSession> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("admin session required")]
    Unauthenticated,
}

/// Where sessions persist between checks.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, token: &str) -> Option<AdminSession>;
    async fn save(&self, session: AdminSession);
    async fn remove(&self, token: &str) -> Option<AdminSession>;
    /// Drops every session that is no longer valid at `now` and returns how
    /// many were removed.
    async fn prune_expired(&self, now: DateTime<Utc>) -> usize;
}

/// Process-local session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, AdminSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, token: &str) -> Option<AdminSession> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    async fn save(&self, session: AdminSession) {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.token.clone(), session);
    }

    async fn remove(&self, token: &str) -> Option<AdminSession> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
    }

    async fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, session| session.is_valid_at(now));
        before - sessions.len()
    }
}

/// Gates administrative actions behind the configured credential pair.
///
/// Every check resolves the transient [`AuthState::Checking`] state into either
/// `Authenticated` or `Unauthenticated`. Expired sessions are dropped from the
/// store the first time a check sees them, and every login sweeps out the ones
/// nobody checks again.
pub struct SessionGuard<S> {
    credentials: AdminCredentials,
    ttl: TimeDelta,
    store: S,
}

impl<S: SessionStore> SessionGuard<S> {
    pub fn new(credentials: AdminCredentials, store: S) -> Self {
        Self {
            credentials,
            ttl: TimeDelta::hours(SESSION_TTL_HOURS),
            store,
        }
    }

    pub fn with_ttl(mut self, ttl: TimeDelta) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AdminSession, AuthError> {
        if !self.credentials.matches(email, password) {
            return Err(AuthError::InvalidCredentials);
        }

        self.store.prune_expired(now).await;

        let session = AdminSession {
            token: Uuid::new_v4().to_string(),
            email: self.credentials.email().to_string(),
            expires_at: now
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };
        self.store.save(session.clone()).await;

        Ok(session)
    }

    pub async fn check(&self, token: Option<&str>, now: DateTime<Utc>) -> AuthState {
        let Some(token) = token else {
            return AuthState::Unauthenticated;
        };

        match self.store.load(token).await {
            Some(session) if session.is_valid_at(now) => AuthState::Authenticated(session),
            Some(_) => {
                self.store.remove(token).await;
                AuthState::Unauthenticated
            }
            None => AuthState::Unauthenticated,
        }
    }

    /// Returns the session for `token` or [`AuthError::Unauthenticated`].
    pub async fn require(
        &self,
        token: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<AdminSession, AuthError> {
        match self.check(token, now).await {
            AuthState::Authenticated(session) => Ok(session),
            _ => Err(AuthError::Unauthenticated),
        }
    }

    /// Returns whether a session was removed.
    pub async fn logout(&self, token: &str) -> bool {
        self.store.remove(token).await.is_some()
    }
}
