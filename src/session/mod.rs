//! Session state for the current client run.
//!
//! [`SessionStore`] is the single source of truth for "is the current
//! actor authenticated". It owns the state exclusively: consumers receive
//! a shared handle and may only read [`SessionStore::is_authenticated`].
//! Credential verification is delegated to an injected
//! [`CredentialsVerifier`] — this module knows nothing about how
//! credentials are checked, only whether a login settled successfully.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Opaque authentication marker returned by a successful login.
///
/// The SDK never inspects its contents; it is stored for forwarding to
/// downstream calls that need an `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    token: String,
}

impl AuthToken {
    /// Wrap a raw token value.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The raw token value.
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Value for an `Authorization` header.
    pub fn to_header_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// External authentication collaborator.
///
/// Implementations verify a username/password pair and resolve to an
/// [`AuthToken`] on success. The store makes exactly one verification
/// attempt per [`SessionStore::login`] call — no retry, no lockout.
#[async_trait]
pub trait CredentialsVerifier: Send + Sync {
    /// Verify the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] when the credentials are rejected.
    async fn verify(&self, username: &str, password: &str) -> Result<AuthToken>;
}

/// Two-state session machine: `Anonymous` (initial) or `Authenticated`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Anonymous,
    Authenticated { token: AuthToken },
}

/// Holder of the authentication state for the current client session.
///
/// Constructed once per client session and shared as a handle
/// (`Arc<SessionStore>`); the navigation guard and view code read it,
/// only `login`/`logout` write it. State is written strictly after the
/// verifier future settles, so a concurrent reader never observes an
/// in-flight login as authenticated.
pub struct SessionStore {
    verifier: Arc<dyn CredentialsVerifier>,
    state: RwLock<SessionState>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore {
    /// Create a store with the given verifier. The session starts
    /// anonymous.
    pub fn new(verifier: Arc<dyn CredentialsVerifier>) -> Self {
        Self {
            verifier,
            state: RwLock::new(SessionState::Anonymous),
        }
    }

    /// Attempt a login. Exactly one verification attempt per call.
    ///
    /// On success the session transitions to authenticated and stores the
    /// returned token. On failure the session is unauthenticated and the
    /// call fails with [`Error::Auth`].
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        match self.verifier.verify(username, password).await {
            Ok(token) => {
                tracing::info!(username, "login succeeded");
                *self.state.write() = SessionState::Authenticated { token };
                Ok(())
            },
            Err(_) => {
                tracing::info!(username, "login failed");
                *self.state.write() = SessionState::Anonymous;
                // Whatever the verifier reported, the contract is a single
                // invalid-credentials failure.
                Err(Error::Auth)
            },
        }
    }

    /// Clear the session. Idempotent: a logout while already anonymous is
    /// a no-op.
    pub fn logout(&self) {
        let mut state = self.state.write();
        if matches!(*state, SessionState::Authenticated { .. }) {
            tracing::info!("session cleared");
        }
        *state = SessionState::Anonymous;
    }

    /// Whether the current actor is authenticated. Pure read; reflects
    /// only settled login/logout transitions.
    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.read(), SessionState::Authenticated { .. })
    }

    /// Snapshot of the current token, if authenticated.
    pub fn token(&self) -> Option<AuthToken> {
        match &*self.state.read() {
            SessionState::Authenticated { token } => Some(token.clone()),
            SessionState::Anonymous => None,
        }
    }
}
