//! Navigation guard for session-protected destinations.
//!
//! The router collaborator consults [`NavigationGuard::check`] before
//! completing a navigation. The decision is pure and synchronous, made
//! fresh on every attempted entry — never cached — and consults only the
//! [`SessionStore`](crate::session::SessionStore).

use std::sync::Arc;

use crate::session::SessionStore;

/// Application destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page. Public.
    Home,
    /// Login form. Public.
    Login,
    /// Task list. Protected.
    Tasks,
    /// Task creation form. Protected.
    TaskNew,
}

impl Route {
    /// URL path for this destination.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Tasks => "/tareas",
            Self::TaskNew => "/tareas/nueva",
        }
    }

    /// Whether entry requires an authenticated session.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Tasks | Self::TaskNew)
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The navigation may proceed to the requested destination.
    Allowed(Route),
    /// The navigation is denied; the actor is sent to `redirect` and the
    /// requested destination is discarded (no return-to continuation).
    Denied {
        /// Where to send the actor instead.
        redirect: Route,
    },
}

/// Gate for entry into protected destinations.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    session: Arc<SessionStore>,
}

impl NavigationGuard {
    /// Create a guard reading from the given session store.
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    /// Decide whether a navigation to `route` may proceed.
    pub fn check(&self, route: Route) -> GuardDecision {
        if route.is_protected() && !self.session.is_authenticated() {
            tracing::debug!(requested = route.path(), "navigation denied");
            return GuardDecision::Denied {
                redirect: Route::Login,
            };
        }
        GuardDecision::Allowed(route)
    }
}
