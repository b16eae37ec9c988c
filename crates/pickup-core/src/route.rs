//! View routes and the navigation guard.
//!
//! The guard is a pure predicate evaluated before every view transition; it
//! never mutates state and is re-run with the latest session state on each
//! navigation attempt.

/// The client's view routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Default/root view. Public.
    Login,
    /// Verification-code entry. Public.
    Verification,
    /// Order listing. Protected.
    Orders,
}

/// Default view for an authenticated user.
pub const DEFAULT_AUTHENTICATED_ROUTE: Route = Route::Orders;

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Verification => "/verification",
            Route::Orders => "/orders",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Orders)
    }
}

/// Outcome of the navigation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Proceed to the requested route unmodified.
    Proceed,
    /// Redirect to the given route instead.
    Redirect(Route),
}

/// Decides where a navigation attempt ends up.
///
/// Protected target while unauthenticated redirects to `Login`; the login
/// view while authenticated redirects to the default authenticated view;
/// everything else proceeds.
pub fn decide(target: Route, authenticated: bool) -> NavigationDecision {
    if target.requires_auth() && !authenticated {
        NavigationDecision::Redirect(Route::Login)
    } else if target == Route::Login && authenticated {
        NavigationDecision::Redirect(DEFAULT_AUTHENTICATED_ROUTE)
    } else {
        NavigationDecision::Proceed
    }
}
