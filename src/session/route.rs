//! Navigation targets and the auth-state guard

use std::fmt;

use super::SessionStore;

/// A navigable view of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Appointments,
    Partners,
    Hubs,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Appointments => "/appointments",
            Route::Partners => "/partners",
            Route::Hubs => "/hubs",
        }
    }

    /// Look up a route by path
    pub fn from_path(path: &str) -> Option<Self> {
        [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::Dashboard,
            Route::Appointments,
            Route::Partners,
            Route::Hubs,
        ]
        .into_iter()
        .find(|r| r.path() == path)
    }

    /// Whether the view needs a logged-in user
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::Appointments | Route::Partners | Route::Hubs
        )
    }

    /// Where a request for `self` actually lands given the session state.
    ///
    /// Anonymous users are sent to `/login` from protected views; logged-in
    /// users skip `/login` and `/register` and land on `/dashboard`.
    pub fn guard(self, session: &SessionStore) -> Route {
        let authenticated = session.is_authenticated();
        match self {
            r if r.is_protected() && !authenticated => Route::Login,
            Route::Login | Route::Register if authenticated => Route::Dashboard,
            r => r,
        }
    }

    /// Redirect issued after a successful login or registration
    pub fn after_login() -> Route {
        Route::Dashboard
    }

    /// Redirect issued after logout
    pub fn after_logout() -> Route {
        Route::Login
    }

    /// Command that renders this view
    pub fn command(self) -> &'static str {
        match self {
            Route::Home | Route::Dashboard => "slotctl dashboard",
            Route::Login => "slotctl login",
            Route::Register => "slotctl register",
            Route::Appointments => "slotctl appointment list",
            Route::Partners => "slotctl partner list",
            Route::Hubs => "slotctl hub list",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
