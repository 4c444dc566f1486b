//! Route classification shared by the watcher and the route guards.
//!
//! Paths are compared as plain strings against the router's current pathname;
//! the app's route table uses the same constants so the two cannot drift.

use crate::claims::Role;

pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const VERIFY_OTP: &str = "/verify-otp";
    pub const ADMIN_LOGIN: &str = "/admin/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
}

/// Paths reachable without a session. The watcher never redirects away from
/// these while no valid session exists.
pub const PUBLIC_PATHS: &[&str] = &[
    paths::LOGIN,
    paths::REGISTER,
    paths::VERIFY_OTP,
    paths::ADMIN_LOGIN,
];

/// Entry paths a signed-in session is bounced off of, onto its landing route.
pub const ENTRY_PATHS: &[&str] = &[
    paths::LOGIN,
    paths::REGISTER,
    paths::ROOT,
    paths::ADMIN_LOGIN,
];

#[must_use]
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

#[must_use]
pub fn is_entry(path: &str) -> bool {
    ENTRY_PATHS.contains(&path)
}

/// Landing route for a freshly signed-in session.
#[must_use]
pub fn landing(role: Role) -> &'static str {
    match role {
        Role::Admin => paths::ADMIN_DASHBOARD,
        Role::User => paths::DASHBOARD,
    }
}

/// Which guarded tree a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTree {
    Public,
    User,
    Admin,
}

#[must_use]
pub fn classify(path: &str) -> RouteTree {
    if is_public(path) {
        RouteTree::Public
    } else if path == "/admin" || path.starts_with("/admin/") {
        RouteTree::Admin
    } else {
        RouteTree::User
    }
}

/// Where a session with the given role must be redirected when rendering the
/// given path, or `None` when it may stay. Unauthenticated access is not
/// handled here; the watcher owns that redirect.
#[must_use]
pub fn guard_redirect(role: Role, path: &str) -> Option<&'static str> {
    match (classify(path), role) {
        (RouteTree::Admin, Role::User) => Some(paths::DASHBOARD),
        (RouteTree::User, Role::Admin) => Some(paths::ADMIN_DASHBOARD),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_and_entry_sets_match_the_route_table() {
        for path in ["/login", "/register", "/verify-otp", "/admin/login"] {
            assert!(is_public(path), "{path} should be public");
        }
        assert!(!is_public("/dashboard"));
        assert!(is_entry("/"));
        assert!(!is_entry("/verify-otp"));
    }

    #[test]
    fn landing_depends_on_role() {
        assert_eq!(landing(Role::Admin), "/admin/dashboard");
        assert_eq!(landing(Role::User), "/dashboard");
    }

    #[test]
    fn guard_redirects_cross_tree_sessions() {
        assert_eq!(
            guard_redirect(Role::User, "/admin/users"),
            Some("/dashboard")
        );
        assert_eq!(
            guard_redirect(Role::Admin, "/beneficiaries"),
            Some("/admin/dashboard")
        );
        assert_eq!(guard_redirect(Role::User, "/transfer"), None);
        assert_eq!(guard_redirect(Role::Admin, "/admin/fx-rates"), None);
        // public paths are never guarded
        assert_eq!(guard_redirect(Role::User, "/admin/login"), None);
    }
}
