//! Routing/authorization gate.
//!
//! Pure policy check: given the active identity (or none) and a requested
//! view, decide whether to render it or where to redirect. The presentation
//! layer owns the actual navigation.

use crate::Identity;

/// The views a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Product listing; public.
    Home,
    /// Sign-in form; public.
    Login,
    /// Inventory management; requires an authenticated admin.
    Admin,
}

/// Outcome of a routing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    /// Not signed in but the view requires it.
    RedirectToLogin,
    /// Signed in but missing the required role.
    RedirectToHome,
}

/// Decide how to route `view` for the given identity.
pub fn route(identity: Option<&Identity>, view: View) -> RouteDecision {
    match view {
        View::Home | View::Login => RouteDecision::Render,
        View::Admin => match identity {
            None => RouteDecision::RedirectToLogin,
            Some(identity) if identity.role.is_admin() => RouteDecision::Render,
            Some(_) => RouteDecision::RedirectToHome,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use sugarrush_core::UserId;

    fn identity(role: Role) -> Identity {
        Identity {
            id: UserId::new("test-1"),
            username: "test".to_string(),
            role,
        }
    }

    #[test]
    fn public_views_render_for_everyone() {
        for view in [View::Home, View::Login] {
            assert_eq!(route(None, view), RouteDecision::Render);
            assert_eq!(
                route(Some(&identity(Role::Customer)), view),
                RouteDecision::Render
            );
            assert_eq!(
                route(Some(&identity(Role::Admin)), view),
                RouteDecision::Render
            );
        }
    }

    #[test]
    fn admin_view_redirects_anonymous_callers_to_login() {
        assert_eq!(route(None, View::Admin), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn admin_view_redirects_customers_home() {
        assert_eq!(
            route(Some(&identity(Role::Customer)), View::Admin),
            RouteDecision::RedirectToHome
        );
    }

    #[test]
    fn admin_view_renders_for_admins() {
        assert_eq!(
            route(Some(&identity(Role::Admin)), View::Admin),
            RouteDecision::Render
        );
    }
}
