// ============================================================================
// ROUTING - Role -> dashboard mapping and view dispatch
// ============================================================================

use crate::models::auth::Role;
use crate::session::Session;

/// Every screen the app can show. Dashboard ids are derived from the role,
/// so each role maps to exactly one dashboard view.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Home,
    About,
    Contact,
    Gallery,
    Login,
    FindBloodBanks,
    Dashboard(Role),
    UnknownRole,
}

impl View {
    pub const PUBLIC: [View; 6] = [
        View::Home,
        View::About,
        View::Contact,
        View::Gallery,
        View::Login,
        View::FindBloodBanks,
    ];

    /// Stable string id used by nav buttons and logging.
    pub fn id(&self) -> String {
        match self {
            View::Home => "home".to_string(),
            View::About => "about".to_string(),
            View::Contact => "contact".to_string(),
            View::Gallery => "gallery".to_string(),
            View::Login => "login".to_string(),
            View::FindBloodBanks => "find-blood-banks".to_string(),
            View::Dashboard(role) => format!("{}_dashboard", role.as_str()),
            View::UnknownRole => "unknown".to_string(),
        }
    }

    pub fn from_id(id: &str) -> Option<View> {
        match id {
            "home" => Some(View::Home),
            "about" => Some(View::About),
            "contact" => Some(View::Contact),
            "gallery" => Some(View::Gallery),
            "login" => Some(View::Login),
            "find-blood-banks" => Some(View::FindBloodBanks),
            "unknown" => Some(View::UnknownRole),
            _ => id
                .strip_suffix("_dashboard")
                .map(|role| dashboard_view(Role::parse(role))),
        }
    }

    /// Public views are reachable without a session and survive reloads
    /// without being redirected to a dashboard.
    pub fn is_public(&self) -> bool {
        !matches!(self, View::Dashboard(_) | View::UnknownRole)
    }

    /// Whether this view belongs to the logged-in area (nav highlighting,
    /// redirect-after-login).
    pub fn is_dashboard(&self) -> bool {
        matches!(self, View::Dashboard(_) | View::UnknownRole)
    }
}

/// Pure role -> default view mapping. An unrecognized role lands on the
/// unknown-role terminal view instead of a dashboard.
pub fn dashboard_view(role: Role) -> View {
    match role {
        Role::Unknown => View::UnknownRole,
        known => View::Dashboard(known),
    }
}

/// What to actually render for a requested view given the auth state.
///
/// The requested dashboard id is only a hint: with a session the session's
/// own role is authoritative, and without one the logged-in area falls back
/// to home. Asking for the login screen while already logged in shows the
/// dashboard instead.
pub fn dispatch(view: View, session: Option<&Session>) -> View {
    match view {
        View::Login => match session {
            Some(s) => dashboard_view(s.user.role),
            None => View::Login,
        },
        View::Dashboard(_) | View::UnknownRole => match session {
            Some(s) => dashboard_view(s.user.role),
            None => View::Home,
        },
        public => public,
    }
}

/// Reload rule: with a valid persisted session, non-public views restore the
/// role's dashboard while public deep links stay where they are.
pub fn resolve_on_load(current: View, session: Option<&Session>) -> View {
    match session {
        Some(s) if !current.is_public() => dashboard_view(s.user.role),
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::AuthUser;

    fn session(role: Role) -> Session {
        Session {
            token: "t.t.t".to_string(),
            user: AuthUser { id: "u1".to_string(), role },
        }
    }

    #[test]
    fn every_role_maps_to_exactly_one_dashboard() {
        let mut ids: Vec<String> = Role::ALL
            .iter()
            .map(|r| dashboard_view(*r).id())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Role::ALL.len());
        assert_eq!(dashboard_view(Role::Donor).id(), "donor_dashboard");
        assert_eq!(
            dashboard_view(Role::BloodbankStaff).id(),
            "bloodbank_staff_dashboard"
        );
    }

    #[test]
    fn unknown_role_is_terminal() {
        assert_eq!(dashboard_view(Role::Unknown), View::UnknownRole);
    }

    #[test]
    fn view_ids_round_trip() {
        let views = [
            View::Home,
            View::Gallery,
            View::FindBloodBanks,
            View::Dashboard(Role::Admin),
            View::UnknownRole,
        ];
        for view in views {
            assert_eq!(View::from_id(&view.id()), Some(view));
        }
        assert_eq!(View::from_id("no-such-view"), None);
    }

    #[test]
    fn public_views_are_not_dashboards() {
        for view in View::PUBLIC {
            assert!(view.is_public());
            assert!(!view.is_dashboard());
        }
        assert!(View::Dashboard(Role::Donor).is_dashboard());
        assert!(!View::Dashboard(Role::Donor).is_public());
    }

    #[test]
    fn login_view_shows_own_dashboard_when_logged_in() {
        let s = session(Role::Hospital);
        assert_eq!(
            dispatch(View::Login, Some(&s)),
            View::Dashboard(Role::Hospital)
        );
        assert_eq!(dispatch(View::Login, None), View::Login);
    }

    #[test]
    fn requested_dashboard_yields_session_role_dashboard() {
        let s = session(Role::Donor);
        assert_eq!(
            dispatch(View::Dashboard(Role::Admin), Some(&s)),
            View::Dashboard(Role::Donor)
        );
        assert_eq!(dispatch(View::Dashboard(Role::Admin), None), View::Home);
    }

    #[test]
    fn public_views_dispatch_to_themselves_even_logged_in() {
        let s = session(Role::Donor);
        assert_eq!(dispatch(View::Gallery, Some(&s)), View::Gallery);
        assert_eq!(dispatch(View::Contact, None), View::Contact);
    }

    #[test]
    fn reload_restores_dashboard_only_from_non_public_views() {
        let s = session(Role::Doctor);
        assert_eq!(
            resolve_on_load(View::Dashboard(Role::Donor), Some(&s)),
            View::Dashboard(Role::Doctor)
        );
        assert_eq!(resolve_on_load(View::Gallery, Some(&s)), View::Gallery);
        assert_eq!(
            resolve_on_load(View::Dashboard(Role::Donor), None),
            View::Dashboard(Role::Donor)
        );
    }

    #[test]
    fn unknown_role_session_dispatches_to_terminal_view() {
        let s = session(Role::Unknown);
        assert_eq!(
            dispatch(View::Dashboard(Role::Donor), Some(&s)),
            View::UnknownRole
        );
    }
}
