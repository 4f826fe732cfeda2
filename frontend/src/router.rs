use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::{RequireAdmin, RequireAuth},
    pages::{
        admin_employees::AdminEmployeesPage,
        attendance::AttendancePage,
        dashboard::DashboardPage,
        documents::DocumentsPage,
        home::HomePage,
        login::{LoginPage, SignupPage},
        oauth_callback::OAuthCallbackPage,
        profile::ProfilePage,
        requests::RequestsPage,
    },
    state::{auth::AuthProvider, profile::ProfileCache, shell::provide_shell},
    utils::storage::default_store,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/signup",
    "/oauth2/callback",
    "/dashboard",
    "/attendance",
    "/requests",
    "/documents",
    "/profile",
    "/admin/employees",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/attendance",
    "/requests",
    "/documents",
    "/profile",
    "/admin/employees",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin/employees"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/signup", "/oauth2/callback"];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Shared services go into context before `AuthProvider` starts restoring
/// the session.
pub fn app_root() -> impl IntoView {
    let api = ApiClient::new();
    provide_context(api.clone());
    provide_context(ProfileCache::new(api));
    provide_shell(default_store());
    provide_meta_context();
    view! {
        <Title text="Workforce"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignupPage/>
                    <Route path="/oauth2/callback" view=OAuthCallbackPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/attendance" view=ProtectedAttendance/>
                    <Route path="/requests" view=ProtectedRequests/>
                    <Route path="/documents" view=ProtectedDocuments/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/admin/employees" view=ProtectedAdminEmployees/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireAuth><AttendancePage/></RequireAuth> }
}

#[component]
fn ProtectedRequests() -> impl IntoView {
    view! { <RequireAuth><RequestsPage/></RequireAuth> }
}

#[component]
fn ProtectedDocuments() -> impl IntoView {
    view! { <RequireAuth><DocumentsPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[component]
fn ProtectedAdminEmployees() -> impl IntoView {
    view! { <RequireAdmin><AdminEmployeesPage/></RequireAdmin> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn public_and_protected_partition_all_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        assert!(public.is_disjoint(&protected));
        assert_eq!(&public | &protected, all);
    }

    #[test]
    fn admin_routes_are_protected() {
        for path in ADMIN_ROUTE_PATHS {
            assert!(
                PROTECTED_ROUTE_PATHS.contains(path),
                "admin path is not protected: {}",
                path
            );
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn sidebar_links_point_at_routes() {
        for item in crate::components::layout::NAV_ITEMS {
            assert!(ROUTE_PATHS.contains(&item.href), "dead link: {}", item.href);
        }
    }
}
