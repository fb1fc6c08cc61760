//! Role dashboards and the root redirect.
//!
//! ARCHITECTURE
//! ============
//! Every dashboard is wrapped in `RouteGuard`; the root route sends signed-in
//! users to their own role's dashboard.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::route_guard::RouteGuard;
use crate::net::types::{Profile, Role};
use crate::state::auth::use_auth;
use crate::util::auth::redirect_options;

/// Label/value rows shown on a role's dashboard, skipping absent fields.
fn profile_rows(role: Role, profile: &Profile) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Name", profile.name.clone())];
    let mut push = |label: &'static str, value: Option<String>| {
        if let Some(value) = value {
            rows.push((label, value));
        }
    };

    push("Department", profile.department.clone());
    match role {
        Role::Student => {
            push("Course", profile.course.clone());
            push("Year", profile.year.map(|y| y.to_string()));
            push("Semester", profile.semester.map(|s| s.to_string()));
            push("Registered events", profile.registered_events.map(|n| n.to_string()));
        }
        Role::Organizer => {
            push("Created events", profile.created_events.map(|n| n.to_string()));
        }
        Role::Admin => {}
    }
    rows
}

/// Root route: forward to the signed-in user's dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <RouteGuard allow=Role::ALL.to_vec()>
            <RoleRedirect/>
        </RouteGuard>
    }
}

#[component]
fn RoleRedirect() -> impl IntoView {
    let state = use_auth().state();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(role) = state.with(crate::state::auth::AuthState::role) {
            navigate(role.home_path(), redirect_options());
        }
    });
}

#[component]
pub fn StudentHome() -> impl IntoView {
    view! {
        <RouteGuard allow=vec![Role::Student]>
            <Dashboard role=Role::Student/>
        </RouteGuard>
    }
}

#[component]
pub fn OrganizerHome() -> impl IntoView {
    view! {
        <RouteGuard allow=vec![Role::Organizer]>
            <Dashboard role=Role::Organizer/>
        </RouteGuard>
    }
}

#[component]
pub fn AdminHome() -> impl IntoView {
    view! {
        <RouteGuard allow=vec![Role::Admin]>
            <Dashboard role=Role::Admin/>
        </RouteGuard>
    }
}

#[component]
fn Dashboard(role: Role) -> impl IntoView {
    let state = use_auth().state();

    let usernumber = move || state.with(|s| s.user().map(|u| u.usernumber.clone()).unwrap_or_default());
    let rows = move || state.with(|s| s.profile().map(|p| profile_rows(role, p)).unwrap_or_default());

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{format!("{} dashboard", role.label())}</h1>
                <p class="dashboard-page__usernumber">{usernumber}</p>
            </header>
            <Show
                when=move || !rows().is_empty()
                fallback=|| view! { <p class="dashboard-page__empty">"No profile on file."</p> }
            >
                <dl class="dashboard-page__profile">
                    {move || {
                        rows()
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect::<Vec<_>>()
                    }}
                </dl>
            </Show>
        </section>
    }
}
