//! Admin dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded by the session flag: until the flag is confirmed the page renders a
//! placeholder, and a signed-out session is sent back to the login page. Once
//! signed in, both collections are read from `localStorage` and edited through
//! [`AdminState`], which writes every change straight back.
//!
//! DESIGN
//! ======
//! The active tab and each list's revision are memoized so keystrokes in the
//! draft do not rebuild the form inputs or clone the stored records; the rows
//! are rebuilt only when a collection's revision moves.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use content::dashboard::delete_prompt;
use content::editor::VALIDATION_NOTICE;
use content::{AuthGate, Collection, Dashboard, EditorError, FloorPlan, Project};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::floor_plan_inputs::FloorPlanInputs;
use crate::components::project_inputs::ProjectInputs;
use crate::components::record_row::RecordRow;
use crate::state::admin::AdminState;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::clock::BrowserClock;
use crate::util::dialog;
use crate::util::storage::{self, BrowserStorage};

/// Label of a collection's tab button.
#[must_use]
pub fn tab_label(tab: Collection) -> &'static str {
    match tab {
        Collection::Projects => "Manage Projects",
        Collection::FloorPlans => "Manage Floor Plans",
    }
}

/// CSS class for a tab button given the active tab.
#[must_use]
pub fn tab_class(tab: Collection, active: Collection) -> &'static str {
    if tab == active { "admin-tab admin-tab--active" } else { "admin-tab" }
}

/// Badges shown on a floor plan's admin row.
#[must_use]
pub fn floor_plan_badges(plan: &FloorPlan) -> Vec<String> {
    vec![plan.bedrooms.clone(), plan.area.clone()]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = RwSignal::new(AdminState::default());

    install_unauth_redirect(auth, use_navigate());

    Effect::new(move || {
        if !auth.with(|a| a.authenticated) || admin.with_untracked(|s| s.loaded) {
            return;
        }
        let (dashboard, errors) = Dashboard::load(&storage::content_store());
        admin.set(AdminState::loaded_from(dashboard, &errors));
    });

    let active = Memo::new(move |_| admin.with(|s| s.dashboard.active_tab()));
    let projects_rev = Memo::new(move |_| admin.with(|s| (s.loaded, s.dashboard.projects.revision())));
    let floor_plans_rev = Memo::new(move |_| admin.with(|s| (s.loaded, s.dashboard.floor_plans.revision())));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = admin.try_update(|s| s.submit(&storage::content_store(), &BrowserClock));
        if let Some(Err(EditorError::Validation(missing))) = outcome {
            log::debug!("dashboard: missing fields {missing:?}");
            dialog::alert(VALIDATION_NOTICE);
        }
    };

    let on_reset = move |_: leptos::ev::MouseEvent| {
        let confirmed = dialog::confirm(&admin.with_untracked(|s| s.dashboard.reset_prompt()));
        admin.update(|s| s.reset_unreadable(&storage::content_store(), confirmed));
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = AuthGate::logout(&BrowserStorage::session()) {
            log::warn!("dashboard: logout failed: {e}");
        }
        auth.set(AuthState::signed_out());
    };

    let tab_button = move |tab: Collection| {
        view! {
            <button
                type="button"
                class=move || tab_class(tab, active.get())
                on:click=move |_| admin.update(|s| s.dashboard.switch_tab(tab))
            >
                {tab_label(tab)}
            </button>
        }
    };

    let project_rows = move || {
        projects_rev.track();
        admin
            .with_untracked(|s| s.dashboard.projects.records().to_vec())
            .into_iter()
            .map(|project| {
                let id = project.id.clone();
                let on_edit = {
                    let project = project.clone();
                    Callback::new(move |()| admin.update(|s| s.dashboard.edit_project(&project)))
                };
                let on_delete = Callback::new(move |()| {
                    let confirmed = dialog::confirm(&delete_prompt::<Project>());
                    admin.update(|s| s.delete_project(&storage::content_store(), &id, confirmed));
                });
                view! {
                    <RecordRow
                        title=project.title
                        description=project.description
                        image=project.image
                        badges=vec![project.category.to_string()]
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                }
            })
            .collect::<Vec<_>>()
    };

    let floor_plan_rows = move || {
        floor_plans_rev.track();
        admin
            .with_untracked(|s| s.dashboard.floor_plans.records().to_vec())
            .into_iter()
            .map(|plan| {
                let id = plan.id.clone();
                let badges = floor_plan_badges(&plan);
                let on_edit = {
                    let plan = plan.clone();
                    Callback::new(move |()| admin.update(|s| s.dashboard.edit_floor_plan(&plan)))
                };
                let on_delete = Callback::new(move |()| {
                    let confirmed = dialog::confirm(&delete_prompt::<FloorPlan>());
                    admin.update(|s| s.delete_floor_plan(&storage::content_store(), &id, confirmed));
                });
                view! {
                    <RecordRow
                        title=plan.title
                        description=plan.description
                        image=plan.image
                        badges=badges
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                }
            })
            .collect::<Vec<_>>()
    };

    let list_is_empty = move || {
        admin.with(|s| match s.dashboard.active_tab() {
            Collection::Projects => s.dashboard.projects.records().is_empty(),
            Collection::FloorPlans => s.dashboard.floor_plans.records().is_empty(),
        })
    };

    view! {
        <Show
            when=move || auth.with(|a| a.authenticated)
            fallback=move || {
                view! {
                    <div class="admin-page admin-page--pending">
                        <p>{move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin-page">
                <header class="admin-header">
                    <div>
                        <h1>"Admin Dashboard"</h1>
                        <p class="admin-header__subtitle">"Manage projects and content"</p>
                    </div>
                    <div class="admin-header__actions">
                        <a class="btn btn--outline" href="/">
                            "Back to Site"
                        </a>
                        <button class="btn btn--danger" type="button" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </header>

                <Show when=move || admin.with(|s| s.error.is_some())>
                    <p class="admin-error">{move || admin.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>

                <Show when=move || admin.with(|s| s.dashboard.is_unreadable())>
                    <div class="admin-unreadable">
                        <p>"Saved data for this list could not be read, so changes are disabled to protect it."</p>
                        <button class="btn btn--small btn--danger" type="button" on:click=on_reset>
                            "Reset list"
                        </button>
                    </div>
                </Show>

                <div class="admin-tabs">
                    {tab_button(Collection::Projects)}
                    {tab_button(Collection::FloorPlans)}
                </div>

                <div class="admin-grid">
                    <form class="admin-form" on:submit=on_submit>
                        <h2>{move || admin.with(|s| s.dashboard.form_title())}</h2>
                        {move || match active.get() {
                            Collection::Projects => view! { <ProjectInputs admin=admin/> }.into_any(),
                            Collection::FloorPlans => view! { <FloorPlanInputs admin=admin/> }.into_any(),
                        }}
                        <Show when=move || admin.with(|s| !s.dashboard.preview_image().is_empty())>
                            <div class="admin-form__preview">
                                <img
                                    src=move || admin.with(|s| s.dashboard.preview_image().to_owned())
                                    alt="Preview"
                                />
                            </div>
                        </Show>
                        <div class="admin-form__actions">
                            <button class="btn btn--primary" type="submit">
                                {move || admin.with(|s| s.dashboard.submit_label())}
                            </button>
                            <Show when=move || admin.with(|s| s.dashboard.is_editing())>
                                <button
                                    class="btn btn--outline"
                                    type="button"
                                    on:click=move |_| admin.update(|s| s.dashboard.cancel())
                                >
                                    "Cancel"
                                </button>
                            </Show>
                        </div>
                    </form>

                    <section class="admin-list">
                        <h2>{move || admin.with(|s| s.dashboard.list_heading())}</h2>
                        <Show
                            when=move || !list_is_empty()
                            fallback=move || {
                                view! {
                                    <p class="admin-list__empty">
                                        {move || admin.with(|s| s.dashboard.empty_message())}
                                    </p>
                                }
                            }
                        >
                            {move || match active.get() {
                                Collection::Projects => project_rows().into_any(),
                                Collection::FloorPlans => floor_plan_rows().into_any(),
                            }}
                        </Show>
                    </section>
                </div>
            </div>
        </Show>
    }
}
