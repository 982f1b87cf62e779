//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

/// Site name shown in the title, navbar and footer.
pub const SITE_NAME: &str = "Shri Vishnu Waman Thakur Developers";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the admin session state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // The session flag only exists in the browser; resolve it after hydration.
    Effect::new(move || {
        auth.set(AuthState::from_session(&BrowserStorage::session()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/svwt-site.css"/>
        <Title text=SITE_NAME/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("admin") view=LoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=DashboardPage/>
            </Routes>
        </Router>
    }
}
