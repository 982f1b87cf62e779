//! Sticky site navbar with a slide-out menu.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::app::SITE_NAME;
use crate::util::auth::LOGIN_PATH;

/// In-page anchors listed in the menu, in display order.
pub const MENU_ITEMS: [(&str, &str); 5] = [
    ("Overview", "#projects"),
    ("Walkthrough", "#walkthrough"),
    ("Floor Plans", "#floor-plans"),
    ("Price List", "#price-list"),
    ("Location", "#location"),
];

#[component]
pub fn NavMenu() -> impl IntoView {
    let open = RwSignal::new(false);
    let close = move |_: MouseEvent| open.set(false);

    view! {
        <nav class="site-nav">
            <div class="site-nav__bar">
                <span class="site-nav__brand">{SITE_NAME}</span>
                <button
                    class="site-nav__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <div class="site-nav__menu" class:site-nav__menu--open=move || open.get()>
                {MENU_ITEMS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <a class="site-nav__item" href=*href on:click=close>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <a class="site-nav__item site-nav__item--call" href="#contact" on:click=close>
                    "Call Now"
                </a>
                <a class="site-nav__item site-nav__item--admin" href=LOGIN_PATH on:click=close>
                    "Admin Login"
                </a>
            </div>
        </nav>
    }
}
