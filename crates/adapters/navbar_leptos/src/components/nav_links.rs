use leptos::prelude::*;
use themenav_domain::nav::{HOME_HREF, LOGO_SRC, NAV_LINKS};

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="md:ml-8">
            <a href=HOME_HREF>
                <img src=LOGO_SRC class="h-12" alt="Home"/>
            </a>
        </div>
    }
}

#[component]
pub fn NavLinks() -> impl IntoView {
    view! {
        <div class="mr-4 md:inline hidden">
            {NAV_LINKS
                .iter()
                .map(|link| view! { <a href=link.href class="m-4">{link.label}</a> })
                .collect_view()}
        </div>
    }
}
