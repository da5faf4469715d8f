use leptos::prelude::*;

use crate::meta::BRAND;
use crate::navigation::NAV_LINKS;

/// Brand plus same-page navigation links.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="container site-nav">
                <h1 class="brand">{BRAND}</h1>
                <div class="nav-links">
                    {NAV_LINKS.iter().map(|link| view! {
                        <a href=link.href() class="nav-link">{link.label}</a>
                    }).collect::<Vec<_>>()}
                </div>
            </nav>
        </header>
    }
}
