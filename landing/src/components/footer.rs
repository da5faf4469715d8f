use leptos::prelude::*;

/// Fixed copyright line. The year is literal, not read from the clock.
pub const COPYRIGHT: &str = "© 2024 ERP研发平台. 保留所有权利.";

/// Dark footer band with the copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
