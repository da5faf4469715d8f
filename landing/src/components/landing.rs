use leptos::prelude::*;

use super::{Contact, Features, Footer, Hero, SiteHeader};
use crate::motion::HeroSequence;

/// The composed page body. Region order is fixed: header, hero, features,
/// contact, footer.
#[component]
pub fn LandingView(
    /// Hero entrance directives
    sequence: HeroSequence,
) -> impl IntoView {
    view! {
        <div class="page">
            <SiteHeader />
            <main>
                <Hero sequence=sequence />
                <Features />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
