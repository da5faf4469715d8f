//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::LandingView;
use crate::meta::{LANG, PageMeta};
use crate::motion::{HeroSequence, MotionMode};
use crate::styles::LANDING_CSS;

/// Document shell: language tag, head metadata, stylesheet, and the landing
/// view as the only child of `<body>`.
#[component]
pub fn LandingDocument(
    /// Title and description for the head
    meta: PageMeta,
    /// Hero entrance directives
    sequence: HeroSequence,
    /// `Static` leaves the entrance keyframes out of the stylesheet
    #[prop(optional)]
    motion: MotionMode,
) -> impl IntoView {
    let PageMeta { title, description } = meta;
    let css = format!("{}{}", LANDING_CSS, motion.stylesheet(&sequence));

    view! {
        <html lang=LANG>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                <style>{css}</style>
            </head>
            <body>
                <LandingView sequence=sequence />
            </body>
        </html>
    }
}
