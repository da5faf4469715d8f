use leptos::prelude::*;

use super::{ICON_ARROW_RIGHT, Icon};
use crate::motion::HeroSequence;
use crate::navigation::{CONTACT_ANCHOR, FEATURES_ANCHOR, href};

/// Headline, subheading and action row, each tagged with its entrance class.
///
/// The classes only animate when the document embeds the sequence's
/// keyframes; without them the hero renders in its final state.
#[component]
pub fn Hero(
    /// Entrance directives supplying the class names
    sequence: HeroSequence,
) -> impl IntoView {
    let headline_class = format!("hero-title {}", sequence.headline().class_name());
    let subheading_class = format!("hero-lede {}", sequence.subheading().class_name());
    let actions_class = format!("hero-actions {}", sequence.actions().class_name());

    view! {
        <section class="hero">
            <div class="container hero-inner">
                <h1 class=headline_class>"下一代企业资源规划研发平台"</h1>
                <p class=subheading_class>
                    "打造智能化、高效化的企业资源管理系统，助力企业数字化转型"
                </p>
                <div class=actions_class>
                    <a href=href(CONTACT_ANCHOR) class="btn-primary">"开始使用"</a>
                    <a href=href(FEATURES_ANCHOR) class="btn-link">
                        "了解更多 "
                        <Icon path=ICON_ARROW_RIGHT class="icon-inline" />
                    </a>
                </div>
            </div>
        </section>
    }
}
