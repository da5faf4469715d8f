use leptos::prelude::*;

use super::{ICON_CHART_BAR, ICON_COG, ICON_CUBE, Icon};
use crate::navigation::FEATURES_ANCHOR;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: ICON_CHART_BAR,
        title: "智能数据分析",
        text: "强大的数据分析能力，帮助企业做出明智决策",
    },
    Feature {
        icon: ICON_COG,
        title: "流程自动化",
        text: "自动化工作流程，提高运营效率",
    },
    Feature {
        icon: ICON_CUBE,
        title: "模块化设计",
        text: "灵活的模块化架构，满足不同企业需求",
    },
];

/// Three-card feature grid, target of `#features`.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=FEATURES_ANCHOR class="band">
            <div class="container">
                <div class="band-header">
                    <h2 class="band-title">"核心特性"</h2>
                    <p class="band-lede">"全方位的企业资源管理解决方案"</p>
                </div>
                <div class="feature-grid">
                    {FEATURES.iter().map(|feature| view! {
                        <div class="feature-card">
                            <Icon path=feature.icon class="feature-icon" />
                            <h3 class="feature-title">{feature.title}</h3>
                            <p class="feature-text">{feature.text}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
