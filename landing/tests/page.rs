//! Full-page rendering checks.

use erp_landing::components::COPYRIGHT;
use erp_landing::config::LandingConfig;
use erp_landing::meta::PageMeta;
use erp_landing::motion::{HeroSequence, MotionMode};
use erp_landing::{render_document, render_page};
use pretty_assertions::assert_eq;

fn default_page() -> String {
    render_page(&LandingConfig::default()).expect("default page renders")
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
}

#[test]
fn head_carries_configured_metadata() {
    let html = default_page();

    assert!(html.contains("<title>ERP研发平台 - 企业资源规划解决方案</title>"));
    assert!(html.contains(r#"name="description""#));
    assert!(html.contains(r#"content="专业的ERP研发平台，为企业提供全方位的资源规划解决方案""#));
}

#[test]
fn regions_render_in_fixed_order() {
    let html = default_page();
    let positions = vec![
        position(&html, r#"class="site-header""#),
        position(&html, r#"class="hero""#),
        position(&html, r#"id="features""#),
        position(&html, r#"id="contact""#),
        position(&html, r#"class="site-footer""#),
    ];

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn solutions_link_has_no_target_region() {
    let html = default_page();

    assert!(html.contains(r##"href="#features""##));
    assert!(html.contains(r##"href="#solutions""##));
    assert!(html.contains(r##"href="#contact""##));
    assert!(!html.contains(r#"id="solutions""#));
}

#[test]
fn hero_elements_carry_their_entrance_classes() {
    let html = default_page();

    let headline = position(&html, "hero-title motion-headline");
    let subheading = position(&html, "hero-lede motion-subheading");
    let actions = position(&html, "hero-actions motion-actions");
    assert!(headline < subheading && subheading < actions);

    assert!(html.contains("headline-enter 0.5s ease 0s both"));
    assert!(html.contains("subheading-enter 0.5s ease 0.2s both"));
    assert!(html.contains("actions-enter 0.5s ease 0.4s both"));
}

#[test]
fn static_page_has_hero_without_animation() {
    let html = render_document(
        &PageMeta::default(),
        HeroSequence::default(),
        MotionMode::Static,
    );

    // Same markup, but nothing paints the hidden state.
    assert!(html.contains("hero-title motion-headline"));
    assert!(!html.contains("@keyframes"));
    assert!(!html.contains("opacity:0"));
}

#[test]
fn contact_form_is_unwired() {
    let html = default_page();

    assert!(html.contains(r#"data-submit="unwired""#));
    assert!(!html.contains("action="));
    assert!(!html.contains("method="));
    assert!(!html.contains("<script"));

    for field in ["name", "email", "message"] {
        assert!(html.contains(&format!(r#"id="{field}""#)));
    }
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains(r#"rows="4""#));
    assert!(html.contains("发送信息"));
}

#[test]
fn features_grid_lists_three_cards() {
    let html = default_page();

    assert_eq!(html.matches(r#"class="feature-card""#).count(), 3);
    for title in ["智能数据分析", "流程自动化", "模块化设计"] {
        assert!(html.contains(title), "missing feature {title}");
    }
}

#[test]
fn footer_year_is_literal() {
    let html = default_page();

    assert!(COPYRIGHT.contains("2024"));
    assert!(html.contains("© 2024 ERP研发平台. 保留所有权利."));
}
