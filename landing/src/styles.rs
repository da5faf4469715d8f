//! CSS for the landing page.
//!
//! Light theme: gray page background, white header and contact band, dark
//! footer. Brand colours live in `--color-primary` / `--color-secondary`.
//! The hero entrance keyframes are not part of this sheet; they are generated
//! from the animation directives (see [`crate::motion`]).

/// Complete static CSS for the page.
pub const LANDING_CSS: &str = r#"
:root {
    --color-primary: #2563eb;
    --color-secondary: #1d4ed8;
    --gray-50: #f9fafb;
    --gray-200: #e5e7eb;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-900: #111827;
    --white: #ffffff;
    --container-max: 80rem;
    --font-sans: system-ui, -apple-system, Segoe UI, PingFang SC, Microsoft YaHei, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--gray-900);
    line-height: 1.5;
}

.page {
    min-height: 100vh;
    background: var(--gray-50);
}

.container {
    margin: 0 auto;
    max-width: var(--container-max);
    padding-left: 1rem;
    padding-right: 1rem;
}

/* Header */

.site-header {
    background: var(--white);
}

.site-nav {
    display: flex;
    height: 4rem;
    align-items: center;
    justify-content: space-between;
}

.brand {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--color-primary);
}

.nav-links {
    display: none;
    gap: 2rem;
}

.nav-link {
    padding: 0.5rem 0.75rem;
    color: var(--gray-900);
    text-decoration: none;
}

.nav-link:hover {
    color: var(--color-primary);
}

/* Hero */

.hero {
    position: relative;
}

.hero-inner {
    padding-top: 6rem;
    padding-bottom: 6rem;
    text-align: center;
}

.hero-title {
    margin: 0;
    font-size: 2.25rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    color: var(--gray-900);
}

.hero-lede {
    margin: 1.5rem 0 0;
    font-size: 1.125rem;
    line-height: 2rem;
    color: var(--gray-600);
}

.hero-actions {
    margin-top: 2.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1.5rem;
}

.btn-primary {
    display: inline-block;
    border-radius: 0.375rem;
    background: var(--color-primary);
    padding: 0.625rem 0.875rem;
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--white);
    text-decoration: none;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.btn-primary:hover {
    background: var(--color-secondary);
}

.btn-primary:focus-visible {
    outline: 2px solid var(--color-primary);
    outline-offset: 2px;
}

.btn-link {
    font-size: 0.875rem;
    font-weight: 600;
    line-height: 1.5rem;
    color: var(--gray-900);
    text-decoration: none;
}

.icon-inline {
    display: inline-block;
    width: 1rem;
    height: 1rem;
    margin-left: 0.25rem;
    vertical-align: middle;
}

/* Sections */

.band {
    padding: 6rem 0;
}

.band-white {
    background: var(--white);
}

.band-header {
    text-align: center;
}

.band-title {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    color: var(--gray-900);
}

.band-lede {
    margin: 1rem 0 0;
    font-size: 1.125rem;
    line-height: 2rem;
    color: var(--gray-600);
}

/* Features */

.feature-grid {
    margin-top: 5rem;
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
}

.feature-card {
    border-radius: 1rem;
    background: var(--white);
    padding: 2rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 0 0 1px var(--gray-200);
}

.feature-icon {
    width: 2rem;
    height: 2rem;
    color: var(--color-primary);
}

.feature-title {
    margin: 1rem 0 0;
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--gray-900);
}

.feature-text {
    margin: 0.5rem 0 0;
    color: var(--gray-600);
}

/* Contact */

.contact-body {
    margin: 4rem auto 0;
    max-width: 36rem;
}

.contact-form {
    display: grid;
    gap: 1.5rem;
}

.field-label {
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--gray-700);
}

.field-control {
    margin-top: 0.25rem;
    display: block;
    width: 100%;
    border: 1px solid var(--gray-300);
    border-radius: 0.375rem;
    padding: 0.5rem 0.75rem;
    font: inherit;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.field-control:focus {
    border-color: var(--color-primary);
    outline: 1px solid var(--color-primary);
}

.btn-submit {
    width: 100%;
    border: 0;
    cursor: pointer;
    text-align: center;
}

/* Footer */

.site-footer {
    background: var(--gray-900);
}

.footer-inner {
    padding-top: 3rem;
    padding-bottom: 3rem;
    text-align: center;
    color: var(--gray-400);
}

.footer-inner p {
    margin: 0;
}

@media (min-width: 640px) {
    .container {
        padding-left: 1.5rem;
        padding-right: 1.5rem;
    }
    .nav-links {
        display: flex;
        margin-left: 1.5rem;
    }
    .hero-title {
        font-size: 3.75rem;
        line-height: 1;
    }
    .band {
        padding-top: 8rem;
        padding-bottom: 8rem;
    }
    .band-title {
        font-size: 2.25rem;
    }
    .feature-grid {
        grid-template-columns: repeat(2, 1fr);
    }
    .field-control {
        font-size: 0.875rem;
    }
}

@media (min-width: 1024px) {
    .container {
        padding-left: 2rem;
        padding-right: 2rem;
    }
    .feature-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    /// Bodies of every `@media` block in `css`.
    fn media_blocks(css: &str) -> Vec<&str> {
        let mut blocks = Vec::new();
        let mut rest = css;
        while let Some(start) = rest.find("@media") {
            let body = &rest[start..];
            let mut depth = 0usize;
            let mut end = body.len();
            for (idx, ch) in body.char_indices() {
                match ch {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            end = idx + 1;
                            break;
                        }
                    }
                    _ => {}
                }
            }
            blocks.push(&body[..end]);
            rest = &body[end..];
        }
        blocks
    }

    #[test]
    fn container_sets_only_horizontal_padding() {
        // Hero and footer wrappers also carry `container` and own their
        // vertical padding.
        let rule_start = LANDING_CSS.find(".container {").expect("container rule");
        let rule = &LANDING_CSS[rule_start..];
        let rule = &rule[..rule.find('}').expect("closing brace")];
        assert!(!rule.contains("padding:"), "{rule}");
    }

    #[test]
    fn breakpoints_keep_vertical_padding() {
        let blocks = media_blocks(LANDING_CSS);
        assert_eq!(blocks.len(), 2);
        for block in blocks {
            assert!(
                !block.contains("padding:"),
                "padding shorthand inside breakpoint would reset vertical padding:\n{block}"
            );
        }
    }

    #[test]
    fn hero_and_footer_have_vertical_padding() {
        for selector in [".hero-inner {", ".footer-inner {"] {
            let start = LANDING_CSS.find(selector).expect(selector);
            let rule = &LANDING_CSS[start..];
            let rule = &rule[..rule.find('}').expect("closing brace")];
            assert!(rule.contains("padding-top:"), "{rule}");
            assert!(rule.contains("padding-bottom:"), "{rule}");
        }
    }
}
