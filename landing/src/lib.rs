//! # erp-landing
//!
//! Leptos SSR renderer for the ERP platform landing page.
//!
//! The whole site is one static HTML document: a navigation header, a hero
//! with a staged entrance animation, a feature grid, a contact form that is
//! not wired to any backend yet, and a footer.
//!
//! ## Quick Start
//!
//! ```rust
//! use erp_landing::{render_page, config::LandingConfig};
//!
//! let html = render_page(&LandingConfig::default()).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`motion`] - hero entrance directives and their CSS keyframes
//! - [`navigation`] - regions and same-page anchors
//! - [`contact`] - contact form fields and the unwired submit handler
//! - [`meta`] / [`config`] - page metadata and the optional `landing.toml`
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! No reactive runtime or hydration is involved: the animation is plain CSS,
//! so the page needs no JavaScript.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod contact;
pub mod error;
pub mod meta;
pub mod motion;
pub mod navigation;
pub mod styles;

use components::LandingDocument;
use config::LandingConfig;
use error::LandingError;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use meta::PageMeta;
use motion::{HeroSequence, MotionMode};
use tracing::debug;

/// Render the complete landing page for `config`.
///
/// The default hero sequence is validated first, so a broken directive fails
/// the build instead of shipping a page with a wrong stagger.
pub fn render_page(config: &LandingConfig) -> Result<String, LandingError> {
    let sequence = HeroSequence::default();
    sequence.validate()?;
    Ok(render_document(&config.page, sequence, config.motion_mode()))
}

/// Render the document shell around the landing view.
///
/// Returns a complete HTML document as a `String`, including `<!DOCTYPE html>`.
/// `sequence` is rendered as given; validate it beforehand.
pub fn render_document(meta: &PageMeta, sequence: HeroSequence, motion: MotionMode) -> String {
    debug!(?motion, title = %meta.title, "rendering landing page");

    let doc = view! {
        <LandingDocument meta=meta.clone() sequence=sequence motion=motion />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
