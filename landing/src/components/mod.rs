//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! └── LandingView
//!     ├── SiteHeader      (brand + nav links)
//!     ├── Hero            (animated headline, subheading, actions)
//!     ├── Features        (#features)
//!     ├── Contact         (#contact, unwired form)
//!     └── Footer
//! ```
//!
//! Components are normally used through [`crate::render_page`], but they can
//! be rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use erp_landing::components::Features;
//!
//! let html = view! { <Features /> }.to_html();
//! ```

mod contact;
mod document;
mod features;
mod footer;
mod hero;
mod icons;
mod landing;
mod nav;

pub use contact::Contact;
pub use document::LandingDocument;
pub use features::Features;
pub use footer::{COPYRIGHT, Footer};
pub use hero::Hero;
pub use icons::*;
pub use landing::LandingView;
pub use nav::SiteHeader;
