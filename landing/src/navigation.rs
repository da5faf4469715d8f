//! Page regions and same-page navigation anchors.
//!
//! The header links to three anchors but only two of them exist as regions.
//! `#solutions` has no matching section and resolves to nothing; it stays a
//! dead link until someone decides what a Solutions section should contain.

/// Id of the feature grid.
pub const FEATURES_ANCHOR: &str = "features";
/// Linked from the header but never defined as a region.
pub const SOLUTIONS_ANCHOR: &str = "solutions";
/// Id of the contact band.
pub const CONTACT_ANCHOR: &str = "contact";

/// Top-level regions of the landing view, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Brand and navigation links
    Header,
    /// Animated headline, subheading and actions
    Hero,
    /// `#features`
    Features,
    /// `#contact`
    Contact,
    /// Copyright line
    Footer,
}

/// Every region in the order it appears on the page.
pub const REGIONS: [Region; 5] = [
    Region::Header,
    Region::Hero,
    Region::Features,
    Region::Contact,
    Region::Footer,
];

impl Region {
    /// Element id that same-page links can target, if any.
    pub const fn anchor_id(self) -> Option<&'static str> {
        match self {
            Region::Features => Some(FEATURES_ANCHOR),
            Region::Contact => Some(CONTACT_ANCHOR),
            Region::Header | Region::Hero | Region::Footer => None,
        }
    }
}

/// A header navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Visible link text
    pub label: &'static str,
    /// Target id, without the `#`
    pub anchor: &'static str,
}

impl NavLink {
    /// `href` attribute value.
    pub fn href(&self) -> String {
        href(self.anchor)
    }

    /// Region this link scrolls to, `None` for a dangling anchor.
    pub fn target(&self) -> Option<Region> {
        resolve_anchor(self.anchor)
    }
}

/// Header links, left to right.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "产品特性",
        anchor: FEATURES_ANCHOR,
    },
    NavLink {
        label: "解决方案",
        anchor: SOLUTIONS_ANCHOR,
    },
    NavLink {
        label: "联系我们",
        anchor: CONTACT_ANCHOR,
    },
];

/// `#anchor` fragment for a same-page link.
pub fn href(anchor: &str) -> String {
    format!("#{anchor}")
}

/// Find the region an anchor (with or without the leading `#`) points at.
pub fn resolve_anchor(target: &str) -> Option<Region> {
    let id = target.strip_prefix('#').unwrap_or(target);
    REGIONS
        .iter()
        .copied()
        .find(|region| region.anchor_id() == Some(id))
}
