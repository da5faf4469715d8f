//! Page metadata consumed by the document head.

use serde::Deserialize;

/// Product name shown in the header and footer.
pub const BRAND: &str = "ERP研发平台";

/// `<title>` used when the config file does not set one.
pub const DEFAULT_TITLE: &str = "ERP研发平台 - 企业资源规划解决方案";

/// `<meta name="description">` used when the config file does not set one.
pub const DEFAULT_DESCRIPTION: &str = "专业的ERP研发平台，为企业提供全方位的资源规划解决方案";

/// Language tag of the root `<html>` element. Fixed, not configurable.
pub const LANG: &str = "zh";

/// Title and description of the page.
///
/// Resolved once at startup (defaults or `[page]` in the config file) and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageMeta {
    /// Document title
    pub title: String,
    /// Content of the description meta tag
    pub description: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}
