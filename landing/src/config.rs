//! Configuration file support.
//!
//! Loads an optional `landing.toml` from the working directory:
//!
//! ```toml
//! [page]
//! title = "ERP研发平台 - 企业资源规划解决方案"
//! description = "专业的ERP研发平台，为企业提供全方位的资源规划解决方案"
//!
//! [motion]
//! enabled = true
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::LandingError;
use crate::meta::PageMeta;
use crate::motion::MotionMode;

/// File name looked up by [`LandingConfig::load`].
pub const CONFIG_FILE: &str = "landing.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// `[page]` - title and description
    pub page: PageMeta,
    /// `[motion]` - hero entrance animation
    pub motion: MotionConfig,
}

/// Hero entrance animation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Emit the entrance keyframes. When false the hero renders static.
    pub enabled: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl LandingConfig {
    /// Load `landing.toml` from `root`.
    /// Returns the default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            debug!("no {} in {}, using defaults", CONFIG_FILE, root.display());
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Unlike [`LandingConfig::load`], a
    /// missing or malformed file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, LandingError> {
        let content = std::fs::read_to_string(path).map_err(|source| LandingError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| LandingError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Animation mode selected by `[motion] enabled`.
    pub fn motion_mode(&self) -> MotionMode {
        if self.motion.enabled {
            MotionMode::Animated
        } else {
            MotionMode::Static
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{DEFAULT_DESCRIPTION, DEFAULT_TITLE};
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LandingConfig::default();
        assert_eq!(config.page.title, DEFAULT_TITLE);
        assert_eq!(config.page.description, DEFAULT_DESCRIPTION);
        assert_eq!(config.motion_mode(), MotionMode::Animated);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = LandingConfig::load(temp.path());
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
[page]
title = "Acme ERP"
description = "Resource planning for everyone"

[motion]
enabled = false
"#
        )
        .expect("write config");

        let config = LandingConfig::load(temp.path());
        assert_eq!(config.page.title, "Acme ERP");
        assert_eq!(config.page.description, "Resource planning for everyone");
        assert_eq!(config.motion_mode(), MotionMode::Static);
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create empty config");

        let config = LandingConfig::load(temp.path());
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn test_lenient_load_falls_back_on_garbage() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "[page\ntitle = ").expect("write");

        let config = LandingConfig::load(temp.path());
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn test_strict_load_reports_errors() {
        let temp = TempDir::new().expect("temp dir");

        let missing = LandingConfig::load_from_path(&temp.path().join("nope.toml"));
        assert!(matches!(missing, Err(LandingError::ReadConfig { .. })));

        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[motion]\nenabled = \"yes\"\n").expect("write");
        let err = LandingConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, LandingError::ParseConfig { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_language_tag_is_not_configurable() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[page]\nlang = \"en\"\n").expect("write");

        let err = LandingConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, LandingError::ParseConfig { .. }));
        assert!(err.to_string().contains("lang"));
    }
}
