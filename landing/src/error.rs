//! Error types for page building.
//!
//! Rendering itself cannot fail. Errors come from loading configuration and
//! from validating the hero animation directives before a build.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing a landing page build.
#[derive(Debug, Error)]
pub enum LandingError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadConfig {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`crate::config::LandingConfig`].
    #[error("failed to parse {}: {source}", .path.display())]
    ParseConfig {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
    /// The hero animation sequence violates its invariants.
    #[error("invalid hero animation: {0}")]
    Motion(#[from] MotionError),
}

/// A violated invariant of an [`crate::motion::AnimationDirective`] or of the
/// ordering between directives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// A state's opacity is not within `[0, 1]`.
    #[error("{directive}: opacity {value} is outside [0, 1]")]
    OpacityOutOfRange {
        /// Directive name
        directive: &'static str,
        /// Offending opacity
        value: f64,
    },

    /// A state's vertical offset is NaN or infinite.
    #[error("{directive}: vertical offset {value} is not a finite pixel value")]
    NonFiniteOffset {
        /// Directive name
        directive: &'static str,
        /// Offending offset
        value: f64,
    },

    /// Duration is zero, negative or not finite.
    #[error("{directive}: duration {value}s must be positive and finite")]
    InvalidDuration {
        /// Directive name
        directive: &'static str,
        /// Offending duration
        value: f64,
    },

    /// Delay is negative or not finite.
    #[error("{directive}: delay {value}s must be non-negative and finite")]
    InvalidDelay {
        /// Directive name
        directive: &'static str,
        /// Offending delay
        value: f64,
    },

    /// A later element would start before an earlier one.
    #[error("{later} (delay {later_delay}s) would start before {earlier} (delay {earlier_delay}s)")]
    OutOfOrder {
        /// Element that should start first
        earlier: &'static str,
        /// Its delay
        earlier_delay: f64,
        /// Element that should start second
        later: &'static str,
        /// Its delay
        later_delay: f64,
    },
}
