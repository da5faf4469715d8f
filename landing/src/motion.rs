//! Staged entrance animation for the hero region.
//!
//! Three elements (headline, subheading, action row) fade and rise into place
//! on page load. Each one is described by an [`AnimationDirective`]: a plain
//! record of start state, end state and timing. The directives never talk to
//! each other; the visual order comes only from their start delays, so all
//! three transitions run concurrently on the compositor, shifted in time.
//!
//! Directives are rendered as CSS keyframes. The element's resting style is
//! always the final state and the keyframes paint the initial state during the
//! delay (`animation-fill-mode: both`). When the browser has no animation
//! support, or [`MotionMode::Static`] is selected, the elements simply render
//! visible.
//!
//! ```rust
//! use erp_landing::motion::{HeroSequence, VisualState};
//!
//! let sequence = HeroSequence::default();
//! sequence.validate().unwrap();
//!
//! let settled = sequence.snapshot(sequence.settles_at());
//! assert!(settled.iter().all(|state| *state == VisualState::VISIBLE));
//! ```

use crate::error::MotionError;

/// Vertical offset (px) the hero elements rise from.
pub const RISE_OFFSET_PX: f64 = 20.0;

/// Duration of every hero entrance transition, in seconds.
pub const ENTRANCE_DURATION_S: f64 = 0.5;

/// Delay added for each successive hero element, in seconds.
pub const STAGGER_S: f64 = 0.2;

/// A visual-style snapshot: opacity plus vertical offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Opacity in `[0, 1]`
    pub opacity: f64,
    /// Downward offset in pixels
    pub y: f64,
}

impl VisualState {
    /// Transparent and pushed down by [`RISE_OFFSET_PX`].
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        y: RISE_OFFSET_PX,
    };

    /// Fully opaque, in place.
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        y: 0.0,
    };

    /// Linear interpolation towards `to`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }

    fn css(&self) -> String {
        format!(
            "opacity:{};transform:translateY({}px)",
            self.opacity, self.y
        )
    }
}

/// CSS timing function of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// `ease`, i.e. `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    #[default]
    Ease,
}

impl Easing {
    /// Keyword used in the `animation` shorthand.
    pub const fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
        }
    }

    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, progress: f64) -> f64 {
        let progress = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => progress,
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, progress),
        }
    }
}

/// Evaluate a CSS cubic-bezier timing curve at horizontal position `x`.
///
/// The curve parameter for `x` is found with Newton's method, falling back to
/// bisection when the slope gets too flat.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let sample = |a1: f64, a2: f64, t: f64| {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    };
    let slope = |a1: f64, a2: f64, t: f64| {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    };

    let mut t = x;
    for _ in 0..8 {
        let err = sample(x1, x2, t) - x;
        if err.abs() < EPSILON {
            return sample(y1, y2, t);
        }
        let d = slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..64 {
        let v = sample(x1, x2, t);
        if (v - x).abs() < EPSILON {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    sample(y1, y2, t)
}

/// Timing of a single transition, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Length of the transition
    pub duration: f64,
    /// Wait between mount and the start of the transition
    pub delay: f64,
    /// Timing function
    pub easing: Easing,
}

impl Transition {
    /// `ease` transition of `duration` seconds, starting after `delay`.
    pub const fn ease(duration: f64, delay: f64) -> Self {
        Self {
            duration,
            delay,
            easing: Easing::Ease,
        }
    }
}

/// Declarative hidden-to-visible transition for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDirective {
    /// Short identifier, used for the keyframes and class names.
    pub name: &'static str,
    /// State painted from mount until the delay has passed
    pub initial: VisualState,
    /// Final (resting) state
    pub animate: VisualState,
    /// Timing of the hop from `initial` to `animate`
    pub transition: Transition,
}

impl AnimationDirective {
    /// Fade-and-rise entrance with the shared duration and the given delay.
    pub const fn entrance(name: &'static str, delay: f64) -> Self {
        Self {
            name,
            initial: VisualState::HIDDEN,
            animate: VisualState::VISIBLE,
            transition: Transition::ease(ENTRANCE_DURATION_S, delay),
        }
    }

    /// Visual state `elapsed` seconds after mount.
    ///
    /// Before the delay has passed the element holds its initial state; once
    /// the transition is over it holds the final state forever.
    pub fn state_at(&self, elapsed: f64) -> VisualState {
        let Transition {
            duration,
            delay,
            easing,
        } = self.transition;

        if elapsed <= delay {
            return self.initial;
        }
        if elapsed >= self.settles_at() {
            return self.animate;
        }
        let progress = (elapsed - delay) / duration;
        self.initial.lerp(self.animate, easing.apply(progress))
    }

    /// Seconds after mount at which the element reaches its final state.
    pub fn settles_at(&self) -> f64 {
        self.transition.delay + self.transition.duration
    }

    /// Name of the generated `@keyframes` rule.
    pub fn keyframes_name(&self) -> String {
        format!("{}-enter", self.name)
    }

    /// Class that attaches this directive to an element.
    pub fn class_name(&self) -> String {
        format!("motion-{}", self.name)
    }

    /// The `animation` shorthand, e.g. `headline-enter 0.5s ease 0s both`.
    pub fn animation(&self) -> String {
        format!(
            "{} {}s {} {}s both",
            self.keyframes_name(),
            self.transition.duration,
            self.transition.easing.css(),
            self.transition.delay
        )
    }

    /// `@keyframes` block plus the class rule that applies it.
    pub fn keyframes_css(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ {} }} to {{ {} }} }}\n.{} {{ animation: {}; }}\n",
            self.keyframes_name(),
            self.initial.css(),
            self.animate.css(),
            self.class_name(),
            self.animation()
        )
    }

    /// Check opacity range, finite offsets, a positive duration and a
    /// non-negative delay.
    pub fn validate(&self) -> Result<(), MotionError> {
        for state in [self.initial, self.animate] {
            if !(0.0..=1.0).contains(&state.opacity) {
                return Err(MotionError::OpacityOutOfRange {
                    directive: self.name,
                    value: state.opacity,
                });
            }
            if !state.y.is_finite() {
                return Err(MotionError::NonFiniteOffset {
                    directive: self.name,
                    value: state.y,
                });
            }
        }

        let Transition {
            duration, delay, ..
        } = self.transition;
        if !(duration.is_finite() && duration > 0.0) {
            return Err(MotionError::InvalidDuration {
                directive: self.name,
                value: duration,
            });
        }
        if !(delay.is_finite() && delay >= 0.0) {
            return Err(MotionError::InvalidDelay {
                directive: self.name,
                value: delay,
            });
        }
        Ok(())
    }
}

/// The three hero entrance directives, in visual start order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroSequence {
    directives: [AnimationDirective; 3],
}

impl Default for HeroSequence {
    fn default() -> Self {
        Self::from_directives([
            AnimationDirective::entrance("headline", 0.0),
            AnimationDirective::entrance("subheading", STAGGER_S),
            AnimationDirective::entrance("actions", 2.0 * STAGGER_S),
        ])
    }
}

impl HeroSequence {
    /// Build a sequence from headline, subheading and action-row directives.
    /// Call [`HeroSequence::validate`] before rendering it.
    pub const fn from_directives(directives: [AnimationDirective; 3]) -> Self {
        Self { directives }
    }

    /// Directive of the `<h1>` headline.
    pub fn headline(&self) -> &AnimationDirective {
        &self.directives[0]
    }

    /// Directive of the subheading paragraph.
    pub fn subheading(&self) -> &AnimationDirective {
        &self.directives[1]
    }

    /// Directive of the call-to-action row.
    pub fn actions(&self) -> &AnimationDirective {
        &self.directives[2]
    }

    /// All three directives, headline first.
    pub fn directives(&self) -> &[AnimationDirective; 3] {
        &self.directives
    }

    /// Check every directive, then check that delays never decrease from
    /// headline to action row.
    pub fn validate(&self) -> Result<(), MotionError> {
        for directive in &self.directives {
            directive.validate()?;
        }
        for pair in self.directives.windows(2) {
            let (earlier, later) = (&pair[0], &pair[1]);
            if later.transition.delay < earlier.transition.delay {
                return Err(MotionError::OutOfOrder {
                    earlier: earlier.name,
                    earlier_delay: earlier.transition.delay,
                    later: later.name,
                    later_delay: later.transition.delay,
                });
            }
        }
        Ok(())
    }

    /// States of headline, subheading and action row `elapsed` seconds after mount.
    pub fn snapshot(&self, elapsed: f64) -> [VisualState; 3] {
        self.directives.map(|directive| directive.state_at(elapsed))
    }

    /// Seconds after mount at which the last element settles.
    pub fn settles_at(&self) -> f64 {
        self.directives
            .iter()
            .map(AnimationDirective::settles_at)
            .fold(0.0, f64::max)
    }

    /// Keyframes for all directives, disabled under `prefers-reduced-motion`.
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        for directive in &self.directives {
            css.push_str(&directive.keyframes_css());
        }

        let selectors = self
            .directives
            .iter()
            .map(|d| format!(".{}", d.class_name()))
            .collect::<Vec<_>>()
            .join(", ");
        css.push_str(&format!(
            "@media (prefers-reduced-motion: reduce) {{ {selectors} {{ animation: none; }} }}\n"
        ));
        css
    }
}

/// Whether the hero entrance animation is emitted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionMode {
    /// Emit the entrance keyframes.
    #[default]
    Animated,
    /// No keyframes are emitted; every element renders in its final state.
    Static,
}

impl MotionMode {
    /// CSS to embed in the document for `sequence` under this mode.
    pub fn stylesheet(self, sequence: &HeroSequence) -> String {
        match self {
            MotionMode::Animated => sequence.stylesheet(),
            MotionMode::Static => String::new(),
        }
    }
}
