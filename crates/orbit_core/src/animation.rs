//! Animation primitives with per-item start delays.
//!
//! The menu staggers its items: every item animates with the same curve
//! and duration but a different start delay, so the interpolators here
//! carry an explicit delay in addition to the usual easing state.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-in-out (gentle start and stop).
    #[default]
    EaseInOut,
    /// Exponential ease-out (sharp snap to target).
    ExponentialOut,
    /// Exponential ease-in (accelerating).
    ExponentialIn,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::ExponentialIn => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// Shared animation parameters: how long, and along which curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// Duration in seconds.
    pub duration: f32,
    /// Easing curve.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Creates a new spec.
    #[must_use]
    pub const fn new(easing: Easing, duration: f32) -> Self {
        Self { duration, easing }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        // 400ms ease-in-out, the classic floating-menu feel
        Self::new(Easing::EaseInOut, 0.4)
    }
}

/// A single animated value with an optional start delay.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Value the current transition started from.
    start: f32,
    /// Target value.
    target: f32,
    /// Seconds elapsed since the transition was (re)targeted.
    elapsed: f32,
    /// Seconds to wait before interpolation begins.
    delay: f32,
    /// Shared duration/easing parameters.
    spec: AnimationSpec,
}

impl Animation {
    /// Creates a new animation resting at the given value.
    #[must_use]
    pub fn new(value: f32, spec: AnimationSpec) -> Self {
        Self {
            current: value,
            start: value,
            target: value,
            elapsed: spec.duration,
            delay: 0.0,
            spec,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true if the animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.delay + self.spec.duration
    }

    /// Starts a transition towards `target` after `delay` seconds.
    ///
    /// Interpolation begins at the *current* value, so retargeting a
    /// transition mid-flight simply reverses or redirects it.
    pub fn set_target(&mut self, target: f32, delay: f32) {
        if (target - self.target).abs() > f32::EPSILON {
            self.start = self.current;
            self.target = target;
            self.delay = delay.max(0.0);
            self.elapsed = 0.0;
        }
    }

    /// Immediately sets the value without animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.start = value;
        self.target = value;
        self.delay = 0.0;
        self.elapsed = self.spec.duration;
    }

    /// Advances the animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.is_complete() {
            return;
        }

        self.elapsed += dt;

        let t = if self.spec.duration > 0.0 {
            ((self.elapsed - self.delay) / self.spec.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let eased = self.spec.easing.apply(t);
        self.current = self.start + (self.target - self.start) * eased;

        // Snap to target when complete
        if self.is_complete() {
            self.current = self.target;
        }
    }
}

/// Animated 2D vector, both components sharing delay and curve.
#[derive(Debug, Clone)]
pub struct Animation2D {
    /// X component animation.
    pub x: Animation,
    /// Y component animation.
    pub y: Animation,
}

impl Animation2D {
    /// Creates a new 2D animation resting at the given point.
    #[must_use]
    pub fn new(value: Vec2, spec: AnimationSpec) -> Self {
        Self {
            x: Animation::new(value.x, spec),
            y: Animation::new(value.y, spec),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    /// Starts a transition towards `target` after `delay` seconds.
    pub fn set_target(&mut self, target: Vec2, delay: f32) {
        self.x.set_target(target.x, delay);
        self.y.set_target(target.y, delay);
    }

    /// Immediately sets the value without animation.
    pub fn set_immediate(&mut self, value: Vec2) {
        self.x.set_immediate(value.x);
        self.y.set_immediate(value.y);
    }

    /// Advances the animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.x.update(dt);
        self.y.update(dt);
    }

    /// Returns true if both components are complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.x.is_complete() && self.y.is_complete()
    }
}
