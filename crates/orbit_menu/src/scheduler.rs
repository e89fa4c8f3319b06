//! Toggle-driven stagger scheduling.
//!
//! The engine emits declarative per-item targets ([`crate::engine::ItemFrame`]);
//! hosts with their own animation system apply them directly. Hosts
//! without one hand the frames to a [`StaggerScheduler`], which drives
//! delay-aware interpolators on every tick and yields the current
//! per-item visual state.
//!
//! A toggle mid-animation simply retargets the interpolators from their
//! current values, so a rapid double-toggle reverses the in-flight
//! transition instead of restarting it.

use orbit_core::{Animation, Animation2D, AnimationSpec, Vec2};

use crate::engine::ItemFrame;

/// Sampled visual state of one item at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual {
    /// Current offset from the main element's anchor.
    pub offset: Vec2,
    /// Current scale factor.
    pub scale: f32,
    /// Current opacity.
    pub opacity: f32,
}

/// Interpolators for one item.
#[derive(Debug, Clone)]
struct ItemMotion {
    offset: Animation2D,
    scale: Animation,
    opacity: Animation,
}

impl ItemMotion {
    fn resting(spec: AnimationSpec, scale: f32) -> Self {
        Self {
            offset: Animation2D::new(Vec2::ZERO, spec),
            scale: Animation::new(scale, spec),
            // invisible until the first frames arrive, mirroring the
            // engine's unmeasured-opacity rule
            opacity: Animation::new(0.0, spec),
        }
    }
}

/// Drives the staggered open/close animation for all items.
#[derive(Debug, Clone)]
pub struct StaggerScheduler {
    items: Vec<ItemMotion>,
}

impl StaggerScheduler {
    /// Creates a scheduler with every item resting in the closed pose.
    #[must_use]
    pub fn new(spec: AnimationSpec, item_count: usize, initial_scaling: f32) -> Self {
        Self {
            items: (0..item_count)
                .map(|_| ItemMotion::resting(spec, initial_scaling))
                .collect(),
        }
    }

    /// Number of items driven by this scheduler.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the scheduler drives no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Starts transitions towards the given frames, honoring each
    /// frame's stagger delay. Extra frames are ignored; missing frames
    /// leave their items untouched.
    pub fn retarget(&mut self, frames: &[ItemFrame]) {
        for (motion, frame) in self.items.iter_mut().zip(frames) {
            motion.offset.set_target(frame.offset, frame.delay);
            motion.scale.set_target(frame.scale, frame.delay);
            motion.opacity.set_target(frame.opacity, frame.delay);
        }
    }

    /// Jumps every item to the given frames without animating, e.g. when
    /// the very first layout arrives and nothing should visibly move.
    pub fn snap(&mut self, frames: &[ItemFrame]) {
        for (motion, frame) in self.items.iter_mut().zip(frames) {
            motion.offset.set_immediate(frame.offset);
            motion.scale.set_immediate(frame.scale);
            motion.opacity.set_immediate(frame.opacity);
        }
    }

    /// Advances all interpolators by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for motion in &mut self.items {
            motion.offset.update(dt);
            motion.scale.update(dt);
            motion.opacity.update(dt);
        }
    }

    /// Samples the current visual state of item `i`.
    #[must_use]
    pub fn visual(&self, i: usize) -> Option<ItemVisual> {
        self.items.get(i).map(|motion| ItemVisual {
            offset: motion.offset.value(),
            scale: motion.scale.value(),
            opacity: motion.opacity.value(),
        })
    }

    /// Samples the current visual state of every item.
    #[must_use]
    pub fn visuals(&self) -> Vec<ItemVisual> {
        (0..self.items.len()).filter_map(|i| self.visual(i)).collect()
    }

    /// True once every interpolator has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.items
            .iter()
            .all(|m| m.offset.is_complete() && m.scale.is_complete() && m.opacity.is_complete())
    }
}
