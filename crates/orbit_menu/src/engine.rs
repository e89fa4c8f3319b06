//! The menu engine: measurement intake, cached layout, toggle state and
//! per-item frame emission.
//!
//! The engine is owned and driven by exactly one host render cycle. All
//! operations run synchronously inside the event that triggered them and
//! are idempotent: re-reporting an unchanged size or re-emitting frames
//! never produces a different result.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use parking_lot::RwLock;
use tracing::{debug, trace};

use orbit_core::{Size2, Vec2};

use crate::config::MenuConfig;
use crate::layout::{self, LayoutResult};
use crate::measure::{MeasuredSizes, Measurement};

/// A read-only aggregate-size channel handed to the host.
///
/// The engine writes the value whenever a recomputation changes it; the
/// host keeps a clone and reads it when sizing its own container.
#[derive(Debug, Clone, Default)]
pub struct SizeBinding(Arc<RwLock<Size2>>);

impl SizeBinding {
    /// Reads the current size.
    #[must_use]
    pub fn get(&self) -> Size2 {
        *self.0.read()
    }

    fn set(&self, size: Size2) {
        *self.0.write() = size;
    }
}

/// Per-item output tuple for one evaluation: everything the host needs
/// to draw an item and start its transition.
///
/// `Pod` so hosts can upload frame arrays to the GPU directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ItemFrame {
    /// Target offset from the main element's anchor.
    pub offset: Vec2,
    /// Target scale factor.
    pub scale: f32,
    /// Target opacity.
    pub opacity: f32,
    /// Seconds to wait before this item starts animating.
    pub delay: f32,
    /// Draw-order index; higher draws on top.
    pub z_index: u32,
}

/// The floating-menu engine.
///
/// Construction fixes the configuration; afterwards the engine is driven
/// by measurement reports and toggle events, and queried for frames.
#[derive(Debug)]
pub struct MenuEngine {
    config: MenuConfig,
    measured: MeasuredSizes,
    layout: LayoutResult,
    is_open: bool,
    revision: u64,
    whole_menu_size: SizeBinding,
    menu_buttons_size: SizeBinding,
}

impl MenuEngine {
    /// Creates an engine for the given configuration, closed and with
    /// nothing measured yet.
    #[must_use]
    pub fn new(config: MenuConfig) -> Self {
        let item_count = config.item_count;
        Self {
            config,
            measured: MeasuredSizes::new(item_count),
            layout: LayoutResult::default(),
            is_open: false,
            revision: 0,
            whole_menu_size: SizeBinding::default(),
            menu_buttons_size: SizeBinding::default(),
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Number of satellite items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.config.item_count
    }

    /// Whether the menu is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flips the open/closed state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        trace!(is_open = self.is_open, "menu toggled");
        self.is_open
    }

    /// Sets the open/closed state directly (externally driven hosts).
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Number of completed layout recomputations. Unchanged reports do
    /// not advance it, which makes intake idempotence observable.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The cached layout. Empty until the first successful recomputation.
    #[must_use]
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Channel carrying the bounding size of main element plus items.
    #[must_use]
    pub fn whole_menu_size(&self) -> SizeBinding {
        self.whole_menu_size.clone()
    }

    /// Channel carrying the bounding size of the items only.
    #[must_use]
    pub fn menu_buttons_size(&self) -> SizeBinding {
        self.menu_buttons_size.clone()
    }

    /// Reports the main element's measured size.
    pub fn report_main_size(&mut self, measurement: Measurement) {
        if self.measured.set_main(measurement) {
            self.recompute_layout();
        } else {
            trace!("main size unchanged; skipping recomputation");
        }
    }

    /// Reports the satellite items' measured sizes, index-aligned to
    /// item order. Partial reports are stored but do not trigger a
    /// recomputation until the sequence reaches full length.
    pub fn report_item_sizes(&mut self, measurements: &[Measurement]) {
        if self.measured.set_items(measurements) {
            self.recompute_layout();
        } else {
            trace!("item sizes unchanged; skipping recomputation");
        }
    }

    fn recompute_layout(&mut self) {
        if !self.measured.is_ready() {
            trace!("measurements incomplete; recomputation deferred");
            return;
        }

        if let Some(result) =
            layout::recompute(&self.config, self.measured.main(), self.measured.items())
        {
            self.revision += 1;
            debug!(revision = self.revision, "menu layout recomputed");

            if result.whole_menu_size != self.layout.whole_menu_size {
                self.whole_menu_size.set(result.whole_menu_size);
            }
            if result.menu_buttons_size != self.layout.menu_buttons_size {
                self.menu_buttons_size.set(result.menu_buttons_size);
            }
            self.layout = result;
        }
    }

    /// Emits the current frame for item `i`.
    ///
    /// The offset targets the open or closed position according to the
    /// toggle state, always carrying the cross-axis alignment
    /// correction. Opacity is forced to zero while the main element is
    /// unmeasured so nothing flashes before the first layout.
    #[must_use]
    pub fn item_frame(&self, i: usize) -> ItemFrame {
        let position = if self.is_open {
            self.layout.coord(i)
        } else {
            self.layout.initial_position(i)
        };
        let offset = position + self.layout.alignment_offset(i);

        let scale = if self.is_open {
            1.0
        } else {
            self.config.initial_scaling
        };

        let opacity = if self.measured.main().is_zero() {
            0.0
        } else if self.is_open {
            1.0
        } else {
            self.config.initial_opacity
        };

        ItemFrame {
            offset,
            scale,
            opacity,
            delay: self.config.delay_for(i, self.is_open),
            z_index: self.item_z_index(i),
        }
    }

    /// Emits the current frames for all items.
    #[must_use]
    pub fn frames(&self) -> Vec<ItemFrame> {
        (0..self.config.item_count).map(|i| self.item_frame(i)).collect()
    }

    /// Draw-order index of item `i`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn item_z_index(&self, i: usize) -> u32 {
        if self.config.inverse_z_index {
            self.config.item_count.saturating_sub(i + 1) as u32
        } else {
            0
        }
    }

    /// Draw-order index of the main element; always topmost.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn main_z_index(&self) -> u32 {
        if self.config.inverse_z_index {
            self.config.item_count as u32
        } else {
            1
        }
    }
}
