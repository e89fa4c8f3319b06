//! Measurement intake: quantized, idempotent size snapshots.
//!
//! An external measurement collaborator reports the main element's size
//! and the satellite sizes asynchronously, in arbitrary order, possibly
//! many times. The snapshot here quantizes every report and only counts
//! it as a change when the quantized value actually moved, which makes
//! the whole channel idempotent: repeated identical reports never
//! trigger a recomputation.

use orbit_core::Size2;
use serde::{Deserialize, Serialize};

/// Anchor point of an element within its bounding box.
///
/// Measurements carry the anchor they were taken against explicitly,
/// instead of relying on an ambient shared coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Top-left corner.
    TopLeading,
    /// Top edge midpoint.
    Top,
    /// Top-right corner.
    TopTrailing,
    /// Left edge midpoint.
    Leading,
    /// Geometric center.
    #[default]
    Center,
    /// Right edge midpoint.
    Trailing,
    /// Bottom-left corner.
    BottomLeading,
    /// Bottom edge midpoint.
    Bottom,
    /// Bottom-right corner.
    BottomTrailing,
}

/// A single reported element size, tagged with its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// The measured extents.
    pub size: Size2,
    /// The anchor the measurement is referenced against.
    #[serde(default)]
    pub anchor: Anchor,
}

impl Measurement {
    /// Creates a measurement with an explicit anchor.
    #[must_use]
    pub const fn new(size: Size2, anchor: Anchor) -> Self {
        Self { size, anchor }
    }

    /// Creates a center-anchored measurement, the common case.
    #[must_use]
    pub const fn centered(size: Size2) -> Self {
        Self::new(size, Anchor::Center)
    }
}

/// The last-known quantized sizes of the main element and all items.
#[derive(Debug, Clone, Default)]
pub struct MeasuredSizes {
    main: Size2,
    items: Vec<Size2>,
    item_count: usize,
}

impl MeasuredSizes {
    /// Creates an empty snapshot expecting `item_count` item sizes.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            main: Size2::ZERO,
            items: Vec::new(),
            item_count,
        }
    }

    /// Stores a main-element report. Returns true if the quantized size
    /// changed.
    pub fn set_main(&mut self, measurement: Measurement) -> bool {
        let quantized = measurement.size.quantized();
        if quantized == self.main {
            return false;
        }
        self.main = quantized;
        true
    }

    /// Stores an item-sizes report. Returns true if any quantized size
    /// changed.
    pub fn set_items(&mut self, measurements: &[Measurement]) -> bool {
        let quantized: Vec<Size2> = measurements
            .iter()
            .map(|m| m.size.quantized())
            .collect();
        if quantized == self.items {
            return false;
        }
        self.items = quantized;
        true
    }

    /// The quantized main-element size, zero until first report.
    #[must_use]
    pub fn main(&self) -> Size2 {
        self.main
    }

    /// The quantized item sizes reported so far.
    #[must_use]
    pub fn items(&self) -> &[Size2] {
        &self.items
    }

    /// The quantized size of item `i`, zero when unreported.
    #[must_use]
    pub fn item(&self, i: usize) -> Size2 {
        self.items.get(i).copied().unwrap_or(Size2::ZERO)
    }

    /// True once the main element is measured and the item sequence is
    /// full length. Layout recomputation is deferred until then.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.main.is_zero() && self.items.len() == self.item_count
    }
}
