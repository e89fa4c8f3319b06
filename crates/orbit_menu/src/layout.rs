//! Layout recomputation: pure geometry, no engine state.
//!
//! [`recompute`] maps (configuration, measured sizes) to a fresh
//! [`LayoutResult`]. It runs on every accepted measurement change, so it
//! stays O(n) in the item count and allocates only the output vectors.

use orbit_core::{Rect2, Size2, Vec2};

use crate::config::{Alignment, Direction, LinearParams, MenuConfig, MenuType, RadialParams};

/// Radius used for a radial menu when nothing better is known.
pub const DEFAULT_RADIUS: f32 = 60.0;

/// Derived per-item coordinates and aggregate sizes.
///
/// All vectors are index-aligned 1:1 with items and replaced wholesale
/// on every recomputation; offsets are relative to the main element's
/// anchor point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    /// Open-position offset per item.
    pub coords: Vec<Vec2>,
    /// Cross-axis alignment correction per item (zero in radial mode).
    pub alignment_offsets: Vec<Vec2>,
    /// Closed-position offset per item.
    pub initial_positions: Vec<Vec2>,
    /// Bounding size of the satellite items only.
    pub menu_buttons_size: Size2,
    /// Bounding size of main element and satellites combined.
    pub whole_menu_size: Size2,
}

impl LayoutResult {
    /// Open coordinate of item `i`, zero when out of range.
    #[must_use]
    pub fn coord(&self, i: usize) -> Vec2 {
        self.coords.get(i).copied().unwrap_or(Vec2::ZERO)
    }

    /// Alignment correction of item `i`, zero when out of range.
    #[must_use]
    pub fn alignment_offset(&self, i: usize) -> Vec2 {
        self.alignment_offsets.get(i).copied().unwrap_or(Vec2::ZERO)
    }

    /// Closed position of item `i`, zero when out of range.
    #[must_use]
    pub fn initial_position(&self, i: usize) -> Vec2 {
        self.initial_positions.get(i).copied().unwrap_or(Vec2::ZERO)
    }
}

/// Recomputes the full layout from the current measurements.
///
/// Returns `None` while the preconditions do not hold (no measured
/// items, or an unmeasured main element); the caller keeps its previous
/// result in that case.
#[must_use]
pub fn recompute(config: &MenuConfig, main: Size2, items: &[Size2]) -> Option<LayoutResult> {
    if items.is_empty() || main.is_zero() {
        return None;
    }

    let result = match &config.menu_type {
        MenuType::Linear(params) => linear(config, params, main, items),
        MenuType::Radial(params) => radial(config, params, main, items),
    };
    Some(result)
}

/// Closed positions collapse onto the main element unless an initial
/// offset displaces them from their own open coordinate.
fn initial_positions(config: &MenuConfig, coords: &[Vec2]) -> Vec<Vec2> {
    if config.initial_offset == Vec2::ZERO {
        vec![Vec2::ZERO; coords.len()]
    } else {
        coords.iter().map(|&c| c + config.initial_offset).collect()
    }
}

fn linear(
    config: &MenuConfig,
    params: &LinearParams,
    main: Size2,
    items: &[Size2],
) -> LayoutResult {
    let spacing = config.spacing;

    // Chain the items away from the main element: each step advances by
    // half the previous element, half the current one, plus the gap.
    let mut coords = Vec::with_capacity(items.len());
    let mut cursor = Vec2::ZERO;
    let mut prev = main;
    for &size in items {
        let advance_x = prev.width / 2.0 + size.width / 2.0 + spacing;
        let advance_y = prev.height / 2.0 + size.height / 2.0 + spacing;

        cursor = match params.direction {
            Direction::Left => Vec2::new(cursor.x - advance_x, cursor.y),
            Direction::Right => Vec2::new(cursor.x + advance_x, cursor.y),
            Direction::Top => Vec2::new(cursor.x, cursor.y - advance_y),
            Direction::Bottom => Vec2::new(cursor.x, cursor.y + advance_y),
        };
        coords.push(cursor);
        prev = size;
    }

    // Perpendicular correction so items line up against the main
    // element's edge instead of its center.
    let alignment_offsets = items
        .iter()
        .map(|size| match params.alignment {
            Alignment::Left => Vec2::new((size.width - main.width) / 2.0, 0.0),
            Alignment::Right => Vec2::new((main.width - size.width) / 2.0, 0.0),
            Alignment::Top => Vec2::new(0.0, (size.height - main.height) / 2.0),
            Alignment::Bottom => Vec2::new(0.0, (main.height - size.height) / 2.0),
            Alignment::Center => Vec2::ZERO,
        })
        .collect();

    // Aggregate sizing: sum along the stacking axis, max across it. The
    // growth axis follows the alignment, swapping for top/bottom.
    let mut buttons_size = Size2::ZERO;
    for size in items {
        buttons_size = if params.alignment.is_vertical() {
            Size2::new(
                size.width.max(buttons_size.width),
                buttons_size.height + size.height + spacing,
            )
        } else {
            Size2::new(
                buttons_size.width + size.width + spacing,
                size.height.max(buttons_size.height),
            )
        };
    }

    let whole_menu_size = if params.alignment.is_vertical() {
        Size2::new(
            buttons_size.width.max(main.width),
            buttons_size.height + main.height,
        )
    } else {
        Size2::new(
            buttons_size.width + main.width,
            buttons_size.height.max(main.height),
        )
    };

    LayoutResult {
        initial_positions: initial_positions(config, &coords),
        coords,
        alignment_offsets,
        menu_buttons_size: buttons_size,
        whole_menu_size,
    }
}

fn radial(
    config: &MenuConfig,
    params: &RadialParams,
    main: Size2,
    items: &[Size2],
) -> LayoutResult {
    let n = items.len();

    // Radius resolution order: explicit override, then derived from the
    // main and first item widths, then the fixed fallback.
    let radius = params.radius.unwrap_or_else(|| {
        items
            .first()
            .map_or(DEFAULT_RADIUS, |first| {
                (main.width + first.width) / 2.0 + config.spacing
            })
    });

    // Distribute angles evenly across the arc. A single item sits at the
    // start angle; the n-1 divisor never sees n == 1.
    #[allow(clippy::cast_precision_loss)]
    let coords: Vec<Vec2> = (0..n)
        .map(|i| {
            let angle = if n == 1 {
                params.start_angle
            } else {
                params.start_angle
                    + (params.end_angle - params.start_angle) * i as f32 / (n - 1) as f32
            };
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();

    // Bounding box: union of the main element's footprint with every
    // item's square footprint centered at its coordinate.
    let mut frame = Rect2::centered_at(Vec2::ZERO, main);
    for (coord, size) in coords.iter().zip(items) {
        let footprint = Size2::new(size.width, size.width);
        frame = frame.union(&Rect2::centered_at(*coord, footprint));
    }

    LayoutResult {
        initial_positions: initial_positions(config, &coords),
        alignment_offsets: vec![Vec2::ZERO; n],
        coords,
        menu_buttons_size: frame.size(),
        whole_menu_size: frame.size(),
    }
}
