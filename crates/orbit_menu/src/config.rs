//! Menu configuration: immutable-per-build parameter set.
//!
//! A [`MenuConfig`] is built once through [`MenuConfigBuilder`] and never
//! mutated afterwards. The linear/radial split is a sum type
//! ([`MenuType`]) and the builder rejects option calls that do not match
//! the selected variant at construction time, so a radial menu can never
//! silently carry a stacking direction and vice versa.

use orbit_core::{AnimationSpec, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::measure::Anchor;

/// Stacking axis and sign for a linear menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Items grow towards negative x.
    #[default]
    Left,
    /// Items grow towards positive x.
    Right,
    /// Items grow towards negative y.
    Top,
    /// Items grow towards positive y.
    Bottom,
}

/// Cross-axis alignment of linear items against the main element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Flush with the main element's left edge.
    Left,
    /// Flush with the main element's right edge.
    Right,
    /// Flush with the main element's top edge.
    Top,
    /// Flush with the main element's bottom edge.
    Bottom,
    /// Centered on the main element (no correction).
    #[default]
    Center,
}

impl Alignment {
    /// Returns true if this alignment stacks the aggregate sizes
    /// vertically (top/bottom) rather than horizontally.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Parameters that only apply to a linear ("straight") menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinearParams {
    /// Stacking axis and sign.
    #[serde(default)]
    pub direction: Direction,
    /// Cross-axis correction.
    #[serde(default)]
    pub alignment: Alignment,
}

/// Parameters that only apply to a radial ("circle") menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialParams {
    /// Arc start angle in radians.
    pub start_angle: f32,
    /// Arc end angle in radians.
    pub end_angle: f32,
    /// Explicit radius override. When unset the radius is derived from
    /// the measured sizes, falling back to a fixed default.
    pub radius: Option<f32>,
}

impl Default for RadialParams {
    fn default() -> Self {
        // The upper half circle, left to right
        Self {
            start_angle: std::f32::consts::PI,
            end_angle: 2.0 * std::f32::consts::PI,
            radius: None,
        }
    }
}

/// Menu geometry variant: items on an axis or items on an arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuType {
    /// Items stacked along a cardinal direction.
    Linear(LinearParams),
    /// Items distributed along an arc.
    Radial(RadialParams),
}

impl MenuType {
    /// Short label used in error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::Radial(_) => "radial",
        }
    }
}

impl Default for MenuType {
    fn default() -> Self {
        Self::Linear(LinearParams::default())
    }
}

/// Errors rejected at configuration build time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A linear-only option was set on a radial menu, or vice versa.
    #[error("option `{option}` is not valid for a {menu_type} menu")]
    MismatchedOption {
        /// The offending builder option.
        option: &'static str,
        /// The menu type the builder was in.
        menu_type: &'static str,
    },

    /// Closed-state opacity outside `[0, 1]`.
    #[error("initial opacity must be within [0, 1], got {0}")]
    OpacityOutOfRange(f32),

    /// Closed-state scale below zero.
    #[error("initial scaling must be non-negative, got {0}")]
    NegativeScaling(f32),

    /// Negative gap between elements.
    #[error("spacing must be non-negative, got {0}")]
    NegativeSpacing(f32),

    /// Radius override that cannot produce a circle.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    /// A stagger delay that is negative, NaN or infinite.
    #[error("stagger delay at index {index} must be finite and non-negative, got {value}")]
    InvalidDelay {
        /// Index into the delay scheme.
        index: usize,
        /// The rejected value.
        value: f32,
    },
}

/// Result type for configuration building.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Immutable configuration for one floating menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Number of satellite items around the main element.
    pub item_count: usize,
    /// Geometry variant and its parameters.
    #[serde(default)]
    pub menu_type: MenuType,
    /// Gap between consecutive elements.
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    /// Scale factor applied to items while closed.
    #[serde(default = "default_one")]
    pub initial_scaling: f32,
    /// Closed-position displacement from the open coordinate.
    #[serde(default)]
    pub initial_offset: Vec2,
    /// Item opacity while closed.
    #[serde(default = "default_one")]
    pub initial_opacity: f32,
    /// Shared animation duration and curve.
    #[serde(default)]
    pub animation: AnimationSpec,
    /// Per-item stagger delays, index-aligned to item order. Empty means
    /// no stagger.
    #[serde(default)]
    pub delays: Vec<f32>,
    /// Anchor point of the main element within the composite box.
    #[serde(default)]
    pub main_anchor: Anchor,
    /// Reverses the satellite draw order when true.
    #[serde(default)]
    pub inverse_z_index: bool,
}

fn default_spacing() -> f32 {
    10.0
}

fn default_one() -> f32 {
    1.0
}

impl MenuConfig {
    /// Starts building a configuration for `item_count` satellite items.
    #[must_use]
    pub fn builder(item_count: usize) -> MenuConfigBuilder {
        MenuConfigBuilder::new(item_count)
    }

    /// Returns the linear parameters, if this is a linear menu.
    #[must_use]
    pub const fn linear_params(&self) -> Option<&LinearParams> {
        match &self.menu_type {
            MenuType::Linear(params) => Some(params),
            MenuType::Radial(_) => None,
        }
    }

    /// Returns the radial parameters, if this is a radial menu.
    #[must_use]
    pub const fn radial_params(&self) -> Option<&RadialParams> {
        match &self.menu_type {
            MenuType::Radial(params) => Some(params),
            MenuType::Linear(_) => None,
        }
    }

    /// Returns the stagger delay for item `i`.
    ///
    /// Opening cascades in index order; closing walks the scheme
    /// backwards so the item that opened last closes first. Indices
    /// outside the scheme mean "no delay" rather than a crash.
    #[must_use]
    pub fn delay_for(&self, i: usize, opening: bool) -> f32 {
        if self.delays.is_empty() || i >= self.item_count {
            return 0.0;
        }
        let index = if opening { i } else { self.item_count - 1 - i };
        self.delays.get(index).copied().unwrap_or(0.0)
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            item_count: 0,
            menu_type: MenuType::default(),
            spacing: default_spacing(),
            initial_scaling: 1.0,
            initial_offset: Vec2::ZERO,
            initial_opacity: 1.0,
            animation: AnimationSpec::default(),
            delays: Vec::new(),
            main_anchor: Anchor::default(),
            inverse_z_index: false,
        }
    }
}

/// Builder for [`MenuConfig`].
///
/// All options are independent and may be applied in any order; the last
/// write per key wins. Option calls that do not match the selected menu
/// type are remembered and surfaced by [`MenuConfigBuilder::build`].
#[derive(Debug, Clone)]
pub struct MenuConfigBuilder {
    config: MenuConfig,
    error: Option<ConfigError>,
}

impl MenuConfigBuilder {
    /// Creates a builder with the defaults of a linear menu.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            config: MenuConfig {
                item_count,
                ..MenuConfig::default()
            },
            error: None,
        }
    }

    /// Selects the linear ("straight") menu type.
    #[must_use]
    pub fn straight(mut self) -> Self {
        if self.config.linear_params().is_none() {
            self.config.menu_type = MenuType::Linear(LinearParams::default());
        }
        self
    }

    /// Selects the radial ("circle") menu type.
    #[must_use]
    pub fn circle(mut self) -> Self {
        if self.config.radial_params().is_none() {
            self.config.menu_type = MenuType::Radial(RadialParams::default());
        }
        self
    }

    fn reject(&mut self, option: &'static str) {
        if self.error.is_none() {
            self.error = Some(ConfigError::MismatchedOption {
                option,
                menu_type: self.config.menu_type.label(),
            });
        }
    }

    /// Sets the stacking direction (linear only).
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        match &mut self.config.menu_type {
            MenuType::Linear(params) => params.direction = direction,
            MenuType::Radial(_) => self.reject("direction"),
        }
        self
    }

    /// Sets the cross-axis alignment (linear only).
    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        match &mut self.config.menu_type {
            MenuType::Linear(params) => params.alignment = alignment,
            MenuType::Radial(_) => self.reject("alignment"),
        }
        self
    }

    /// Sets the arc start angle in radians (radial only).
    #[must_use]
    pub fn start_angle(mut self, angle: f32) -> Self {
        match &mut self.config.menu_type {
            MenuType::Radial(params) => params.start_angle = angle,
            MenuType::Linear(_) => self.reject("start_angle"),
        }
        self
    }

    /// Sets the arc end angle in radians (radial only).
    #[must_use]
    pub fn end_angle(mut self, angle: f32) -> Self {
        match &mut self.config.menu_type {
            MenuType::Radial(params) => params.end_angle = angle,
            MenuType::Linear(_) => self.reject("end_angle"),
        }
        self
    }

    /// Overrides the arc radius (radial only).
    #[must_use]
    pub fn radius(mut self, radius: f32) -> Self {
        match &mut self.config.menu_type {
            MenuType::Radial(params) => params.radius = Some(radius),
            MenuType::Linear(_) => self.reject("radius"),
        }
        self
    }

    /// Sets the gap between consecutive elements.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.config.spacing = spacing;
        self
    }

    /// Sets the closed-state scale factor.
    #[must_use]
    pub fn initial_scaling(mut self, scaling: f32) -> Self {
        self.config.initial_scaling = scaling;
        self
    }

    /// Sets the closed-state displacement vector.
    #[must_use]
    pub fn initial_offset(mut self, dx: f32, dy: f32) -> Self {
        self.config.initial_offset = Vec2::new(dx, dy);
        self
    }

    /// Sets the closed-state opacity.
    #[must_use]
    pub fn initial_opacity(mut self, opacity: f32) -> Self {
        self.config.initial_opacity = opacity;
        self
    }

    /// Sets the shared animation duration and curve.
    #[must_use]
    pub fn animation(mut self, spec: AnimationSpec) -> Self {
        self.config.animation = spec;
        self
    }

    /// Derives the stagger scheme from a single per-item delta:
    /// item `i` gets delay `delta * i`.
    #[must_use]
    pub fn delays_from_delta(mut self, delta: f32) -> Self {
        #[allow(clippy::cast_precision_loss)]
        {
            self.config.delays = (0..self.config.item_count)
                .map(|i| delta * i as f32)
                .collect();
        }
        self
    }

    /// Sets an explicit per-item stagger scheme.
    #[must_use]
    pub fn delays(mut self, delays: Vec<f32>) -> Self {
        self.config.delays = delays;
        self
    }

    /// Sets the anchor of the main element within the composite box.
    #[must_use]
    pub fn main_alignment(mut self, anchor: Anchor) -> Self {
        self.config.main_anchor = anchor;
        self
    }

    /// Reverses the satellite draw order.
    #[must_use]
    pub fn inverse_z_index(mut self, inverse: bool) -> Self {
        self.config.inverse_z_index = inverse;
        self
    }

    /// Validates and returns the finished configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] recorded while building, or any
    /// range violation found during validation.
    pub fn build(self) -> ConfigResult<MenuConfig> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let config = self.config;

        if !(0.0..=1.0).contains(&config.initial_opacity) {
            return Err(ConfigError::OpacityOutOfRange(config.initial_opacity));
        }
        if config.initial_scaling < 0.0 {
            return Err(ConfigError::NegativeScaling(config.initial_scaling));
        }
        if config.spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing(config.spacing));
        }
        if let Some(RadialParams {
            radius: Some(radius),
            ..
        }) = config.radial_params()
        {
            if *radius <= 0.0 {
                return Err(ConfigError::NonPositiveRadius(*radius));
            }
        }
        for (index, &value) in config.delays.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDelay { index, value });
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_menu() {
        let config = MenuConfig::builder(3).build().unwrap();

        assert_eq!(config.item_count, 3);
        assert_eq!(config.spacing, 10.0);
        assert_eq!(config.initial_scaling, 1.0);
        assert_eq!(config.initial_opacity, 1.0);
        assert!(config.delays.is_empty());
        assert_eq!(config.main_anchor, Anchor::Center);
        assert!(!config.inverse_z_index);
        assert!(config.linear_params().is_some());
        assert_eq!(config.linear_params().unwrap().direction, Direction::Left);
    }

    #[test]
    fn test_main_alignment_is_recorded() {
        let config = MenuConfig::builder(2)
            .main_alignment(Anchor::BottomTrailing)
            .build()
            .unwrap();

        assert_eq!(config.main_anchor, Anchor::BottomTrailing);
    }

    #[test]
    fn test_radial_option_on_linear_menu_is_rejected() {
        let err = MenuConfig::builder(3)
            .straight()
            .start_angle(0.0)
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::MismatchedOption {
                option: "start_angle",
                menu_type: "linear",
            }
        );
    }

    #[test]
    fn test_linear_option_on_radial_menu_is_rejected() {
        let err = MenuConfig::builder(3)
            .circle()
            .direction(Direction::Right)
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MismatchedOption {
                option: "direction",
                ..
            }
        ));
    }

    #[test]
    fn test_last_write_wins() {
        let config = MenuConfig::builder(2)
            .spacing(4.0)
            .spacing(12.0)
            .build()
            .unwrap();

        assert_eq!(config.spacing, 12.0);
    }

    #[test]
    fn test_reselecting_same_type_keeps_params() {
        let config = MenuConfig::builder(2)
            .circle()
            .radius(80.0)
            .circle()
            .build()
            .unwrap();

        assert_eq!(config.radial_params().unwrap().radius, Some(80.0));
    }

    #[test]
    fn test_delays_from_delta() {
        let config = MenuConfig::builder(4).delays_from_delta(0.1).build().unwrap();

        assert_eq!(config.delays.len(), 4);
        assert_eq!(config.delays[0], 0.0);
        assert!((config.delays[3] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_delay_reverses_on_close() {
        let config = MenuConfig::builder(3)
            .delays(vec![0.0, 0.1, 0.2])
            .build()
            .unwrap();

        // opening: cascade outwards in index order
        assert_eq!(config.delay_for(2, true), 0.2);
        // closing: the item that opened last closes first
        assert_eq!(config.delay_for(2, false), 0.0);
        assert_eq!(config.delay_for(0, false), 0.2);
    }

    #[test]
    fn test_short_delay_scheme_yields_zero() {
        let config = MenuConfig::builder(4)
            .delays(vec![0.0, 0.1])
            .build()
            .unwrap();

        assert_eq!(config.delay_for(3, true), 0.0);
        assert_eq!(config.delay_for(0, false), 0.0);
    }

    #[test]
    fn test_range_validation() {
        assert!(MenuConfig::builder(1).initial_opacity(1.5).build().is_err());
        assert!(MenuConfig::builder(1).initial_scaling(-0.1).build().is_err());
        assert!(MenuConfig::builder(1).spacing(-1.0).build().is_err());
        assert!(MenuConfig::builder(1).circle().radius(0.0).build().is_err());
        assert!(MenuConfig::builder(1)
            .delays(vec![f32::NAN])
            .build()
            .is_err());
    }

    #[test]
    fn test_config_from_toml() {
        let config: MenuConfig = toml::from_str(
            r#"
            item_count = 3
            spacing = 8.0
            delays = [0.0, 0.05, 0.1]

            [menu_type.radial]
            start_angle = 3.14159265
            end_angle = 6.28318531
            "#,
        )
        .unwrap();

        assert_eq!(config.item_count, 3);
        assert_eq!(config.spacing, 8.0);
        assert!(config.radial_params().is_some());
        assert_eq!(config.initial_opacity, 1.0); // default applied
    }
}
