//! # ORBIT Core
//!
//! Geometry and animation fundamentals shared by the menu engine:
//!
//! - 2D math: [`Vec2`], [`Size2`], [`Rect2`], measurement quantization
//! - Animation: [`Easing`] curves, [`AnimationSpec`], delay-aware
//!   [`Animation`] / [`Animation2D`] interpolators
//!
//! Everything here is a plain value type. State machines, measurement
//! intake and layout policy live in `orbit_menu`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod math;

pub use animation::{Animation, Animation2D, AnimationSpec, Easing};
pub use math::{quantize, Rect2, Size2, Vec2};
