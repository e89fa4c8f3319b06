//! # ORBIT Menu Engine
//!
//! Layout geometry and staggered-animation timing for a floating menu:
//! a main trigger element surrounded by satellite items, stacked along
//! an axis (linear) or distributed along an arc (radial), toggled
//! open/closed by a single boolean.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        MENU PIPELINE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Size Reports → Quantize/Dedup → Layout → Frames → Scheduler  │
//! │        ↓              ↓             ↓        ↓         ↓      │
//! │   Host Measure   Idempotent    Pure Math  Targets  Interp.    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering, hit-testing and the measurement mechanism itself belong
//! to the host. The engine turns measured sizes into per-item offset,
//! scale, opacity, delay and draw-order values, and two aggregate
//! bounding sizes the host can size its container with.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod engine;
pub mod layout;
pub mod measure;
pub mod scheduler;

pub use config::{
    Alignment, ConfigError, ConfigResult, Direction, LinearParams, MenuConfig, MenuConfigBuilder,
    MenuType, RadialParams,
};
pub use engine::{ItemFrame, MenuEngine, SizeBinding};
pub use layout::{recompute, LayoutResult, DEFAULT_RADIUS};
pub use measure::{Anchor, MeasuredSizes, Measurement};
pub use scheduler::{ItemVisual, StaggerScheduler};
