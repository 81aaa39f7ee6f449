//! Deterministic simulation module
//!
//! All kernel logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by body index)
//! - No rendering, clock, or platform dependencies

pub mod collision;
pub mod cue;
pub mod state;
pub mod tick;

pub use collision::{resolve_bounds, resolve_pair};
pub use cue::{Cue, CuePhase, CueView};
pub use state::{Body, BodyView, Bounds, Scene};
pub use tick::{integrate, step_simulation};
