//! Core abstractions for curvescope-rs.
//!
//! This crate provides the fundamental types used throughout curvescope-rs:
//! - [`CurvatureGrid`] - a regular 3D grid of scalar/tensor field samples
//! - [`WaveParameters`] - animation parameters for the gravitational-wave mode
//! - [`RenderMode`] - the closed set of render mode identifiers
//! - Error types shared by all crates

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod grid;
pub mod mode;
pub mod wave;

pub use error::{CurvescopeError, Result};
pub use grid::{CurvatureGrid, GridBounds, GridSample};
pub use mode::RenderMode;
pub use wave::{
    clamp_wave_amplitude, clamp_wave_frequency, WaveParameterUpdate, WaveParameters,
    DEFAULT_WAVE_PARAMETERS, MAX_WAVE_AMPLITUDE, MAX_WAVE_FREQUENCY, MIN_WAVE_AMPLITUDE,
    MIN_WAVE_FREQUENCY,
};

// Re-export glam types for convenience
pub use glam::{Vec3, Vec4};
