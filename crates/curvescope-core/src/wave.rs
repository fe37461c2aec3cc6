//! Wave animation parameters for the gravitational-wave render mode.
//!
//! Out-of-range amplitude/frequency values are never an error; they are
//! silently clamped to the nearest valid boundary value.

use serde::{Deserialize, Serialize};

/// Minimum wave amplitude.
pub const MIN_WAVE_AMPLITUDE: f32 = 0.0;
/// Maximum wave amplitude.
pub const MAX_WAVE_AMPLITUDE: f32 = 2.0;
/// Minimum wave frequency.
pub const MIN_WAVE_FREQUENCY: f32 = 0.1;
/// Maximum wave frequency.
pub const MAX_WAVE_FREQUENCY: f32 = 5.0;

/// Clamps an amplitude to `[MIN_WAVE_AMPLITUDE, MAX_WAVE_AMPLITUDE]`.
///
/// Identity on values already inside the range.
#[must_use]
pub fn clamp_wave_amplitude(v: f32) -> f32 {
    v.clamp(MIN_WAVE_AMPLITUDE, MAX_WAVE_AMPLITUDE)
}

/// Clamps a frequency to `[MIN_WAVE_FREQUENCY, MAX_WAVE_FREQUENCY]`.
///
/// Identity on values already inside the range.
#[must_use]
pub fn clamp_wave_frequency(v: f32) -> f32 {
    v.clamp(MIN_WAVE_FREQUENCY, MAX_WAVE_FREQUENCY)
}

/// Animation parameters for the gravitational-wave renderer.
///
/// Owned per-instance by one renderer; mutated only through its setter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParameters {
    /// Wave displacement amplitude, always within the clamp range.
    pub amplitude: f32,
    /// Wave oscillation frequency, always within the clamp range.
    pub frequency: f32,
    /// Whether the wave animation is active.
    pub enabled: bool,
}

/// Default wave parameters, used by a renderer until changed.
pub const DEFAULT_WAVE_PARAMETERS: WaveParameters = WaveParameters {
    amplitude: 0.5,
    frequency: 1.0,
    enabled: true,
};

impl Default for WaveParameters {
    fn default() -> Self {
        DEFAULT_WAVE_PARAMETERS
    }
}

impl WaveParameters {
    /// Merges a partial update into these parameters.
    ///
    /// Amplitude and frequency are clamped through the shared clamp
    /// functions before being stored; `enabled` is stored verbatim.
    pub fn apply(&mut self, update: WaveParameterUpdate) {
        if let Some(amplitude) = update.amplitude {
            self.amplitude = clamp_wave_amplitude(amplitude);
        }
        if let Some(frequency) = update.frequency {
            self.frequency = clamp_wave_frequency(frequency);
        }
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
    }
}

/// A partial update to [`WaveParameters`]; `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveParameterUpdate {
    /// New amplitude, clamped on apply.
    pub amplitude: Option<f32>,
    /// New frequency, clamped on apply.
    pub frequency: Option<f32>,
    /// New enabled flag, stored verbatim.
    pub enabled: Option<bool>,
}

impl WaveParameterUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the amplitude field.
    #[must_use]
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = Some(amplitude);
        self
    }

    /// Sets the frequency field.
    #[must_use]
    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the enabled field.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}
