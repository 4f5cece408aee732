//! Dispatch run parameters.

/// Fixed time penalties applied during path composition.
///
/// Weights and penalties share one unit (abstract travel cost); the engine
/// never converts between units.  `DispatchConfig` is cheap to copy and
/// intentionally holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchConfig {
    /// Delay added to a route served by an ambulance on `Break` — the unit
    /// keeps the same route but departs late.
    pub break_duration: f64,
    /// Handoff penalty added whenever a route detours through a hospital
    /// drop-off.
    pub hospital_duration: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            break_duration:    1.0,
            hospital_duration: 3.0,
        }
    }
}
