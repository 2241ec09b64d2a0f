//! Far-field reference state configuration.

use crate::equations::{EulerState, FluidProperties};

/// Far-field (free-stream) reference state in primitive variables.
///
/// Configured per boundary from scalar parameters; the conserved form is
/// closed through the equation of state.
#[derive(Clone, Copy, Debug)]
pub struct FarFieldState {
    /// Free-stream density
    pub density: f64,
    /// Free-stream velocity components (u, v, w)
    pub velocity: (f64, f64, f64),
    /// Free-stream pressure
    pub pressure: f64,
}

impl FarFieldState {
    /// Create a far-field state from scalar parameters.
    pub fn new(density: f64, velocity: (f64, f64, f64), pressure: f64) -> Self {
        Self {
            density,
            velocity,
            pressure,
        }
    }

    /// Quiescent far field: zero velocity at the given density and pressure.
    pub fn at_rest(density: f64, pressure: f64) -> Self {
        Self::new(density, (0.0, 0.0, 0.0), pressure)
    }

    /// Conserved-variable form of the far-field state.
    pub fn conserved(&self, fp: &dyn FluidProperties) -> EulerState {
        let (u, v, w) = self.velocity;
        EulerState::from_primitives(fp, self.density, u, v, w, self.pressure)
    }
}
