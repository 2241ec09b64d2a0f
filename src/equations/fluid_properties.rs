//! Single-phase fluid properties (equation of state).
//!
//! The flux layer never hard-codes a gas model: pressure, sound speed, and
//! specific internal energy come through this interface from `(specific
//! volume, specific internal energy)` or `(pressure, density)` pairs. The
//! ideal-gas closure below is the stock implementation.
//!
//! No validity guard is applied to the inputs: a negative density or
//! internal energy reaches the `sqrt` in the sound speed unchecked and
//! produces a NaN that propagates into the wave-speed estimates.

/// Equation-of-state interface consumed by the flux and ghost-state layers.
pub trait FluidProperties: Send + Sync {
    /// Pressure p(v, e) from specific volume and specific internal energy.
    fn pressure(&self, specific_volume: f64, specific_energy: f64) -> f64;

    /// Sound speed c(v, e) from specific volume and specific internal energy.
    fn sound_speed(&self, specific_volume: f64, specific_energy: f64) -> f64;

    /// Specific internal energy e(p, ρ) from pressure and density.
    fn internal_energy(&self, pressure: f64, density: f64) -> f64;

    /// Ratio of specific heats γ.
    fn gamma(&self) -> f64;
}

/// Calorically perfect ideal gas: p = (γ−1) ρ e.
#[derive(Clone, Copy, Debug)]
pub struct IdealGas {
    gamma: f64,
}

impl IdealGas {
    /// Create an ideal gas with the given ratio of specific heats.
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// Diatomic air, γ = 1.4.
    pub fn air() -> Self {
        Self { gamma: 1.4 }
    }
}

impl Default for IdealGas {
    fn default() -> Self {
        Self::air()
    }
}

impl FluidProperties for IdealGas {
    /// p = (γ−1) e / v
    #[inline]
    fn pressure(&self, specific_volume: f64, specific_energy: f64) -> f64 {
        (self.gamma - 1.0) * specific_energy / specific_volume
    }

    /// c = sqrt(γ (γ−1) e)
    #[inline]
    fn sound_speed(&self, _specific_volume: f64, specific_energy: f64) -> f64 {
        (self.gamma * (self.gamma - 1.0) * specific_energy).sqrt()
    }

    /// e = p / ((γ−1) ρ)
    #[inline]
    fn internal_energy(&self, pressure: f64, density: f64) -> f64 {
        pressure / ((self.gamma - 1.0) * density)
    }

    #[inline]
    fn gamma(&self) -> f64 {
        self.gamma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_pressure_energy_roundtrip() {
        let fp = IdealGas::air();
        let rho = 1.2;
        let p = 101325.0;
        let e = fp.internal_energy(p, rho);
        assert!((fp.pressure(1.0 / rho, e) - p).abs() < TOL * p);
    }

    #[test]
    fn test_sound_speed_air() {
        // Sea-level air: c = sqrt(γ p / ρ) ≈ 340 m/s.
        let fp = IdealGas::air();
        let rho = 1.225;
        let p = 101325.0;
        let e = fp.internal_energy(p, rho);
        let c = fp.sound_speed(1.0 / rho, e);
        let expected = (1.4 * p / rho).sqrt();
        assert!((c - expected).abs() < 1e-9);
        assert!((c - 340.0).abs() < 1.0);
    }

    #[test]
    fn test_negative_energy_gives_nan() {
        // The known, unguarded hazard: non-physical states produce NaN.
        let fp = IdealGas::air();
        assert!(fp.sound_speed(1.0, -10.0).is_nan());
    }
}
