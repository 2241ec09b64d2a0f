//! Free inflow and free outflow ghost states.

use crate::equations::{EulerState, FluidProperties};
use crate::types::{ElementIndex, Normal3, SideIndex};

use super::{FarFieldState, GhostStateProvider};

/// Free inflow: the ghost state is the prescribed far-field state,
/// independent of the interior solution.
#[derive(Clone, Debug)]
pub struct FreeInflowGhost {
    far_field: FarFieldState,
    conserved: EulerState,
}

impl FreeInflowGhost {
    /// Create a free-inflow ghost from a far-field state, closing the
    /// conserved form once through the equation of state.
    pub fn new(fp: &dyn FluidProperties, far_field: FarFieldState) -> Self {
        Self {
            far_field,
            conserved: far_field.conserved(fp),
        }
    }

    /// The configured far-field state.
    pub fn far_field(&self) -> &FarFieldState {
        &self.far_field
    }
}

impl GhostStateProvider for FreeInflowGhost {
    fn ghost_state(
        &self,
        _side: SideIndex,
        _elem: ElementIndex,
        _u_left: &EulerState,
        _n: Normal3,
    ) -> EulerState {
        self.conserved
    }

    fn name(&self) -> &'static str {
        "free_inflow"
    }
}

/// Free outflow: zero-gradient extrapolation of the interior state.
#[derive(Clone, Copy, Debug, Default)]
pub struct FreeOutflowGhost;

impl GhostStateProvider for FreeOutflowGhost {
    fn ghost_state(
        &self,
        _side: SideIndex,
        _elem: ElementIndex,
        u_left: &EulerState,
        _n: Normal3,
    ) -> EulerState {
        *u_left
    }

    fn name(&self) -> &'static str {
        "free_outflow"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::IdealGas;

    #[test]
    fn test_free_inflow_ignores_interior() {
        let fp = IdealGas::air();
        let bc = FreeInflowGhost::new(&fp, FarFieldState::new(1.0, (2.0, 0.0, 0.0), 1.0));
        let interior = EulerState::new(9.0, 9.0, 9.0, 9.0, 99.0);
        let ghost = bc.ghost_state(SideIndex::ZERO, ElementIndex::ZERO, &interior, Normal3::X);
        assert!((ghost.rho - 1.0).abs() < 1e-14);
        assert!((ghost.rho_u - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_free_outflow_extrapolates() {
        let bc = FreeOutflowGhost;
        let interior = EulerState::new(1.2, 0.3, -0.1, 0.0, 2.9);
        let ghost = bc.ghost_state(SideIndex::ZERO, ElementIndex::ZERO, &interior, Normal3::X);
        assert_eq!(ghost, interior);
    }
}
