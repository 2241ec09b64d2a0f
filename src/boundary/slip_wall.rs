//! Slip-wall (mirror) ghost state.

use crate::equations::EulerState;
use crate::types::{ElementIndex, Normal3, SideIndex};

use super::GhostStateProvider;

/// Slip wall: density and energy copied from the interior, momentum
/// reflected about the face, m_ghost = m − 2 (m·n) n.
///
/// The resulting Riemann problem has equal and opposite normal velocities,
/// so the contact wave sits on the face and the flux carries no mass.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlipWallGhost;

impl GhostStateProvider for SlipWallGhost {
    fn ghost_state(
        &self,
        _side: SideIndex,
        _elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> EulerState {
        let (mu, mv, mw) = n.reflect(u_left.rho_u, u_left.rho_v, u_left.rho_w);
        EulerState {
            rho: u_left.rho,
            rho_u: mu,
            rho_v: mv,
            rho_w: mw,
            rho_e: u_left.rho_e,
        }
    }

    fn name(&self) -> &'static str {
        "slip_wall"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-14;

    #[test]
    fn test_normal_momentum_negated() {
        let bc = SlipWallGhost;
        let interior = EulerState::new(1.0, 2.0, 0.5, -0.3, 5.0);
        let ghost = bc.ghost_state(SideIndex::ZERO, ElementIndex::ZERO, &interior, Normal3::X);
        assert!((ghost.rho_u + 2.0).abs() < TOL);
        assert!((ghost.rho_v - 0.5).abs() < TOL);
        assert!((ghost.rho_w + 0.3).abs() < TOL);
        assert!((ghost.rho - 1.0).abs() < TOL);
        assert!((ghost.rho_e - 5.0).abs() < TOL);
    }

    #[test]
    fn test_oblique_normal_zero_normal_component() {
        let bc = SlipWallGhost;
        let n = Normal3::new(0.6, 0.8, 0.0);
        let interior = EulerState::new(1.0, 1.0, 1.0, 0.2, 4.0);
        let ghost = bc.ghost_state(SideIndex::ZERO, ElementIndex::ZERO, &interior, n);
        // Ghost normal momentum is the negative of the interior's.
        let mn_int = n.dot(interior.rho_u, interior.rho_v, interior.rho_w);
        let mn_gho = n.dot(ghost.rho_u, ghost.rho_v, ghost.rho_w);
        assert!((mn_int + mn_gho).abs() < TOL);
    }
}
