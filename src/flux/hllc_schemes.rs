//! HLLC-based boundary flux schemes.
//!
//! Each scheme pairs the Riemann solver in [`super::hllc`] with one
//! ghost-state policy. For the flux the regime logic lives entirely in
//! the policy; the Jacobian additionally folds the ghost's dependence
//! on the interior state back in wherever the policy has one.

use crate::boundary::{CharacteristicGhost, FarFieldState, GhostStateProvider, SlipWallGhost};
use crate::equations::{normal_mach, EulerState, FlowRegime, FluidProperties};
use crate::types::{ElementIndex, FaceId, Jacobian5, Normal3, SideIndex};

use super::error::BoundaryFluxError;
use super::hllc::RiemannFan;
use super::traits::BoundaryFluxScheme;

/// Inflow/outflow far-field boundary: HLLC against the characteristic
/// ghost.
///
/// The ghost supplies the far field on inflow faces and the interior
/// state on outflow faces; in the latter case the solve collapses to
/// the exact physical flux, and the Jacobian is the sum of both
/// one-sided derivatives because the ghost moves with the interior.
/// Supersonic inflow puts the whole fan on the exterior side, so the
/// flux is the far-field flux and the Jacobian vanishes, exactly as
/// the characteristics dictate.
#[derive(Clone, Debug)]
pub struct HllcInflowOutflowFlux<F: FluidProperties + Clone> {
    fp: F,
    ghost: CharacteristicGhost<F>,
}

impl<F: FluidProperties + Clone> HllcInflowOutflowFlux<F> {
    pub fn new(fp: F, far_field: FarFieldState) -> Self {
        let ghost = CharacteristicGhost::new(fp.clone(), far_field);
        Self { fp, ghost }
    }
}

impl<F: FluidProperties + Clone> BoundaryFluxScheme for HllcInflowOutflowFlux<F> {
    fn calc_flux(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<EulerState, BoundaryFluxError> {
        let ghost = self.ghost.ghost_state(side, elem, u_left, n);
        RiemannFan::new(&self.fp, u_left, &ghost, n).flux(FaceId::new(elem, side))
    }

    fn calc_jacobian(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<Jacobian5, BoundaryFluxError> {
        let ghost = self.ghost.ghost_state(side, elem, u_left, n);
        let face = FaceId::new(elem, side);
        let fan = RiemannFan::new(&self.fp, u_left, &ghost, n);
        let jl = fan.jacobian_left(face)?;
        let mach = normal_mach(&self.fp, u_left, n);
        if matches!(FlowRegime::classify(mach), Some(r) if r.is_inflow()) {
            // The ghost is the fixed far field.
            Ok(jl)
        } else {
            // The ghost tracks the interior state, so its dependence
            // folds in with an identity inner derivative.
            Ok(jl + fan.jacobian_right(face)?)
        }
    }

    fn name(&self) -> &'static str {
        "hllc_inflow_outflow"
    }
}

/// Slip wall: HLLC against the mirror ghost.
///
/// The mirror state is itself a function of the interior state, so the
/// Jacobian is the total derivative ∂F/∂U_L + ∂F/∂U_R · R, with R the
/// constant reflection matrix of the face.
#[derive(Clone, Debug)]
pub struct HllcSlipWallFlux<F: FluidProperties> {
    fp: F,
    ghost: SlipWallGhost,
}

impl<F: FluidProperties> HllcSlipWallFlux<F> {
    pub fn new(fp: F) -> Self {
        Self {
            fp,
            ghost: SlipWallGhost,
        }
    }
}

impl<F: FluidProperties> BoundaryFluxScheme for HllcSlipWallFlux<F> {
    fn calc_flux(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<EulerState, BoundaryFluxError> {
        let ghost = self.ghost.ghost_state(side, elem, u_left, n);
        RiemannFan::new(&self.fp, u_left, &ghost, n).flux(FaceId::new(elem, side))
    }

    fn calc_jacobian(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<Jacobian5, BoundaryFluxError> {
        let ghost = self.ghost.ghost_state(side, elem, u_left, n);
        let face = FaceId::new(elem, side);
        let fan = RiemannFan::new(&self.fp, u_left, &ghost, n);
        let jl = fan.jacobian_left(face)?;
        let jr = fan.jacobian_right(face)?;
        Ok(jl + jr * Jacobian5::reflection(n))
    }

    fn name(&self) -> &'static str {
        "hllc_slip_wall"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::{boundary_flux, flux_jacobian, IdealGas};

    const TOL: f64 = 1e-10;

    fn ids() -> (SideIndex, ElementIndex) {
        (SideIndex::ZERO, ElementIndex::ZERO)
    }

    #[test]
    fn test_inflow_outflow_subsonic_outflow_collapses_to_physical() {
        // Outflow regime: ghost equals interior, HLLC gives the exact flux.
        let fp = IdealGas::air();
        let scheme = HllcInflowOutflowFlux::new(fp, FarFieldState::at_rest(1.0, 1.0));
        let state = EulerState::from_primitives(&fp, 1.0, 0.3, 0.1, 0.0, 1.0);
        let n = Normal3::X;
        let (side, elem) = ids();
        let flux = scheme.calc_flux(side, elem, &state, n).unwrap();
        let exact = boundary_flux(&fp, &state, n);
        for (a, b) in flux.to_array().iter().zip(exact.to_array()) {
            assert!((a - b).abs() < TOL);
        }
    }

    #[test]
    fn test_inflow_outflow_supersonic_regimes() {
        let fp = IdealGas::air();
        let far = FarFieldState::new(1.0, (-2.0, 0.0, 0.0), 1.0);
        let scheme = HllcInflowOutflowFlux::new(fp, far);
        let n = Normal3::X;
        let (side, elem) = ids();

        // Supersonic inflow: far-field flux, zero Jacobian.
        let inflow = EulerState::from_primitives(&fp, 1.0, -5.0, 0.0, 0.0, 1.0);
        let flux = scheme.calc_flux(side, elem, &inflow, n).unwrap();
        let exact = boundary_flux(&fp, &far.conserved(&fp), n);
        for (a, b) in flux.to_array().iter().zip(exact.to_array()) {
            assert!((a - b).abs() < TOL);
        }
        let jac = scheme.calc_jacobian(side, elem, &inflow, n).unwrap();
        assert!(jac.max_abs() < TOL);

        // Supersonic outflow: interior flux, exact physical Jacobian.
        let outflow = EulerState::from_primitives(&fp, 1.0, 5.0, 0.0, 0.0, 1.0);
        let flux = scheme.calc_flux(side, elem, &outflow, n).unwrap();
        let exact = boundary_flux(&fp, &outflow, n);
        for (a, b) in flux.to_array().iter().zip(exact.to_array()) {
            assert!((a - b).abs() < TOL);
        }
        let jac = scheme.calc_jacobian(side, elem, &outflow, n).unwrap();
        let exact_jac = flux_jacobian(&fp, &outflow, n);
        for i in 0..5 {
            for j in 0..5 {
                assert!((jac[(i, j)] - exact_jac[(i, j)]).abs() < TOL);
            }
        }
    }

    #[test]
    fn test_inflow_outflow_subsonic_outflow_jacobian_finite_difference() {
        // On an outflow face the ghost tracks the interior state, so the
        // Jacobian must be the full derivative of the flux, not just the
        // one-sided term.
        let fp = IdealGas::air();
        let scheme = HllcInflowOutflowFlux::new(fp, FarFieldState::at_rest(1.0, 1.0));
        let state = EulerState::from_primitives(&fp, 1.0, 0.3, 0.1, 0.0, 1.0);
        let n = Normal3::new(0.6, 0.8, 0.0);
        let (side, elem) = ids();
        let jac = scheme.calc_jacobian(side, elem, &state, n).unwrap();

        let h = 1e-6;
        let base = state.to_array();
        for col in 0..5 {
            let mut up = base;
            let mut dn = base;
            up[col] += h;
            dn[col] -= h;
            let f_up = scheme
                .calc_flux(side, elem, &EulerState::from_array(up), n)
                .unwrap()
                .to_array();
            let f_dn = scheme
                .calc_flux(side, elem, &EulerState::from_array(dn), n)
                .unwrap()
                .to_array();
            for row in 0..5 {
                let fd = (f_up[row] - f_dn[row]) / (2.0 * h);
                assert!(
                    (jac[(row, col)] - fd).abs() < 1e-5,
                    "jac({row},{col}) = {} vs fd {}",
                    jac[(row, col)],
                    fd
                );
            }
        }
    }

    #[test]
    fn test_slip_wall_zero_normal_mass_flux() {
        let fp = IdealGas::air();
        let scheme = HllcSlipWallFlux::new(fp);
        let (side, elem) = ids();
        let n = Normal3::new(0.6, 0.8, 0.0);
        let state = EulerState::from_primitives(&fp, 1.2, 0.4, -0.3, 0.1, 1.5);
        let flux = scheme.calc_flux(side, elem, &state, n).unwrap();

        // The wall carries pressure only: momentum flux along n, no mass
        // or energy transport.
        assert!(flux.rho.abs() < 1e-9, "mass flux {}", flux.rho);
        assert!(flux.rho_e.abs() < 1e-8, "energy flux {}", flux.rho_e);
        let p_star = n.dot(flux.rho_u, flux.rho_v, flux.rho_w);
        assert!(p_star > 0.0);
        // Momentum flux is aligned with the normal.
        assert!((flux.rho_u - p_star * n.x).abs() < 1e-9);
        assert!((flux.rho_v - p_star * n.y).abs() < 1e-9);
        assert!((flux.rho_w - p_star * n.z).abs() < 1e-9);
    }

    #[test]
    fn test_slip_wall_still_gas_pressure_only() {
        // A gas at rest against the wall: p* is the static pressure.
        let fp = IdealGas::air();
        let scheme = HllcSlipWallFlux::new(fp);
        let (side, elem) = ids();
        let state = EulerState::from_primitives(&fp, 1.0, 0.0, 0.0, 0.0, 2.0);
        let flux = scheme.calc_flux(side, elem, &state, Normal3::X).unwrap();
        assert!(flux.rho.abs() < TOL);
        assert!((flux.rho_u - 2.0).abs() < 1e-9);
        assert!(flux.rho_e.abs() < TOL);
    }
}
