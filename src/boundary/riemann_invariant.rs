//! Riemann-invariant (isentropic characteristic) ghost state.

use crate::equations::{EulerState, FlowRegime, FluidProperties};
use crate::types::{ElementIndex, Normal3, SideIndex};

use super::{FarFieldState, GhostStateProvider};

/// Subsonic far-field condition built from the two Riemann invariants
/// R± = u·n ± 2c/(γ−1).
///
/// R⁺ is carried out of the domain along u·n + c and evaluated from the
/// interior; R⁻ comes in along u·n − c and is evaluated from the far
/// field. Their half-sum and scaled difference fix the boundary normal
/// velocity and sound speed; density follows from the entropy of the
/// upwind side, s = c²/(γ ρ^(γ−1)). Tangential velocity is carried over
/// from the upwind side unchanged.
///
/// Supersonic faces bypass the invariant solve: all characteristics run
/// one way, so the ghost is the far field (inflow) or the interior
/// (outflow) outright.
#[derive(Clone, Debug)]
pub struct RiemannInvariantGhost<F: FluidProperties> {
    fp: F,
    far_field: FarFieldState,
    far_conserved: EulerState,
}

impl<F: FluidProperties> RiemannInvariantGhost<F> {
    /// Create a Riemann-invariant ghost from a far-field state.
    pub fn new(fp: F, far_field: FarFieldState) -> Self {
        let far_conserved = far_field.conserved(&fp);
        Self {
            fp,
            far_field,
            far_conserved,
        }
    }

    /// The configured far-field state.
    pub fn far_field(&self) -> &FarFieldState {
        &self.far_field
    }
}

impl<F: FluidProperties> GhostStateProvider for RiemannInvariantGhost<F> {
    fn ghost_state(
        &self,
        _side: SideIndex,
        _elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> EulerState {
        let gamma = self.fp.gamma();
        let gamm1 = gamma - 1.0;

        let prim1 = u_left.primitives(&self.fp);
        let vn1 = prim1.normal_velocity(n);

        let regime = match FlowRegime::classify(vn1 / prim1.c) {
            Some(r) => r,
            // NaN Mach: hand the interior state back and let the flux
            // solve report the non-physical values.
            None => return *u_left,
        };

        match regime {
            FlowRegime::SupersonicInflow => return self.far_conserved,
            FlowRegime::SupersonicOutflow => return *u_left,
            FlowRegime::SubsonicInflow | FlowRegime::SubsonicOutflow => {}
        }

        let prim2 = self.far_conserved.primitives(&self.fp);
        let vn2 = prim2.normal_velocity(n);

        let rplus = vn1 + 2.0 * prim1.c / gamm1;
        let rmins = vn2 - 2.0 * prim2.c / gamm1;
        let velob = 0.5 * (rplus + rmins);
        let csoub = 0.25 * gamm1 * (rplus - rmins);

        // Entropy and tangential velocity come from the upwind side.
        let (rho_b, vel_b, c_b, vn_b) = if regime.is_inflow() {
            (self.far_conserved.rho, (prim2.u, prim2.v, prim2.w), prim2.c, vn2)
        } else {
            (u_left.rho, (prim1.u, prim1.v, prim1.w), prim1.c, vn1)
        };

        let vdiff = velob - vn_b;
        let (ub, vb, wb) = (
            vel_b.0 + vdiff * n.x,
            vel_b.1 + vdiff * n.y,
            vel_b.2 + vdiff * n.z,
        );

        let entrb = c_b * c_b / (gamma * rho_b.powf(gamm1));
        let rhob = (csoub * csoub / (gamma * entrb)).powf(1.0 / gamm1);
        let presb = rhob * csoub * csoub / gamma;

        let eb = self.fp.internal_energy(presb, rhob);
        let q2b = ub * ub + vb * vb + wb * wb;
        EulerState {
            rho: rhob,
            rho_u: rhob * ub,
            rho_v: rhob * vb,
            rho_w: rhob * wb,
            rho_e: rhob * eb + 0.5 * rhob * q2b,
        }
    }

    fn name(&self) -> &'static str {
        "riemann_invariant"
    }
}
