//! Riemann-invariant far-field boundary flux.
//!
//! This scheme does not run an approximate Riemann solve. The invariant
//! ghost already is the state on the face, so the flux is the exact
//! physical flux of that state. The Jacobian chains ∂F/∂Q_b through the
//! invariant solve ∂Q_b/∂U, which makes it the exact derivative of the
//! flux in every regime.

use crate::boundary::{FarFieldState, GhostStateProvider, RiemannInvariantGhost};
use crate::equations::{
    boundary_flux, flux_jacobian, normal_mach, EulerState, FlowRegime, FluidProperties,
};
use crate::types::{ElementIndex, FaceId, Jacobian5, Normal3, SideIndex};

use super::error::BoundaryFluxError;
use super::traits::BoundaryFluxScheme;

/// Subsonic-capable far-field boundary built on the isentropic Riemann
/// invariants R± = u·n ± 2c/(γ−1).
///
/// Supersonic faces reduce to the free schemes: the flux is the
/// far-field flux with a zero Jacobian on inflow, and the interior
/// physical flux with the analytic flux Jacobian on outflow. Subsonic
/// faces evaluate the physical flux at the invariant boundary state and
/// differentiate it through the invariant solve.
#[derive(Clone, Debug)]
pub struct RiemannInvariantFlux<F: FluidProperties + Clone> {
    fp: F,
    ghost: RiemannInvariantGhost<F>,
    far: EulerState,
}

impl<F: FluidProperties + Clone> RiemannInvariantFlux<F> {
    pub fn new(fp: F, far_field: FarFieldState) -> Self {
        let far = far_field.conserved(&fp);
        let ghost = RiemannInvariantGhost::new(fp.clone(), far_field);
        Self { fp, ghost, far }
    }

    /// Exact derivative of the subsonic boundary flux with respect to
    /// the interior state, chained through the invariant solve.
    ///
    /// The interior enters only through R⁺ = vn₁ + 2c₁/(γ−1) on inflow
    /// faces, and additionally through the entropy and tangential
    /// velocity on outflow faces; R⁻ comes from the fixed far field
    /// either way. The boundary primitives Q_b = (ρ_b, u_b, p_b) are
    /// rebuilt here with the same closure as the ghost policy, then
    /// ∂(F·n)/∂Q_b is contracted with ∂Q_b/∂U (ideal gas).
    fn subsonic_jacobian(&self, u_left: &EulerState, n: Normal3, inflow: bool) -> Jacobian5 {
        let gamma = self.fp.gamma();
        let gamm1 = gamma - 1.0;

        let prim1 = u_left.primitives(&self.fp);
        let vn1 = prim1.normal_velocity(n);
        let prim2 = self.far.primitives(&self.fp);
        let vn2 = prim2.normal_velocity(n);

        let rplus = vn1 + 2.0 * prim1.c / gamm1;
        let rmins = vn2 - 2.0 * prim2.c / gamm1;
        let velob = 0.5 * (rplus + rmins);
        let csoub = 0.25 * gamm1 * (rplus - rmins);

        // Boundary state, same upwind closure as the ghost policy.
        let (rho_up, vel_up, c_up, vn_up) = if inflow {
            (self.far.rho, (prim2.u, prim2.v, prim2.w), prim2.c, vn2)
        } else {
            (u_left.rho, (prim1.u, prim1.v, prim1.w), prim1.c, vn1)
        };
        let vdiff = velob - vn_up;
        let ub = [
            vel_up.0 + vdiff * n.x,
            vel_up.1 + vdiff * n.y,
            vel_up.2 + vdiff * n.z,
        ];
        let entrb = c_up * c_up / (gamma * rho_up.powf(gamm1));
        let rhob = (csoub * csoub / (gamma * entrb)).powf(1.0 / gamm1);
        let presb = rhob * csoub * csoub / gamma;

        let na = [n.x, n.y, n.z];
        let vdonb = na[0] * ub[0] + na[1] * ub[1] + na[2] * ub[2];
        let vdovb = ub[0] * ub[0] + ub[1] * ub[1] + ub[2] * ub[2];
        let rhoeb = rhob * self.fp.internal_energy(presb, rhob) + 0.5 * rhob * vdovb;
        let tenthb = rhoeb + presb;

        // Derivatives of the interior primitives with respect to U.
        let rho1 = u_left.rho;
        let (u1, v1, w1) = (prim1.u, prim1.v, prim1.w);
        let rho1_d = [1.0, 0.0, 0.0, 0.0, 0.0];
        let vel1_d = [
            [-u1 / rho1, 1.0 / rho1, 0.0, 0.0, 0.0],
            [-v1 / rho1, 0.0, 1.0 / rho1, 0.0, 0.0],
            [-w1 / rho1, 0.0, 0.0, 1.0 / rho1, 0.0],
        ];
        let pres1_d = [
            0.5 * gamm1 * prim1.q2,
            -gamm1 * u1,
            -gamm1 * v1,
            -gamm1 * w1,
            gamm1,
        ];
        let vdon1_d = [-vn1 / rho1, n.x / rho1, n.y / rho1, n.z / rho1, 0.0];
        // dc = (c / 2p)(dp − (p/ρ)dρ) from c² = γp/ρ.
        let cp051 = 0.5 * prim1.c / prim1.p;

        let mut csou1_d = [0.0; 5];
        let mut rplus_d = [0.0; 5];
        let mut csoub_d = [0.0; 5];
        for c in 0..5 {
            csou1_d[c] = cp051 * (pres1_d[c] - prim1.p / rho1 * rho1_d[c]);
            rplus_d[c] = vdon1_d[c] + 2.0 / gamm1 * csou1_d[c];
            csoub_d[c] = 0.25 * gamm1 * rplus_d[c];
        }

        // Chain to the boundary primitives. On inflow faces the entropy
        // and tangential velocity come from the far field and drop out.
        let mut rhob_d = [0.0; 5];
        let mut velb_d = [[0.0; 5]; 3];
        let mut presb_d = [0.0; 5];
        if inflow {
            for c in 0..5 {
                rhob_d[c] = 2.0 * rhob / (gamm1 * csoub) * csoub_d[c];
                for j in 0..3 {
                    velb_d[j][c] = na[j] * 0.5 * rplus_d[c];
                }
            }
        } else {
            let dentr = prim1.c / (gamma * rho1.powf(gamma));
            for c in 0..5 {
                let entrb_d = dentr * (2.0 * rho1 * csou1_d[c] - gamm1 * prim1.c * rho1_d[c]);
                rhob_d[c] = rhob / gamm1 * (2.0 * csoub_d[c] / csoub - entrb_d / entrb);
                for j in 0..3 {
                    velb_d[j][c] = na[j] * (0.5 * rplus_d[c] - vdon1_d[c]) + vel1_d[j][c];
                }
            }
        }
        for c in 0..5 {
            presb_d[c] = presb * (rhob_d[c] / rhob + 2.0 * csoub_d[c] / csoub);
        }

        // ∂(F·n)/∂Q_b, rows over flux components, columns over
        // (ρ_b, u_b, v_b, w_b, p_b).
        let mut fq = [[0.0; 5]; 5];
        fq[0] = [vdonb, na[0] * rhob, na[1] * rhob, na[2] * rhob, 0.0];
        for j in 0..3 {
            fq[j + 1][0] = vdonb * ub[j];
            for k in 0..3 {
                fq[j + 1][k + 1] =
                    na[k] * rhob * ub[j] + if j == k { vdonb * rhob } else { 0.0 };
            }
            fq[j + 1][4] = na[j];
        }
        fq[4][0] = 0.5 * vdonb * vdovb;
        for k in 0..3 {
            fq[4][k + 1] = na[k] * tenthb + vdonb * rhob * ub[k];
        }
        fq[4][4] = gamma / gamm1 * vdonb;

        let qd = [rhob_d, velb_d[0], velb_d[1], velb_d[2], presb_d];
        let mut jac = Jacobian5::zero();
        for r in 0..5 {
            for c in 0..5 {
                let mut sum = 0.0;
                for q in 0..5 {
                    sum += fq[r][q] * qd[q][c];
                }
                jac[(r, c)] = sum;
            }
        }
        jac
    }
}

impl<F: FluidProperties + Clone> BoundaryFluxScheme for RiemannInvariantFlux<F> {
    fn calc_flux(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<EulerState, BoundaryFluxError> {
        let mach = normal_mach(&self.fp, u_left, n);
        if mach.is_nan() {
            return Err(BoundaryFluxError::IndeterminateRegime {
                face: FaceId::new(elem, side),
                mach,
            });
        }
        let ghost = self.ghost.ghost_state(side, elem, u_left, n);
        Ok(boundary_flux(&self.fp, &ghost, n))
    }

    fn calc_jacobian(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<Jacobian5, BoundaryFluxError> {
        let mach = normal_mach(&self.fp, u_left, n);
        let regime = FlowRegime::classify(mach).ok_or_else(|| {
            BoundaryFluxError::IndeterminateRegime {
                face: FaceId::new(elem, side),
                mach,
            }
        })?;
        Ok(match regime {
            FlowRegime::SupersonicInflow => Jacobian5::zero(),
            FlowRegime::SupersonicOutflow => flux_jacobian(&self.fp, u_left, n),
            FlowRegime::SubsonicInflow => self.subsonic_jacobian(u_left, n, true),
            FlowRegime::SubsonicOutflow => self.subsonic_jacobian(u_left, n, false),
        })
    }

    fn name(&self) -> &'static str {
        "riemann_invariant"
    }
}
