//! HLLC approximate Riemann solver with analytic one-sided Jacobians.
//!
//! The fan is bracketed by Davis-type outer wave speeds built from the
//! left/right states and their Roe average,
//!
//! S_L = min(vn_L − c_L, vn_roe − c_roe)
//! S_R = max(vn_R + c_R, vn_roe + c_roe)
//!
//! and the contact speed S_M follows from the Rankine–Hugoniot jump
//! across both outer waves,
//!
//! S_M = (ρ_R vn_R (S_R − vn_R) − ρ_L vn_L (S_L − vn_L) + p_L − p_R)
//!       / (ρ_R (S_R − vn_R) − ρ_L (S_L − vn_L)).
//!
//! The flux is then one of four expressions selected by the signs of
//! S_L, S_M, S_R: the pure left or right physical flux outside the fan,
//! or a star-region flux S_M U* + p* n inside it.
//!
//! The Jacobians are the closed-form derivatives of each branch with
//! respect to one side's conserved variables, chained through S_M, p*
//! and the star states with the outer wave speeds held fixed (the
//! standard linearization for implicit HLLC; see Batten, Leschziner &
//! Goldberg, JCP 137 (1997)). Flux formulas follow Toro, "Riemann
//! Solvers and Numerical Methods for Fluid Dynamics", 3rd ed., ch. 10.

use crate::equations::{
    boundary_flux_from_primitives, flux_jacobian_from_primitives, EulerState, FluidProperties,
    Primitives,
};
use crate::types::{FaceId, Jacobian5, Normal3};

use super::error::{BoundaryFluxError, WaveDiagnostics};

/// Floor applied to the squared Roe sound speed and the contact-speed
/// denominator.
const EPS: f64 = 1e-6;

/// `f64::min` returns the other operand when one is NaN. The wave-speed
/// estimates must keep the NaN instead, so that a non-physical input
/// state falls through every branch of the ladder and surfaces as a
/// wave-ordering error rather than a finite garbage flux.
#[inline]
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

#[inline]
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Position of the face relative to the wave fan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WaveRegion {
    /// S_L > 0, the whole fan moves right
    LeftSupersonic,
    /// S_L ≤ 0 < S_M, face inside the left star region
    LeftStar,
    /// S_M ≤ 0 ≤ S_R, face inside the right star region
    RightStar,
    /// S_R < 0, the whole fan moves left
    RightSupersonic,
}

/// HLLC star-region state U* on one side of the contact, plus the
/// energy-pressure combination ρE* + p* the Jacobian rows reuse.
struct StarState {
    rho: f64,
    m: [f64; 3],
    e: f64,
    ep: f64,
}

/// One fully-set-up Riemann fan: both primitive decompositions, the
/// Roe-averaged quantities and the three wave speeds. All flux and
/// Jacobian branches read from this.
pub(crate) struct RiemannFan<'a> {
    fp: &'a dyn FluidProperties,
    left: &'a EulerState,
    right: &'a EulerState,
    n: Normal3,
    prim1: Primitives,
    prim2: Primitives,
    vn1: f64,
    vn2: f64,
    vnave: f64,
    cssav: f64,
    s1: f64,
    s2: f64,
    dsv1: f64,
    dsv2: f64,
    sm: f64,
    prsta: f64,
}

impl<'a> RiemannFan<'a> {
    pub(crate) fn new(
        fp: &'a dyn FluidProperties,
        left: &'a EulerState,
        right: &'a EulerState,
        n: Normal3,
    ) -> Self {
        let gamma = fp.gamma();
        let prim1 = left.primitives(fp);
        let prim2 = right.primitives(fp);

        // Roe averaging with the density-ratio weight sqrt(ρ_R/ρ_L)
        let rhsca = (right.rho / left.rho).sqrt();
        let rmden = 1.0 / (rhsca + 1.0);
        let uaver = (rhsca * prim2.u + prim1.u) * rmden;
        let vaver = (rhsca * prim2.v + prim1.v) * rmden;
        let waver = (rhsca * prim2.w + prim1.w) * rmden;
        let entav = (rhsca * prim2.enthalpy + prim1.enthalpy) * rmden;

        let qave5 = 0.5 * (uaver * uaver + vaver * vaver + waver * waver);
        let cssa2 = f64::max(EPS, (gamma - 1.0) * (entav - qave5));
        let cssav = cssa2.sqrt();

        let vn1 = prim1.normal_velocity(n);
        let vn2 = prim2.normal_velocity(n);
        let vnave = n.dot(uaver, vaver, waver);

        let s1 = nan_min(vn1 - prim1.c, vnave - cssav);
        let s2 = nan_max(vn2 + prim2.c, vnave + cssav);
        let dsv1 = s1 - vn1;
        let dsv2 = s2 - vn2;

        let sm = (right.rho * vn2 * dsv2 - left.rho * vn1 * dsv1 + prim1.p - prim2.p)
            / (right.rho * dsv2 - left.rho * dsv1);
        let prsta = left.rho * dsv1 * (sm - vn1) + prim1.p;

        Self {
            fp,
            left,
            right,
            n,
            prim1,
            prim2,
            vn1,
            vn2,
            vnave,
            cssav,
            s1,
            s2,
            dsv1,
            dsv2,
            sm,
            prsta,
        }
    }

    /// Branch selection. `None` means no condition held, which under
    /// correct ordering only happens when a wave speed is NaN.
    fn region(&self) -> Option<WaveRegion> {
        if self.s1 > 0.0 {
            Some(WaveRegion::LeftSupersonic)
        } else if self.s1 <= 0.0 && self.sm > 0.0 {
            Some(WaveRegion::LeftStar)
        } else if self.sm <= 0.0 && self.s2 >= 0.0 {
            Some(WaveRegion::RightStar)
        } else if self.s2 < 0.0 {
            Some(WaveRegion::RightSupersonic)
        } else {
            None
        }
    }

    fn ordering_error(&self, face: FaceId) -> BoundaryFluxError {
        BoundaryFluxError::WaveOrdering {
            face,
            diagnostics: Box::new(WaveDiagnostics {
                left: self.left.to_array(),
                right: self.right.to_array(),
                pres1: self.prim1.p,
                enth1: self.prim1.enthalpy,
                csou1: self.prim1.c,
                pres2: self.prim2.p,
                enth2: self.prim2.enthalpy,
                csou2: self.prim2.c,
                vdon1: self.vn1,
                vdon2: self.vn2,
                vnave: self.vnave,
                cssav: self.cssav,
                s1: self.s1,
                s2: self.s2,
                sm: self.sm,
                prsta: self.prsta,
            }),
        }
    }

    fn left_star(&self) -> StarState {
        let omeg = 1.0 / (self.s1 - self.sm);
        let prst = self.prsta - self.prim1.p;
        let e = omeg * (self.dsv1 * self.left.rho_e - self.prim1.p * self.vn1 + self.prsta * self.sm);
        StarState {
            rho: omeg * self.dsv1 * self.left.rho,
            m: [
                omeg * (self.dsv1 * self.left.rho_u + prst * self.n.x),
                omeg * (self.dsv1 * self.left.rho_v + prst * self.n.y),
                omeg * (self.dsv1 * self.left.rho_w + prst * self.n.z),
            ],
            e,
            ep: e + self.prsta,
        }
    }

    fn right_star(&self) -> StarState {
        let omeg = 1.0 / (self.s2 - self.sm);
        let prst = self.prsta - self.prim2.p;
        let e =
            omeg * (self.dsv2 * self.right.rho_e - self.prim2.p * self.vn2 + self.prsta * self.sm);
        StarState {
            rho: omeg * self.dsv2 * self.right.rho,
            m: [
                omeg * (self.dsv2 * self.right.rho_u + prst * self.n.x),
                omeg * (self.dsv2 * self.right.rho_v + prst * self.n.y),
                omeg * (self.dsv2 * self.right.rho_w + prst * self.n.z),
            ],
            e,
            ep: e + self.prsta,
        }
    }

    fn star_flux(&self, star: &StarState) -> EulerState {
        EulerState {
            rho: self.sm * star.rho,
            rho_u: self.sm * star.m[0] + self.prsta * self.n.x,
            rho_v: self.sm * star.m[1] + self.prsta * self.n.y,
            rho_w: self.sm * star.m[2] + self.prsta * self.n.z,
            rho_e: self.sm * (star.e + self.prsta),
        }
    }

    /// ∂S_M/∂U_L. The reciprocal contact denominator ρ̃ is floored to
    /// keep a degenerate fan from dividing by zero.
    fn sm_partials_left(&self) -> [f64; 5] {
        let gamm1 = self.fp.gamma() - 1.0;
        let rhotm =
            1.0 / f64::max(EPS, self.right.rho * self.dsv2 - self.left.rho * self.dsv1);
        let rq051 = 0.5 * gamm1 * self.prim1.q2;
        let span = 2.0 * self.vn1 - self.s1 - self.sm;
        [
            rhotm * (-self.vn1 * self.vn1 + rq051 + self.sm * self.s1),
            rhotm * (self.n.x * span - gamm1 * self.prim1.u),
            rhotm * (self.n.y * span - gamm1 * self.prim1.v),
            rhotm * (self.n.z * span - gamm1 * self.prim1.w),
            rhotm * gamm1,
        ]
    }

    /// ∂S_M/∂U_R, the sign-flipped mirror of the left partials.
    fn sm_partials_right(&self) -> [f64; 5] {
        let gamm1 = self.fp.gamma() - 1.0;
        let rhotm =
            1.0 / f64::max(EPS, self.right.rho * self.dsv2 - self.left.rho * self.dsv1);
        let rq052 = 0.5 * gamm1 * self.prim2.q2;
        let span = -2.0 * self.vn2 + self.s2 + self.sm;
        [
            rhotm * (self.vn2 * self.vn2 - rq052 - self.sm * self.s2),
            rhotm * (self.n.x * span + gamm1 * self.prim2.u),
            rhotm * (self.n.y * span + gamm1 * self.prim2.v),
            rhotm * (self.n.z * span + gamm1 * self.prim2.w),
            -rhotm * gamm1,
        ]
    }

    /// HLLC flux for this fan.
    pub(crate) fn flux(&self, face: FaceId) -> Result<EulerState, BoundaryFluxError> {
        match self.region() {
            Some(WaveRegion::LeftSupersonic) => {
                Ok(boundary_flux_from_primitives(self.left, &self.prim1, self.n))
            }
            Some(WaveRegion::LeftStar) => Ok(self.star_flux(&self.left_star())),
            Some(WaveRegion::RightStar) => Ok(self.star_flux(&self.right_star())),
            Some(WaveRegion::RightSupersonic) => {
                Ok(boundary_flux_from_primitives(self.right, &self.prim2, self.n))
            }
            None => Err(self.ordering_error(face)),
        }
    }

    /// ∂F/∂U_L with the right state held fixed.
    pub(crate) fn jacobian_left(&self, face: FaceId) -> Result<Jacobian5, BoundaryFluxError> {
        match self.region() {
            Some(WaveRegion::LeftSupersonic) => {
                Ok(flux_jacobian_from_primitives(self.fp, &self.prim1, self.n))
            }
            Some(WaveRegion::LeftStar) => {
                let sm_d = self.sm_partials_left();
                let ps_d = sm_d.map(|d| self.right.rho * self.dsv2 * d);
                Ok(self.star_jacobian_own(Side::Left, &self.left_star(), &sm_d, &ps_d))
            }
            Some(WaveRegion::RightStar) => {
                let sm_d = self.sm_partials_left();
                let ps_d = sm_d.map(|d| self.right.rho * self.dsv2 * d);
                let omeg = 1.0 / (self.s2 - self.sm);
                Ok(self.star_jacobian_cross(omeg, &self.right_star(), &sm_d, &ps_d))
            }
            Some(WaveRegion::RightSupersonic) => Ok(Jacobian5::zero()),
            None => Err(self.ordering_error(face)),
        }
    }

    /// ∂F/∂U_R with the left state held fixed.
    pub(crate) fn jacobian_right(&self, face: FaceId) -> Result<Jacobian5, BoundaryFluxError> {
        match self.region() {
            Some(WaveRegion::LeftSupersonic) => Ok(Jacobian5::zero()),
            Some(WaveRegion::LeftStar) => {
                let sm_d = self.sm_partials_right();
                let ps_d = sm_d.map(|d| self.left.rho * self.dsv1 * d);
                let omeg = 1.0 / (self.s1 - self.sm);
                Ok(self.star_jacobian_cross(omeg, &self.left_star(), &sm_d, &ps_d))
            }
            Some(WaveRegion::RightStar) => {
                let sm_d = self.sm_partials_right();
                let ps_d = sm_d.map(|d| self.left.rho * self.dsv1 * d);
                Ok(self.star_jacobian_own(Side::Right, &self.right_star(), &sm_d, &ps_d))
            }
            Some(WaveRegion::RightSupersonic) => {
                Ok(flux_jacobian_from_primitives(self.fp, &self.prim2, self.n))
            }
            None => Err(self.ordering_error(face)),
        }
    }

    /// Star-flux Jacobian with respect to the star's own side: the star
    /// state depends on that side both directly and through S_M and p*.
    fn star_jacobian_own(&self, side: Side, star: &StarState, sm_d: &[f64; 5], ps_d: &[f64; 5]) -> Jacobian5 {
        let gamma = self.fp.gamma();
        let gamm1 = gamma - 1.0;
        let gamm2 = 2.0 - gamma;
        let sm = self.sm;
        let na = [self.n.x, self.n.y, self.n.z];

        let (s, dsv, vn, prim) = match side {
            Side::Left => (self.s1, self.dsv1, self.vn1, &self.prim1),
            Side::Right => (self.s2, self.dsv2, self.vn2, &self.prim2),
        };
        let omeg = 1.0 / (s - sm);
        let vel = [prim.u, prim.v, prim.w];
        let rq05 = 0.5 * gamm1 * prim.q2;
        let enth = prim.enthalpy;

        let mut jac = Jacobian5::zero();
        for c in 0..5 {
            let drho = match c {
                0 => omeg * (s + star.rho * sm_d[0]),
                1..=3 => omeg * (-na[c - 1] + star.rho * sm_d[c]),
                _ => omeg * star.rho * sm_d[4],
            };
            jac[(0, c)] = sm * drho + star.rho * sm_d[c];

            for j in 0..3 {
                let nj = na[j];
                let uj = vel[j];
                let base = match c {
                    0 => uj * vn - nj * rq05,
                    c if c == j + 1 => dsv - gamm2 * nj * uj,
                    1..=3 => -uj * na[c - 1] + gamm1 * nj * vel[c - 1],
                    _ => -gamm1 * nj,
                };
                let dm = omeg * (base + nj * ps_d[c] + star.m[j] * sm_d[c]);
                jac[(j + 1, c)] = sm * dm + star.m[j] * sm_d[c] + nj * ps_d[c];
            }

            let ebase = match c {
                0 => vn * enth - vn * rq05,
                1..=3 => -na[c - 1] * enth + gamm1 * vn * vel[c - 1],
                _ => s - vn * gamma,
            };
            let de = omeg * (ebase + sm * ps_d[c] + star.ep * sm_d[c]);
            jac[(4, c)] = sm * (de + ps_d[c]) + star.ep * sm_d[c];
        }
        jac
    }

    /// Star-flux Jacobian with respect to the opposite side: that state
    /// only reaches the star through S_M and p*.
    fn star_jacobian_cross(&self, omeg: f64, star: &StarState, sm_d: &[f64; 5], ps_d: &[f64; 5]) -> Jacobian5 {
        let sm = self.sm;
        let na = [self.n.x, self.n.y, self.n.z];

        let mut jac = Jacobian5::zero();
        for c in 0..5 {
            let drho = omeg * star.rho * sm_d[c];
            jac[(0, c)] = sm * drho + star.rho * sm_d[c];
            for j in 0..3 {
                let dm = omeg * (na[j] * ps_d[c] + star.m[j] * sm_d[c]);
                jac[(j + 1, c)] = sm * dm + star.m[j] * sm_d[c] + na[j] * ps_d[c];
            }
            let de = omeg * (sm * ps_d[c] + star.ep * sm_d[c]);
            jac[(4, c)] = sm * (de + ps_d[c]) + star.ep * sm_d[c];
        }
        jac
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}
