//! Conserved state and analytic boundary flux for the 3-D compressible
//! Euler equations.
//!
//! The conserved vector is U = [ρ, ρu, ρv, ρw, ρE] with index 0 always the
//! mass component; this ordering is shared by every component in the crate.
//! The physical flux through a face with outward unit normal n is
//!
//! F(U)·n = vn * [ρ, ρu, ρv, ρw, ρE + p] + p * [0, nx, ny, nz, 0]
//!
//! with vn = u·n. Its exact Jacobian ∂(F·n)/∂U for an ideal gas is assembled
//! in closed form in [`flux_jacobian`]; the supersonic branches of the HLLC
//! solver and the free-outflow scheme all reuse it.

use std::ops::{Add, Mul, Sub};

use crate::types::{Jacobian5, Normal3};

use super::FluidProperties;

/// Conserved state for 3-D compressible flow: (ρ, ρu, ρv, ρw, ρE).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerState {
    /// Density ρ
    pub rho: f64,
    /// x-momentum ρu
    pub rho_u: f64,
    /// y-momentum ρv
    pub rho_v: f64,
    /// z-momentum ρw
    pub rho_w: f64,
    /// Total energy ρE
    pub rho_e: f64,
}

impl EulerState {
    /// Create a state from its conserved components.
    #[inline(always)]
    pub fn new(rho: f64, rho_u: f64, rho_v: f64, rho_w: f64, rho_e: f64) -> Self {
        Self {
            rho,
            rho_u,
            rho_v,
            rho_w,
            rho_e,
        }
    }

    /// Build a conserved state from primitives (ρ, u, v, w, p), closing the
    /// energy with the equation of state.
    pub fn from_primitives(
        fp: &dyn FluidProperties,
        rho: f64,
        u: f64,
        v: f64,
        w: f64,
        p: f64,
    ) -> Self {
        let e = fp.internal_energy(p, rho);
        let q2 = u * u + v * v + w * w;
        Self {
            rho,
            rho_u: rho * u,
            rho_v: rho * v,
            rho_w: rho * w,
            rho_e: rho * e + 0.5 * rho * q2,
        }
    }

    /// Velocity components (u, v, w).
    #[inline(always)]
    pub fn velocity(&self) -> (f64, f64, f64) {
        let inv = 1.0 / self.rho;
        (self.rho_u * inv, self.rho_v * inv, self.rho_w * inv)
    }

    /// Specific internal energy e = E − ½|u|².
    #[inline(always)]
    pub fn specific_internal_energy(&self) -> f64 {
        let (u, v, w) = self.velocity();
        self.rho_e / self.rho - 0.5 * (u * u + v * v + w * w)
    }

    /// Normal velocity u·n.
    #[inline(always)]
    pub fn normal_velocity(&self, n: Normal3) -> f64 {
        let (u, v, w) = self.velocity();
        n.dot(u, v, w)
    }

    /// The zero state.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Convert to array representation [ρ, ρu, ρv, ρw, ρE].
    #[inline(always)]
    pub fn to_array(&self) -> [f64; 5] {
        [self.rho, self.rho_u, self.rho_v, self.rho_w, self.rho_e]
    }

    /// Create from array representation [ρ, ρu, ρv, ρw, ρE].
    #[inline(always)]
    pub fn from_array(arr: [f64; 5]) -> Self {
        Self {
            rho: arr[0],
            rho_u: arr[1],
            rho_v: arr[2],
            rho_w: arr[3],
            rho_e: arr[4],
        }
    }

    /// Decompose into the primitive quantities the Riemann solver needs.
    pub fn primitives(&self, fp: &dyn FluidProperties) -> Primitives {
        let (u, v, w) = self.velocity();
        let q2 = u * u + v * v + w * w;
        let e = self.rho_e / self.rho - 0.5 * q2;
        let v_spec = 1.0 / self.rho;
        let p = fp.pressure(v_spec, e);
        let c = fp.sound_speed(v_spec, e);
        let enthalpy = (self.rho_e + p) / self.rho;
        Primitives {
            u,
            v,
            w,
            q2,
            e,
            p,
            c,
            enthalpy,
        }
    }
}

impl Add for EulerState {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            rho: self.rho + rhs.rho,
            rho_u: self.rho_u + rhs.rho_u,
            rho_v: self.rho_v + rhs.rho_v,
            rho_w: self.rho_w + rhs.rho_w,
            rho_e: self.rho_e + rhs.rho_e,
        }
    }
}

impl Sub for EulerState {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            rho: self.rho - rhs.rho,
            rho_u: self.rho_u - rhs.rho_u,
            rho_v: self.rho_v - rhs.rho_v,
            rho_w: self.rho_w - rhs.rho_w,
            rho_e: self.rho_e - rhs.rho_e,
        }
    }
}

impl Mul<f64> for EulerState {
    type Output = Self;

    #[inline(always)]
    fn mul(self, s: f64) -> Self {
        Self {
            rho: self.rho * s,
            rho_u: self.rho_u * s,
            rho_v: self.rho_v * s,
            rho_w: self.rho_w * s,
            rho_e: self.rho_e * s,
        }
    }
}

/// Primitive decomposition of a conserved state.
///
/// One state is decomposed once per solve; the fields are exactly the
/// intermediates the wave-speed estimates and Jacobians chain through.
#[derive(Clone, Copy, Debug)]
pub struct Primitives {
    /// x-velocity
    pub u: f64,
    /// y-velocity
    pub v: f64,
    /// z-velocity
    pub w: f64,
    /// Squared speed |u|²
    pub q2: f64,
    /// Specific internal energy
    pub e: f64,
    /// Pressure
    pub p: f64,
    /// Sound speed
    pub c: f64,
    /// Specific total enthalpy (ρE + p)/ρ
    pub enthalpy: f64,
}

impl Primitives {
    /// Normal velocity u·n.
    #[inline(always)]
    pub fn normal_velocity(&self, n: Normal3) -> f64 {
        n.dot(self.u, self.v, self.w)
    }
}

/// Exact physical boundary flux F(U)·n.
pub fn boundary_flux(fp: &dyn FluidProperties, state: &EulerState, n: Normal3) -> EulerState {
    let prim = state.primitives(fp);
    boundary_flux_from_primitives(state, &prim, n)
}

/// Physical boundary flux when the primitive decomposition is already at hand.
#[inline]
pub fn boundary_flux_from_primitives(
    state: &EulerState,
    prim: &Primitives,
    n: Normal3,
) -> EulerState {
    let vn = prim.normal_velocity(n);
    EulerState {
        rho: vn * state.rho,
        rho_u: vn * state.rho_u + prim.p * n.x,
        rho_v: vn * state.rho_v + prim.p * n.y,
        rho_w: vn * state.rho_w + prim.p * n.z,
        rho_e: vn * (state.rho_e + prim.p),
    }
}

/// Exact Jacobian ∂(F·n)/∂U of the physical boundary flux, ideal gas.
pub fn flux_jacobian(fp: &dyn FluidProperties, state: &EulerState, n: Normal3) -> Jacobian5 {
    let prim = state.primitives(fp);
    flux_jacobian_from_primitives(fp, &prim, n)
}

/// Flux Jacobian when the primitive decomposition is already at hand.
pub fn flux_jacobian_from_primitives(
    fp: &dyn FluidProperties,
    prim: &Primitives,
    n: Normal3,
) -> Jacobian5 {
    let gamma = fp.gamma();
    let gamm1 = gamma - 1.0;
    let gamm2 = 2.0 - gamma;

    let (u, v, w) = (prim.u, prim.v, prim.w);
    let vn = prim.normal_velocity(n);
    let enth = prim.enthalpy;
    // ½(γ−1)|u|², the kinetic part of ∂p/∂ρ
    let rq05 = 0.5 * gamm1 * prim.q2;

    let mut jac = Jacobian5::zero();

    jac[(0, 1)] = n.x;
    jac[(0, 2)] = n.y;
    jac[(0, 3)] = n.z;

    jac[(1, 0)] = rq05 * n.x - u * vn;
    jac[(1, 1)] = gamm2 * n.x * u + vn;
    jac[(1, 2)] = n.y * u - v * gamm1 * n.x;
    jac[(1, 3)] = n.z * u - w * gamm1 * n.x;
    jac[(1, 4)] = gamm1 * n.x;

    jac[(2, 0)] = rq05 * n.y - v * vn;
    jac[(2, 1)] = n.x * v - u * gamm1 * n.y;
    jac[(2, 2)] = gamm2 * n.y * v + vn;
    jac[(2, 3)] = n.z * v - w * gamm1 * n.y;
    jac[(2, 4)] = gamm1 * n.y;

    jac[(3, 0)] = rq05 * n.z - w * vn;
    jac[(3, 1)] = n.x * w - u * gamm1 * n.z;
    jac[(3, 2)] = n.y * w - v * gamm1 * n.z;
    jac[(3, 3)] = gamm2 * n.z * w + vn;
    jac[(3, 4)] = gamm1 * n.z;

    jac[(4, 0)] = (rq05 - enth) * vn;
    jac[(4, 1)] = n.x * enth - gamm1 * u * vn;
    jac[(4, 2)] = n.y * enth - gamm1 * v * vn;
    jac[(4, 3)] = n.z * enth - gamm1 * w * vn;
    jac[(4, 4)] = gamma * vn;

    jac
}

/// Flow regime at a boundary face, classified from the signed normal Mach
/// number M = (u·n)/c. The four intervals are mutually exclusive and cover
/// the whole real line; only a NaN Mach number fails to classify.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowRegime {
    /// M ≤ −1
    SupersonicInflow,
    /// −1 < M < 0
    SubsonicInflow,
    /// 0 ≤ M < 1
    SubsonicOutflow,
    /// M ≥ 1
    SupersonicOutflow,
}

impl FlowRegime {
    /// Classify a signed normal Mach number.
    ///
    /// Returns `None` only when `mach` is NaN (non-physical input state).
    pub fn classify(mach: f64) -> Option<Self> {
        if mach <= -1.0 {
            Some(Self::SupersonicInflow)
        } else if mach < 0.0 {
            Some(Self::SubsonicInflow)
        } else if mach < 1.0 {
            Some(Self::SubsonicOutflow)
        } else if mach >= 1.0 {
            Some(Self::SupersonicOutflow)
        } else {
            None
        }
    }

    /// Whether the regime carries information into the domain.
    pub fn is_inflow(self) -> bool {
        matches!(self, Self::SupersonicInflow | Self::SubsonicInflow)
    }
}

/// Signed normal Mach number (u·n)/c of a state at a face.
pub fn normal_mach(fp: &dyn FluidProperties, state: &EulerState, n: Normal3) -> f64 {
    let prim = state.primitives(fp);
    prim.normal_velocity(n) / prim.c
}
