//! Free inflow and outflow flux schemes.
//!
//! The degenerate ends of the boundary family: no Riemann solve is
//! needed because the ghost state either equals the interior state
//! (outflow) or fully determines the flux on its own (inflow).

use crate::boundary::FarFieldState;
use crate::equations::{boundary_flux, flux_jacobian, EulerState, FluidProperties};
use crate::types::{ElementIndex, Jacobian5, Normal3, SideIndex};

use super::error::BoundaryFluxError;
use super::traits::BoundaryFluxScheme;

/// Free outflow: the exact physical flux of the interior state. The
/// Jacobian is the analytic flux Jacobian A(U)·n.
#[derive(Clone, Debug)]
pub struct FreeOutflowFlux<F: FluidProperties> {
    fp: F,
}

impl<F: FluidProperties> FreeOutflowFlux<F> {
    pub fn new(fp: F) -> Self {
        Self { fp }
    }
}

impl<F: FluidProperties> BoundaryFluxScheme for FreeOutflowFlux<F> {
    fn calc_flux(
        &self,
        _side: SideIndex,
        _elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<EulerState, BoundaryFluxError> {
        Ok(boundary_flux(&self.fp, u_left, n))
    }

    fn calc_jacobian(
        &self,
        _side: SideIndex,
        _elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<Jacobian5, BoundaryFluxError> {
        Ok(flux_jacobian(&self.fp, u_left, n))
    }

    fn name(&self) -> &'static str {
        "free_outflow"
    }
}

/// Free inflow: the exact physical flux of the prescribed far-field
/// state. Independent of the interior state, so the Jacobian is zero.
#[derive(Clone, Debug)]
pub struct FreeInflowFlux<F: FluidProperties> {
    fp: F,
    conserved: EulerState,
}

impl<F: FluidProperties> FreeInflowFlux<F> {
    pub fn new(fp: F, far_field: FarFieldState) -> Self {
        let conserved = far_field.conserved(&fp);
        Self { fp, conserved }
    }
}

impl<F: FluidProperties> BoundaryFluxScheme for FreeInflowFlux<F> {
    fn calc_flux(
        &self,
        _side: SideIndex,
        _elem: ElementIndex,
        _u_left: &EulerState,
        n: Normal3,
    ) -> Result<EulerState, BoundaryFluxError> {
        Ok(boundary_flux(&self.fp, &self.conserved, n))
    }

    fn calc_jacobian(
        &self,
        _side: SideIndex,
        _elem: ElementIndex,
        _u_left: &EulerState,
        _n: Normal3,
    ) -> Result<Jacobian5, BoundaryFluxError> {
        Ok(Jacobian5::zero())
    }

    fn name(&self) -> &'static str {
        "free_inflow"
    }
}
