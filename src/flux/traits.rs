//! Common interface for boundary flux schemes.

use crate::boundary::FarFieldState;
use crate::equations::{EulerState, FluidProperties};
use crate::types::{ElementIndex, Jacobian5, Normal3, SideIndex};

use super::error::BoundaryFluxError;
use super::free::{FreeInflowFlux, FreeOutflowFlux};
use super::hllc_schemes::{HllcInflowOutflowFlux, HllcSlipWallFlux};
use super::riemann_invariant::RiemannInvariantFlux;

/// A boundary flux scheme: numerical flux and its Jacobian with respect
/// to the interior state, for one face.
///
/// Both operations are pure in `(side, elem, u_left, n)`; the memoizing
/// wrapper [`super::BoundaryFluxCache`] relies on that.
pub trait BoundaryFluxScheme: Send + Sync {
    /// Numerical flux through the face `(elem, side)`.
    fn calc_flux(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<EulerState, BoundaryFluxError>;

    /// Jacobian of the flux with respect to `u_left`, including the
    /// ghost state's own dependence on the interior wherever the
    /// policy has one.
    fn calc_jacobian(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<Jacobian5, BoundaryFluxError>;

    /// Scheme name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Owned, type-erased scheme for callers configured at runtime.
pub type BoxedBoundaryFlux = Box<dyn BoundaryFluxScheme>;

/// Selector for [`create_boundary_flux`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Far-field state imposed unconditionally
    FreeInflow,
    /// Interior state extrapolated unconditionally
    FreeOutflow,
    /// HLLC against the regime-switching characteristic ghost
    InflowOutflow,
    /// Physical flux at the Riemann-invariant boundary state
    RiemannInvariant,
    /// HLLC against the mirror ghost
    SlipWall,
}

/// All schemes this crate ships, as a single dispatchable type.
#[derive(Clone, Debug)]
pub enum StandardBoundaryFlux<F: FluidProperties + Clone> {
    FreeInflow(FreeInflowFlux<F>),
    FreeOutflow(FreeOutflowFlux<F>),
    InflowOutflow(HllcInflowOutflowFlux<F>),
    RiemannInvariant(RiemannInvariantFlux<F>),
    SlipWall(HllcSlipWallFlux<F>),
}

impl<F: FluidProperties + Clone> BoundaryFluxScheme for StandardBoundaryFlux<F> {
    fn calc_flux(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<EulerState, BoundaryFluxError> {
        match self {
            Self::FreeInflow(s) => s.calc_flux(side, elem, u_left, n),
            Self::FreeOutflow(s) => s.calc_flux(side, elem, u_left, n),
            Self::InflowOutflow(s) => s.calc_flux(side, elem, u_left, n),
            Self::RiemannInvariant(s) => s.calc_flux(side, elem, u_left, n),
            Self::SlipWall(s) => s.calc_flux(side, elem, u_left, n),
        }
    }

    fn calc_jacobian(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<Jacobian5, BoundaryFluxError> {
        match self {
            Self::FreeInflow(s) => s.calc_jacobian(side, elem, u_left, n),
            Self::FreeOutflow(s) => s.calc_jacobian(side, elem, u_left, n),
            Self::InflowOutflow(s) => s.calc_jacobian(side, elem, u_left, n),
            Self::RiemannInvariant(s) => s.calc_jacobian(side, elem, u_left, n),
            Self::SlipWall(s) => s.calc_jacobian(side, elem, u_left, n),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::FreeInflow(s) => s.name(),
            Self::FreeOutflow(s) => s.name(),
            Self::InflowOutflow(s) => s.name(),
            Self::RiemannInvariant(s) => s.name(),
            Self::SlipWall(s) => s.name(),
        }
    }
}

/// Construct a boundary flux scheme by policy.
///
/// `far_field` parametrizes the inflow-capable policies; the free
/// outflow and slip wall ignore it.
pub fn create_boundary_flux<F: FluidProperties + Clone>(
    policy: BoundaryPolicy,
    fp: F,
    far_field: FarFieldState,
) -> StandardBoundaryFlux<F> {
    match policy {
        BoundaryPolicy::FreeInflow => {
            StandardBoundaryFlux::FreeInflow(FreeInflowFlux::new(fp, far_field))
        }
        BoundaryPolicy::FreeOutflow => StandardBoundaryFlux::FreeOutflow(FreeOutflowFlux::new(fp)),
        BoundaryPolicy::InflowOutflow => {
            StandardBoundaryFlux::InflowOutflow(HllcInflowOutflowFlux::new(fp, far_field))
        }
        BoundaryPolicy::RiemannInvariant => {
            StandardBoundaryFlux::RiemannInvariant(RiemannInvariantFlux::new(fp, far_field))
        }
        BoundaryPolicy::SlipWall => StandardBoundaryFlux::SlipWall(HllcSlipWallFlux::new(fp)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::IdealGas;

    #[test]
    fn test_factory_names() {
        let far = FarFieldState::at_rest(1.0, 1.0);
        let cases = [
            (BoundaryPolicy::FreeInflow, "free_inflow"),
            (BoundaryPolicy::FreeOutflow, "free_outflow"),
            (BoundaryPolicy::InflowOutflow, "hllc_inflow_outflow"),
            (BoundaryPolicy::RiemannInvariant, "riemann_invariant"),
            (BoundaryPolicy::SlipWall, "hllc_slip_wall"),
        ];
        for (policy, name) in cases {
            let scheme = create_boundary_flux(policy, IdealGas::air(), far);
            assert_eq!(scheme.name(), name);
        }
    }

    #[test]
    fn test_boxed_scheme_is_object_safe() {
        let far = FarFieldState::at_rest(1.0, 1.0);
        let boxed: BoxedBoundaryFlux = Box::new(create_boundary_flux(
            BoundaryPolicy::SlipWall,
            IdealGas::air(),
            far,
        ));
        assert_eq!(boxed.name(), "hllc_slip_wall");
    }
}
