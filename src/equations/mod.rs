//! Governing-equation building blocks.
//!
//! Conserved state and analytic flux for 3-D compressible flow, flow-regime
//! classification at boundary faces, and the fluid-property (equation of
//! state) interface the flux layer is polymorphic over.

mod euler;
mod fluid_properties;

pub use euler::{
    boundary_flux, boundary_flux_from_primitives, flux_jacobian, flux_jacobian_from_primitives,
    normal_mach, EulerState, FlowRegime, Primitives,
};
pub use fluid_properties::{FluidProperties, IdealGas};
