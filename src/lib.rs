//! # bflux-rs
//!
//! Boundary numerical fluxes for cell-centered finite volume
//! discretizations of the compressible Euler equations.
//!
//! This crate provides the building blocks for boundary face closure:
//! - An ideal-gas equation of state behind a fluid properties trait
//! - Ghost-state policies (free inflow/outflow, characteristic,
//!   Riemann-invariant, slip wall)
//! - An HLLC approximate Riemann solver with exact analytic Jacobians
//! - Per-face memoization of flux and Jacobian evaluations

pub mod boundary;
pub mod equations;
pub mod flux;
pub mod types;

// Re-export main types for convenience
pub use boundary::{
    CharacteristicGhost, FarFieldState, FreeInflowGhost, FreeOutflowGhost, GhostStateProvider,
    RiemannInvariantGhost, SlipWallGhost,
};
pub use equations::{
    EulerState, FlowRegime, FluidProperties, IdealGas, Primitives, boundary_flux, flux_jacobian,
    normal_mach,
};
pub use flux::{
    BoundaryFluxCache, BoundaryFluxError, BoundaryFluxScheme, BoundaryPolicy, BoxedBoundaryFlux,
    FreeInflowFlux, FreeOutflowFlux, HllcInflowOutflowFlux, HllcSlipWallFlux, RiemannInvariantFlux,
    StandardBoundaryFlux, WaveDiagnostics, create_boundary_flux,
};
pub use types::{ElementIndex, FaceId, Jacobian5, Normal3, SideIndex};
