//! Boundary numerical fluxes for the compressible Euler equations.
//!
//! Provides:
//! - An HLLC approximate Riemann solver with exact analytic Jacobians,
//!   following Batten, Leschziner & Goldberg (JCP 137, 1997)
//! - Free inflow/outflow schemes that skip the Riemann solve
//! - Far-field and slip-wall schemes pairing HLLC with a ghost policy
//! - A Riemann-invariant scheme evaluating the physical flux at the
//!   invariant boundary state
//! - A per-face memoization wrapper, [`BoundaryFluxCache`]
//!
//! # Scheme Trait
//!
//! The [`BoundaryFluxScheme`] trait is the common interface: flux and
//! Jacobian of one boundary face given the interior state and the
//! outward unit normal. [`StandardBoundaryFlux`] dispatches over the
//! built-in schemes without boxing; [`BoxedBoundaryFlux`] erases the
//! type for runtime configuration. The [`create_boundary_flux`] factory
//! builds a scheme from a [`BoundaryPolicy`].

mod cache;
mod error;
mod free;
mod hllc;
mod hllc_schemes;
mod riemann_invariant;
mod traits;

pub use cache::BoundaryFluxCache;
pub use error::{BoundaryFluxError, WaveDiagnostics};
pub use free::{FreeInflowFlux, FreeOutflowFlux};
pub use hllc_schemes::{HllcInflowOutflowFlux, HllcSlipWallFlux};
pub use riemann_invariant::RiemannInvariantFlux;
pub use traits::{
    BoundaryFluxScheme, BoundaryPolicy, BoxedBoundaryFlux, StandardBoundaryFlux,
    create_boundary_flux,
};
