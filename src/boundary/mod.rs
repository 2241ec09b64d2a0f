//! Ghost-state boundary policies.
//!
//! A boundary face has a real state only on the interior side; the flux
//! schemes still solve a two-state Riemann problem there. Each policy
//! here manufactures the missing exterior ("ghost") state from the
//! interior state, the outward face normal, and optionally a prescribed
//! far-field state.
//!
//! | Policy | Ghost state |
//! |--------|-------------|
//! | [`FreeInflowGhost`] | prescribed far field |
//! | [`FreeOutflowGhost`] | interior (zero gradient) |
//! | [`SlipWallGhost`] | mirror of the interior momentum |
//! | [`CharacteristicGhost`] | far field on inflow, interior on outflow |
//! | [`RiemannInvariantGhost`] | isentropic invariant solve (subsonic) |

mod characteristic;
mod far_field;
mod free;
mod riemann_invariant;
mod slip_wall;

pub use characteristic::CharacteristicGhost;
pub use far_field::FarFieldState;
pub use free::{FreeInflowGhost, FreeOutflowGhost};
pub use riemann_invariant::RiemannInvariantGhost;
pub use slip_wall::SlipWallGhost;

use crate::equations::EulerState;
use crate::types::{ElementIndex, Normal3, SideIndex};

/// Exterior-state policy for boundary faces.
///
/// Implementations compute the ghost state the flux schemes pair with
/// the interior state. They must be pure in the interior state and the
/// face geometry; the `(side, elem)` key is passed through for policies
/// backed by per-face data.
pub trait GhostStateProvider: Send + Sync {
    /// Ghost state for the face `(elem, side)` with outward normal `n`.
    fn ghost_state(
        &self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> EulerState;

    /// Policy name for diagnostics.
    fn name(&self) -> &'static str;
}
