//! Errors surfaced by the boundary flux solvers.

use std::fmt;

use thiserror::Error;

use crate::types::FaceId;

/// Failure of a boundary flux or Jacobian evaluation.
///
/// These are not transient conditions. A broken wave ordering means the
/// input state was non-physical (negative density or energy, NaN), and
/// the caller is expected to abort the run with the carried diagnostics.
#[derive(Debug, Error)]
pub enum BoundaryFluxError {
    /// None of the four wave-speed branches matched during the Riemann
    /// solve. Under correct ordering S_L ≤ S_M ≤ S_R this cannot happen;
    /// it indicates NaN wave speeds from a garbage input state.
    #[error("wave speed ordering broke down at {face}:\n{diagnostics}")]
    WaveOrdering {
        face: FaceId,
        diagnostics: Box<WaveDiagnostics>,
    },

    /// The signed normal Mach number of the interior state is NaN, so
    /// the flow regime cannot be classified. Raised by the schemes that
    /// branch on the regime before any Riemann solve runs.
    #[error("flow regime indeterminate at {face}: normal Mach = {mach}")]
    IndeterminateRegime { face: FaceId, mach: f64 },
}

/// Every intermediate scalar of the failed Riemann solve, for the abort
/// message.
#[derive(Clone, Debug)]
pub struct WaveDiagnostics {
    pub left: [f64; 5],
    pub right: [f64; 5],
    pub pres1: f64,
    pub enth1: f64,
    pub csou1: f64,
    pub pres2: f64,
    pub enth2: f64,
    pub csou2: f64,
    pub vdon1: f64,
    pub vdon2: f64,
    pub vnave: f64,
    pub cssav: f64,
    pub s1: f64,
    pub s2: f64,
    pub sm: f64,
    pub prsta: f64,
}

impl fmt::Display for WaveDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rho1  = {}", self.left[0])?;
        writeln!(f, "rhou1 = {}", self.left[1])?;
        writeln!(f, "rhov1 = {}", self.left[2])?;
        writeln!(f, "rhow1 = {}", self.left[3])?;
        writeln!(f, "rhoe1 = {}", self.left[4])?;
        writeln!(f, "pres1 = {}", self.pres1)?;
        writeln!(f, "enth1 = {}", self.enth1)?;
        writeln!(f, "csou1 = {}", self.csou1)?;
        writeln!(f, "rho2  = {}", self.right[0])?;
        writeln!(f, "rhou2 = {}", self.right[1])?;
        writeln!(f, "rhov2 = {}", self.right[2])?;
        writeln!(f, "rhow2 = {}", self.right[3])?;
        writeln!(f, "rhoe2 = {}", self.right[4])?;
        writeln!(f, "pres2 = {}", self.pres2)?;
        writeln!(f, "enth2 = {}", self.enth2)?;
        writeln!(f, "csou2 = {}", self.csou2)?;
        writeln!(f, "vdon1 = {}", self.vdon1)?;
        writeln!(f, "vdon2 = {}", self.vdon2)?;
        writeln!(f, "vnave = {}", self.vnave)?;
        writeln!(f, "cssav = {}", self.cssav)?;
        writeln!(f, "s1    = {}", self.s1)?;
        writeln!(f, "s2    = {}", self.s2)?;
        writeln!(f, "sm    = {}", self.sm)?;
        write!(f, "prsta = {}", self.prsta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ElementIndex, SideIndex};

    #[test]
    fn test_error_message_carries_face_and_scalars() {
        let diag = WaveDiagnostics {
            left: [1.0, 2.0, 0.0, 0.0, 2.5],
            right: [1.0, 0.0, 0.0, 0.0, 2.5],
            pres1: 0.8,
            enth1: 3.3,
            csou1: f64::NAN,
            pres2: 1.0,
            enth2: 3.5,
            csou2: 1.18,
            vdon1: 2.0,
            vdon2: 0.0,
            vnave: 1.0,
            cssav: f64::NAN,
            s1: f64::NAN,
            s2: f64::NAN,
            sm: f64::NAN,
            prsta: f64::NAN,
        };
        let err = BoundaryFluxError::WaveOrdering {
            face: FaceId::new(ElementIndex::new(12), SideIndex::new(3)),
            diagnostics: Box::new(diag),
        };
        let msg = err.to_string();
        assert!(msg.contains("elem12/side3"));
        assert!(msg.contains("s1    = NaN"));
        assert!(msg.contains("pres1 = 0.8"));
    }
}
