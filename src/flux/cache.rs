//! Per-face memoization of boundary flux evaluations.
//!
//! Residual and Jacobian assembly both walk the boundary faces, and the
//! Jacobian walk revisits each face once per coupled variable. The cache
//! holds the last computed flux and the last computed Jacobian, each
//! keyed by the face they were computed for, so repeated queries on the
//! same face within one assembly sweep cost nothing.
//!
//! One slot per kind is deliberate: assembly visits faces in order, so a
//! single slot already gives full hit rates, and a cache this small is
//! trivially cheap to clone per worker thread.

use crate::equations::EulerState;
use crate::types::{ElementIndex, FaceId, Jacobian5, Normal3, SideIndex};

use super::error::BoundaryFluxError;
use super::traits::BoundaryFluxScheme;

/// Memoizing wrapper around a [`BoundaryFluxScheme`].
///
/// Not shared between threads; parallel assembly clones one cache per
/// worker. The underlying scheme must be pure in its inputs, which every
/// scheme in this crate is.
#[derive(Clone, Debug)]
pub struct BoundaryFluxCache<S> {
    scheme: S,
    flux_key: Option<FaceId>,
    flux: EulerState,
    jacobian_key: Option<FaceId>,
    jacobian: Jacobian5,
}

impl<S: BoundaryFluxScheme> BoundaryFluxCache<S> {
    pub fn new(scheme: S) -> Self {
        Self {
            scheme,
            flux_key: None,
            flux: EulerState::zero(),
            jacobian_key: None,
            jacobian: Jacobian5::zero(),
        }
    }

    /// The flux through `(elem, side)`, recomputing only when the face
    /// differs from the previous flux query.
    pub fn get_flux(
        &mut self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<&EulerState, BoundaryFluxError> {
        let face = FaceId::new(elem, side);
        if self.flux_key != Some(face) {
            self.flux = self.scheme.calc_flux(side, elem, u_left, n)?;
            self.flux_key = Some(face);
        }
        Ok(&self.flux)
    }

    /// The Jacobian at `(elem, side)`, recomputing only when the face
    /// differs from the previous Jacobian query. The flux and Jacobian
    /// slots are independent.
    pub fn get_jacobian(
        &mut self,
        side: SideIndex,
        elem: ElementIndex,
        u_left: &EulerState,
        n: Normal3,
    ) -> Result<&Jacobian5, BoundaryFluxError> {
        let face = FaceId::new(elem, side);
        if self.jacobian_key != Some(face) {
            self.jacobian = self.scheme.calc_jacobian(side, elem, u_left, n)?;
            self.jacobian_key = Some(face);
        }
        Ok(&self.jacobian)
    }

    /// Drop both slots. Call between assembly sweeps, when the solution
    /// has changed under the same face keys.
    pub fn invalidate(&mut self) {
        self.flux_key = None;
        self.jacobian_key = None;
    }

    pub fn scheme(&self) -> &S {
        &self.scheme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::{boundary_flux, flux_jacobian, IdealGas};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Physical-flux scheme that counts evaluations.
    struct CountingScheme {
        fp: IdealGas,
        flux_calls: AtomicUsize,
        jacobian_calls: AtomicUsize,
    }

    impl CountingScheme {
        fn new() -> Self {
            Self {
                fp: IdealGas::air(),
                flux_calls: AtomicUsize::new(0),
                jacobian_calls: AtomicUsize::new(0),
            }
        }
    }

    impl BoundaryFluxScheme for CountingScheme {
        fn calc_flux(
            &self,
            _side: SideIndex,
            _elem: ElementIndex,
            u_left: &EulerState,
            n: Normal3,
        ) -> Result<EulerState, BoundaryFluxError> {
            self.flux_calls.fetch_add(1, Ordering::Relaxed);
            Ok(boundary_flux(&self.fp, u_left, n))
        }

        fn calc_jacobian(
            &self,
            _side: SideIndex,
            _elem: ElementIndex,
            u_left: &EulerState,
            n: Normal3,
        ) -> Result<Jacobian5, BoundaryFluxError> {
            self.jacobian_calls.fetch_add(1, Ordering::Relaxed);
            Ok(flux_jacobian(&self.fp, u_left, n))
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    fn face(e: usize, s: usize) -> (SideIndex, ElementIndex) {
        (SideIndex::new(s), ElementIndex::new(e))
    }

    #[test]
    fn test_repeated_face_computes_once() {
        let mut cache = BoundaryFluxCache::new(CountingScheme::new());
        let state = EulerState::new(1.0, 1.0, 0.0, 0.0, 2.5);
        let (side, elem) = face(4, 1);

        for _ in 0..5 {
            cache.get_flux(side, elem, &state, Normal3::X).unwrap();
        }
        assert_eq!(cache.scheme().flux_calls.load(Ordering::Relaxed), 1);

        for _ in 0..5 {
            cache.get_jacobian(side, elem, &state, Normal3::X).unwrap();
        }
        assert_eq!(cache.scheme().jacobian_calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_new_face_recomputes() {
        let mut cache = BoundaryFluxCache::new(CountingScheme::new());
        let state = EulerState::new(1.0, 1.0, 0.0, 0.0, 2.5);
        let (s0, e0) = face(4, 1);
        let (s1, e1) = face(4, 2);

        cache.get_flux(s0, e0, &state, Normal3::X).unwrap();
        cache.get_flux(s1, e1, &state, Normal3::X).unwrap();
        // Going back to the first face misses: a single slot holds only
        // the most recent face.
        cache.get_flux(s0, e0, &state, Normal3::X).unwrap();
        assert_eq!(cache.scheme().flux_calls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_flux_and_jacobian_slots_are_independent() {
        let mut cache = BoundaryFluxCache::new(CountingScheme::new());
        let state = EulerState::new(1.0, 1.0, 0.0, 0.0, 2.5);
        let (s0, e0) = face(4, 1);
        let (s1, e1) = face(7, 0);

        cache.get_flux(s0, e0, &state, Normal3::X).unwrap();
        // A Jacobian query on another face must not evict the flux slot.
        cache.get_jacobian(s1, e1, &state, Normal3::X).unwrap();
        cache.get_flux(s0, e0, &state, Normal3::X).unwrap();
        assert_eq!(cache.scheme().flux_calls.load(Ordering::Relaxed), 1);
        assert_eq!(cache.scheme().jacobian_calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut cache = BoundaryFluxCache::new(CountingScheme::new());
        let state = EulerState::new(1.0, 1.0, 0.0, 0.0, 2.5);
        let (side, elem) = face(4, 1);

        cache.get_flux(side, elem, &state, Normal3::X).unwrap();
        cache.get_jacobian(side, elem, &state, Normal3::X).unwrap();
        cache.invalidate();
        cache.get_flux(side, elem, &state, Normal3::X).unwrap();
        cache.get_jacobian(side, elem, &state, Normal3::X).unwrap();
        assert_eq!(cache.scheme().flux_calls.load(Ordering::Relaxed), 2);
        assert_eq!(cache.scheme().jacobian_calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_cached_value_matches_direct_evaluation() {
        let fp = IdealGas::air();
        let mut cache = BoundaryFluxCache::new(CountingScheme::new());
        let state = EulerState::new(1.3, 0.7, -0.4, 0.2, 3.1);
        let n = Normal3::new(0.6, 0.0, 0.8);
        let (side, elem) = face(2, 3);

        let cached = cache.get_flux(side, elem, &state, n).unwrap().to_array();
        let direct = boundary_flux(&fp, &state, n).to_array();
        assert_eq!(cached, direct);
    }
}
