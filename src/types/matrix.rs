//! Dense 5×5 matrix for flux Jacobians.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul};

use super::Normal3;

/// Dense 5×5 matrix, row-major.
///
/// Rows index the flux component, columns the conserved variable it is
/// differentiated against, in the shared ordering [ρ, ρu, ρv, ρw, ρE].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jacobian5(pub [[f64; 5]; 5]);

impl Jacobian5 {
    /// The zero matrix.
    #[inline]
    pub const fn zero() -> Self {
        Self([[0.0; 5]; 5])
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..5 {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Mirror-state Jacobian ∂U'/∂U for the slip-wall reflection.
    ///
    /// Mass and energy rows are identity; the momentum block is the
    /// Householder reflection I − 2nnᵀ. Constant in the state, depends
    /// only on the face normal.
    pub fn reflection(n: Normal3) -> Self {
        let mut m = Self::identity();
        m[(1, 1)] = 1.0 - 2.0 * n.x * n.x;
        m[(2, 2)] = 1.0 - 2.0 * n.y * n.y;
        m[(3, 3)] = 1.0 - 2.0 * n.z * n.z;
        m[(1, 2)] = -2.0 * n.x * n.y;
        m[(2, 1)] = -2.0 * n.x * n.y;
        m[(1, 3)] = -2.0 * n.x * n.z;
        m[(3, 1)] = -2.0 * n.x * n.z;
        m[(2, 3)] = -2.0 * n.y * n.z;
        m[(3, 2)] = -2.0 * n.y * n.z;
        m
    }

    /// Maximum absolute entry, for tolerance-based comparisons in tests.
    pub fn max_abs(&self) -> f64 {
        self.0
            .iter()
            .flatten()
            .fold(0.0f64, |acc, &x| acc.max(x.abs()))
    }
}

impl Index<(usize, usize)> for Jacobian5 {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.0[row][col]
    }
}

impl IndexMut<(usize, usize)> for Jacobian5 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.0[row][col]
    }
}

impl Add for Jacobian5 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for Jacobian5 {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..5 {
            for j in 0..5 {
                self.0[i][j] += rhs.0[i][j];
            }
        }
    }
}

impl Mul for Jacobian5 {
    type Output = Self;

    /// Matrix product `self * rhs` (chain-rule composition).
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zero();
        for i in 0..5 {
            for j in 0..5 {
                let mut acc = 0.0;
                for k in 0..5 {
                    acc += self.0[i][k] * rhs.0[k][j];
                }
                out.0[i][j] = acc;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_identity_mul() {
        let mut a = Jacobian5::zero();
        for i in 0..5 {
            for j in 0..5 {
                a[(i, j)] = (i * 5 + j) as f64;
            }
        }
        let prod = a * Jacobian5::identity();
        assert_eq!(prod, a);
    }

    #[test]
    fn test_reflection_is_involution() {
        // R * R = I for a Householder reflection.
        let inv_sqrt2 = 1.0 / 2f64.sqrt();
        let n = Normal3::new(inv_sqrt2, inv_sqrt2, 0.0);
        let r = Jacobian5::reflection(n);
        let rr = r * r;
        let id = Jacobian5::identity();
        for i in 0..5 {
            for j in 0..5 {
                assert!((rr[(i, j)] - id[(i, j)]).abs() < TOL);
            }
        }
    }

    #[test]
    fn test_reflection_axis_aligned() {
        let r = Jacobian5::reflection(Normal3::X);
        assert!((r[(1, 1)] + 1.0).abs() < TOL);
        assert!((r[(2, 2)] - 1.0).abs() < TOL);
        assert!((r[(3, 3)] - 1.0).abs() < TOL);
        assert!((r[(0, 0)] - 1.0).abs() < TOL);
        assert!((r[(4, 4)] - 1.0).abs() < TOL);
    }
}
