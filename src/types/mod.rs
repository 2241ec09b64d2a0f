//! Strongly-typed domain types for safer APIs.
//!
//! Newtypes keep opaque mesh keys, face normals, and Jacobian matrices
//! from being mixed up at call sites. All wrappers are zero-cost.

mod indices;
mod matrix;
mod vector;

pub use indices::{ElementIndex, FaceId, SideIndex};
pub use matrix::Jacobian5;
pub use vector::Normal3;
