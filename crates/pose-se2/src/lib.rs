#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Planar poses
//!
//! A [`PoseSE2`] is a position `(x, y)` together with a heading `theta`, i.e. an element of
//! the special Euclidean group SE(2). It is isomorphic to the homogeneous transform
//!
//! ```text
//! [ cosθ  -sinθ   x ]
//! [ sinθ   cosθ   y ]
//! [  0      0     1 ]
//! ```
//!
//! and exposes the group algebra on top of it:
//!
//! - [`PoseSE2::compose`] (`+`): `p1 ⊕ p2`, equal to `matrix(p1) * matrix(p2)`
//! - [`PoseSE2::inverse`]: `p⁻¹`, equal to the matrix inverse
//! - [`PoseSE2::relative`] (`-`): `p1 ⊖ p2 = p2⁻¹ ⊕ p1`, the pose of `p1` seen from `p2`
//! - [`PoseSE2::to_matrix`] / [`PoseSE2::from_matrix`]: conversion to and from `glam::DMat3`
//!
//! The heading is never wrapped implicitly. The only lossy step is [`PoseSE2::from_matrix`],
//! which recovers the angle with `atan2` and therefore lands in `(-π, π]`.
//!
//! ## Example
//!
//! ```rust
//! use pose_se2::PoseSE2;
//!
//! let odom = PoseSE2::new([1.0, 2.0], std::f64::consts::FRAC_PI_2);
//! let step = PoseSE2::new([1.0, 0.0], 0.0);
//!
//! // moving one meter forward while facing +y
//! let next = odom.compose(&step);
//! assert!((next.x() - 1.0).abs() < 1e-12);
//! assert!((next.y() - 3.0).abs() < 1e-12);
//!
//! // and back again, expressed in the frame of `odom`
//! let delta = next.relative(&odom);
//! assert!((delta.x() - 1.0).abs() < 1e-12);
//! assert!(delta.y().abs() < 1e-12);
//! ```

/// Angle helpers.
pub mod angle;

/// Error types for the pose module.
pub mod error;

/// The SE(2) pose value type.
pub mod pose;

pub use error::PoseError;
pub use pose::PoseSE2;
