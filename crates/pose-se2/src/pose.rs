use crate::{angle::wrap_angle, error::PoseError};
use glam::{DMat3, DVec2, DVec3};
use rand::Rng;
use std::f64::consts::TAU;
use std::fmt;

#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq};

/// A rigid-body pose in the plane, an element of SE(2).
///
/// The pose stores a position `(x, y)` and a heading `theta` in radians. The heading is kept
/// exactly as given: no operation wraps it into a canonical range, except
/// [`PoseSE2::from_matrix`] (through `atan2`) and the explicit [`PoseSE2::normalized`].
///
/// Every operation returns a new pose; the fields are private and there are no setters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoseSE2 {
    x: f64,
    y: f64,
    theta: f64,
}

impl PoseSE2 {
    /// The identity pose `(0, 0, 0)`.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        theta: 0.0,
    };

    /// Create a pose from a position and an orientation.
    ///
    /// # Arguments
    ///
    /// * `position` - The position `[x, y]`.
    /// * `orientation` - The heading in radians. Any value is accepted as-is.
    ///
    /// No validation is performed, non-finite inputs propagate through every operation.
    /// Use [`PoseSE2::try_new`] to reject them.
    pub const fn new(position: [f64; 2], orientation: f64) -> Self {
        Self {
            x: position[0],
            y: position[1],
            theta: orientation,
        }
    }

    /// Create a pose, checking that all three components are finite.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::InvalidPose`] if any component is NaN or infinite.
    pub fn try_new(position: [f64; 2], orientation: f64) -> Result<Self, PoseError> {
        let [x, y] = position;
        if !(x.is_finite() && y.is_finite() && orientation.is_finite()) {
            log::debug!("rejecting non-finite pose ({x}, {y}, {orientation})");
            return Err(PoseError::InvalidPose(x, y, orientation));
        }
        Ok(Self::new(position, orientation))
    }

    /// Create a pose from `[x, y, theta]`.
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new([arr[0], arr[1]], arr[2])
    }

    /// Create a pose with a random position in `[0, 1)²` and a random heading in `[0, 2π)`.
    pub fn from_random() -> Self {
        let mut rng = rand::rng();

        let x: f64 = rng.random();
        let y: f64 = rng.random();
        let theta: f64 = rng.random_range(0.0..TAU);

        Self { x, y, theta }
    }

    /// The position `[x, y]`.
    #[inline]
    pub fn position(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// The heading in radians, exactly as stored.
    #[inline]
    pub fn orientation(&self) -> f64 {
        self.theta
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The pose as `[x, y, theta]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.theta]
    }

    /// The compact representation of the pose.
    ///
    /// For SE(2) the compact form is the full `[x, y, theta]` vector, same as
    /// [`PoseSE2::to_array`].
    #[inline]
    pub fn to_compact(&self) -> [f64; 3] {
        self.to_array()
    }

    /// The 3x3 homogeneous transform of the pose.
    ///
    /// ```text
    /// [ cosθ  -sinθ   x ]
    /// [ sinθ   cosθ   y ]
    /// [  0      0     1 ]
    /// ```
    ///
    /// The matrix is column-major, so the translation lives in `z_axis`.
    pub fn to_matrix(&self) -> DMat3 {
        let (sin_t, cos_t) = self.theta.sin_cos();
        DMat3::from_cols(
            DVec3::new(cos_t, sin_t, 0.0),
            DVec3::new(-sin_t, cos_t, 0.0),
            DVec3::new(self.x, self.y, 1.0),
        )
    }

    /// Create a pose from a 3x3 homogeneous transform.
    ///
    /// The position is read from the last column and the heading is
    /// `atan2(m[1][0], m[0][0])`, so it always lies in `(-π, π]`. A pose whose heading was
    /// outside that range comes back with a different angle value but the same rotation.
    ///
    /// The bottom row and the orthogonality of the rotation block are not checked.
    pub fn from_matrix(mat: &DMat3) -> Self {
        Self {
            x: mat.z_axis.x,
            y: mat.z_axis.y,
            theta: mat.x_axis.y.atan2(mat.x_axis.x),
        }
    }

    /// Create a pose from a 3x3 homogeneous transform, validating the matrix first.
    ///
    /// # Errors
    ///
    /// * [`PoseError::NonFiniteMatrixEntry`] if any entry is NaN or infinite.
    /// * [`PoseError::NotHomogeneous`] if the bottom row is not exactly `[0, 0, 1]`.
    pub fn try_from_matrix(mat: &DMat3) -> Result<Self, PoseError> {
        for col in 0..3 {
            for row in 0..3 {
                if !mat.col(col)[row].is_finite() {
                    log::debug!("rejecting matrix with non-finite entry at ({row}, {col})");
                    return Err(PoseError::NonFiniteMatrixEntry(row, col));
                }
            }
        }

        let bottom = mat.row(2);
        if bottom != DVec3::Z {
            log::debug!("rejecting matrix with bottom row {bottom}");
            return Err(PoseError::NotHomogeneous(bottom.x, bottom.y, bottom.z));
        }

        Ok(Self::from_matrix(mat))
    }

    /// The inverse pose `p⁻¹`, such that `p⁻¹ ⊕ p` is the identity.
    ///
    /// Equal to the matrix inverse of [`PoseSE2::to_matrix`].
    pub fn inverse(&self) -> Self {
        let (sin_t, cos_t) = self.theta.sin_cos();
        Self {
            x: -self.x * cos_t - self.y * sin_t,
            y: self.x * sin_t - self.y * cos_t,
            theta: -self.theta,
        }
    }

    /// Compose two poses, `self ⊕ other`.
    ///
    /// This applies `other` in the frame of `self` and is equal to
    /// `self.to_matrix() * other.to_matrix()`. The operation is not commutative.
    pub fn compose(&self, other: &Self) -> Self {
        let (sin_t, cos_t) = self.theta.sin_cos();
        Self {
            x: self.x + other.x * cos_t - other.y * sin_t,
            y: self.y + other.x * sin_t + other.y * cos_t,
            theta: self.theta + other.theta,
        }
    }

    /// The pose of `self` expressed in the frame of `reference`, `self ⊖ reference`.
    ///
    /// Computed as `reference⁻¹ ⊕ self`, which is equal to
    /// `reference.to_matrix().inverse() * self.to_matrix()`.
    ///
    /// Note the asymmetry: the inverse is taken of `reference`, not of `self`.
    pub fn relative(&self, reference: &Self) -> Self {
        reference.inverse().compose(self)
    }

    /// Apply the rigid transform to a point, `R(θ) * p + t`.
    pub fn transform_point(&self, point: DVec2) -> DVec2 {
        let (sin_t, cos_t) = self.theta.sin_cos();
        DVec2::new(
            cos_t * point.x - sin_t * point.y + self.x,
            sin_t * point.x + cos_t * point.y + self.y,
        )
    }

    /// The same pose with its heading wrapped into `(-π, π]`.
    pub fn normalized(&self) -> Self {
        Self {
            theta: wrap_angle(self.theta),
            ..*self
        }
    }
}

impl Default for PoseSE2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for PoseSE2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoseSE2(x: {:.4}, y: {:.4}, theta: {:.4})",
            self.x, self.y, self.theta
        )
    }
}

impl From<[f64; 3]> for PoseSE2 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<PoseSE2> for [f64; 3] {
    fn from(pose: PoseSE2) -> Self {
        pose.to_array()
    }
}

impl std::ops::Add<PoseSE2> for PoseSE2 {
    type Output = PoseSE2;

    fn add(self, other: PoseSE2) -> PoseSE2 {
        self.compose(&other)
    }
}

impl std::ops::Add<&PoseSE2> for &PoseSE2 {
    type Output = PoseSE2;

    fn add(self, other: &PoseSE2) -> PoseSE2 {
        self.compose(other)
    }
}

impl std::ops::Sub<PoseSE2> for PoseSE2 {
    type Output = PoseSE2;

    fn sub(self, other: PoseSE2) -> PoseSE2 {
        self.relative(&other)
    }
}

impl std::ops::Sub<&PoseSE2> for &PoseSE2 {
    type Output = PoseSE2;

    fn sub(self, other: &PoseSE2) -> PoseSE2 {
        self.relative(other)
    }
}

impl std::ops::Mul<DVec2> for PoseSE2 {
    type Output = DVec2;

    fn mul(self, rhs: DVec2) -> Self::Output {
        self.transform_point(rhs)
    }
}

#[cfg(feature = "approx")]
impl AbsDiffEq for PoseSE2 {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <f64 as AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.theta.abs_diff_eq(&other.theta, epsilon)
    }
}

#[cfg(feature = "approx")]
impl RelativeEq for PoseSE2 {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <f64 as RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.theta.relative_eq(&other.theta, epsilon, max_relative)
    }
}
