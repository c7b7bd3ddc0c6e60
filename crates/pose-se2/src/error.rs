/// An error type for the pose module.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum PoseError {
    /// Error when a pose component is NaN or infinite.
    #[error("Invalid pose: non-finite component (x: {0}, y: {1}, theta: {2})")]
    InvalidPose(f64, f64, f64),

    /// Error when a matrix entry is NaN or infinite.
    #[error("Invalid matrix: non-finite entry at row {0}, column {1}")]
    NonFiniteMatrixEntry(usize, usize),

    /// Error when the bottom row of a matrix is not `[0, 0, 1]`.
    #[error("Invalid matrix: bottom row must be [0, 0, 1], got [{0}, {1}, {2}]")]
    NotHomogeneous(f64, f64, f64),
}
