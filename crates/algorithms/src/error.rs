use thiserror::Error;

/// Inputs for which a hit-test has no meaningful answer.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HitTestError {
    #[error("The query position has a NaN coordinate.")]
    PositionIsNaN,
    #[error("The query rectangle has a NaN coordinate.")]
    RectangleIsNaN,
    #[error("The query rectangle has a negative size.")]
    NegativeRectangleSize,
}
