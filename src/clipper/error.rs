use thiserror::Error;

/// Reasons a configuration change or a clipping run is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipError {
    #[error("execute called while a previous run is still in progress")]
    ExecuteLocked,

    #[error("precision {0} is outside the supported range 0..=6")]
    PrecisionOutOfRange(u8),

    #[error("precision cannot change once polygons have been added")]
    PrecisionLocked,

    #[error("intersections could not be ordered between adjacent edges")]
    IntersectionOrder,

    #[error("maxima edge has no matching pair in the active edge list")]
    MaximaPair,

    #[error("right bound of a local minimum is missing from the active edge list")]
    RightBoundMissing,

    #[error("edge has no next segment in its bound")]
    UpdateEdge,

    #[error("edge reached its maximum while still owning an output ring")]
    ContributingMaxima,
}
