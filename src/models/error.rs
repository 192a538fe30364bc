use thiserror::Error;

/// Failures produced while building or editing a line's sections.
///
/// Every variant is a recoverable input-validation outcome. A mutation
/// that returns one of these leaves the chain exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("a section with the same up and down stations is already registered")]
    DuplicateSection,

    #[error("neither station of the new section is on the line")]
    DisconnectedSection,

    #[error("new section ({new}) must be shorter than the section it splits ({existing})")]
    DistanceTooLarge { new: u32, existing: u32 },

    #[error("a line must keep at least one section")]
    LastSection,

    #[error("station is not on the line")]
    StationNotOnLine,

    #[error("station is already on the line")]
    StationAlreadyOnLine,

    #[error("section distance must be greater than zero")]
    ZeroDistance,

    #[error("a section must connect two different stations")]
    IdenticalEndpoints,
}

/// Result type for line and section-chain operations.
pub type LineResult<T> = Result<T, LineError>;
