//! Contract violations reported by the engine

use thiserror::Error;

/// Errors returned when an integrator configures or wires headers incorrectly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppBarError {
    #[error("max extent ({max}) must be greater than min extent ({min})")]
    InvalidExtentRange { min: f32, max: f32 },

    #[error("measured header height {measured} is less than its min extent {min_extent}")]
    MeasurementBelowMinimum { measured: f32, min_extent: f32 },

    #[error("behavior needs a scroll context, but none is set on the coordinator")]
    MissingScrollContext,

    #[error("scroll context is still required by {count} attached header(s)")]
    ScrollContextInUse { count: usize },

    #[error("header state is already attached to this coordinator")]
    AlreadyAttached,
}

pub type Result<T> = std::result::Result<T, AppBarError>;
