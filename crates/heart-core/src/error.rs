use thiserror::Error;

/// Everything that can go wrong while configuring or starting the show.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShowError {
    #[error("assets still loading ({loaded}/{expected})")]
    AssetsPending { loaded: usize, expected: usize },
    #[error("show already started")]
    AlreadyStarted,
    #[error("no images configured")]
    NoImages,
    #[error("sample step must be positive and finite, got {0}")]
    InvalidStep(f64),
    #[error("sample step {step} would produce {count} outline points (max {max})")]
    TooManySamples { step: f64, count: f64, max: usize },
    #[error("heartbeat range is empty: min {min} must be below max {max}")]
    InvalidHeartbeatRange { min: f64, max: f64 },
    #[error("canvas must have a positive size, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
    #[error("image {slot} ({path}) failed to load")]
    AssetFailed { slot: usize, path: String },
}
