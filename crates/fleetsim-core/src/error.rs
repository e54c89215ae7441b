//! Error type shared by the engine and driver.

/// Errors surfaced at construction and configuration time.
///
/// Ticking never fails: invalid identifiers passed at runtime are no-ops.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("fleet must contain at least one vehicle")]
    EmptyFleet,

    #[error("speed multiplier must be a positive finite number, got {0}")]
    InvalidSpeed(f64),

    #[error("unknown failure component: {0:?} (expected brake, engine, battery or oil)")]
    UnknownComponent(String),

    #[error("invalid simulation config: {0}")]
    Config(String),
}
