//! Input validation errors

use thiserror::Error;

/// Why a simulate action was rejected.
///
/// None of these leave partial state behind: the caller keeps whatever it
/// displayed before.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Frequency was negative, not a number, or not finite
    #[error("please enter a valid frequency (≥ 0), got `{0}`")]
    InvalidFrequency(String),

    /// No metal was selected
    #[error("please select a metal")]
    MissingMetal,

    /// A metal name outside the known table
    #[error("unknown metal `{0}`")]
    UnknownMetal(String),
}
