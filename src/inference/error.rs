//! Inference harness error types

use core::fmt;

/// Result type for inference harness operations
pub type Result<T> = core::result::Result<T, InferenceError>;

/// Inference harness errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InferenceError {
    /// Model schema version differs from the supported one
    SchemaMismatch { found: u32, expected: u32 },
    /// Interpreter could not allocate its tensors
    AllocationFailed,
    /// Interpreter reports more arena use than configured
    ArenaTooSmall { used: usize, available: usize },
    /// Interpreter failed to run the model
    InvokeFailed,
    /// Image and input tensor sizes differ
    InputSizeMismatch { expected: usize, actual: usize },
    /// Output tensor has fewer scores than there are categories
    OutputTooShort { expected: usize, actual: usize },
    /// Sample label is not a known category
    LabelOutOfRange(u8),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceError::SchemaMismatch { found, expected } => write!(
                f,
                "Model provided is schema version {} not equal to supported version {}",
                found, expected
            ),
            InferenceError::AllocationFailed => write!(f, "AllocateTensors() failed"),
            InferenceError::ArenaTooSmall { used, available } => {
                write!(f, "Tensor arena too small: {} of {} bytes", used, available)
            }
            InferenceError::InvokeFailed => write!(f, "Invoke failed"),
            InferenceError::InputSizeMismatch { expected, actual } => write!(
                f,
                "Input size mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            InferenceError::OutputTooShort { expected, actual } => write!(
                f,
                "Output too short: expected {} scores, got {}",
                expected, actual
            ),
            InferenceError::LabelOutOfRange(label) => write!(f, "Label {} out of range", label),
        }
    }
}
