use thiserror::Error;

/// Errors surfaced by the stograd operators.
///
/// The library deliberately validates only structural preconditions.
/// Domain violations (a probability outside `(0, 1)`, for instance) are not
/// caught and propagate as NaN/Inf through the tensor arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StogradError {
    #[error("probability vector is empty")]
    EmptyProbabilityVector,
}
