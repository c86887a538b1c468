use crate::types::WorkoutKind;

/// Everything that can go wrong turning a package into a summary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    /// Code outside `SWM`/`RUN`/`WLK`.
    #[error("unknown workout type: {code}")]
    InvalidWorkoutCode { code: String },

    #[error("{kind} expects {expected} values, got {got}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },

    /// A field used as a divisor is zero.
    #[error("{field} must be non-zero, it is used as a divisor (got {value})")]
    DivisionPrecondition { field: &'static str, value: f64 },

    #[error("invalid {field} {value}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("malformed package {input:?}: {reason}")]
    MalformedPackage { input: String, reason: String },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
