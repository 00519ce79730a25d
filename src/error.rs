use thiserror::Error;

/// Invalid-argument errors raised by register operations.
///
/// Every variant is a caller programming error. Operations fail fast and
/// leave the register unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// Requested register size outside the supported `1..=8` range.
    #[error("qubit count {0} outside supported range 1..=8")]
    QubitCountOutOfRange(usize),

    /// Gate addressed to a qubit index the register does not have.
    #[error("qubit index {index} out of range for {qubit_count}-qubit register")]
    QubitOutOfRange { index: usize, qubit_count: usize },

    /// Controlled gate given the same qubit as control and target.
    #[error("control and target must be distinct qubits (got {0} twice)")]
    ControlTargetOverlap(usize),
}
