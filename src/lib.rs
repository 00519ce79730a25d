//! Dense state-vector simulation of a small quantum register.
//!
//! A [`QuantumRegister`] holds the joint state of up to [`MAX_QUBITS`]
//! qubits as `2^n` complex amplitudes and supports single-qubit unitaries,
//! controlled-NOT, probability readout, and a full-register collapse
//! measurement.

pub mod error;
pub mod gates;
pub mod register;

pub use error::RegisterError;
pub use gates::{SingleQubitGate, HADAMARD, PAULI_X};
pub use register::{QuantumRegister, MAX_QUBITS};
