use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// A single-qubit gate: a 2x2 complex matrix in row-major order,
/// `[a, b, c, d]` standing for `[[a, b], [c, d]]`.
///
/// The register trusts the matrix to be unitary; see
/// [`QuantumRegister::apply_single`](crate::register::QuantumRegister::apply_single).
pub type SingleQubitGate = [Complex64; 4];

/// Hadamard gate: maps |0> and |1> to equal superpositions. Self-inverse.
pub const HADAMARD: SingleQubitGate = [
    Complex64::new(FRAC_1_SQRT_2, 0.0),
    Complex64::new(FRAC_1_SQRT_2, 0.0),
    Complex64::new(FRAC_1_SQRT_2, 0.0),
    Complex64::new(-FRAC_1_SQRT_2, 0.0),
];

/// Pauli-X (NOT) gate: swaps the basis amplitudes of the target qubit.
pub const PAULI_X: SingleQubitGate = [
    Complex64::new(0.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(1.0, 0.0),
    Complex64::new(0.0, 0.0),
];
