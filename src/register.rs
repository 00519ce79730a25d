use log::{debug, trace};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::RegisterError;
use crate::gates::SingleQubitGate;

/// Capacity ceiling for a register. 2^8 = 256 amplitudes at 16 bytes each
/// bounds the dense buffer at 4 KiB.
pub const MAX_QUBITS: usize = 8;

/// Dense state-vector register of `1..=MAX_QUBITS` qubits.
///
/// Amplitudes are indexed by classical basis state: bit `b` of index `i`
/// is the value of qubit `b`, with bit 0 (least significant) being
/// qubit 0. The sum of squared magnitudes is 1 after construction, after
/// every gate, and after measurement, provided callers only supply
/// unitary matrices.
///
/// The register owns the random source its measurements draw from, so a
/// register built with [`QuantumRegister::with_seed`] produces a
/// reproducible outcome stream.
#[derive(Debug, Clone)]
pub struct QuantumRegister {
    qubit_count: usize,
    pub(crate) amps: Vec<Complex64>,
    rng: StdRng,
}

impl QuantumRegister {
    /// Creates a register of `qubit_count` qubits in the all-zero basis
    /// state |0...0>, with an entropy-seeded measurement source.
    pub fn new(qubit_count: usize) -> Result<Self, RegisterError> {
        Self::with_rng(qubit_count, StdRng::from_entropy())
    }

    /// As [`QuantumRegister::new`], with the measurement source seeded
    /// explicitly so outcomes are reproducible.
    pub fn with_seed(qubit_count: usize, seed: u64) -> Result<Self, RegisterError> {
        Self::with_rng(qubit_count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(qubit_count: usize, rng: StdRng) -> Result<Self, RegisterError> {
        if !(1..=MAX_QUBITS).contains(&qubit_count) {
            return Err(RegisterError::QubitCountOutOfRange(qubit_count));
        }
        let mut amps = vec![Complex64::new(0.0, 0.0); 1 << qubit_count];
        amps[0] = Complex64::new(1.0, 0.0);
        Ok(QuantumRegister {
            qubit_count,
            amps,
            rng,
        })
    }

    /// Number of qubits, fixed at construction.
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Number of basis states, `2^qubit_count`.
    pub fn basis_states(&self) -> usize {
        self.amps.len()
    }

    /// Read-only view of the amplitude vector.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amps
    }

    fn check_qubit(&self, index: usize) -> Result<(), RegisterError> {
        if index < self.qubit_count {
            Ok(())
        } else {
            Err(RegisterError::QubitOutOfRange {
                index,
                qubit_count: self.qubit_count,
            })
        }
    }

    /// Applies a 2x2 unitary to qubit `target`.
    ///
    /// The matrix is trusted to be unitary; a non-unitary matrix breaks
    /// the normalization invariant. Debug builds assert the invariant
    /// after the update, release builds do not check.
    pub fn apply_single(
        &mut self,
        target: usize,
        matrix: &SingleQubitGate,
    ) -> Result<(), RegisterError> {
        self.check_qubit(target)?;
        let mask = 1usize << target;
        for i in 0..self.amps.len() {
            // visit each (target bit clear, target bit set) pair once
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amps[i];
                let b = self.amps[j];
                self.amps[i] = matrix[0] * a + matrix[1] * b;
                self.amps[j] = matrix[2] * a + matrix[3] * b;
            }
        }
        trace!("applied single-qubit gate on qubit {}", target);
        debug_assert!(
            (self.total_probability() - 1.0).abs() < 1e-9,
            "state no longer normalized after gate on qubit {}",
            target
        );
        Ok(())
    }

    /// Controlled-NOT: flips `target` on every basis state where
    /// `control` is 1. A permutation of amplitudes, so normalization is
    /// preserved exactly.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<(), RegisterError> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(RegisterError::ControlTargetOverlap(control));
        }
        let control_mask = 1usize << control;
        let target_mask = 1usize << target;
        for i in 0..self.amps.len() {
            // iterating only target-clear indices avoids a double swap
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amps.swap(i, i | target_mask);
            }
        }
        trace!("applied cnot, control {} target {}", control, target);
        Ok(())
    }

    /// Measures every qubit, collapsing the register to the sampled
    /// basis state. Returns the outcome index; bit `b` of the result is
    /// the classical value of qubit `b`.
    ///
    /// Draws exactly one uniform value from the register's own source.
    pub fn measure(&mut self) -> usize {
        let r: f64 = self.rng.gen();
        self.collapse(r)
    }

    /// As [`QuantumRegister::measure`], drawing the one uniform value
    /// from a caller-supplied generator instead of the register's own.
    pub fn measure_with<R: Rng>(&mut self, rng: &mut R) -> usize {
        let r: f64 = rng.gen();
        self.collapse(r)
    }

    // Inverse-CDF sample over |amp|^2 in basis-index order, then full
    // collapse. If floating-point error leaves the accumulated mass short
    // of the drawn value, the scan runs off the end and the last basis
    // state absorbs the residual.
    fn collapse(&mut self, mut r: f64) -> usize {
        let mut outcome = self.amps.len() - 1;
        for (i, amp) in self.amps.iter().enumerate() {
            r -= amp.norm_sqr();
            if r <= 0.0 {
                outcome = i;
                break;
            }
        }
        for amp in self.amps.iter_mut() {
            *amp = Complex64::new(0.0, 0.0);
        }
        self.amps[outcome] = Complex64::new(1.0, 0.0);
        debug!(
            "measured register: outcome {:0width$b}",
            outcome,
            width = self.qubit_count
        );
        outcome
    }

    /// Probability of observing each basis state, `|amp[i]|^2`, in index
    /// order. Sums to 1 whenever the normalization invariant holds.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|amp| amp.norm_sqr()).collect()
    }

    fn total_probability(&self) -> f64 {
        self.amps.iter().map(|amp| amp.norm_sqr()).sum()
    }
}
