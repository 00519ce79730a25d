use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use qreg::{QuantumRegister, RegisterError, HADAMARD, PAULI_X};

#[derive(Parser, Debug)]
#[command(
    name = "qreg",
    version,
    about = "Dense state-vector quantum register simulator demos."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Runs two-qubit Grover search for the marked state |11>.
    Grover {
        /// Seed for the measurement draw, for reproducible outcomes.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Prepares a Bell pair on two qubits and measures it.
    Bell {
        /// Seed for the measurement draw, for reproducible outcomes.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Grover { seed } => run_grover(seed),
        Commands::Bell { seed } => run_bell(seed),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

// controlled-Z from the gate set at hand: CZ = (I x H) CNOT (I x H)
fn apply_cz(reg: &mut QuantumRegister, control: usize, target: usize) -> Result<(), RegisterError> {
    reg.apply_single(target, &HADAMARD)?;
    reg.apply_cnot(control, target)?;
    reg.apply_single(target, &HADAMARD)
}

fn run_grover(seed: Option<u64>) -> Result<(), RegisterError> {
    let mut reg = QuantumRegister::new(2)?;

    // uniform superposition over all four basis states
    reg.apply_single(0, &HADAMARD)?;
    reg.apply_single(1, &HADAMARD)?;

    // oracle: phase-flip the marked state |11>
    apply_cz(&mut reg, 0, 1)?;

    // diffusion operator H(x)H (2|00><00| - I) H(x)H
    reg.apply_single(0, &HADAMARD)?;
    reg.apply_single(1, &HADAMARD)?;
    reg.apply_single(0, &PAULI_X)?;
    reg.apply_single(1, &PAULI_X)?;
    apply_cz(&mut reg, 0, 1)?;
    reg.apply_single(0, &PAULI_X)?;
    reg.apply_single(1, &PAULI_X)?;
    reg.apply_single(0, &HADAMARD)?;
    reg.apply_single(1, &HADAMARD)?;

    println!("state before measurement:");
    print_state(&reg);

    let outcome = measure(&mut reg, seed);
    println!(
        "measurement: |{:0width$b}> (expect |11>)",
        outcome,
        width = reg.qubit_count()
    );
    Ok(())
}

fn run_bell(seed: Option<u64>) -> Result<(), RegisterError> {
    let mut reg = QuantumRegister::new(2)?;
    reg.apply_single(0, &HADAMARD)?;
    reg.apply_cnot(0, 1)?;

    println!("state before measurement:");
    print_state(&reg);

    let outcome = measure(&mut reg, seed);
    println!(
        "measurement: |{:0width$b}> (|00> and |11> equally likely)",
        outcome,
        width = reg.qubit_count()
    );
    Ok(())
}

// one uniform draw per measurement; a fixed --seed reproduces the same
// outcome on every platform
fn measure(reg: &mut QuantumRegister, seed: Option<u64>) -> usize {
    match seed {
        Some(seed) => reg.measure_with(&mut ChaCha8Rng::seed_from_u64(seed)),
        None => reg.measure(),
    }
}

fn print_state(reg: &QuantumRegister) {
    for (i, amp) in reg.amplitudes().iter().enumerate() {
        if amp.norm_sqr() > 1e-8 {
            println!(
                "  |{:0width$b}>: {:.4} + {:.4}i (prob {:.4})",
                i,
                amp.re,
                amp.im,
                amp.norm_sqr(),
                width = reg.qubit_count()
            );
        }
    }
}
