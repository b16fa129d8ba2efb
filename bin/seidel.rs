//! Gauss-Seidel solver front end.
//!
//! Usage:
//!     seidel linear -f data.toml
//!     seidel linear -i
//!     seidel newton --system 1 --x0 0.8 --y0 1.9
//!     seidel newton --system 2 --x0 2 --y0 1 --no-rearrange
//!
//! Set `RUST_LOG=debug` to see the rearrangement and per-step progress.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use seidel::config::{load_config, SystemConfig};
use seidel::linalg::{rearrange_with_assignment, solve};
use seidel::optim::{newton_system, NewtonSystemResult, NewtonSystemSettings};
use seidel::{AugmentedMatrix, DynMatrix, DynVector};

// Close enough to the root of system 1 that every linearised step can be
// made diagonally dominant
const DEFAULT_X0: f64 = 0.8;
const DEFAULT_Y0: f64 = 1.9;

#[derive(Parser, Debug)]
#[command(name = "seidel", about = "Gauss-Seidel method", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a linear system, rearranging it for diagonal dominance first
    Linear {
        /// Use console input
        #[arg(short = 'i', long)]
        console_input: bool,

        /// Problem file (.toml or .json) if not console input
        #[arg(short, long, default_value = "data.toml")]
        filename: PathBuf,
    },
    /// Solve a built-in 2-D nonlinear system by Newton's method
    Newton {
        /// Number of the system to solve (see --list)
        #[arg(long, default_value_t = 1)]
        system: usize,

        /// Initial x
        #[arg(long, default_value_t = DEFAULT_X0, allow_negative_numbers = true)]
        x0: f64,

        /// Initial y
        #[arg(long, default_value_t = DEFAULT_Y0, allow_negative_numbers = true)]
        y0: f64,

        /// Accuracy of the outer iteration
        #[arg(long, default_value_t = 1e-6)]
        eps: f64,

        /// Solve each linearised system as given instead of rearranging it
        /// for diagonal dominance first
        #[arg(long)]
        no_rearrange: bool,

        /// List the built-in systems and exit
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Linear {
            console_input,
            filename,
        } => {
            let config = if console_input {
                read_console()?
            } else {
                load_config(&filename)
                    .with_context(|| format!("failed to load {}", filename.display()))?
            };
            run_linear(&config)
        }
        Command::Newton {
            system,
            x0,
            y0,
            eps,
            no_rearrange,
            list,
        } => {
            if list {
                for (k, s) in SYSTEMS.iter().enumerate() {
                    println!("{}. {}", k + 1, s.name);
                }
                return Ok(());
            }
            run_newton(system, x0, y0, eps, !no_rearrange)
        }
    }
}

// ── Linear systems ──────────────────────────────────────────────────

fn run_linear(config: &SystemConfig) -> anyhow::Result<()> {
    config.validate()?;
    let m = config.augmented()?;

    let r = rearrange_with_assignment(&m)?;
    println!("Diagonal dominance succeeded");
    println!("Before permutation:");
    print_matrix(&m);
    println!("After permutation:");
    print_matrix(&r.matrix);
    println!();

    let sol = solve(&r.matrix, config.accuracy)?;
    println!("Number of iterations: {}", sol.iterations);
    println!("Result:");
    for (i, x) in sol.x.as_slice().iter().enumerate() {
        println!("X{}: {:.6}", i + 1, x);
    }
    println!("Error:");
    for (i, e) in sol.error.as_slice().iter().enumerate() {
        println!("X{}: {:.6}", i + 1, e);
    }
    Ok(())
}

fn print_matrix(m: &AugmentedMatrix<f64>) {
    for row in m.to_rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{:.2}", v)).collect();
        println!("{}", line.join("\t"));
    }
}

/// Whitespace-separated tokens from stdin, read a line at a time.
struct Tokens<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn next<T>(&mut self, what: &str) -> anyhow::Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                bail!("unexpected end of input while reading {}", what);
            }
            self.pending = line.split_whitespace().rev().map(str::to_owned).collect();
        }
        let token = self.pending.pop().unwrap_or_default();
        token
            .parse()
            .with_context(|| format!("invalid {}: {:?}", what, token))
    }
}

fn prompt(text: &str) -> anyhow::Result<()> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}

fn read_console() -> anyhow::Result<SystemConfig> {
    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());

    prompt("Enter accuracy: ")?;
    let accuracy: f64 = tokens.next("accuracy")?;

    prompt("Enter matrix size (n): ")?;
    let n: usize = tokens.next("matrix size")?;
    if n == 0 {
        bail!("matrix size must be at least 1");
    }

    println!("Enter matrix with D as last column (n x n+1): ");
    let mut matrix = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n + 1);
        for j in 0..=n {
            row.push(tokens.next(&format!("entry ({}, {})", i + 1, j + 1))?);
        }
        matrix.push(row);
    }

    Ok(SystemConfig { accuracy, matrix })
}

// ── Nonlinear systems ───────────────────────────────────────────────

struct System {
    name: &'static str,
    f: fn(&DynVector<f64>) -> DynVector<f64>,
    jacobian: fn(&DynVector<f64>) -> DynMatrix<f64>,
}

static SYSTEMS: [System; 2] = [
    System {
        name: "x^2 + y^2 = 4, y = 3x^2",
        f: circle_parabola,
        jacobian: circle_parabola_jacobian,
    },
    System {
        name: "x^2 - y^2 = 1, y = 1",
        f: hyperbola_line,
        jacobian: hyperbola_line_jacobian,
    },
];

fn circle_parabola(v: &DynVector<f64>) -> DynVector<f64> {
    DynVector::from_slice(&[v[0] * v[0] + v[1] * v[1] - 4.0, v[1] - 3.0 * v[0] * v[0]])
}

fn circle_parabola_jacobian(v: &DynVector<f64>) -> DynMatrix<f64> {
    DynMatrix::from_rows(2, 2, &[2.0 * v[0], 2.0 * v[1], -6.0 * v[0], 1.0])
}

fn hyperbola_line(v: &DynVector<f64>) -> DynVector<f64> {
    DynVector::from_slice(&[v[0] * v[0] - v[1] * v[1] - 1.0, v[1] - 1.0])
}

fn hyperbola_line_jacobian(v: &DynVector<f64>) -> DynMatrix<f64> {
    DynMatrix::from_rows(2, 2, &[2.0 * v[0], -2.0 * v[1], 0.0, 1.0])
}

fn solve_builtin(
    system: usize,
    x0: f64,
    y0: f64,
    eps: f64,
    rearrange: bool,
) -> anyhow::Result<(&'static System, NewtonSystemResult<f64>)> {
    let Some(s) = system.checked_sub(1).and_then(|k| SYSTEMS.get(k)) else {
        bail!("no system {} (there are {})", system, SYSTEMS.len());
    };
    if !eps.is_finite() || eps <= 0.0 {
        bail!("eps must be a positive number, got {}", eps);
    }

    let settings = NewtonSystemSettings {
        eps,
        rearrange,
        ..NewtonSystemSettings::default()
    };
    let r = newton_system(s.f, s.jacobian, &DynVector::from_slice(&[x0, y0]), &settings)
        .with_context(|| format!("system {} from ({}, {})", system, x0, y0))?;
    Ok((s, r))
}

fn run_newton(system: usize, x0: f64, y0: f64, eps: f64, rearrange: bool) -> anyhow::Result<()> {
    let (s, r) = solve_builtin(system, x0, y0, eps, rearrange)?;
    println!("System: {}", s.name);

    println!("Number of iterations: {}", r.iterations);
    println!("Gauss-Seidel sweeps: {}", r.inner_sweeps);
    println!("Result:");
    println!("x: {:.6}", r.x[0]);
    println!("y: {:.6}", r.x[1]);
    println!("Residuals:");
    for (i, v) in r.fx.as_slice().iter().enumerate() {
        println!("F{}: {:e}", i + 1, v);
    }
    Ok(())
}
