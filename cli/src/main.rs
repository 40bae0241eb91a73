use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use double_pendulum::{DoublePendulum, PendulumParameters, PendulumState, parameters};
use pendulum_diffeq::{FixedStepControl, OdeProblem, SaveMethod, Trajectory};
use utilities::format_duration;

#[derive(Debug, Parser)]
#[command(name = "penduo")]
#[command(about = "Integrates a double pendulum with fourth order Runge-Kutta and writes the trajectory to CSV")]
#[command(version)]
struct Cli {
    /// The size of time steps for each iteration of Runge-Kutta
    #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
    step_size: f64,

    /// The number of states in the trajectory, including the initial conditions
    #[arg(long, default_value_t = 100)]
    iterations: usize,

    /// Initial values of p_1, p_2, theta_1, theta_2
    #[arg(
        long,
        num_args = 4,
        value_names = ["P1", "P2", "THETA1", "THETA2"],
        allow_negative_numbers = true,
        default_values_t = [0.0, 0.0, 0.0, 0.0]
    )]
    initial_conditions: Vec<f64>,

    /// Path to the file to store output results in
    #[arg(long, default_value = "results.csv")]
    file_path: PathBuf,

    /// Mass of each rod
    #[arg(long, default_value_t = parameters::DEFAULT_MASS, allow_negative_numbers = true)]
    mass: f64,

    /// Length of each rod
    #[arg(long, default_value_t = parameters::DEFAULT_LENGTH, allow_negative_numbers = true)]
    length: f64,

    /// Gravitational acceleration
    #[arg(long, default_value_t = parameters::DEFAULT_GRAVITY, allow_negative_numbers = true)]
    gravity: f64,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    run(&cli)?;
    Ok(())
}

fn initial_state(values: &[f64]) -> Result<PendulumState> {
    let Ok(array) = <[f64; 4]>::try_from(values) else {
        bail!("there must be four initial conditions, got {}", values.len());
    };
    if let Some(value) = array.iter().find(|x| !x.is_finite()) {
        bail!("initial conditions must be finite, got {value}");
    }
    Ok(PendulumState::new(array))
}

fn run(cli: &Cli) -> Result<Trajectory<4>> {
    let parameters = PendulumParameters::new(cli.mass, cli.length, cli.gravity)?;
    let step = FixedStepControl::new(cli.step_size)?;
    let x0 = initial_state(&cli.initial_conditions)?;

    tracing::info!(
        p_1 = x0[0],
        p_2 = x0[1],
        theta_1 = x0[2],
        theta_2 = x0[3],
        "initial conditions"
    );
    tracing::info!(
        step_size = step.dt,
        iterations = cli.iterations,
        mass = parameters.mass(),
        length = parameters.length(),
        gravity = parameters.gravity(),
        path = %cli.file_path.display(),
        "running simulation"
    );

    let model = DoublePendulum::new(parameters);
    let e0 = model.energy(&x0);
    let mut problem = OdeProblem::new(model);

    let start = Instant::now();
    let result = problem
        .solve_fixed(
            &x0,
            cli.iterations,
            step,
            SaveMethod::File(cli.file_path.clone()),
        )
        .with_context(|| format!("simulation writing to {} failed", cli.file_path.display()))?;
    let elapsed = start.elapsed();

    if let Some(last) = result.last() {
        tracing::info!(
            rows = result.len() - 1,
            p_1 = last[0],
            p_2 = last[1],
            theta_1 = last[2],
            theta_2 = last[3],
            energy_drift = problem.model().energy(last) - e0,
            duration = %format_duration(elapsed),
            "simulation complete"
        );
    }

    Ok(result)
}
