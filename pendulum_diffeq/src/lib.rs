use thiserror::Error;

/// Submodules for core ODE system components.
pub mod model;
pub mod rk;
pub mod saving;
pub mod state;
pub mod stepping;

pub use model::OdeModel;
pub use rk::RungeKutta4;
pub use saving::{SaveMethod, Trajectory};
pub use state::{StateArray, StateComponent};
pub use stepping::FixedStepControl;

use saving::ResultStorage;

#[derive(Debug, Error)]
pub enum DiffeqErrors {
    #[error("step size must be finite and greater than zero, got {0}")]
    InvalidStepSize(f64),
    #[error("iterations must be at least 1")]
    NoIterations,
    #[error("cannot allocate a trajectory of {0} states")]
    TrajectoryTooLarge(usize),
    #[error("{0}")]
    ResultErrors(#[from] pendulum_result::ResultErrors),
}

/// Container for a fixed-step integration problem: the model and the stepper buffers.
#[derive(Debug)]
pub struct OdeProblem<Model, const N: usize>
where
    Model: OdeModel<N>,
{
    model: Model,
    solver: RungeKutta4<N>,
}

impl<Model, const N: usize> OdeProblem<Model, N>
where
    Model: OdeModel<N>,
{
    pub fn new(model: Model) -> Self {
        Self {
            model,
            solver: RungeKutta4::new(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Integrates from `x0` until the trajectory holds `iterations` states.
    ///
    /// Index 0 of the returned trajectory is `x0`. Every later state is computed from
    /// the previous one with [`RungeKutta4::advance`] and, for `SaveMethod::File`, written
    /// to the output file before the next step begins. The initial state is not written.
    pub fn solve_fixed(
        &mut self,
        x0: &StateArray<N>,
        iterations: usize,
        step: FixedStepControl,
        save_method: SaveMethod,
    ) -> Result<Trajectory<N>, DiffeqErrors> {
        if iterations == 0 {
            return Err(DiffeqErrors::NoIterations);
        }

        // allocate before the output file is created so a failure leaves it untouched
        let mut result = Trajectory::with_capacity(iterations)?;
        result.insert(step.time(0), x0);

        let mut storage = ResultStorage::from_method(save_method)?;

        tracing::debug!(iterations, dt = step.dt, "starting fixed step integration");

        let mut x = *x0;
        for i in 1..iterations {
            let y = self.solver.advance(&self.model, &x, step.dt);
            result.insert(step.time(i), &y);
            storage.save(&y)?;
            tracing::trace!(i, state = ?y.to_array(), "step complete");
            x = y;
        }

        tracing::debug!(
            states = result.len(),
            rows_written = storage.rows(),
            "fixed step integration complete"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[derive(Clone, Copy, Debug)]
    enum Axis {
        X,
        Y,
    }

    impl StateComponent<2> for Axis {
        const ALL: [Self; 2] = [Axis::X, Axis::Y];

        fn index(self) -> usize {
            self as usize
        }
    }

    /// Harmonic oscillator, dx/dt = y, dy/dt = -x
    #[derive(Debug)]
    struct Oscillator;

    impl OdeModel<2> for Oscillator {
        type Component = Axis;

        fn derivative(&self, component: Axis, state: &StateArray<2>) -> f64 {
            match component {
                Axis::X => state[1],
                Axis::Y => -state[0],
            }
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("pendulum_diffeq_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_solve_fixed_trajectory_shape() {
        let mut problem = OdeProblem::new(Oscillator);
        let x0 = StateArray::new([1.0, 0.0]);
        let step = FixedStepControl::new(0.1).unwrap();

        let result = problem.solve_fixed(&x0, 5, step, SaveMethod::Memory).unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result.initial(), Some(&x0));
        assert_abs_diff_eq!(result.t[4], 0.4, epsilon = 1e-12);
        // first step: x unchanged since y(0) = 0, y moves by -h*x
        assert_abs_diff_eq!(result.y[1][0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.y[1][1], -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_fixed_single_iteration() {
        let mut problem = OdeProblem::new(Oscillator);
        let x0 = StateArray::new([0.5, 0.5]);
        let step = FixedStepControl::new(0.1).unwrap();

        let result = problem.solve_fixed(&x0, 1, step, SaveMethod::Memory).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.last(), Some(&x0));
    }

    #[test]
    fn test_solve_fixed_rejects_zero_iterations() {
        let mut problem = OdeProblem::new(Oscillator);
        let step = FixedStepControl::new(0.1).unwrap();
        let result = problem.solve_fixed(&StateArray::default(), 0, step, SaveMethod::Memory);
        assert!(matches!(result, Err(DiffeqErrors::NoIterations)));
    }

    #[test]
    fn test_solve_fixed_huge_iterations_fails_cleanly() {
        let path = temp_path("huge.csv");
        let mut problem = OdeProblem::new(Oscillator);
        let step = FixedStepControl::new(0.1).unwrap();

        let result = problem.solve_fixed(
            &StateArray::default(),
            usize::MAX,
            step,
            SaveMethod::File(path.clone()),
        );

        assert!(matches!(result, Err(DiffeqErrors::TrajectoryTooLarge(usize::MAX))));
        assert!(!path.exists());
    }

    #[test]
    fn test_solve_fixed_writes_every_state_but_the_first() {
        let path = temp_path("oscillator.csv");
        let mut problem = OdeProblem::new(Oscillator);
        let x0 = StateArray::new([1.0, 0.0]);
        let step = FixedStepControl::new(0.05).unwrap();

        let result = problem
            .solve_fixed(&x0, 20, step, SaveMethod::File(path.clone()))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 19);

        for (line, y) in lines.iter().zip(&result.y[1..]) {
            let values: Vec<f64> = line.split(',').map(|v| v.parse().unwrap()).collect();
            assert_eq!(values.len(), 2);
            assert_abs_diff_eq!(values[0], y[0], epsilon = 5e-9);
            assert_abs_diff_eq!(values[1], y[1], epsilon = 5e-9);
        }
    }
}
