use pendulum_diffeq::{
    FixedStepControl, OdeModel, OdeProblem, SaveMethod, StateArray, StateComponent,
};
use std::error::Error;

#[derive(Clone, Copy, Debug)]
enum Axis {
    X,
    Y,
    Z,
}

impl StateComponent<3> for Axis {
    const ALL: [Self; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug)]
struct Lorenz {
    sigma: f64,
    rho: f64,
    beta: f64,
}

impl OdeModel<3> for Lorenz {
    type Component = Axis;

    fn derivative(&self, component: Axis, x: &StateArray<3>) -> f64 {
        match component {
            Axis::X => self.sigma * (x[1] - x[0]),
            Axis::Y => x[0] * (self.rho - x[2]) - x[1],
            Axis::Z => x[0] * x[1] - self.beta * x[2],
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let model = Lorenz {
        sigma: 10.,
        rho: 28.,
        beta: 8. / 3.,
    };

    let path = std::env::current_dir()?.join("results").join("lorenz.csv");

    let mut problem = OdeProblem::new(model);

    let x0 = StateArray::new([1.0, 0.0, 0.0]); // Initial conditions for x, y, z

    let result = problem.solve_fixed(
        &x0,
        1001,
        FixedStepControl::new(0.001)?,
        SaveMethod::File(path.clone()),
    )?;

    if let Some(last) = result.last() {
        println!("final state {:?} written to {}", last.to_array(), path.display());
    }

    Ok(())
}
