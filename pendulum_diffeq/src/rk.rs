use crate::{
    OdeModel,
    state::{StateArray, StateComponent},
};

/// Fraction of `h` by which each of stages 2..4 perturbs the target component,
/// applied to the slope of the preceding stage.
const STAGE_OFFSETS: [f64; 3] = [0.5, 0.5, 1.0];

/// Classical fourth order Runge-Kutta applied to one state component at a time.
///
/// Stage evaluations perturb only the component being advanced; every other component
/// stays at the value of the state passed in. The perturbations happen on a scratch copy
/// owned by the stepper, so the caller's state is never modified.
#[derive(Debug)]
pub struct RungeKutta4<const N: usize> {
    scratch: StateArray<N>,
    k: [f64; 4],
}

impl<const N: usize> Default for RungeKutta4<N> {
    fn default() -> Self {
        Self {
            scratch: StateArray::default(),
            k: [0.0; 4],
        }
    }
}

impl<const N: usize> RungeKutta4<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances `component` of `x` by one step of size `h` and returns its new value.
    ///
    /// ```text
    /// k1 = f(x)
    /// k2 = f(x with x[j] + k1*h/2)
    /// k3 = f(x with x[j] + k2*h/2)
    /// k4 = f(x with x[j] + k3*h)
    /// x[j] + (h/6)*(k1 + 2*k2 + 2*k3 + k4)
    /// ```
    pub fn step<Model: OdeModel<N>>(
        &mut self,
        model: &Model,
        x: &StateArray<N>,
        h: f64,
        component: Model::Component,
    ) -> f64 {
        let j = component.index();
        let x0 = x[j];

        self.scratch.clone_from(x);
        self.k[0] = model.derivative(component, &self.scratch);

        for s in 1..4 {
            self.scratch[j] = x0 + self.k[s - 1] * h * STAGE_OFFSETS[s - 1];
            self.k[s] = model.derivative(component, &self.scratch);
        }

        let [k1, k2, k3, k4] = self.k;
        x0 + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
    }

    /// Advances every component of `x` by one step, returning the next state.
    ///
    /// Components are stepped in index order and each one reads `x`, never the values
    /// already advanced earlier in the same step.
    pub fn advance<Model: OdeModel<N>>(
        &mut self,
        model: &Model,
        x: &StateArray<N>,
        h: f64,
    ) -> StateArray<N> {
        let mut next = *x;
        for component in <Model::Component as StateComponent<N>>::ALL {
            next[component.index()] = self.step(model, x, h, component);
        }
        next
    }
}
