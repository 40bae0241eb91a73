use crate::DiffeqErrors;

/// Fixed-step control configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedStepControl {
    /// Constant step size.
    pub dt: f64,
}

impl FixedStepControl {
    /// Constructs a new fixed-step controller with a given step size.
    ///
    /// Fails if `dt` is not a finite, strictly positive number.
    pub fn new(dt: f64) -> Result<Self, DiffeqErrors> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(DiffeqErrors::InvalidStepSize(dt));
        }
        Ok(Self { dt })
    }

    /// Time at step index `i`.
    pub fn time(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }
}
