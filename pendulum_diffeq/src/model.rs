use std::fmt::Debug;

use crate::state::{StateArray, StateComponent};

/// Trait for defining a dynamical system that is integrated one component at a time.
///
/// Implementors compute the time derivative of a single named component from the full
/// state. Derivatives must be pure: the same state always yields the same value.
pub trait OdeModel<const N: usize>: Debug {
    type Component: StateComponent<N>;

    /// Time derivative of `component` evaluated at `state`.
    fn derivative(&self, component: Self::Component, state: &StateArray<N>) -> f64;
}
