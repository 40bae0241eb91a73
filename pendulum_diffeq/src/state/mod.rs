//! State containers for component-wise integration.
//!
//! A state is a fixed-size array of `f64` values. Each slot is named by a
//! [`StateComponent`], which lets a model dispatch its derivative on the component
//! being advanced rather than on a raw index.

use std::fmt::Debug;

pub mod state_array;

pub use state_array::StateArray;

/// Names the slots of an `N` element state.
///
/// `ALL` must list every component exactly once in index order, so that
/// `ALL[i].index() == i` for all `i < N`.
pub trait StateComponent<const N: usize>: Copy + Debug + 'static {
    /// Every component, ordered by index.
    const ALL: [Self; N];

    /// Position of this component in the state array.
    fn index(self) -> usize;
}
