use std::ops::{Deref, DerefMut};

/// A fixed-size array wrapper representing a state vector with `N` f64 components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateArray<const N: usize>([f64; N]);

impl<const N: usize> StateArray<N> {
    /// Constructs a new `StateArray` from an array of `f64`.
    ///
    /// # Arguments
    ///
    /// * `array` - An array of `f64` values representing the state.
    pub fn new(array: [f64; N]) -> Self {
        Self(array)
    }

    /// Returns true if no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }

    pub fn to_array(self) -> [f64; N] {
        self.0
    }
}

impl<const N: usize> Default for StateArray<N> {
    /// Creates a `StateArray` with all elements initialized to zero.
    fn default() -> Self {
        Self([0.0; N])
    }
}

impl<const N: usize> From<[f64; N]> for StateArray<N> {
    fn from(array: [f64; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> Deref for StateArray<N> {
    type Target = [f64; N];

    /// Dereferences the `StateArray` to access the underlying array.
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for StateArray<N> {
    /// Mutable dereference to the underlying array.
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateComponent;

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

    #[test]
    fn test_default_is_zero() {
        let x = StateArray::<4>::default();
        assert_eq!(x.to_array(), [0.0; 4]);
    }

    #[test]
    fn test_component_access() {
        let mut x = StateArray::new([1.0, 2.0, 3.0]);
        assert_eq!(x[Axis::Y.index()], 2.0);
        x[Axis::Z.index()] = -3.0;
        assert_eq!(x[Axis::Z.index()], -3.0);
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_is_finite() {
        assert!(StateArray::new([0.0, 1.0, -1.0]).is_finite());
        assert!(!StateArray::new([0.0, f64::NAN, 1.0]).is_finite());
        assert!(!StateArray::new([f64::INFINITY, 0.0, 1.0]).is_finite());
    }
}
