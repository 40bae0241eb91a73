use std::path::PathBuf;

use pendulum_result::{ResultErrors, ResultWriter};

use crate::{DiffeqErrors, state::StateArray};

/// Specifies the saving strategy to be used by the solver.
///
/// - `Memory`: Keep the trajectory in memory only.
/// - `File`: Keep the trajectory in memory and stream every new state to a CSV file.
#[derive(Clone, Debug)]
pub enum SaveMethod {
    Memory,
    File(PathBuf),
}

/// Runtime output for solver results, selected based on the `SaveMethod`.
pub(crate) enum ResultStorage {
    /// Writer used to stream each row as it is produced.
    File(ResultWriter),
    /// No streaming output.
    None,
}

impl ResultStorage {
    pub(crate) fn from_method(method: SaveMethod) -> Result<Self, ResultErrors> {
        match method {
            SaveMethod::Memory => Ok(ResultStorage::None),
            SaveMethod::File(path) => Ok(ResultStorage::File(ResultWriter::new(path)?)),
        }
    }

    /// Save a state to the output. No-op if storage is `None`.
    pub(crate) fn save<const N: usize>(&mut self, y: &StateArray<N>) -> Result<(), ResultErrors> {
        match self {
            ResultStorage::File(writer) => writer.write_record(&y[..]),
            ResultStorage::None => Ok(()),
        }
    }

    pub(crate) fn rows(&self) -> usize {
        match self {
            ResultStorage::File(writer) => writer.rows(),
            ResultStorage::None => 0,
        }
    }
}

/// The ordered sequence of states produced by a solve, with the time of each.
///
/// Index 0 holds the initial conditions. Storage is preallocated for the requested
/// number of iterations and entries are only ever appended.
#[derive(Clone, Debug)]
pub struct Trajectory<const N: usize> {
    /// Recorded times.
    pub t: Vec<f64>,
    /// Recorded states.
    pub y: Vec<StateArray<N>>,
}

impl<const N: usize> Trajectory<N> {
    /// Constructs an empty trajectory with room for `n` states.
    ///
    /// Fails instead of aborting when the storage for `n` states cannot be allocated.
    pub fn with_capacity(n: usize) -> Result<Self, DiffeqErrors> {
        let mut t = Vec::new();
        let mut y = Vec::new();
        t.try_reserve_exact(n)
            .map_err(|_| DiffeqErrors::TrajectoryTooLarge(n))?;
        y.try_reserve_exact(n)
            .map_err(|_| DiffeqErrors::TrajectoryTooLarge(n))?;
        Ok(Self { t, y })
    }

    pub(crate) fn insert(&mut self, t: f64, x: &StateArray<N>) {
        self.t.push(t);
        self.y.push(*x);
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn initial(&self) -> Option<&StateArray<N>> {
        self.y.first()
    }

    pub fn last(&self) -> Option<&StateArray<N>> {
        self.y.last()
    }

    /// Iterates over `(t, state)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &StateArray<N>)> {
        self.t.iter().copied().zip(self.y.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_append_order() {
        let mut trajectory = Trajectory::<2>::with_capacity(3).unwrap();
        assert!(trajectory.is_empty());
        assert!(trajectory.y.capacity() >= 3);

        trajectory.insert(0.0, &StateArray::new([1.0, 2.0]));
        trajectory.insert(0.5, &StateArray::new([3.0, 4.0]));

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.initial(), Some(&StateArray::new([1.0, 2.0])));
        assert_eq!(trajectory.last(), Some(&StateArray::new([3.0, 4.0])));

        let times: Vec<f64> = trajectory.iter().map(|(t, _)| t).collect();
        assert_eq!(times, vec![0.0, 0.5]);
    }

    #[test]
    fn test_trajectory_too_large() {
        assert!(matches!(
            Trajectory::<4>::with_capacity(usize::MAX),
            Err(DiffeqErrors::TrajectoryTooLarge(usize::MAX))
        ));
    }

    #[test]
    fn test_memory_storage_is_silent() {
        let mut storage = ResultStorage::from_method(SaveMethod::Memory).unwrap();
        storage.save(&StateArray::new([1.0])).unwrap();
        assert_eq!(storage.rows(), 0);
    }
}
