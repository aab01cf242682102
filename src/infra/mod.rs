//! Инфраструктура вокруг оценщика: источники случайности для тасования колоды.

pub mod rng;

pub use rng::{DeterministicRng, SystemRng};

/// RNG интерфейс для колоды.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
