use std::fmt::Debug;

use rand::Rng;

/// Source of uniformly distributed integers, inclusive on both bounds.
///
/// The model draws every random number through this trait, which is what
/// makes generation substitutable for testing: plug in a deterministic
/// source and the whole run is reproducible.
pub trait RandomSource: Debug {
	/// Returns a number in `[min, max]`, both bounds included.
	fn uniform_int(&mut self, min: usize, max: usize) -> usize;
}

/// Production random source backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
	fn uniform_int(&mut self, min: usize, max: usize) -> usize {
		rand::rng().random_range(min..=max)
	}
}

/// Deterministic source replaying a programmed sequence of values.
///
/// Returns the programmed values in order and starts over from the first
/// one once the last has been consumed. Bounds passed to `uniform_int`
/// are ignored; callers are expected to program values that make sense
/// for the draws they want to steer.
///
/// # Notes
/// - An empty sequence always yields `min`.
#[derive(Debug, Clone)]
pub struct CyclingRandom {
	values: Vec<usize>,
	cursor: usize,
}

impl CyclingRandom {
	/// Creates a source replaying `values` in order, wrapping around.
	pub fn new(values: Vec<usize>) -> Self {
		Self { values, cursor: 0 }
	}
}

impl RandomSource for CyclingRandom {
	fn uniform_int(&mut self, min: usize, _max: usize) -> usize {
		match self.values.get(self.cursor) {
			Some(&value) => {
				self.cursor = (self.cursor + 1) % self.values.len();
				value
			}
			// No programmed values at all
			None => min,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn thread_random_respects_bounds() {
		let mut rng = ThreadRandom;
		assert_eq!(rng.uniform_int(3, 3), 3);
		for _ in 0..100 {
			let value = rng.uniform_int(2, 7);
			assert!((2..=7).contains(&value));
		}
	}

	#[test]
	fn cycling_random_replays_and_wraps() {
		let mut rng = CyclingRandom::new(vec![5, 7]);
		assert_eq!(rng.uniform_int(0, 100), 5);
		assert_eq!(rng.uniform_int(0, 100), 7);
		assert_eq!(rng.uniform_int(0, 100), 5);
		assert_eq!(rng.uniform_int(0, 100), 7);
	}

	#[test]
	fn cycling_random_without_values_returns_min() {
		let mut rng = CyclingRandom::new(Vec::new());
		assert_eq!(rng.uniform_int(4, 9), 4);
	}
}
