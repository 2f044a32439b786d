use crate::error::SequenceError;
use crate::Value;

/// Growth factor used when none is given.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Largest number of elements a buffer may hold.
pub const MAX_CAPACITY: usize = isize::MAX as usize / core::mem::size_of::<Value>();

/// Controls how a `Sequence` expands its capacity when it runs out of room.
///
/// The factor is stored as given. A factor that cannot expand a capacity
/// (anything `<= 1`, negative or NaN included) is not rejected; growth then
/// proceeds linearly, one slot at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    factor: f64,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_GROWTH_FACTOR)
    }
}

impl GrowthPolicy {
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns `true` if multiplying a capacity by the factor can enlarge it.
    #[must_use]
    pub fn is_expansive(&self) -> bool {
        self.factor > 1.0
    }

    /// Capacity seeded when growing a sequence that has no buffer yet:
    /// the factor truncated to an element count.
    #[must_use]
    pub fn initial_capacity(&self) -> usize {
        // `as` saturates: negative and NaN become 0, huge values become usize::MAX
        (self.factor as usize).min(MAX_CAPACITY)
    }

    fn scale(&self, capacity: usize) -> usize {
        ((capacity as f64 * self.factor) as usize).min(MAX_CAPACITY)
    }

    /// Computes the capacity a sequence with `current` slots must grow to so
    /// that it holds at least `requested` elements.
    ///
    /// Starting from `current` (or from [`initial_capacity`](Self::initial_capacity)
    /// when `current` is 0), the capacity is multiplied by the factor until it
    /// reaches `requested`. Whenever multiplying does not increase the capacity,
    /// it is incremented by one instead, so the computation always terminates.
    ///
    /// Returns `current` unchanged if it already satisfies `requested`.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::CapacityOverflow` if `requested` exceeds [`MAX_CAPACITY`].
    pub fn next_capacity(&self, current: usize, requested: usize) -> Result<usize, SequenceError> {
        if requested <= current {
            return Ok(current);
        }
        if requested > MAX_CAPACITY {
            return Err(SequenceError::CapacityOverflow {
                requested,
                max: MAX_CAPACITY,
            });
        }

        let mut capacity = if current == 0 {
            self.initial_capacity()
        } else {
            current
        };
        let mut fell_back = false;
        while capacity < requested {
            let candidate = self.scale(capacity);
            if candidate > capacity {
                capacity = candidate;
            } else {
                capacity += 1;
                fell_back = true;
            }
        }

        if fell_back {
            log::debug!(
                "growth factor {} did not expand capacity, stepped linearly to {}",
                self.factor,
                capacity
            );
        }
        Ok(capacity)
    }
}
