use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::SequenceError;
use crate::growth::{GrowthPolicy, MAX_CAPACITY};
use crate::iter::{Cursor, CursorMut, SequenceIter};
use crate::Value;

/// A growable contiguous sequence of numbers.
///
/// Slots `[0, len)` of the buffer hold the elements, slots `[len, capacity)`
/// are spare room. The buffer is empty only while the capacity is 0.
pub struct Sequence {
    buffer: Box<[Value]>,
    len: usize,
    policy: GrowthPolicy,
}

impl Sequence {
    /// Creates a sequence from optional initial data.
    ///
    /// With `None` the sequence starts empty without a buffer. Otherwise the
    /// data is copied into a buffer sized exactly to it. The growth factor is
    /// stored as given, see [`GrowthPolicy`].
    #[must_use]
    pub fn new(data: Option<&[Value]>, growth_factor: f64) -> Self {
        let policy = GrowthPolicy::new(growth_factor);
        match data {
            Some(values) => Self {
                buffer: Box::from(values),
                len: values.len(),
                policy,
            },
            None => Self::with_policy(policy),
        }
    }

    /// Creates an empty sequence without a buffer.
    #[must_use]
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            buffer: Box::default(),
            len: 0,
            policy,
        }
    }

    #[must_use]
    pub fn with_growth_factor(growth_factor: f64) -> Self {
        Self::with_policy(GrowthPolicy::new(growth_factor))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Self::len).
    #[must_use]
    pub fn size(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the growth factor.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.policy.factor()
    }

    #[must_use]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.buffer[..self.len]
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [Value] {
        &mut self.buffer[..self.len]
    }

    /// Moves the elements into a fresh buffer of exactly `new_capacity` slots.
    /// On failure the old buffer is kept untouched.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), SequenceError> {
        log::trace!(
            "reallocating sequence buffer: capacity {} -> {}, length {}",
            self.capacity(),
            new_capacity,
            self.len
        );
        let mut buffer: Vec<Value> = Vec::new();
        if buffer.try_reserve_exact(new_capacity).is_err() {
            log::debug!("allocation of {} elements failed", new_capacity);
            return Err(SequenceError::AllocationFailed {
                requested: new_capacity,
            });
        }
        buffer.extend_from_slice(self.as_slice());
        buffer.resize(new_capacity, 0.0);
        self.buffer = buffer.into_boxed_slice();
        Ok(())
    }

    /// Makes room for at least `requested` elements using the growth policy.
    /// Existing elements keep their positions. Reallocates at most once.
    pub(crate) fn grow_to(&mut self, requested: usize) -> Result<(), SequenceError> {
        let new_capacity = self.policy.next_capacity(self.capacity(), requested)?;
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity)?;
        }
        Ok(())
    }

    /// Appends a value.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::CapacityOverflow` or `SequenceError::AllocationFailed`
    /// if the buffer cannot grow any further.
    pub fn push_back(&mut self, value: Value) -> Result<(), SequenceError> {
        self.grow_to(self.len + 1)?;
        self.insert(value, self.len)
    }

    /// Prepends a value, shifting all elements one slot to the right.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::CapacityOverflow` or `SequenceError::AllocationFailed`
    /// if the buffer cannot grow any further.
    pub fn push_front(&mut self, value: Value) -> Result<(), SequenceError> {
        self.grow_to(self.len + 1)?;
        self.insert(value, 0)
    }

    /// Inserts a value at `pos`, shifting the elements from `pos` on to the right.
    /// `pos == len()` appends.
    ///
    /// # Errors
    ///
    /// - `SequenceError::PositionOutOfRange` if `pos > len()`
    /// - `SequenceError::CapacityOverflow` or `SequenceError::AllocationFailed` if the
    ///   buffer cannot grow any further
    pub fn insert(&mut self, value: Value, pos: usize) -> Result<(), SequenceError> {
        if pos > self.len {
            return Err(SequenceError::PositionOutOfRange {
                operation: "insert value",
                position: pos,
                length: self.len,
            });
        }
        self.grow_to(self.len + 1)?;

        self.buffer.copy_within(pos..self.len, pos + 1);
        self.buffer[pos] = value;
        self.len += 1;
        Ok(())
    }

    /// Inserts all `values` at `pos`, keeping their order: afterwards
    /// `values[i]` is at `pos + i`. Grows at most once for the whole batch.
    ///
    /// # Errors
    ///
    /// - `SequenceError::EmptyBatch` if `values` is empty
    /// - `SequenceError::PositionOutOfRange` if `pos > len()`
    /// - `SequenceError::CapacityOverflow` or `SequenceError::AllocationFailed` if the
    ///   buffer cannot grow any further
    pub fn insert_slice(&mut self, values: &[Value], pos: usize) -> Result<(), SequenceError> {
        if values.is_empty() {
            return Err(SequenceError::EmptyBatch);
        }
        if pos > self.len {
            return Err(SequenceError::PositionOutOfRange {
                operation: "insert values",
                position: pos,
                length: self.len,
            });
        }
        let count = values.len();
        let new_len = self.len + count;
        self.grow_to(new_len)?;

        self.buffer.copy_within(pos..self.len, pos + count);
        self.buffer[pos..pos + count].copy_from_slice(values);
        self.len = new_len;
        Ok(())
    }

    /// Inserts the elements of `other` at `pos`, keeping their order.
    ///
    /// # Errors
    ///
    /// - `SequenceError::PositionOutOfRange` if `pos > len()`
    /// - `SequenceError::EmptyBatch` if `other` is empty
    /// - `SequenceError::CapacityOverflow` or `SequenceError::AllocationFailed` if the
    ///   buffer cannot grow any further
    pub fn insert_sequence(&mut self, other: &Sequence, pos: usize) -> Result<(), SequenceError> {
        if pos > self.len {
            return Err(SequenceError::PositionOutOfRange {
                operation: "insert sequence",
                position: pos,
                length: self.len,
            });
        }
        self.insert_slice(other.as_slice(), pos)
    }

    /// Removes up to `count` elements starting at `pos`. A span running past
    /// the end is cut at the end. The capacity is left as is.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::PositionOutOfRange` if `pos >= len()`.
    pub fn erase(&mut self, pos: usize, count: usize) -> Result<(), SequenceError> {
        if pos >= self.len {
            return Err(SequenceError::PositionOutOfRange {
                operation: "erase elements",
                position: pos,
                length: self.len,
            });
        }
        let count = count.min(self.len - pos);

        self.buffer.copy_within(pos + count..self.len, pos);
        self.len -= count;
        Ok(())
    }

    /// Removes the elements in `begin..end`.
    ///
    /// # Errors
    ///
    /// - `SequenceError::InvalidRange` unless `begin < end`
    /// - `SequenceError::PositionOutOfRange` if `begin >= len()`
    pub fn erase_between(&mut self, begin: usize, end: usize) -> Result<(), SequenceError> {
        if begin >= end {
            return Err(SequenceError::InvalidRange { begin, end });
        }
        self.erase(begin, end - begin)
    }

    /// Removes and returns the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::PositionOutOfRange` if `pos >= len()`.
    pub fn remove(&mut self, pos: usize) -> Result<Value, SequenceError> {
        let value = self
            .as_slice()
            .get(pos)
            .copied()
            .ok_or(SequenceError::PositionOutOfRange {
                operation: "erase element",
                position: pos,
                length: self.len,
            })?;
        self.erase(pos, 1)?;
        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::EmptySequence` if the sequence is empty.
    pub fn pop_back(&mut self) -> Result<Value, SequenceError> {
        if self.len == 0 {
            return Err(SequenceError::EmptySequence {
                operation: "pop back",
            });
        }
        self.remove(self.len - 1)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::EmptySequence` if the sequence is empty.
    pub fn pop_front(&mut self) -> Result<Value, SequenceError> {
        if self.len == 0 {
            return Err(SequenceError::EmptySequence {
                operation: "pop front",
            });
        }
        self.remove(0)
    }

    /// Drops all elements. The capacity is left as is.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Gets the element at `index` wrapped around the length, so any index
    /// is valid for a non-empty sequence.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::EmptySequence` if the sequence is empty.
    pub fn get(&self, index: usize) -> Result<&Value, SequenceError> {
        if self.len == 0 {
            return Err(SequenceError::EmptySequence {
                operation: "get element",
            });
        }
        Ok(&self.buffer[index % self.len])
    }

    /// Mutable form of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::EmptySequence` if the sequence is empty.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value, SequenceError> {
        if self.len == 0 {
            return Err(SequenceError::EmptySequence {
                operation: "get element",
            });
        }
        Ok(&mut self.buffer[index % self.len])
    }

    /// Returns the index of the first element equal to `value`.
    #[must_use]
    pub fn position(&self, value: Value) -> Option<usize> {
        self.as_slice().iter().position(|&element| element == value)
    }

    /// Returns the index of the first element equal to `value`, or -1.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn find(&self, value: Value) -> i64 {
        self.position(value).map_or(-1, |index| index as i64)
    }

    /// Grows the buffer to exactly `capacity` slots if it is smaller.
    ///
    /// # Errors
    ///
    /// - `SequenceError::CapacityOverflow` if `capacity` exceeds the maximum
    /// - `SequenceError::AllocationFailed` if the allocator cannot provide the buffer
    pub fn reserve(&mut self, capacity: usize) -> Result<(), SequenceError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        if capacity > MAX_CAPACITY {
            return Err(SequenceError::CapacityOverflow {
                requested: capacity,
                max: MAX_CAPACITY,
            });
        }
        self.reallocate(capacity)
    }

    /// Drops the spare slots so that the capacity equals the length.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::AllocationFailed` if the allocator cannot provide the buffer.
    pub fn shrink_to_fit(&mut self) -> Result<(), SequenceError> {
        if self.len < self.capacity() {
            self.reallocate(self.len)?;
        }
        Ok(())
    }

    /// Moves the contents out, leaving `self` empty and without a buffer.
    /// The growth policy stays with both.
    #[must_use]
    pub fn take(&mut self) -> Sequence {
        core::mem::replace(self, Self::with_policy(self.policy))
    }

    /// Returns a cursor at the first element.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Returns a cursor one past the last element, where
    /// [`begin`](Self::begin) ends up after `len()` increments.
    #[must_use]
    pub fn end(&self) -> Cursor<'_> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Returns a cursor at the first element that allows modification.
    #[must_use]
    pub fn begin_mut(&mut self) -> CursorMut<'_> {
        CursorMut::new(self.as_mut_slice())
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> SequenceIter<'_> {
        self.into_iter()
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Value> {
        self.as_mut_slice().iter_mut()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }
}

impl Clone for Sequence {
    /// Copies the elements into a buffer sized exactly to them.
    fn clone(&self) -> Self {
        Self {
            buffer: Box::from(self.as_slice()),
            len: self.len,
            policy: self.policy,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.buffer = Box::from(source.as_slice());
        self.len = source.len;
        self.policy = source.policy;
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("elements", &self.as_slice())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("growth_factor", &self.policy.factor())
            .finish()
    }
}

impl Index<usize> for Sequence {
    type Output = Value;

    /// Wrap-around access, see [`Sequence::get`].
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    fn index(&self, index: usize) -> &Value {
        assert!(self.len > 0, "Cannot get element: the sequence is empty");
        &self.buffer[index % self.len]
    }
}

impl IndexMut<usize> for Sequence {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        assert!(self.len > 0, "Cannot get element: the sequence is empty");
        &mut self.buffer[index % self.len]
    }
}

impl From<&[Value]> for Sequence {
    fn from(values: &[Value]) -> Self {
        Self::new(Some(values), GrowthPolicy::default().factor())
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(values: Vec<Value>) -> Self {
        let len = values.len();
        Self {
            buffer: values.into_boxed_slice(),
            len,
            policy: GrowthPolicy::default(),
        }
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Value> for Sequence {
    #[allow(clippy::expect_used)]
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value).expect("capacity overflow");
        }
    }
}

impl<'a> Extend<&'a Value> for Sequence {
    fn extend<I: IntoIterator<Item = &'a Value>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<Value> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}
