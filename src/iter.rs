use core::iter::FusedIterator;
use core::ptr;

use crate::core::Sequence;
use crate::error::SequenceError;
use crate::Value;

/// Position in a `Sequence`'s elements.
///
/// Two cursors are equal when they point at the same address. A default
/// cursor is detached: it points nowhere and cannot be dereferenced.
///
/// The cursor borrows the sequence, so the sequence cannot reallocate while
/// a cursor into it is alive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor<'a> {
    elements: Option<&'a [Value]>,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(elements: &'a [Value], position: usize) -> Self {
        Self {
            elements: Some(elements),
            position,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Address of the referenced slot, null for a detached cursor.
    #[must_use]
    pub fn as_ptr(&self) -> *const Value {
        match self.elements {
            Some(elements) => elements.as_ptr().wrapping_add(self.position),
            None => ptr::null(),
        }
    }

    /// Dereferences the cursor.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidCursor` if the cursor is detached or
    /// does not point at an element (for example, at the end position).
    pub fn get(&self) -> Result<&'a Value, SequenceError> {
        self.elements
            .and_then(|elements| elements.get(self.position))
            .ok_or(SequenceError::InvalidCursor {
                position: self.position,
            })
    }

    /// Advances by one element and returns the advanced cursor.
    pub fn increment(&mut self) -> Self {
        self.position += 1;
        *self
    }

    /// Advances by one element and returns the cursor as it was before.
    pub fn post_increment(&mut self) -> Self {
        let prior = *self;
        self.position += 1;
        prior
    }

    /// Steps back by one element and returns the moved cursor.
    /// Stays put at the first element.
    pub fn decrement(&mut self) -> Self {
        self.position = self.position.saturating_sub(1);
        *self
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl Eq for Cursor<'_> {}

/// Position in a `Sequence`'s elements that allows modification
#[derive(Debug)]
pub struct CursorMut<'a> {
    elements: &'a mut [Value],
    position: usize,
}

impl<'a> CursorMut<'a> {
    pub(crate) fn new(elements: &'a mut [Value]) -> Self {
        Self {
            elements,
            position: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// # Errors
    ///
    /// Returns `SequenceError::InvalidCursor` if the cursor is past the last element.
    pub fn get(&self) -> Result<&Value, SequenceError> {
        self.elements
            .get(self.position)
            .ok_or(SequenceError::InvalidCursor {
                position: self.position,
            })
    }

    /// # Errors
    ///
    /// Returns `SequenceError::InvalidCursor` if the cursor is past the last element.
    pub fn get_mut(&mut self) -> Result<&mut Value, SequenceError> {
        let position = self.position;
        self.elements
            .get_mut(position)
            .ok_or(SequenceError::InvalidCursor { position })
    }

    pub fn increment(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    /// Returns `true` once the cursor has moved past the last element.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position >= self.elements.len()
    }
}

/// Iterator over the elements of a `Sequence`, walking a begin cursor
/// towards an end cursor.
///
/// This iterator implements `Clone`.
#[derive(Debug, Clone)]
pub struct SequenceIter<'a> {
    front: Cursor<'a>,
    back: Cursor<'a>,
}

impl<'a> SequenceIter<'a> {
    pub(crate) fn new(front: Cursor<'a>, back: Cursor<'a>) -> Self {
        Self { front, back }
    }
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.front.post_increment().get().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.position().saturating_sub(self.front.position());
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SequenceIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.decrement().get().ok()
    }
}

impl ExactSizeIterator for SequenceIter<'_> {}

impl FusedIterator for SequenceIter<'_> {}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = SequenceIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIter::new(self.begin(), self.end())
    }
}

impl<'a> IntoIterator for &'a mut Sequence {
    type Item = &'a mut Value;
    type IntoIter = core::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
