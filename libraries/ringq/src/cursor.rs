
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign};
use core::ptr;

use crate::buffer::RingBuffer;

/// A position inside a [`RingBuffer`]
///
/// The position is stored as a logical offset from the head, between 0 and the number of
/// stored elements inclusive.  The largest offset is the *end* position, one past the tail,
/// which has no element.  Stepping treats the positions as a ring, with the end position
/// sitting between the tail and the head, so stepping forward from the end returns to the
/// head, and stepping backward from the head lands on the end.
///
/// The buffer handle `B` decides what the cursor may do:  `&RingBuffer<T>` gives the
/// read-only [`Cursor`], and `&mut RingBuffer<T>` gives the [`CursorMut`], which can
/// also modify the element it points to.  Because the cursor borrows its buffer, the buffer
/// cannot be enqueued into or dequeued from while the cursor exists.
///
/// A *detached* cursor, made with [`RingCursor::detached`] or `Default`, has no buffer.
/// It has no element, doesn't move, and is only equal to other detached cursors.
#[derive(Copy, Clone, Debug)]
pub struct RingCursor<B> {
    buffer: Option<B>,
    offset: usize,
}

/// A read-only cursor
pub type Cursor<'a, T> = RingCursor<&'a RingBuffer<T>>;

/// A cursor that can modify the element it points to
pub type CursorMut<'a, T> = RingCursor<&'a mut RingBuffer<T>>;

impl<B> RingCursor<B> {
    /// Returns a cursor that isn't attached to any buffer
    pub const fn detached() -> Self {
        Self {
            buffer: None,
            offset: 0,
        }
    }

    pub(crate) fn new(buffer: B, offset: usize) -> Self {
        Self {
            buffer: Some(buffer),
            offset,
        }
    }

    /// Returns true if the cursor isn't attached to any buffer
    pub fn is_detached(&self) -> bool {
        self.buffer.is_none()
    }

    /// Returns the logical offset from the head
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<B> Default for RingCursor<B> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<T, B> RingCursor<B>
where
    B: Deref<Target = RingBuffer<T>>,
{
    /// Returns the buffer the cursor points into
    pub fn buffer(&self) -> Option<&RingBuffer<T>> {
        self.buffer.as_deref()
    }

    /// Returns true if the cursor is one past the tail
    pub fn is_end(&self) -> bool {
        self.buffer.is_some() && self.offset == self.occupied()
    }

    /// Returns the element under the cursor, or `None` at the end position
    pub fn get(&self) -> Option<&T> {
        self.buffer.as_deref()?.get(self.offset)
    }

    /// Returns the element `delta` places away from the cursor
    ///
    /// `delta` is taken modulo the number of stored elements, so negative values count
    /// backwards from the cursor and values larger than the buffer wrap around it.  The end
    /// position counts as the head, so any non-zero `delta` from the end finds an element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringq::RingBuffer;
    ///
    /// let buffer = RingBuffer::<i32>::from_values(4, [1, 2, 3, 4])?;
    /// let cursor = buffer.begin();
    /// assert_eq!(cursor.peek(1), Some(&2));
    /// assert_eq!(cursor.peek(-1), Some(&4));
    /// assert_eq!(cursor.peek(9), Some(&2));
    /// # Ok::<(), ringq::Error>(())
    /// ```
    pub fn peek(&self, delta: isize) -> Option<&T> {
        let offset = self.target(delta, true)?;
        self.buffer.as_deref()?.get(offset)
    }

    /// Steps forward by one position, wrapping from the end back to the head
    pub fn move_next(&mut self) {
        if self.buffer.is_some() {
            self.offset = (self.offset + 1) % (self.occupied() + 1);
        }
    }

    /// Steps backward by one position, wrapping from the head to the end
    pub fn move_prev(&mut self) {
        if self.buffer.is_some() {
            let positions = self.occupied() + 1;
            self.offset = (self.offset + positions - 1) % positions;
        }
    }

    /// Returns the number of positions from `other` to this cursor
    ///
    /// Returns `None` if the cursors point into different buffers.
    pub fn distance_from<C>(&self, other: &RingCursor<C>) -> Option<isize>
    where
        C: Deref<Target = RingBuffer<T>>,
    {
        if !self.same_buffer(other) {
            return None;
        }
        Some(self.offset as isize - other.offset as isize)
    }

    fn occupied(&self) -> usize {
        self.buffer.as_deref().map_or(0, RingBuffer::len)
    }

    fn same_buffer<C>(&self, other: &RingCursor<C>) -> bool
    where
        C: Deref<Target = RingBuffer<T>>,
    {
        match (self.buffer.as_deref(), other.buffer.as_deref()) {
            (Some(ours), Some(theirs)) => ptr::eq(ours, theirs),
            (None, None) => true,
            _ => false,
        }
    }

    // Any non-zero delta lands on an element, so the end position is only a target when
    // the cursor doesn't move at all
    fn target(&self, delta: isize, forward: bool) -> Option<usize> {
        let occupied = self.occupied();
        if occupied == 0 {
            return None;
        }
        if delta == 0 {
            return Some(self.offset);
        }

        let step = delta.rem_euclid(occupied as isize) as usize;
        let step = if forward { step } else { (occupied - step) % occupied };
        Some((self.offset % occupied + step) % occupied)
    }
}

impl<T, B> RingCursor<B>
where
    B: DerefMut<Target = RingBuffer<T>>,
{
    /// Returns the element under the cursor so it can be modified in place
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let offset = self.offset;
        self.buffer.as_deref_mut()?.get_mut(offset)
    }

    /// Mutable form of [`peek`](RingCursor::peek)
    pub fn peek_mut(&mut self, delta: isize) -> Option<&mut T> {
        let offset = self.target(delta, true)?;
        self.buffer.as_deref_mut()?.get_mut(offset)
    }
}

impl<'a, T> RingCursor<&'a mut RingBuffer<T>> {
    /// Returns a read-only cursor at the same position
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        RingCursor {
            buffer: self.buffer.as_deref(),
            offset: self.offset,
        }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        RingCursor {
            buffer: cursor.buffer.map(|buffer| &*buffer),
            offset: cursor.offset,
        }
    }
}

impl<T, B, C> PartialEq<RingCursor<C>> for RingCursor<B>
where
    B: Deref<Target = RingBuffer<T>>,
    C: Deref<Target = RingBuffer<T>>,
{
    fn eq(&self, other: &RingCursor<C>) -> bool {
        self.same_buffer(other) && self.offset == other.offset
    }
}

impl<T, B> Eq for RingCursor<B> where B: Deref<Target = RingBuffer<T>> {}

/// Cursors over the same buffer are ordered from head to end.  Cursors over different
/// buffers are not comparable.
impl<T, B, C> PartialOrd<RingCursor<C>> for RingCursor<B>
where
    B: Deref<Target = RingBuffer<T>>,
    C: Deref<Target = RingBuffer<T>>,
{
    fn partial_cmp(&self, other: &RingCursor<C>) -> Option<Ordering> {
        if self.same_buffer(other) {
            Some(self.offset.cmp(&other.offset))
        } else {
            None
        }
    }
}

impl<T, B> AddAssign<isize> for RingCursor<B>
where
    B: Deref<Target = RingBuffer<T>>,
{
    fn add_assign(&mut self, delta: isize) {
        if let Some(offset) = self.target(delta, true) {
            self.offset = offset;
        }
    }
}

impl<T, B> SubAssign<isize> for RingCursor<B>
where
    B: Deref<Target = RingBuffer<T>>,
{
    fn sub_assign(&mut self, delta: isize) {
        if let Some(offset) = self.target(delta, false) {
            self.offset = offset;
        }
    }
}

impl<T, B> Add<isize> for RingCursor<B>
where
    B: Deref<Target = RingBuffer<T>>,
{
    type Output = Self;

    fn add(mut self, delta: isize) -> Self {
        self += delta;
        self
    }
}

impl<T, B> Sub<isize> for RingCursor<B>
where
    B: Deref<Target = RingBuffer<T>>,
{
    type Output = Self;

    fn sub(mut self, delta: isize) -> Self {
        self -= delta;
        self
    }
}
