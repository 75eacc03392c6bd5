
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::cursor::{Cursor, CursorMut, RingCursor};
use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter, IterMut};

const EMPTY_ENQUEUE: &str = "cannot add an element to a buffer with a capacity of 0";
const EMPTY_DEQUEUE: &str = "cannot remove an element from an empty buffer";
const EMPTY_HEAD: &str = "cannot get the head of an empty buffer";
const EMPTY_TAIL: &str = "cannot get the tail of an empty buffer";
const EMPTY_LOAD: &str = "cannot load values into a buffer with a capacity of 0";

/// A fixed-capacity circular queue
///
/// The backing store is allocated once, when the buffer is created, and its capacity never
/// changes afterwards.  Elements are enqueued at the tail and dequeued from the head.  When
/// the buffer is full, [`enqueue`](Self::enqueue) overwrites the oldest element, so the
/// buffer always holds the most recent `capacity` values in insertion order.
///
/// Positions are either *logical*, counted from the head (index 0 is the oldest element),
/// or *physical*, a slot in the backing store.  Only the rendering and
/// [`head_index`](Self::head_index)/[`tail_index`](Self::tail_index) expose physical positions.
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: Option<usize>,
    occupied: usize,
}

fn checked_capacity(capacity: isize) -> Result<usize> {
    usize::try_from(capacity).map_err(|_| Error::NegativeCapacity(capacity))
}

fn allocate_slots<T>(capacity: usize) -> Result<Vec<Option<T>>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity).map_err(|_| Error::Allocation(capacity))?;
    slots.resize_with(capacity, || None);
    Ok(slots)
}

impl<T> RingBuffer<T> {
    /// Creates a buffer with a capacity of 0
    ///
    /// Nothing can be enqueued into it, but it can be the target of
    /// [`clone_from`](Clone::clone_from).
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            occupied: 0,
        }
    }

    /// Creates an empty buffer with room for exactly `capacity` elements
    ///
    /// # Examples
    ///
    /// ```
    /// use ringq::{Error, RingBuffer};
    ///
    /// let buffer = RingBuffer::<i32>::with_capacity(5)?;
    /// assert_eq!(buffer.capacity(), 5);
    /// assert!(buffer.is_empty());
    ///
    /// assert_eq!(RingBuffer::<i32>::with_capacity(-1).err(), Some(Error::NegativeCapacity(-1)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        let capacity = checked_capacity(capacity)?;
        let slots = allocate_slots(capacity)?;
        log::debug!("ringq: created a buffer with a capacity of {}", capacity);
        Ok(Self {
            slots,
            head: None,
            occupied: 0,
        })
    }

    /// Creates a buffer with room for `capacity` elements and enqueues every value into it
    ///
    /// Values go through [`enqueue`](Self::enqueue), so if there are more values than
    /// slots, only the last `capacity` of them remain.  A capacity of 0 is rejected before
    /// the values are looked at.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringq::RingBuffer;
    ///
    /// let buffer = RingBuffer::<i32>::from_values(2, [10, 30, 60, 40, -20])?;
    /// assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![40, -20]);
    /// # Ok::<(), ringq::Error>(())
    /// ```
    pub fn from_values<I>(capacity: isize, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let capacity = checked_capacity(capacity)?;
        if capacity == 0 {
            return Err(Error::empty(EMPTY_LOAD));
        }

        let mut buffer = Self {
            slots: allocate_slots(capacity)?,
            head: None,
            occupied: 0,
        };
        for value in values {
            buffer.push_overwrite(value.into());
        }
        log::debug!("ringq: loaded {} values into a buffer with a capacity of {}", buffer.occupied, capacity);
        Ok(buffer)
    }

    /// Appends a value at the tail
    ///
    /// If the buffer is full, the element at the head is dropped and the head moves forward
    /// by one, leaving the number of stored elements unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] if the capacity is 0
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.slots.is_empty() {
            return Err(Error::empty(EMPTY_ENQUEUE));
        }
        self.push_overwrite(value);
        Ok(())
    }

    /// Enqueues every value in order
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] if the capacity is 0, before any value is consumed
    pub fn enqueue_all<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        if self.slots.is_empty() {
            return Err(Error::empty(EMPTY_ENQUEUE));
        }
        for value in values {
            self.push_overwrite(value);
        }
        Ok(())
    }

    /// Removes and returns the element at the head
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] if no element is stored
    pub fn dequeue(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::empty(EMPTY_DEQUEUE))?;
        let value = self.slots[head].take().ok_or(Error::empty(EMPTY_DEQUEUE))?;

        self.occupied -= 1;
        self.head = if self.occupied == 0 {
            None
        } else {
            Some((head + 1) % self.slots.len())
        };
        Ok(value)
    }

    /// Returns the oldest element
    pub fn head(&self) -> Result<&T> {
        self.get(0).ok_or(Error::empty(EMPTY_HEAD))
    }

    /// Returns the oldest element so it can be overwritten in place
    pub fn head_mut(&mut self) -> Result<&mut T> {
        self.get_mut(0).ok_or(Error::empty(EMPTY_HEAD))
    }

    /// Returns the most recently enqueued element
    pub fn tail(&self) -> Result<&T> {
        let last = self.occupied.checked_sub(1).ok_or(Error::empty(EMPTY_TAIL))?;
        self.get(last).ok_or(Error::empty(EMPTY_TAIL))
    }

    /// Returns the most recently enqueued element so it can be overwritten in place
    pub fn tail_mut(&mut self) -> Result<&mut T> {
        let last = self.occupied.checked_sub(1).ok_or(Error::empty(EMPTY_TAIL))?;
        self.get_mut(last).ok_or(Error::empty(EMPTY_TAIL))
    }

    /// Drops every element, keeping the backing store for reuse
    pub fn clear(&mut self) {
        if self.occupied > 0 {
            log::trace!("ringq: clearing {} elements", self.occupied);
        }
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = None;
        self.occupied = 0;
    }

    /// Returns true if every slot holds an element
    ///
    /// A buffer with a capacity of 0 is always full.
    pub fn is_full(&self) -> bool {
        self.occupied == self.slots.len()
    }

    /// Returns true if no element is stored
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Returns the number of slots in the backing store
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of elements currently stored
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Same as [`occupied_count`](Self::occupied_count)
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Returns the backing-store slot of the head, or `None` when empty
    pub fn head_index(&self) -> Option<usize> {
        self.head
    }

    /// Returns the backing-store slot of the tail, or `None` when empty
    pub fn tail_index(&self) -> Option<usize> {
        self.head.map(|head| (head + self.occupied - 1) % self.slots.len())
    }

    /// Returns the element at the logical `index`, where 0 is the head
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is negative or not below the number
    /// of stored elements
    pub fn at(&self, index: isize) -> Result<&T> {
        let len = self.occupied;
        usize::try_from(index)
            .ok()
            .and_then(|offset| self.get(offset))
            .ok_or(Error::out_of_range(index, len))
    }

    /// Mutable form of [`at`](Self::at)
    pub fn at_mut(&mut self, index: isize) -> Result<&mut T> {
        let len = self.occupied;
        usize::try_from(index)
            .ok()
            .and_then(|offset| self.get_mut(offset))
            .ok_or(Error::out_of_range(index, len))
    }

    /// Returns the element at the logical `index`, or `None` if there is no such element
    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = self.physical(index)?;
        self.slots[slot].as_ref()
    }

    /// Mutable form of [`get`](Self::get)
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.physical(index)?;
        self.slots[slot].as_mut()
    }

    /// Returns a read-only cursor at the head
    ///
    /// For an empty buffer this is the same position as [`end`](Self::end).
    pub fn begin(&self) -> Cursor<'_, T> {
        RingCursor::new(self, 0)
    }

    /// Returns a read-only cursor one past the tail
    pub fn end(&self) -> Cursor<'_, T> {
        RingCursor::new(self, self.occupied)
    }

    /// Returns a mutable cursor at the head
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        RingCursor::new(self, 0)
    }

    /// Returns a mutable cursor one past the tail
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let occupied = self.occupied;
        RingCursor::new(self, occupied)
    }

    /// Returns an iterator over the elements from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter::new(front, back, self.occupied)
    }

    /// Returns an iterator that allows modifying each element, from head to tail
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let occupied = self.occupied;
        let (front, back) = self.as_mut_slices();
        IterMut::new(front, back, occupied)
    }

    /// Like [`Clone::clone`], but reports a failed reservation instead of aborting
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let slots = allocate_slots(self.capacity())?;
        Ok(Self::copied_into(slots, self))
    }

    // The slots must be empty and as many as the source's capacity
    fn copied_into(slots: Vec<Option<T>>, source: &Self) -> Self
    where
        T: Clone,
    {
        let mut copy = Self {
            slots,
            head: None,
            occupied: 0,
        };
        copy.replay(source);
        log::debug!("ringq: copied a buffer of {} elements", copy.occupied);
        copy
    }

    fn physical(&self, offset: usize) -> Option<usize> {
        if offset >= self.occupied {
            return None;
        }
        self.head.map(|head| (head + offset) % self.slots.len())
    }

    // The capacity must be non-zero
    fn push_overwrite(&mut self, value: T) {
        let capacity = self.slots.len();
        match self.head {
            None => {
                self.slots[0] = Some(value);
                self.head = Some(0);
                self.occupied = 1;
            },
            Some(head) if self.occupied == capacity => {
                // the slot after the tail is the head
                log::trace!("ringq: buffer is full, overwriting the oldest element in slot {}", head);
                self.slots[head] = Some(value);
                self.head = Some((head + 1) % capacity);
            },
            Some(head) => {
                self.slots[(head + self.occupied) % capacity] = Some(value);
                self.occupied += 1;
            },
        }
    }

    fn replay(&mut self, source: &Self)
    where
        T: Clone,
    {
        for value in source.iter() {
            self.push_overwrite(value.clone());
        }
    }

    /// Splits the occupied slots into the run from the head to the end of the backing
    /// store, and the run that wrapped around to its start
    fn as_slices(&self) -> (&[Option<T>], &[Option<T>]) {
        let head = match self.head {
            Some(head) => head,
            None => return (&[], &[]),
        };

        let end = head + self.occupied;
        if end <= self.slots.len() {
            (&self.slots[head..end], &[])
        } else {
            let (wrapped, front) = self.slots.split_at(head);
            (front, &wrapped[..end - self.slots.len()])
        }
    }

    fn as_mut_slices(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let head = match self.head {
            Some(head) => head,
            None => return (&mut [], &mut []),
        };

        let capacity = self.slots.len();
        let end = head + self.occupied;
        if end <= capacity {
            (&mut self.slots[head..end], &mut [])
        } else {
            let (wrapped, front) = self.slots.split_at_mut(head);
            (front, &mut wrapped[..end - capacity])
        }
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.capacity());
        slots.resize_with(self.capacity(), || None);
        Self::copied_into(slots, self)
    }

    fn clone_from(&mut self, source: &Self) {
        if self.capacity() != source.capacity() {
            *self = source.clone();
            return;
        }
        self.clear();
        self.replay(source);
    }
}

impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T> FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let values: Vec<T> = values.into_iter().collect();

        let mut buffer = Self {
            slots: values.iter().map(|_| None).collect(),
            head: None,
            occupied: 0,
        };
        for value in values {
            buffer.push_overwrite(value);
        }
        buffer
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.occupied;
        match self.get(index) {
            Some(value) => value,
            None => panic!("{}", Error::out_of_range(index as isize, len)),
        }
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.occupied;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", Error::out_of_range(index as isize, len)),
        }
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.head_index(), self.head(), self.tail_index(), self.tail()) {
            (Some(head), Ok(first), Some(tail), Ok(last)) => {
                writeln!(f, "Head: {} - value: [{}]", head, first)?;
                writeln!(f, "Tail: {} - value: [{}]", tail, last)?;
                writeln!(f, "Size: {}", self.capacity())?;
                writeln!(f, "Stored elements: {}", self.occupied)?;
                write!(f, "[ ")?;
                for value in self.iter() {
                    write!(f, "{} ", value)?;
                }
                for _ in self.occupied..self.capacity() {
                    write!(f, "# ")?;
                }
                write!(f, "]")
            },
            _ => write!(f, "[]"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("occupied", &self.occupied)
            .field("head", &self.head)
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
