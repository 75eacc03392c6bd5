
use core::iter::{Chain, FusedIterator};
use core::slice;

use crate::buffer::RingBuffer;

/// Iterator over the elements of a [`RingBuffer`], from head to tail
///
/// Created by [`RingBuffer::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    slots: Chain<slice::Iter<'a, Option<T>>, slice::Iter<'a, Option<T>>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: &'a [Option<T>], back: &'a [Option<T>], remaining: usize) -> Self {
        Self {
            slots: front.iter().chain(back.iter()),
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.slots.find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        let value = self.slots.by_ref().rev().find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some(value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Iterator over mutable references to the elements of a [`RingBuffer`], from head to tail
///
/// Created by [`RingBuffer::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(front: &'a mut [Option<T>], back: &'a mut [Option<T>], remaining: usize) -> Self {
        Self {
            slots: front.iter_mut().chain(back.iter_mut()),
            remaining,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let value = self.slots.find_map(Option::as_mut)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        let value = self.slots.by_ref().rev().find_map(Option::as_mut)?;
        self.remaining -= 1;
        Some(value)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// Owning iterator that dequeues the elements of a [`RingBuffer`] from head to tail
///
/// Created by the `IntoIterator` impl of [`RingBuffer`].
#[derive(Debug)]
pub struct IntoIter<T> {
    buffer: RingBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buffer: RingBuffer<T>) -> Self {
        Self {
            buffer,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.buffer.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.buffer.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
