
/// Errors raised by [`RingBuffer`](crate::RingBuffer) operations
///
/// Every variant is a precondition failure: retrying the same operation without changing
/// the buffer or the arguments fails the same way.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A buffer was requested with a capacity below zero
    #[error("cannot create a buffer with a negative capacity ({0})")]
    NegativeCapacity(isize),

    /// The operation needs at least one element, or at least one slot, and there is none
    #[error("{0}")]
    EmptyBuffer(&'static str),

    /// Positional access outside of the stored elements
    #[error("index {index} is out of range for a buffer holding {len} elements")]
    IndexOutOfRange {
        /// The index that was requested
        index: isize,
        /// The number of elements stored at the time of the request
        len: usize,
    },

    /// The backing store could not be reserved
    #[error("unable to allocate a backing store of {0} slots")]
    Allocation(usize),
}

impl Error {
    pub(crate) const fn empty(msg: &'static str) -> Error {
        Error::EmptyBuffer(msg)
    }

    pub(crate) const fn out_of_range(index: isize, len: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len,
        }
    }

    /// Returns the message describing which precondition failed
    pub fn msg(&self) -> String {
        self.to_string()
    }
}

/// Result type returned by fallible buffer operations
pub type Result<T> = core::result::Result<T, Error>;
