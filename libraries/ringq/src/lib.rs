#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod buffer;
mod cursor;
mod error;
mod iter;

pub use crate::buffer::RingBuffer;
pub use crate::cursor::{RingCursor, Cursor, CursorMut};
pub use crate::error::{Error, Result};
pub use crate::iter::{Iter, IterMut, IntoIter};
