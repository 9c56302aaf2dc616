use core::ops::{Deref, DerefMut};

use rancor::{fail, Source};

use crate::{
    error::BufferOverflow,
    stream::{Positional, Reader, Writer},
};

/// Wraps a byte buffer and equips it with [`Writer`].
///
/// Common uses include encoding in `#![no_std]` environments and encoding
/// small values without allocating.
///
/// # Examples
/// ```
/// use twoway::{api::to_bytes_in, rancor::Error, stream::Buffer};
///
/// let mut bytes = [0u8; 16];
/// let buffer =
///     to_bytes_in::<_, _, Error>(&mut 7u32, Buffer::from(&mut bytes))
///         .expect("failed to encode value");
/// assert_eq!(&*buffer, &7u32.to_ne_bytes());
/// ```
#[derive(Debug)]
pub struct Buffer<'a> {
    bytes: &'a mut [u8],
    len: usize,
}

impl<'a, const N: usize> From<&'a mut [u8; N]> for Buffer<'a> {
    fn from(bytes: &'a mut [u8; N]) -> Self {
        Self { bytes, len: 0 }
    }
}

impl<'a> From<&'a mut [u8]> for Buffer<'a> {
    fn from(bytes: &'a mut [u8]) -> Self {
        Self { bytes, len: 0 }
    }
}

impl Buffer<'_> {
    /// Returns the total number of bytes the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }
}

impl Deref for Buffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes[..self.len]
    }
}

impl DerefMut for Buffer<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.bytes[..self.len]
    }
}

impl Positional for Buffer<'_> {
    #[inline]
    fn pos(&self) -> usize {
        self.len
    }
}

impl<E: Source> Writer<E> for Buffer<'_> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), E> {
        if bytes.len() > self.bytes.len() - self.len {
            fail!(BufferOverflow {
                write_len: bytes.len(),
                cap: self.bytes.len(),
                len: self.len,
            });
        } else {
            self.bytes[self.len..self.len + bytes.len()].copy_from_slice(bytes);
            self.len += bytes.len();
            Ok(())
        }
    }
}

/// Wraps a byte slice and equips it with [`Reader`].
///
/// # Examples
/// ```
/// use twoway::{
///     api::from_bytes_into, rancor::Error, stream::SliceReader,
/// };
///
/// let bytes = [1u8, 0, 0, 0, 0xff];
/// let mut value = 0u8;
/// let rest = from_bytes_into::<_, Error>(&mut value, &bytes).unwrap();
/// assert_eq!(value, 1);
/// assert_eq!(rest.len(), 4);
///
/// let reader = SliceReader::new(rest);
/// assert_eq!(reader.remaining().len(), 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SliceReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    /// Creates a reader positioned at the start of `bytes`.
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Returns the bytes that have not been read yet.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Returns whether every byte has been read.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

impl<'a> From<&'a [u8]> for SliceReader<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl Positional for SliceReader<'_> {
    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }
}

impl<E> Reader<E> for SliceReader<'_> {
    #[inline]
    fn read(&mut self, out: &mut [u8]) -> Result<usize, E> {
        let rest = self.remaining();
        let len = out.len().min(rest.len());
        out[..len].copy_from_slice(&rest[..len]);
        self.pos += len;
        Ok(len)
    }
}
