//! Byte sinks and sources for engines.
//!
//! An [`Encoder`](crate::engine::Encoder) writes to any [`Writer`] and a
//! [`Decoder`](crate::engine::Decoder) reads from any [`Reader`]. Both keep
//! track of how many bytes they have moved through [`Positional`].

mod alloc;
mod core;
#[cfg(feature = "std")]
mod std;

use rancor::Strategy;

pub use self::core::*;
#[cfg(feature = "std")]
pub use self::std::*;

/// A stream that knows its current position.
pub trait Positional {
    /// Returns the number of bytes moved through the stream so far.
    fn pos(&self) -> usize;
}

impl<T> Positional for &T
where
    T: Positional + ?Sized,
{
    fn pos(&self) -> usize {
        T::pos(*self)
    }
}

impl<T> Positional for &mut T
where
    T: Positional + ?Sized,
{
    fn pos(&self) -> usize {
        T::pos(*self)
    }
}

impl<T, E> Positional for Strategy<T, E>
where
    T: Positional + ?Sized,
{
    fn pos(&self) -> usize {
        T::pos(self)
    }
}

/// A type that writes bytes to some output.
///
/// Writes are all-or-nothing: a writer that cannot accept every byte must
/// return an error rather than write a prefix.
///
/// A type that is [`Write`](::std::io::Write) can be wrapped in an
/// [`IoWriter`] to equip it with `Writer`.
pub trait Writer<E>: Positional {
    /// Attempts to write the given bytes.
    fn write(&mut self, bytes: &[u8]) -> Result<(), E>;
}

impl<T, E> Writer<E> for &mut T
where
    T: Writer<E> + ?Sized,
{
    fn write(&mut self, bytes: &[u8]) -> Result<(), E> {
        T::write(*self, bytes)
    }
}

/// A type that reads bytes from some input.
///
/// A type that is [`Read`](::std::io::Read) can be wrapped in an [`IoReader`]
/// to equip it with `Reader`.
pub trait Reader<E>: Positional {
    /// Reads bytes into `out` and returns how many were read.
    ///
    /// Fewer bytes than `out.len()` are returned only when the input has run
    /// out.
    fn read(&mut self, out: &mut [u8]) -> Result<usize, E>;
}

impl<T, E> Reader<E> for &mut T
where
    T: Reader<E> + ?Sized,
{
    fn read(&mut self, out: &mut [u8]) -> Result<usize, E> {
        T::read(*self, out)
    }
}

#[cfg(test)]
mod tests {
    use rancor::Error;

    use crate::{
        alloc::vec::Vec,
        stream::{Positional, Reader, SliceReader, Writer},
    };

    #[test]
    fn reusable_writer() {
        let mut writer = Vec::<u8>::with_capacity(16);

        Writer::<Error>::write(&mut writer, &42u32.to_ne_bytes()).unwrap();
        assert_eq!(&writer[..], &42u32.to_ne_bytes());
        writer.clear();

        Writer::<Error>::write(&mut writer, &1337u16.to_ne_bytes()).unwrap();
        assert_eq!(&writer[..], &1337u16.to_ne_bytes());
        assert_eq!(writer.pos(), 2);
    }

    #[test]
    fn reader_through_reference() {
        let bytes = [1, 2, 3];
        let mut reader = SliceReader::new(&bytes);
        let mut by_ref = &mut reader;

        let mut out = [0; 2];
        assert_eq!(Reader::<Error>::read(&mut by_ref, &mut out).unwrap(), 2);
        assert_eq!(out, [1, 2]);
        assert_eq!(by_ref.pos(), 2);
        assert_eq!(reader.remaining(), &[3]);
    }
}
