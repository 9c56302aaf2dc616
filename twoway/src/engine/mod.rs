//! Encoders, decoders, and the strategies they run.
//!
//! An engine is a stream paired with a direction. [`Encoder`] wraps a
//! [`Writer`] and [`Decoder`] wraps a [`Reader`]; wrapping either in a
//! [`Strategy`] fixes the error type and makes it an [`Engine`].

pub mod strategy;

use core::fmt;

use rancor::{fail, Source, Strategy};

use crate::{
    error::Truncated,
    stream::{Positional, Reader, Writer},
    Direction, Engine,
};

/// Limits enforced by an engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    max_len: Option<u32>,
}

impl Config {
    /// Returns a configuration with no limits.
    #[inline]
    pub const fn new() -> Self {
        Self { max_len: None }
    }

    /// Limits the length prefixes a decoder accepts.
    ///
    /// Any container whose decoded length exceeds `max_len` fails with
    /// [`LengthLimitExceeded`](crate::error::LengthLimitExceeded) before any of
    /// its elements are decoded.
    #[inline]
    pub const fn with_max_len(mut self, max_len: u32) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Returns the maximum accepted length prefix, if any.
    #[inline]
    pub const fn max_len(&self) -> Option<u32> {
        self.max_len
    }
}

/// Writes values to a [`Writer`].
pub struct Encoder<W> {
    writer: W,
    config: Config,
}

impl<W> Encoder<W> {
    /// Creates an encoder with the default configuration.
    #[inline]
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, Config::new())
    }

    /// Creates an encoder with the given configuration.
    ///
    /// The built-in strategies only apply the limits when decoding, so an
    /// encoder writes containers of any length. The configuration is still
    /// reported by [`Engine::config`] to custom `transfer` implementations.
    #[inline]
    pub fn with_config(writer: W, config: Config) -> Self {
        Self { writer, config }
    }

    /// Returns a reference to the underlying writer.
    #[inline]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the encoder and returns the underlying writer.
    #[inline]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Positional> Positional for Encoder<W> {
    #[inline]
    fn pos(&self) -> usize {
        self.writer.pos()
    }
}

impl<W: fmt::Debug> fmt::Debug for Encoder<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("writer", &self.writer)
            .field("config", &self.config)
            .finish()
    }
}

/// Reads values from a [`Reader`].
pub struct Decoder<R> {
    reader: R,
    config: Config,
}

impl<R> Decoder<R> {
    /// Creates a decoder with the default configuration.
    #[inline]
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, Config::new())
    }

    /// Creates a decoder with the given configuration.
    #[inline]
    pub fn with_config(reader: R, config: Config) -> Self {
        Self { reader, config }
    }

    /// Returns a reference to the underlying reader.
    #[inline]
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Consumes the decoder and returns the underlying reader.
    #[inline]
    pub fn into_reader(self) -> R {
        self.reader
    }
}

impl<R: Positional> Positional for Decoder<R> {
    #[inline]
    fn pos(&self) -> usize {
        self.reader.pos()
    }
}

impl<R: fmt::Debug> fmt::Debug for Decoder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("reader", &self.reader)
            .field("config", &self.config)
            .finish()
    }
}

/// An engine that encodes values into `W`.
pub type EncodeEngine<W, E> = Strategy<Encoder<W>, E>;

/// An engine that decodes values from `R`.
pub type DecodeEngine<R, E> = Strategy<Decoder<R>, E>;

impl<W, E> Engine for Strategy<Encoder<W>, E>
where
    W: Writer<E>,
    E: Source,
{
    type Error = E;

    #[inline]
    fn direction(&self) -> Direction {
        Direction::Encode
    }

    #[inline]
    fn exchange(&mut self, bytes: &mut [u8]) -> Result<(), E> {
        Writer::<E>::write(&mut self.writer, bytes)
    }

    #[inline]
    fn config(&self) -> &Config {
        &self.config
    }
}

impl<R, E> Engine for Strategy<Decoder<R>, E>
where
    R: Reader<E>,
    E: Source,
{
    type Error = E;

    #[inline]
    fn direction(&self) -> Direction {
        Direction::Decode
    }

    fn exchange(&mut self, bytes: &mut [u8]) -> Result<(), E> {
        let pos = self.reader.pos();
        let read = Reader::<E>::read(&mut self.reader, bytes)?;
        if read < bytes.len() {
            fail!(Truncated {
                pos,
                requested: bytes.len(),
                read,
            });
        }
        Ok(())
    }

    #[inline]
    fn config(&self) -> &Config {
        &self.config
    }
}
