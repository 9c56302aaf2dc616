//! A stream bound to a direction, for moving several values in turn.

use core::{any::type_name, fmt, marker::PhantomData};

use log::{debug, trace};
use rancor::{Source, Strategy};

use crate::{
    engine::{Config, Decoder, Encoder},
    stream::Positional,
    Direction, Engine, Transfer,
};

/// A stream bound to a fixed direction.
///
/// An archive owns an [`Encoder`] or a [`Decoder`] and transfers values
/// through it one after another. Each call to [`transfer`](Archive::transfer)
/// either succeeds completely or reports the error raised by the value; a
/// failed transfer leaves the stream positioned somewhere inside that value.
///
/// # Example
///
/// ```
/// use twoway::{rancor::Error, stream::SliceReader, Archive};
///
/// let mut archive = Archive::<_, Error>::encoder(Vec::<u8>::new());
/// archive
///     .transfer(&mut 5i32)?
///     .transfer(&mut vec![1i32, 2, 3, 4, 5])?;
/// let bytes = archive.into_inner();
/// assert_eq!(bytes.len(), 4 + 4 + 5 * 4);
///
/// let mut archive = Archive::<_, Error>::decoder(SliceReader::new(&bytes));
/// let mut scalar = 0i32;
/// let mut values = Vec::<i32>::new();
/// archive.transfer(&mut scalar)?.transfer(&mut values)?;
///
/// assert_eq!(scalar, 5);
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// # Ok::<(), Error>(())
/// ```
pub struct Archive<C, E> {
    channel: C,
    _error: PhantomData<E>,
}

impl<W, E> Archive<Encoder<W>, E> {
    /// Returns an archive that encodes values into `writer`.
    #[inline]
    pub fn encoder(writer: W) -> Self {
        Self::encoder_with_config(writer, Config::new())
    }

    /// Returns an archive that encodes values into `writer` with the given
    /// configuration.
    ///
    /// Length limits are not checked when encoding. See
    /// [`Encoder::with_config`].
    #[inline]
    pub fn encoder_with_config(writer: W, config: Config) -> Self {
        Self {
            channel: Encoder::with_config(writer, config),
            _error: PhantomData,
        }
    }

    /// Returns [`Direction::Encode`].
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::Encode
    }

    /// Returns a reference to the writer.
    #[inline]
    pub fn writer(&self) -> &W {
        self.channel.writer()
    }

    /// Consumes the archive and returns the writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.channel.into_writer()
    }
}

impl<R, E> Archive<Decoder<R>, E> {
    /// Returns an archive that decodes values from `reader`.
    #[inline]
    pub fn decoder(reader: R) -> Self {
        Self::decoder_with_config(reader, Config::new())
    }

    /// Returns an archive that decodes values from `reader` with the given
    /// configuration.
    #[inline]
    pub fn decoder_with_config(reader: R, config: Config) -> Self {
        Self {
            channel: Decoder::with_config(reader, config),
            _error: PhantomData,
        }
    }

    /// Returns [`Direction::Decode`].
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::Decode
    }

    /// Returns a reference to the reader.
    #[inline]
    pub fn reader(&self) -> &R {
        self.channel.reader()
    }

    /// Consumes the archive and returns the reader.
    #[inline]
    pub fn into_inner(self) -> R {
        self.channel.into_reader()
    }
}

impl<C: Positional, E> Archive<C, E> {
    /// Returns the number of bytes moved through the archive so far.
    #[inline]
    pub fn pos(&self) -> usize {
        self.channel.pos()
    }
}

impl<C, E> Archive<C, E>
where
    C: Positional,
    Strategy<C, E>: Engine<Error = E>,
    E: Source,
{
    /// Writes `value` to the stream or overwrites it from the stream,
    /// depending on the archive's direction.
    ///
    /// Returns the archive again so that transfers can be chained.
    pub fn transfer<T>(&mut self, value: &mut T) -> Result<&mut Self, E>
    where
        T: Transfer + ?Sized,
    {
        let pos = self.channel.pos();
        let engine = Strategy::<C, E>::wrap(&mut self.channel);
        let action = match engine.direction() {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        };

        trace!("{action} `{}` at byte {pos}", type_name::<T>());
        match value.transfer(engine) {
            Ok(()) => Ok(self),
            Err(error) => {
                debug!(
                    "failed to {action} `{}` at byte {pos}: {error}",
                    type_name::<T>(),
                );
                Err(error)
            }
        }
    }
}

impl<C: fmt::Debug, E> fmt::Debug for Archive<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Archive")
            .field("channel", &self.channel)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rancor::Error;

    use super::Archive;
    use crate::{
        alloc::{string::ToString, vec, vec::Vec},
        engine::Config,
        stream::SliceReader,
        Direction, Engine, Transfer,
    };

    #[test]
    fn chained_values_share_a_stream() {
        let mut archive = Archive::<_, Error>::encoder(Vec::<u8>::new());
        assert_eq!(archive.direction(), Direction::Encode);
        archive
            .transfer(&mut 1u8)
            .unwrap()
            .transfer(&mut "two".to_string())
            .unwrap()
            .transfer(&mut [3u16; 2])
            .unwrap();
        assert_eq!(archive.pos(), 1 + 7 + 8);
        let bytes = archive.into_inner();

        let mut archive = Archive::<_, Error>::decoder(SliceReader::new(&bytes));
        assert_eq!(archive.direction(), Direction::Decode);
        let (mut one, mut two, mut three) = (0u8, Vec::<u8>::new(), [0u16; 2]);
        archive
            .transfer(&mut one)
            .unwrap()
            .transfer(&mut two)
            .unwrap()
            .transfer(&mut three)
            .unwrap();
        assert_eq!(one, 1);
        assert_eq!(two, b"two");
        assert_eq!(three, [3, 3]);
        assert!(archive.reader().is_exhausted());
    }

    #[test]
    fn failures_are_reported_per_value() {
        let mut archive = Archive::<_, Error>::encoder(Vec::<u8>::new());
        archive.transfer(&mut [500i32, 400, 300, 200, 100]).unwrap();
        archive.transfer(&mut 7i32).unwrap();
        let bytes = archive.into_inner();

        let mut archive = Archive::<_, Error>::decoder(SliceReader::new(&bytes));
        let mut wrong = [0i32; 6];
        let err = archive.transfer(&mut wrong).unwrap_err();
        assert!(err.to_string().contains("size mismatch"));
        assert_eq!(wrong, [0; 6]);
        assert_eq!(archive.pos(), 4);

        let mut failures = 0;
        let mut last = 0i32;
        while !archive.reader().is_exhausted() {
            if archive.transfer(&mut last).is_err() {
                failures += 1;
            }
        }
        assert_eq!(failures, 0);
        assert_eq!(last, 7);
    }

    #[test]
    fn decoder_config_limits_lengths() {
        let config = Config::new().with_max_len(2);
        let mut archive =
            Archive::<_, Error>::encoder_with_config(Vec::<u8>::new(), config);
        archive.transfer(&mut vec![1u8, 2, 3]).unwrap();
        archive.transfer(&mut vec![4u8, 5]).unwrap();
        let bytes = archive.into_inner();
        assert_eq!(bytes.len(), 4 + 3 + 4 + 2);

        let mut archive = Archive::<_, Error>::decoder_with_config(
            SliceReader::new(&bytes),
            config,
        );
        let mut values = Vec::<u8>::new();
        let err = archive.transfer(&mut values).unwrap_err();
        assert!(err.to_string().contains("exceeds the configured maximum"));
        assert!(values.is_empty());
        assert_eq!(archive.pos(), 4);
    }

    #[test]
    fn encoder_config_is_visible_to_transfer() {
        #[derive(Default)]
        struct SeenLimit(Option<u32>);

        impl Transfer for SeenLimit {
            fn transfer<E: Engine + ?Sized>(
                &mut self,
                engine: &mut E,
            ) -> Result<(), E::Error> {
                self.0 = engine.config().max_len();
                Ok(())
            }
        }

        let mut archive = Archive::<_, Error>::encoder_with_config(
            Vec::<u8>::new(),
            Config::new().with_max_len(16),
        );
        let mut seen = SeenLimit::default();
        archive.transfer(&mut seen).unwrap();
        assert_eq!(seen.0, Some(16));
        assert!(archive.into_inner().is_empty());
    }
}
