//! APIs for encoding and decoding whole values.
//!
//! These functions build an engine, transfer a single value, and tear the
//! engine down again. To move several values through one stream, use an
//! [`Archive`](crate::Archive) instead.


use rancor::{fail, Source, Strategy};

use crate::{
    alloc::vec::Vec,
    engine::{Config, Decoder, Encoder},
    error::TrailingBytes,
    stream::{SliceReader, Writer},
    Transfer,
};

/// Encodes a value to bytes.
///
/// The value is borrowed mutably because the same `transfer` method is used
/// for both directions. Encoding never changes it.
///
/// # Example
///
/// ```
/// use twoway::{rancor::Error, to_bytes};
///
/// let mut value = vec![1u16, 2, 3];
/// let bytes = to_bytes::<_, Error>(&mut value).unwrap();
///
/// assert_eq!(&bytes[..4], &3u32.to_ne_bytes());
/// assert_eq!(bytes.len(), 4 + 3 * 2);
/// ```
pub fn to_bytes<T, E>(value: &mut T) -> Result<Vec<u8>, E>
where
    T: Transfer + ?Sized,
    E: Source,
{
    to_bytes_in(value, Vec::new())
}

/// Encodes a value and writes the bytes to the given writer.
///
/// Returns the writer once the value has been completely written.
///
/// # Example
///
/// ```
/// use twoway::{from_bytes, rancor::Error, stream::Buffer, to_bytes_in};
///
/// let mut bytes = [0u8; 16];
/// let mut value = (7u8, 'x');
/// let buffer =
///     to_bytes_in::<_, _, Error>(&mut value, Buffer::from(&mut bytes))
///         .unwrap();
///
/// assert_eq!(buffer.len(), 5);
/// assert_eq!(from_bytes::<(u8, char), Error>(&buffer).unwrap(), value);
/// ```
pub fn to_bytes_in<T, W, E>(value: &mut T, writer: W) -> Result<W, E>
where
    T: Transfer + ?Sized,
    W: Writer<E>,
    E: Source,
{
    let mut encoder = Encoder::new(writer);
    value.transfer(Strategy::<_, E>::wrap(&mut encoder))?;
    Ok(encoder.into_writer())
}

/// Decodes a value from bytes.
///
/// The value starts out as `T::default()` and is overwritten in place. Every
/// byte must belong to the value: leftover bytes fail with [`TrailingBytes`].
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use twoway::{from_bytes, rancor::Error, to_bytes};
///
/// let mut value = BTreeMap::from([(1u8, "one".to_string())]);
/// let bytes = to_bytes::<_, Error>(&mut value).unwrap();
///
/// let decoded = from_bytes::<BTreeMap<u8, String>, Error>(&bytes).unwrap();
/// assert_eq!(decoded, value);
///
/// assert!(from_bytes::<BTreeMap<u8, String>, Error>(&bytes[..5]).is_err());
/// ```
pub fn from_bytes<T, E>(bytes: &[u8]) -> Result<T, E>
where
    T: Transfer + Default,
    E: Source,
{
    from_bytes_with_config(bytes, Config::new())
}

/// Decodes a value from bytes, enforcing the limits in `config`.
pub fn from_bytes_with_config<T, E>(bytes: &[u8], config: Config) -> Result<T, E>
where
    T: Transfer + Default,
    E: Source,
{
    let mut value = T::default();
    let mut decoder = Decoder::with_config(SliceReader::new(bytes), config);
    value.transfer(Strategy::<_, E>::wrap(&mut decoder))?;

    let remaining = decoder.reader().remaining().len();
    if remaining != 0 {
        fail!(TrailingBytes {
            consumed: bytes.len() - remaining,
            remaining,
        });
    }

    Ok(value)
}

/// Decodes bytes into an existing value and returns the bytes that were not
/// consumed.
///
/// Containers in `value` are reused where their strategy allows it, so a
/// `Vec` keeps its allocation and a fixed-size array is filled in place. If
/// decoding fails, `value` may be partially overwritten.
///
/// # Example
///
/// ```
/// use twoway::{from_bytes_into, rancor::Error, to_bytes};
///
/// let mut bytes = to_bytes::<_, Error>(&mut 1u32).unwrap();
/// bytes.extend_from_slice(&to_bytes::<_, Error>(&mut 2u32).unwrap());
///
/// let mut value = 0u32;
/// let rest = from_bytes_into::<_, Error>(&mut value, &bytes).unwrap();
/// assert_eq!(value, 1);
///
/// let rest = from_bytes_into::<_, Error>(&mut value, rest).unwrap();
/// assert_eq!(value, 2);
/// assert!(rest.is_empty());
/// ```
pub fn from_bytes_into<'a, T, E>(
    value: &mut T,
    bytes: &'a [u8],
) -> Result<&'a [u8], E>
where
    T: Transfer + ?Sized,
    E: Source,
{
    let mut decoder = Decoder::new(SliceReader::new(bytes));
    value.transfer(Strategy::<_, E>::wrap(&mut decoder))?;
    Ok(decoder.into_reader().remaining())
}

#[cfg(test)]
mod tests {
    use rancor::Error;

    use crate::{
        alloc::{string::ToString, vec, vec::Vec},
        api::test::{decode, encode},
        from_bytes, from_bytes_into,
    };

    #[test]
    fn trailing_bytes() {
        let mut bytes = encode(&mut 5u16);
        bytes.push(0);

        let err = from_bytes::<u16, Error>(&bytes).unwrap_err();
        assert!(err.to_string().contains("1 trailing bytes"));

        let mut value = 0u16;
        let rest = from_bytes_into::<_, Error>(&mut value, &bytes).unwrap();
        assert_eq!(value, 5);
        assert_eq!(rest, &[0]);
    }

    #[test]
    fn decode_into_reuses_value() {
        let bytes = encode(&mut vec![1u32, 2]);

        let mut value = Vec::with_capacity(8);
        value.extend_from_slice(&[9u32, 9, 9, 9]);
        from_bytes_into::<_, Error>(&mut value, &bytes).unwrap();

        assert_eq!(value, [1, 2]);
        assert!(value.capacity() >= 8);
    }

    #[test]
    fn empty_input() {
        assert!(from_bytes::<u8, Error>(&[]).is_err());
        decode::<()>(&[]);
    }
}
