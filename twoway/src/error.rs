//! Errors raised while transferring values.
//!
//! Engines and streams are generic over any [`rancor::Source`], and raise
//! these types through it. With [`rancor::Error`] the message of the original
//! error is kept; with [`rancor::Failure`] only the fact that something failed
//! is.

use core::{error::Error, fmt};

/// A fixed-size destination was given a different number of elements than it
/// holds.
///
/// Raised before any element is decoded, so the destination is left
/// untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeMismatch {
    /// The number of elements the destination holds.
    pub expected: usize,
    /// The number of elements found in the stream.
    pub found: usize,
}

impl fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size mismatch: expected {} elements but the stream holds {}",
            self.expected, self.found,
        )
    }
}

impl Error for SizeMismatch {}

/// The stream ended before a value was completely read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Truncated {
    /// The position of the read within the stream.
    pub pos: usize,
    /// The number of bytes that were requested.
    pub requested: usize,
    /// The number of bytes that were available.
    pub read: usize,
}

impl fmt::Display for Truncated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stream truncated at byte {}: requested {} bytes but only {} \
             were available",
            self.pos, self.requested, self.read,
        )
    }
}

impl Error for Truncated {}

/// A container held more elements than a `u32` length prefix can describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthOverflow {
    /// The number of elements in the container.
    pub len: usize,
}

impl fmt::Display for LengthOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length {} does not fit in a 32-bit length prefix",
            self.len
        )
    }
}

impl Error for LengthOverflow {}

/// A decoded length prefix exceeded the engine's configured maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthLimitExceeded {
    /// The decoded length.
    pub len: usize,
    /// The configured maximum.
    pub max: usize,
}

impl fmt::Display for LengthLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "decoded length {} exceeds the configured maximum of {}",
            self.len, self.max,
        )
    }
}

impl Error for LengthLimitExceeded {}

/// A raw pointer was transferred.
///
/// Raw pointers carry no ownership or length information, so they can be
/// neither encoded nor decoded soundly. Use a
/// [`Pointer`](crate::pointer::Pointer) or an `Option<Box<T>>` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedPointer {
    /// The name of the pointer type.
    pub type_name: &'static str,
}

impl fmt::Display for UnsupportedPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "raw pointer `{}` cannot be transferred, use an owning pointer \
             type instead",
            self.type_name,
        )
    }
}

impl Error for UnsupportedPointer {}

/// A decoded `bool` was neither `0` nor `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidBool {
    /// The decoded byte.
    pub byte: u8,
}

impl fmt::Display for InvalidBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bool byte {:#04x}", self.byte)
    }
}

impl Error for InvalidBool {}

/// A decoded `char` was not a valid Unicode scalar value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidChar {
    /// The decoded code point.
    pub value: u32,
}

impl fmt::Display for InvalidChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid char value {:#x}", self.value)
    }
}

impl Error for InvalidChar {}

/// A decoded integer does not fit the host's pointer-sized integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegerOverflow {
    /// The name of the destination type.
    pub type_name: &'static str,
}

impl fmt::Display for IntegerOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decoded value does not fit in `{}`", self.type_name)
    }
}

impl Error for IntegerOverflow {}

/// Bytes were left over after decoding a complete value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailingBytes {
    /// The number of bytes consumed by the value.
    pub consumed: usize,
    /// The number of bytes left over.
    pub remaining: usize,
}

impl fmt::Display for TrailingBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trailing bytes after a value of {} bytes",
            self.remaining, self.consumed,
        )
    }
}

impl Error for TrailingBytes {}

/// A fixed-capacity buffer ran out of space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferOverflow {
    /// The number of bytes being written.
    pub write_len: usize,
    /// The capacity of the buffer.
    pub cap: usize,
    /// The number of bytes already in the buffer.
    pub len: usize,
}

impl fmt::Display for BufferOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "overflowed buffer while writing {} bytes into buffer of length \
             {} (capacity is {})",
            self.write_len, self.len, self.cap,
        )
    }
}

impl Error for BufferOverflow {}
