//! The core traits provided by twoway.

use rancor::Source;

use crate::{engine::Config, stream::Positional};

/// The direction an [`Engine`] moves values in.
///
/// An engine's direction is fixed when it is constructed and never changes
/// while values are being transferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Values are read and their bytes are written to a stream.
    Encode,
    /// Bytes are read from a stream and values are overwritten in place.
    Decode,
}

impl Direction {
    /// Returns whether this is [`Direction::Encode`].
    #[inline]
    pub const fn is_encode(self) -> bool {
        matches!(self, Self::Encode)
    }

    /// Returns whether this is [`Direction::Decode`].
    #[inline]
    pub const fn is_decode(self) -> bool {
        matches!(self, Self::Decode)
    }
}

/// The encoding strategy a type was classified under.
///
/// Every [`Transfer`] implementation reports exactly one shape. Shapes are
/// purely descriptive: the strategy is chosen statically by the
/// implementation, and the shape lets generic code and tests ask which one it
/// was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A user type that submits its own fields.
    User,
    /// A compile-time sized array, or a slice whose length is fixed by its
    /// borrow.
    FixedArray,
    /// A sequence with random access and a resize operation.
    ResizableSequence,
    /// A sequence that can only be cleared and appended to.
    NodeSequence,
    /// A sequence that can only be prepended to and reversed.
    SinglyLinkedSequence,
    /// A set, map, or heap filled by `insert`.
    Associative,
    /// A two-element tuple, such as a map entry.
    KeyValuePair,
    /// A tuple of any other arity.
    Tuple,
    /// A value that may be absent, written behind a not-null flag.
    Optional,
    /// A raw pointer. These cannot be transferred.
    Pointer,
    /// A [`Pointer`](crate::pointer::Pointer) that records how its storage was
    /// allocated.
    OwnershipWrapper,
    /// A fixed-width value copied byte for byte.
    Scalar,
    /// A type with no bytes on the wire.
    Empty,
}

/// A byte stream bound to a fixed [`Direction`].
///
/// `Transfer` implementations receive an engine and pass it down to each of
/// their fields. Only scalar implementations touch the bytes directly, through
/// [`exchange`](Engine::exchange).
///
/// The usual engines are
/// [`EncodeEngine`](crate::engine::EncodeEngine) and
/// [`DecodeEngine`](crate::engine::DecodeEngine).
pub trait Engine: Positional {
    /// The error produced when a transfer fails.
    type Error: Source;

    /// Returns the direction of this engine.
    fn direction(&self) -> Direction;

    /// Moves `bytes` through the stream.
    ///
    /// When encoding, `bytes` is written verbatim. When decoding, `bytes` is
    /// completely overwritten with the next bytes of the stream. A stream that
    /// ends early fails with [`Truncated`](crate::error::Truncated).
    fn exchange(&mut self, bytes: &mut [u8]) -> Result<(), Self::Error>;

    /// Returns the limits this engine enforces.
    fn config(&self) -> &Config;
}

impl<T: Engine + ?Sized> Engine for &mut T {
    type Error = T::Error;

    #[inline]
    fn direction(&self) -> Direction {
        T::direction(*self)
    }

    #[inline]
    fn exchange(&mut self, bytes: &mut [u8]) -> Result<(), Self::Error> {
        T::exchange(*self, bytes)
    }

    #[inline]
    fn config(&self) -> &Config {
        T::config(*self)
    }
}

/// A type that can be written to and read from a byte stream.
///
/// `transfer` is called with an [`Engine`] in either direction, and must pass
/// the same fields to the engine in the same order regardless of which
/// direction it is. The order is not recorded in the stream.
///
/// # Examples
///
/// Most of the time `#[derive(Transfer)]` is all that's needed. Writing the
/// implementation by hand allows choosing a different order:
///
/// ```
/// use twoway::{from_bytes, rancor::Error, to_bytes, Engine, Transfer};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Transfer for Point {
///     fn transfer<E: Engine + ?Sized>(
///         &mut self,
///         engine: &mut E,
///     ) -> Result<(), E::Error> {
///         self.y.transfer(engine)?;
///         self.x.transfer(engine)
///     }
/// }
///
/// let mut point = Point { x: 70, y: 80 };
/// let bytes = to_bytes::<_, Error>(&mut point).unwrap();
/// assert_eq!(&bytes[..4], &80i32.to_ne_bytes());
/// assert_eq!(from_bytes::<Point, Error>(&bytes).unwrap(), point);
/// ```
///
/// Types without an implementation cannot be transferred at all:
///
/// ```compile_fail
/// use twoway::{rancor::Error, to_bytes};
///
/// struct Opaque(i32);
///
/// to_bytes::<_, Error>(&mut Opaque(1)).unwrap();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be transferred",
    label = "`{Self}` does not implement `Transfer`",
    note = "derive `Transfer` or implement it by hand to submit the fields of \
            `{Self}` in a fixed order"
)]
pub trait Transfer {
    /// The strategy this type is transferred with.
    const SHAPE: Shape = Shape::User;

    /// Writes this value to the engine, or overwrites it from the engine,
    /// depending on the engine's direction.
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error>;
}

impl<T: Transfer + ?Sized> Transfer for &mut T {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        T::transfer(*self, engine)
    }
}
