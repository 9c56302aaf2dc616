//! Pointers that record how their storage was allocated.
//!
//! A [`Pointer`] is either null, a view of storage owned by the caller, a
//! single boxed value, or a boxed slice. Decoding into a pointer uses that
//! record to decide whether existing storage can be reused, must be released,
//! or must be left alone.
//!
//! # Wire format
//!
//! A `bool` not-null flag. If the pointer is not null, a `u32` element count
//! follows, and then each element.
//!
//! # Decoding
//!
//! | Current state | Decoded      | Result                                   |
//! |---------------|--------------|------------------------------------------|
//! | any           | null         | `Null`, owned storage is dropped         |
//! | `Borrowed`    | `n <= len`   | `Borrowed`, narrowed to the first `n`    |
//! | `Borrowed`    | `n > len`    | [`SizeMismatch`], nothing is changed     |
//! | `Single`      | `n == 1`     | `Single`, overwritten in place           |
//! | `Array`       | `n`          | `Array`, truncated or grown to `n`       |
//! | otherwise     | `n == 1`     | `Single`, freshly allocated              |
//! | otherwise     | `n != 1`     | `Array`, freshly allocated               |
//!
//! Borrowed storage is never released, since it belongs to the caller.
//! Narrowing is permanent: the pointer keeps only the first `n` slots, so a
//! later decode of more than `n` elements into the same pointer fails with
//! [`SizeMismatch`]. Rebuild it with [`Pointer::borrowed`] to decode into the
//! whole of the caller's storage again.

use core::{fmt, mem, slice};

use log::debug;
use rancor::fail;

use crate::{
    alloc::{boxed::Box, vec::Vec},
    engine::strategy::{resize_in_place, transfer_len},
    error::SizeMismatch,
    Direction, Engine, Shape, Transfer,
};

/// How the storage behind a [`Pointer`] was allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllocKind {
    /// There is no storage.
    None,
    /// The storage belongs to someone else.
    Borrowed,
    /// The storage is a single boxed value.
    Single,
    /// The storage is a boxed slice.
    Array,
}

impl fmt::Display for AllocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Borrowed => write!(f, "borrowed"),
            Self::Single => write!(f, "single"),
            Self::Array => write!(f, "array"),
        }
    }
}

/// A possibly-null, possibly-owned pointer to one or more values.
///
/// # Example
///
/// ```
/// use twoway::{
///     from_bytes_into, pointer::{AllocKind, Pointer}, rancor::Error,
///     to_bytes,
/// };
///
/// let mut source = Pointer::single(24u32);
/// let bytes = to_bytes::<_, Error>(&mut source).unwrap();
///
/// let mut dest = Pointer::<u32>::default();
/// from_bytes_into::<_, Error>(&mut dest, &bytes).unwrap();
///
/// assert_eq!(dest.kind(), AllocKind::Single);
/// assert_eq!(dest.count(), 1);
/// assert_eq!(dest.get(0), Some(&24));
/// ```
#[derive(Debug, PartialEq)]
pub enum Pointer<'a, T> {
    /// A null pointer.
    Null,
    /// A view of storage owned by the caller.
    Borrowed(&'a mut [T]),
    /// A single owned value.
    Single(Box<T>),
    /// An owned array of values.
    Array(Box<[T]>),
}

impl<'a, T> Pointer<'a, T> {
    /// Returns a pointer that owns a single value.
    #[inline]
    pub fn single(value: T) -> Self {
        Self::Single(Box::new(value))
    }

    /// Returns a pointer that owns an array of values.
    #[inline]
    pub fn array(values: impl Into<Box<[T]>>) -> Self {
        Self::Array(values.into())
    }

    /// Returns a pointer to storage owned by the caller.
    #[inline]
    pub fn borrowed(values: &'a mut [T]) -> Self {
        Self::Borrowed(values)
    }

    /// Returns how the storage behind this pointer was allocated.
    #[inline]
    pub fn kind(&self) -> AllocKind {
        match self {
            Self::Null => AllocKind::None,
            Self::Borrowed(_) => AllocKind::Borrowed,
            Self::Single(_) => AllocKind::Single,
            Self::Array(_) => AllocKind::Array,
        }
    }

    /// Returns the number of values behind this pointer.
    #[inline]
    pub fn count(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns whether this pointer is null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the values behind this pointer.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Null => &[],
            Self::Borrowed(values) => &**values,
            Self::Single(value) => slice::from_ref(&**value),
            Self::Array(values) => &**values,
        }
    }

    /// Returns the values behind this pointer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Self::Null => &mut [],
            Self::Borrowed(values) => &mut **values,
            Self::Single(value) => slice::from_mut(&mut **value),
            Self::Array(values) => &mut **values,
        }
    }

    /// Returns the value at `index`, if there is one.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the value at `index` mutably, if there is one.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Takes the pointer out, leaving a null pointer in its place.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T> Default for Pointer<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::Null
    }
}

impl<T> From<Box<T>> for Pointer<'_, T> {
    #[inline]
    fn from(value: Box<T>) -> Self {
        Self::Single(value)
    }
}

impl<T> From<Vec<T>> for Pointer<'_, T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_boxed_slice())
    }
}

impl<'a, T> From<&'a mut [T]> for Pointer<'a, T> {
    #[inline]
    fn from(values: &'a mut [T]) -> Self {
        Self::Borrowed(values)
    }
}

impl<T: Transfer + Default> Pointer<'_, T> {
    fn decode<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        let before = self.kind();

        let mut present = false;
        present.transfer(engine)?;
        if !present {
            *self = Self::Null;
            if before != AllocKind::None {
                debug!("released {before} pointer storage for a null value");
            }
            return Ok(());
        }

        let count = transfer_len(engine, 0)?;
        let result = match mem::take(self) {
            Self::Borrowed(values) => {
                if count > values.len() {
                    let expected = values.len();
                    *self = Self::Borrowed(values);
                    fail!(SizeMismatch {
                        expected,
                        found: count,
                    });
                }
                let (head, _) = values.split_at_mut(count);
                let result =
                    head.iter_mut().try_for_each(|item| item.transfer(engine));
                *self = Self::Borrowed(head);
                result
            }
            Self::Single(mut value) if count == 1 => {
                let result = value.transfer(engine);
                *self = Self::Single(value);
                result
            }
            Self::Array(values) => {
                let mut values = values.into_vec();
                let result = resize_in_place(&mut values, count, engine);
                *self = Self::Array(values.into_boxed_slice());
                result
            }
            previous => {
                drop(previous);
                if count == 1 {
                    let mut value = Box::<T>::default();
                    let result = value.transfer(engine);
                    *self = Self::Single(value);
                    result
                } else {
                    let mut values = Vec::new();
                    let result = resize_in_place(&mut values, count, engine);
                    *self = Self::Array(values.into_boxed_slice());
                    result
                }
            }
        };

        let after = self.kind();
        if before != after {
            debug!(
                "decoded pointer of {count} elements moved from {before} to \
                 {after} storage"
            );
        }

        result
    }
}

impl<T: Transfer + Default> Transfer for Pointer<'_, T> {
    const SHAPE: Shape = Shape::OwnershipWrapper;

    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        match engine.direction() {
            Direction::Encode => {
                let mut present = !self.is_null();
                present.transfer(engine)?;
                if present {
                    let values = self.as_mut_slice();
                    transfer_len(engine, values.len())?;
                    for value in values {
                        value.transfer(engine)?;
                    }
                }
                Ok(())
            }
            Direction::Decode => self.decode(engine),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use rancor::Error;

    use super::{AllocKind, Pointer};
    use crate::{
        alloc::{boxed::Box, string::ToString, vec},
        api::test::encode,
        from_bytes_into, Engine, Transfer,
    };

    fn decode_into<T: Transfer + Default>(
        pointer: &mut Pointer<'_, T>,
        bytes: &[u8],
    ) -> Result<(), Error> {
        let rest = from_bytes_into::<_, Error>(pointer, bytes)?;
        assert!(rest.is_empty());
        Ok(())
    }

    #[test]
    fn single_into_null() {
        let bytes = encode(&mut Pointer::single(24i32));
        let mut expected = vec![1u8];
        expected.extend_from_slice(&1u32.to_ne_bytes());
        expected.extend_from_slice(&24i32.to_ne_bytes());
        assert_eq!(bytes, expected);

        let mut dest = Pointer::<i32>::default();
        decode_into(&mut dest, &bytes).unwrap();
        assert_eq!(dest.kind(), AllocKind::Single);
        assert_eq!(dest.count(), 1);
        assert_eq!(dest.get(0), Some(&24));
    }

    #[test]
    fn null_is_a_single_byte() {
        let bytes = encode(&mut Pointer::<u64>::Null);
        assert_eq!(bytes, [0]);

        let mut storage = [1u64, 2];
        let targets = [
            Pointer::Null,
            Pointer::single(3),
            Pointer::array(vec![4, 5, 6]),
            Pointer::borrowed(&mut storage),
        ];
        for mut target in targets {
            decode_into(&mut target, &bytes).unwrap();
            assert!(target.is_null());
            assert_eq!(target.kind(), AllocKind::None);
            assert_eq!(target.count(), 0);
        }
        assert_eq!(storage, [1, 2]);
    }

    #[test]
    fn array_into_null() {
        let bytes = encode(&mut Pointer::array([1u16, 2, 3]));

        let mut dest = Pointer::<u16>::default();
        decode_into(&mut dest, &bytes).unwrap();
        assert_eq!(dest.kind(), AllocKind::Array);
        assert_eq!(dest.as_slice(), [1, 2, 3]);

        let bytes = encode(&mut Pointer::<u16>::array(vec![]));
        decode_into(&mut dest, &bytes).unwrap();
        assert_eq!(dest.kind(), AllocKind::Array);
        assert_eq!(dest.count(), 0);
        assert!(!dest.is_null());
    }

    #[test]
    fn single_reused_in_place() {
        let bytes = encode(&mut Pointer::single("new".to_string()));

        let mut dest = Pointer::single("old".to_string());
        decode_into(&mut dest, &bytes).unwrap();
        assert_eq!(dest, Pointer::single("new".to_string()));
    }

    #[test]
    fn single_grows_into_array() {
        let bytes = encode(&mut Pointer::array(vec![7u8, 8]));

        let mut dest = Pointer::single(1u8);
        decode_into(&mut dest, &bytes).unwrap();
        assert_eq!(dest.kind(), AllocKind::Array);
        assert_eq!(dest.as_slice(), [7, 8]);
    }

    #[test]
    fn array_keeps_its_kind() {
        let bytes = encode(&mut Pointer::single(9u32));

        let mut dest = Pointer::array(vec![1u32, 2, 3]);
        decode_into(&mut dest, &bytes).unwrap();
        assert_eq!(dest.kind(), AllocKind::Array);
        assert_eq!(dest.as_slice(), [9]);
    }

    #[test]
    fn borrowed_storage_is_narrowed() {
        let bytes = encode(&mut Pointer::array(vec![5i32, 6]));

        let mut storage = [0i32; 4];
        let mut dest = Pointer::borrowed(&mut storage);
        decode_into(&mut dest, &bytes).unwrap();
        assert_eq!(dest.kind(), AllocKind::Borrowed);
        assert_eq!(dest.as_slice(), [5, 6]);
        assert_eq!(storage, [5, 6, 0, 0]);
    }

    #[test]
    fn borrowed_storage_cannot_grow() {
        let bytes = encode(&mut Pointer::array(vec![5i32, 6, 7]));

        let mut storage = [1i32, 2];
        let mut dest = Pointer::borrowed(&mut storage);
        let err = decode_into(&mut dest, &bytes).unwrap_err();
        assert!(err.to_string().contains("size mismatch"));
        assert_eq!(dest.kind(), AllocKind::Borrowed);
        assert_eq!(dest.count(), 2);
        assert_eq!(storage, [1, 2]);
    }

    #[test]
    fn narrowed_borrowed_storage_stays_narrow() {
        let two = encode(&mut Pointer::array(vec![5i32, 6]));
        let three = encode(&mut Pointer::array(vec![7i32, 8, 9]));

        let mut storage = [0i32; 4];
        let mut dest = Pointer::borrowed(&mut storage);
        decode_into(&mut dest, &two).unwrap();
        assert_eq!(dest.count(), 2);

        let err = decode_into(&mut dest, &three).unwrap_err();
        assert!(err.to_string().contains("size mismatch"));
        assert_eq!(dest.as_slice(), [5, 6]);

        drop(dest);
        let mut dest = Pointer::borrowed(&mut storage);
        decode_into(&mut dest, &three).unwrap();
        assert_eq!(dest.as_slice(), [7, 8, 9]);
        assert_eq!(storage, [7, 8, 9, 0]);
    }

    #[test]
    fn borrowed_source_encodes_like_an_array() {
        let mut storage = [7u16, 8, 9];
        let bytes = encode(&mut Pointer::borrowed(&mut storage));
        let mut expected = vec![1u8];
        expected.extend_from_slice(&3u32.to_ne_bytes());
        for value in [7u16, 8, 9] {
            expected.extend_from_slice(&value.to_ne_bytes());
        }
        assert_eq!(bytes, expected);
        assert_eq!(storage, [7, 8, 9]);

        let mut dest = Pointer::<u16>::default();
        decode_into(&mut dest, &bytes).unwrap();
        assert_eq!(dest.kind(), AllocKind::Array);
        assert_eq!(dest.as_slice(), [7, 8, 9]);
    }

    thread_local! {
        static LIVE: Cell<isize> = const { Cell::new(0) };
    }

    #[derive(Debug, PartialEq)]
    struct Tracked(u32);

    impl Tracked {
        fn new(value: u32) -> Self {
            LIVE.with(|live| live.set(live.get() + 1));
            Self(value)
        }
    }

    impl Default for Tracked {
        fn default() -> Self {
            Self::new(0)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            LIVE.with(|live| live.set(live.get() - 1));
        }
    }

    impl Transfer for Tracked {
        fn transfer<E: Engine + ?Sized>(
            &mut self,
            engine: &mut E,
        ) -> Result<(), E::Error> {
            self.0.transfer(engine)
        }
    }

    fn live() -> isize {
        LIVE.with(Cell::get)
    }

    #[test]
    fn repeated_decode_releases_storage() {
        let three = encode(&mut Pointer::array(vec![
            Tracked::new(1),
            Tracked::new(2),
            Tracked::new(3),
        ]));
        let one = encode(&mut Pointer::from(Box::new(Tracked::new(4))));
        let null = encode(&mut Pointer::<Tracked>::Null);
        assert_eq!(live(), 0);

        let mut dest = Pointer::<Tracked>::default();
        decode_into(&mut dest, &one).unwrap();
        assert_eq!(live(), 1);
        decode_into(&mut dest, &one).unwrap();
        assert_eq!(live(), 1);
        decode_into(&mut dest, &three).unwrap();
        assert_eq!(live(), 3);
        decode_into(&mut dest, &three).unwrap();
        assert_eq!(live(), 3);
        decode_into(&mut dest, &one).unwrap();
        assert_eq!(live(), 1);
        assert_eq!(dest.as_slice(), [Tracked::new(4)]);
        assert_eq!(live(), 1);
        decode_into(&mut dest, &null).unwrap();
        assert_eq!(live(), 0);
    }

    #[test]
    fn truncated_decode_keeps_storage_owned() {
        let mut bytes = encode(&mut Pointer::array(vec![1u64, 2, 3]));
        bytes.truncate(bytes.len() - 4);

        let mut dest = Pointer::array(vec![0u64; 5]);
        assert!(decode_into(&mut dest, &bytes).is_err());
        assert_eq!(dest.kind(), AllocKind::Array);
        assert_eq!(&dest.as_slice()[..2], [1, 2]);
    }
}
