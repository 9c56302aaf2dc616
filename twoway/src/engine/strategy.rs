//! The encoding strategies.
//!
//! Every [`Transfer`] implementation in this crate calls exactly one of these
//! functions. Each one handles both directions, and only diverges where the
//! two directions need different work: encoding reads the container, decoding
//! rebuilds it from the stream.

use core::mem;

use rancor::fail;

use crate::{
    alloc::vec::Vec,
    error::{LengthLimitExceeded, LengthOverflow, SizeMismatch},
    shape::{
        Associative, NodeSequence, ResizableSequence, Scalar,
        SinglyLinkedSequence,
    },
    Direction, Engine, Transfer,
};

/// Transfers a `u32` length prefix.
///
/// When encoding, writes `len` and returns it. When decoding, ignores `len`
/// and returns the length read from the stream, after checking it against the
/// engine's [`max_len`](crate::engine::Config::max_len).
pub fn transfer_len<E>(engine: &mut E, len: usize) -> Result<usize, E::Error>
where
    E: Engine + ?Sized,
{
    match engine.direction() {
        Direction::Encode => {
            let Ok(mut prefix) = u32::try_from(len) else {
                fail!(LengthOverflow { len });
            };
            prefix.transfer(engine)?;
            Ok(len)
        }
        Direction::Decode => {
            let mut prefix = 0u32;
            prefix.transfer(engine)?;
            if let Some(max) = engine.config().max_len() {
                if prefix > max {
                    fail!(LengthLimitExceeded {
                        len: prefix as usize,
                        max: max as usize,
                    });
                }
            }
            Ok(prefix as usize)
        }
    }
}

/// Transfers the byte image of a scalar.
pub fn transfer_scalar<T, E>(value: &mut T, engine: &mut E) -> Result<(), E::Error>
where
    T: Scalar,
    E: Engine + ?Sized,
{
    match engine.direction() {
        Direction::Encode => {
            let mut bytes = value.to_bytes();
            engine.exchange(bytes.as_mut())
        }
        Direction::Decode => {
            let mut bytes = T::Bytes::default();
            engine.exchange(bytes.as_mut())?;
            *value = T::from_bytes(bytes)?;
            Ok(())
        }
    }
}

/// Transfers a sequence whose length cannot change.
///
/// Decoding fails with [`SizeMismatch`] if the stream holds a different number
/// of elements than `items`. The check happens before any element is decoded.
pub fn transfer_fixed<T, E>(items: &mut [T], engine: &mut E) -> Result<(), E::Error>
where
    T: Transfer,
    E: Engine + ?Sized,
{
    let found = transfer_len(engine, items.len())?;
    if found != items.len() {
        fail!(SizeMismatch {
            expected: items.len(),
            found,
        });
    }
    for item in items.iter_mut() {
        item.transfer(engine)?;
    }
    Ok(())
}

/// Transfers a [`ResizableSequence`].
///
/// When decoding, the elements already in the sequence are overwritten in
/// place and the sequence is then truncated or grown to the decoded length.
/// Growth happens one element at a time, so a corrupt length fails on the
/// stream before it can exhaust memory.
pub fn transfer_resizable<C, E>(seq: &mut C, engine: &mut E) -> Result<(), E::Error>
where
    C: ResizableSequence + ?Sized,
    C::Item: Transfer + Default,
    E: Engine + ?Sized,
{
    let len = transfer_len(engine, seq.len())?;
    resize_in_place(seq, len, engine)
}

/// Transfers exactly `len` elements of a resizable sequence without a length
/// prefix, truncating or growing it as needed.
pub(crate) fn resize_in_place<C, E>(
    seq: &mut C,
    len: usize,
    engine: &mut E,
) -> Result<(), E::Error>
where
    C: ResizableSequence + ?Sized,
    C::Item: Transfer + Default,
    E: Engine + ?Sized,
{
    seq.truncate(len);
    for item in seq.as_mut_slice() {
        item.transfer(engine)?;
    }
    while seq.len() < len {
        let mut item = C::Item::default();
        item.transfer(engine)?;
        seq.push(item);
    }
    Ok(())
}

/// Transfers a [`NodeSequence`].
///
/// When decoding, the sequence is cleared and each element is decoded into a
/// default value before being appended.
pub fn transfer_node<C, E>(seq: &mut C, engine: &mut E) -> Result<(), E::Error>
where
    C: NodeSequence + ?Sized,
    C::Item: Transfer + Default,
    E: Engine + ?Sized,
{
    let len = transfer_len(engine, seq.len())?;
    match engine.direction() {
        Direction::Encode => {
            for item in seq.iter_mut() {
                item.transfer(engine)?;
            }
        }
        Direction::Decode => {
            seq.clear();
            for _ in 0..len {
                let mut item = C::Item::default();
                item.transfer(engine)?;
                seq.push_back(item);
            }
        }
    }
    Ok(())
}

/// Transfers a [`SinglyLinkedSequence`].
///
/// Encoding walks the sequence once to count it. Decoding prepends each
/// element and reverses the sequence once at the end, so the decoded order
/// matches the encoded order.
pub fn transfer_singly_linked<C, E>(
    seq: &mut C,
    engine: &mut E,
) -> Result<(), E::Error>
where
    C: SinglyLinkedSequence + ?Sized,
    C::Item: Transfer + Default,
    E: Engine + ?Sized,
{
    match engine.direction() {
        Direction::Encode => {
            let count = seq.iter_mut().count();
            transfer_len(engine, count)?;
            for item in seq.iter_mut() {
                item.transfer(engine)?;
            }
        }
        Direction::Decode => {
            let len = transfer_len(engine, 0)?;
            seq.clear();
            for _ in 0..len {
                let mut item = C::Item::default();
                item.transfer(engine)?;
                seq.push_front(item);
            }
            seq.reverse();
        }
    }
    Ok(())
}

/// Transfers an [`Associative`] container.
///
/// Encoding moves the entries out of the container for the duration of the
/// transfer and always moves them back, even if an entry fails or panics. Decoding
/// clears the container and inserts each decoded entry.
pub fn transfer_associative<C, E>(
    set: &mut C,
    engine: &mut E,
) -> Result<(), E::Error>
where
    C: Associative + ?Sized,
    C::Item: Transfer + Default,
    E: Engine + ?Sized,
{
    let len = transfer_len(engine, set.len())?;
    match engine.direction() {
        Direction::Encode => {
            /// Moves the taken entries back into the container when dropped,
            /// including during an unwind out of an entry's transfer.
            struct DropGuard<'a, C: Associative + ?Sized> {
                set: &'a mut C,
                entries: Vec<C::Item>,
            }

            impl<C: Associative + ?Sized> Drop for DropGuard<'_, C> {
                fn drop(&mut self) {
                    self.set.restore_entries(mem::take(&mut self.entries));
                }
            }

            let mut guard = DropGuard {
                entries: set.take_entries(),
                set,
            };
            let result = guard
                .entries
                .iter_mut()
                .try_for_each(|entry| entry.transfer(engine));
            result
        }
        Direction::Decode => {
            set.clear();
            for _ in 0..len {
                let mut entry = C::Item::default();
                entry.transfer(engine)?;
                set.insert(entry);
            }
            Ok(())
        }
    }
}

/// Transfers a value that may be absent, behind a `bool` not-null flag.
///
/// When decoding into a value that is already present, the value is decoded
/// in place.
pub fn transfer_optional<T, E>(
    value: &mut Option<T>,
    engine: &mut E,
) -> Result<(), E::Error>
where
    T: Transfer + Default,
    E: Engine + ?Sized,
{
    let mut present = value.is_some();
    present.transfer(engine)?;
    if present {
        value.get_or_insert_with(T::default).transfer(engine)
    } else {
        *value = None;
        Ok(())
    }
}
