//! The type classifier.
//!
//! Each trait in this module answers one question about a type's structure:
//! is it a fixed-width scalar, a resizable sequence, a node-based sequence, a
//! singly-linked sequence, or an associative container? The strategies in
//! [`engine::strategy`](crate::engine::strategy) are written against these
//! traits, so a container outside of the standard library can reuse a
//! strategy by implementing the matching trait:
//!
//! ```
//! use twoway::{
//!     engine::strategy::transfer_resizable, shape::ResizableSequence,
//!     Engine, Shape, Transfer,
//! };
//!
//! #[derive(Default)]
//! struct Samples(Vec<f32>);
//!
//! impl ResizableSequence for Samples {
//!     type Item = f32;
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn truncate(&mut self, len: usize) {
//!         self.0.truncate(len);
//!     }
//!
//!     fn push(&mut self, item: f32) {
//!         self.0.push(item);
//!     }
//!
//!     fn as_mut_slice(&mut self) -> &mut [f32] {
//!         &mut self.0
//!     }
//! }
//!
//! impl Transfer for Samples {
//!     const SHAPE: Shape = Shape::ResizableSequence;
//!
//!     fn transfer<E: Engine + ?Sized>(
//!         &mut self,
//!         engine: &mut E,
//!     ) -> Result<(), E::Error> {
//!         transfer_resizable(self, engine)
//!     }
//! }
//! ```

use rancor::Source;

use crate::alloc::vec::Vec;

/// A fixed-width value with no internal structure.
///
/// Scalars are moved through the stream as their byte image. Decoding
/// validates the image, so types with invalid bit patterns (like `bool` and
/// `char`) reject them instead of producing undefined values.
pub trait Scalar: Copy {
    /// The byte image of the scalar.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Returns the byte image of this value.
    fn to_bytes(self) -> Self::Bytes;

    /// Rebuilds a value from its byte image.
    fn from_bytes<E: Source>(bytes: Self::Bytes) -> Result<Self, E>;
}

/// A sequence with a size query, random access, and a resize operation.
///
/// Decoding reuses the existing elements in place, truncates the surplus, and
/// appends default elements for the rest.
pub trait ResizableSequence {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Shortens the sequence to `len` elements. Does nothing if the sequence
    /// is already shorter.
    fn truncate(&mut self, len: usize);

    /// Appends an element.
    fn push(&mut self, item: Self::Item);

    /// Returns the elements as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

/// A sequence that can be cleared and appended to, but not resized by index.
pub trait NodeSequence {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Removes every element.
    fn clear(&mut self);

    /// Appends an element at the back.
    fn push_back(&mut self, item: Self::Item);

    /// Iterates the elements front to back.
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Self::Item>;
}

/// A sequence that can only be prepended to and reversed, and whose length is
/// only known by walking it.
pub trait SinglyLinkedSequence {
    /// The element type.
    type Item;

    /// Removes every element.
    fn clear(&mut self);

    /// Inserts an element at the front.
    fn push_front(&mut self, item: Self::Item);

    /// Reverses the order of the elements.
    fn reverse(&mut self);

    /// Iterates the elements front to back.
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Self::Item>;
}

/// A container filled by `insert` and iterated without indices: sets, maps,
/// and heaps.
///
/// Maps use `(K, V)` tuples as their items. Entries are inserted with the
/// container's own semantics, so a duplicate key in the stream replaces the
/// earlier entry in a map.
///
/// Keys cannot be borrowed mutably while they are inside the container, so
/// encoding moves the entries out with
/// [`take_entries`](Associative::take_entries) and puts them back with
/// [`restore_entries`](Associative::restore_entries).
pub trait Associative {
    /// The entry type.
    type Item;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Removes every entry.
    fn clear(&mut self);

    /// Inserts an entry.
    fn insert(&mut self, item: Self::Item);

    /// Moves every entry out of the container, leaving it empty.
    fn take_entries(&mut self) -> Vec<Self::Item>;

    /// Moves entries taken by [`take_entries`](Associative::take_entries)
    /// back into the container.
    fn restore_entries(&mut self, entries: Vec<Self::Item>) {
        for entry in entries {
            self.insert(entry);
        }
    }
}
