use core::{fmt, iter::FusedIterator};

use crate::{
    alloc::boxed::Box, engine::strategy::transfer_singly_linked,
    shape::SinglyLinkedSequence, Engine, Shape, Transfer,
};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A singly-linked list.
///
/// Values can only be inserted and removed at the front, and finding the
/// length requires walking the whole list.
///
/// # Example
///
/// ```
/// use twoway::{
///     collections::ForwardList, from_bytes, rancor::Error, to_bytes,
/// };
///
/// let mut list = ForwardList::new();
/// list.push_front(3);
/// list.push_front(2);
/// list.push_front(1);
///
/// let bytes = to_bytes::<_, Error>(&mut list).unwrap();
/// let decoded = from_bytes::<ForwardList<i32>, Error>(&bytes).unwrap();
/// assert!(decoded.iter().eq([1, 2, 3].iter()));
/// ```
pub struct ForwardList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    /// Returns an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of values in the list.
    ///
    /// This walks the entire list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the first value, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the first value mutably, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Inserts a value at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Removes the first value and returns it.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            value
        })
    }

    /// Reverses the order of the values in place.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        // Unlink one node at a time so long lists don't overflow the stack.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }

    /// Moves every value of `other` to the back of this list.
    pub fn append(&mut self, other: &mut Self) {
        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        *tail = other.head.take();
    }

    /// Returns an iterator over the values.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Returns an iterator over the values that allows modifying them.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }
}

impl<T> Default for ForwardList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_front(value);
        }
        list.reverse();
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut other = iter.into_iter().collect();
        self.append(&mut other);
    }
}

/// An iterator over the values of a [`ForwardList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the values of a [`ForwardList`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the values of a [`ForwardList`].
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> SinglyLinkedSequence for ForwardList<T> {
    type Item = T;

    #[inline]
    fn clear(&mut self) {
        ForwardList::clear(self);
    }

    #[inline]
    fn push_front(&mut self, item: T) {
        ForwardList::push_front(self, item);
    }

    #[inline]
    fn reverse(&mut self) {
        ForwardList::reverse(self);
    }

    #[inline]
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        ForwardList::iter_mut(self)
    }
}

impl<T: Transfer + Default> Transfer for ForwardList<T> {
    const SHAPE: Shape = Shape::SinglyLinkedSequence;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        transfer_singly_linked(self, engine)
    }
}
