//! Containers that the standard library does not provide.

mod forward_list;

pub use self::forward_list::{ForwardList, IntoIter, Iter, IterMut};
