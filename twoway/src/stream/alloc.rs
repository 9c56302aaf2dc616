use crate::{
    alloc::vec::Vec,
    stream::{Positional, Writer},
};

impl Positional for Vec<u8> {
    #[inline]
    fn pos(&self) -> usize {
        self.len()
    }
}

impl<E> Writer<E> for Vec<u8> {
    #[inline]
    fn write(&mut self, bytes: &[u8]) -> Result<(), E> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}
