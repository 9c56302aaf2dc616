use crate::{
    alloc::vec::Vec, engine::strategy::transfer_resizable,
    shape::ResizableSequence, Engine, Shape, Transfer,
};

impl<T> ResizableSequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }
}

impl<T: Transfer + Default> Transfer for Vec<T> {
    const SHAPE: Shape = Shape::ResizableSequence;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        transfer_resizable(self, engine)
    }
}
