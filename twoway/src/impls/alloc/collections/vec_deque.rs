use crate::{
    alloc::collections::VecDeque, engine::strategy::transfer_node,
    shape::NodeSequence, Engine, Shape, Transfer,
};

impl<T> NodeSequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    #[inline]
    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }

    #[inline]
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        VecDeque::iter_mut(self)
    }
}

impl<T: Transfer + Default> Transfer for VecDeque<T> {
    const SHAPE: Shape = Shape::NodeSequence;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        transfer_node(self, engine)
    }
}
