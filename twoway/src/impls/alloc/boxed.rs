use crate::{alloc::boxed::Box, Engine, Shape, Transfer};

// Boxes are transparent: the stream holds the contents without a flag.
impl<T: Transfer + ?Sized> Transfer for Box<T> {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        T::transfer(self, engine)
    }
}
