use crate::{engine::strategy::transfer_fixed, Engine, Shape, Transfer};

impl<T: Transfer, const N: usize> Transfer for [T; N] {
    const SHAPE: Shape = Shape::FixedArray;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        transfer_fixed(self.as_mut_slice(), engine)
    }
}

impl<T: Transfer> Transfer for [T] {
    const SHAPE: Shape = Shape::FixedArray;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        transfer_fixed(self, engine)
    }
}
