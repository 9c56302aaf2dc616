macro_rules! impl_transfer_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Transfer for $ty {
                const SHAPE: $crate::Shape = $crate::Shape::Scalar;

                #[inline]
                fn transfer<E: $crate::Engine + ?Sized>(
                    &mut self,
                    engine: &mut E,
                ) -> Result<(), E::Error> {
                    $crate::engine::strategy::transfer_scalar(self, engine)
                }
            }
        )*
    };
}

mod alloc;
mod core;
#[cfg(feature = "hashbrown")]
mod hashbrown;
#[cfg(feature = "rend")]
mod rend;
#[cfg(feature = "std")]
mod std;
