use core::ops::Range;

use crate::Rng;

pub trait Generate {
    fn generate<R: Rng>(rng: &mut R) -> Self;
}

impl Generate for () {
    fn generate<R: Rng>(_: &mut R) -> Self {}
}

impl Generate for bool {
    fn generate<R: Rng>(rng: &mut R) -> Self {
        rng.gen_bool(0.5)
    }
}

macro_rules! impl_generate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Generate for $ty {
                fn generate<R: Rng>(rng: &mut R) -> Self {
                    rng.gen()
                }
            }
        )*
    };
}

impl_generate!(u8, u16, u32, u64, i32, f32, f64);

impl<T: Generate, const N: usize> Generate for [T; N] {
    fn generate<R: Rng>(rng: &mut R) -> Self {
        core::array::from_fn(|_| T::generate(rng))
    }
}

impl<T: Generate> Generate for Option<T> {
    fn generate<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Some(T::generate(rng))
        } else {
            None
        }
    }
}

pub fn generate_vec<R: Rng, T: Generate>(
    rng: &mut R,
    range: Range<usize>,
) -> Vec<T> {
    let len = rng.gen_range(range);
    let mut result = Vec::with_capacity(len);
    for _ in 0..len {
        result.push(T::generate(rng));
    }
    result
}

pub fn generate_string<R: Rng>(rng: &mut R, range: Range<usize>) -> String {
    let len = rng.gen_range(range);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}
