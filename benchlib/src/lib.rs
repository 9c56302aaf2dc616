mod generate;

pub use divan;
pub use rand::Rng;
use rand_pcg::Lcg64Xsh32;

pub use self::generate::*;

/// Declares `encode`, `decode` and `decode_into` benchmarks for a dataset
/// along with a `main` that runs them.
#[macro_export]
macro_rules! bench_dataset {
    ($ty:ty = $generate:expr) => {
        #[$crate::divan::bench(min_time = std::time::Duration::from_secs(3))]
        pub fn encode(bencher: $crate::divan::Bencher) {
            let mut data = $generate;
            let mut bytes = Vec::<u8>::new();

            bencher.bench_local(|| {
                let mut buffer = core::mem::take(&mut bytes);
                buffer.clear();

                bytes = $crate::divan::black_box(
                    twoway::to_bytes_in::<_, _, twoway::rancor::Failure>(
                        $crate::divan::black_box(&mut data),
                        $crate::divan::black_box(buffer),
                    )
                    .unwrap(),
                );
            });
        }

        #[$crate::divan::bench(min_time = std::time::Duration::from_secs(3))]
        pub fn decode(bencher: $crate::divan::Bencher) {
            let bytes =
                twoway::to_bytes::<_, twoway::rancor::Failure>(&mut $generate)
                    .unwrap();

            bencher.bench_local(|| {
                twoway::from_bytes::<$ty, twoway::rancor::Failure>(
                    $crate::divan::black_box(&bytes),
                )
                .unwrap()
            })
        }

        #[$crate::divan::bench(min_time = std::time::Duration::from_secs(3))]
        pub fn decode_into(bencher: $crate::divan::Bencher) {
            let mut value = $generate;
            let bytes =
                twoway::to_bytes::<_, twoway::rancor::Failure>(&mut value)
                    .unwrap();

            bencher.bench_local(|| {
                twoway::from_bytes_into::<$ty, twoway::rancor::Failure>(
                    $crate::divan::black_box(&mut value),
                    $crate::divan::black_box(&bytes),
                )
                .unwrap();
            })
        }

        fn main() {
            $crate::divan::main();
        }
    };
}

pub fn rng() -> Lcg64Xsh32 {
    // nothing up our sleeves, state and stream are first 20 digits of pi
    const STATE: u64 = 3141592653;
    const STREAM: u64 = 5897932384;

    Lcg64Xsh32::new(STATE, STREAM)
}
