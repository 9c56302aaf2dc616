mod inner {
    use twoway::Transfer;

    #[derive(Transfer, Default)]
    pub struct TestTuple(pub i32);

    #[derive(Transfer, Default)]
    pub struct TestStruct {
        pub value: i32,
        private: u8,
    }

    impl TestStruct {
        pub fn new(value: i32) -> Self {
            Self { value, private: 0 }
        }
    }

    #[derive(Transfer, Default)]
    pub struct TestUnit;
}

use inner::{TestStruct, TestTuple, TestUnit};
use twoway::{rancor::Error, to_bytes};

fn main() {
    let _ = to_bytes::<_, Error>(&mut TestTuple(42));
    let _ = to_bytes::<_, Error>(&mut TestStruct::new(42));
    let _ = to_bytes::<_, Error>(&mut TestUnit);
}
