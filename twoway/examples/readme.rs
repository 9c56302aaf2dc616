use std::collections::HashMap;

use twoway::{
    from_bytes, from_bytes_into, pointer::Pointer, rancor::Error, to_bytes,
    Archive, Transfer,
};

#[derive(Transfer, Debug, Default, PartialEq)]
struct Test {
    int: u8,
    string: String,
    option: Option<Vec<i32>>,
    // Scratch space that never reaches the stream
    #[transfer(skip)]
    cache: HashMap<u8, String>,
}

fn main() {
    let mut value = Test {
        int: 42,
        string: "hello world".to_string(),
        option: Some(vec![1, 2, 3, 4]),
        cache: HashMap::new(),
    };

    // Encoding is a single function call
    let bytes = to_bytes::<_, Error>(&mut value).unwrap();

    // So is decoding, into a fresh value
    let decoded = from_bytes::<Test, Error>(&bytes).unwrap();
    assert_eq!(decoded, value);

    // Or into an existing one, reusing its allocations
    let mut reused = Test::default();
    let rest = from_bytes_into::<_, Error>(&mut reused, &bytes).unwrap();
    assert!(rest.is_empty());
    assert_eq!(reused, value);

    // Several values can share one stream
    let mut archive = Archive::<_, Error>::encoder(Vec::<u8>::new());
    let mut heap = Pointer::single(24u32);
    archive
        .transfer(&mut value)
        .unwrap()
        .transfer(&mut heap)
        .unwrap();
    let bytes = archive.into_inner();

    let mut archive =
        Archive::<_, Error>::decoder(twoway::stream::SliceReader::new(&bytes));
    let mut test = Test::default();
    let mut pointer = Pointer::<u32>::default();
    archive
        .transfer(&mut test)
        .unwrap()
        .transfer(&mut pointer)
        .unwrap();
    assert_eq!(test, value);
    assert_eq!(pointer.as_slice(), [24]);
}
