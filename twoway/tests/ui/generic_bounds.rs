use std::fmt::Debug;

use twoway::Transfer;

#[derive(Transfer)]
#[transfer(bound = "T: Debug, U: Clone")]
struct Bounded<'a, T, U, const N: usize>
where
    T: Copy,
{
    values: [T; N],
    extra: Vec<U>,
    #[transfer(skip)]
    borrowed: Option<&'a str>,
}

fn main() {
    let mut value = Bounded::<u8, String, 2> {
        values: [1, 2],
        extra: vec!["three".to_string()],
        borrowed: Some("four"),
    };
    let _ = twoway::to_bytes::<_, twoway::rancor::Error>(&mut value);
}
