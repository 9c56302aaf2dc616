#![allow(non_camel_case_types)]

use twoway::Transfer;

#[derive(Transfer, Debug, Default, PartialEq)]
struct r#virtual {
    r#virtual: i32,
    r#try: (u8, r#type),
}

#[derive(Transfer, Debug, Default, PartialEq)]
struct r#type(i64);

fn main() {}
