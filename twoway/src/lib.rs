//! # twoway
//!
//! twoway is a binary serialization library built around a single,
//! bidirectional method. A type describes its layout once, in
//! [`Transfer::transfer`], and the same code both writes the value to a byte
//! stream and reads it back.
//!
//! ## Design
//!
//! Like [rkyv](https://docs.rs/rkyv) and [serde](https://serde.rs), twoway
//! uses Rust's trait system instead of runtime type tags. Every supported type
//! has exactly one [`Transfer`] implementation, and that implementation picks
//! exactly one encoding strategy:
//!
//! - user types submit their fields in a fixed order,
//! - sequences and associative containers write a `u32` length prefix and
//!   then their elements,
//! - fixed-size arrays write their length and refuse to decode any other
//!   length,
//! - scalars copy their native byte image,
//! - optional values and [`Pointer`](pointer::Pointer)s write a not-null flag
//!   before their contents.
//!
//! Types that have no implementation are rejected at compile time. The
//! classifier behind these strategies lives in [`shape`], and the strategies
//! themselves in [`engine::strategy`].
//!
//! The direction of a transfer is a property of the [`Engine`], not of the
//! value. An [`Encoder`](engine::Encoder) wraps a [`Writer`](stream::Writer)
//! and a [`Decoder`](engine::Decoder) wraps a [`Reader`](stream::Reader).
//!
//! ## Format
//!
//! The format is deliberately simple: fixed-width scalars in host byte order,
//! `u32` length prefixes, and no type tags or framing around user types. It is
//! meant for data produced and consumed on the same kind of machine, such as
//! save files and caches. It has no schema evolution story.
//!
//! ## Features
//!
//! - `std`: Enables [`IoWriter`](stream::IoWriter),
//!   [`IoReader`](stream::IoReader) and the `HashMap` / `HashSet`
//!   implementations (enabled by default)
//! - `hashbrown`: Implements [`Transfer`] for hashbrown's maps and sets
//! - `rend`: Implements [`Transfer`] for rend's endian-aware primitives, which
//!   keep their fixed byte order on the wire
//!
//! ## Examples
//!
//! ```
//! use twoway::{from_bytes, rancor::Error, to_bytes, Transfer};
//!
//! #[derive(Transfer, Debug, Default, PartialEq)]
//! struct Example {
//!     name: String,
//!     value: i32,
//!     scores: Vec<u16>,
//! }
//!
//! let mut value = Example {
//!     name: "pi".to_string(),
//!     value: 31415926,
//!     scores: vec![1, 2, 3],
//! };
//!
//! let bytes = to_bytes::<_, Error>(&mut value).unwrap();
//! let decoded = from_bytes::<Example, Error>(&bytes).unwrap();
//! assert_eq!(decoded, value);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    rustdoc::broken_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod api;
pub mod archive;
pub mod collections;
pub mod engine;
pub mod error;
mod impls;
pub mod pointer;
pub mod shape;
pub mod stream;
mod traits;

pub use ::rancor;
#[doc(inline)]
pub use api::{from_bytes, from_bytes_into, to_bytes, to_bytes_in};
#[doc(inline)]
pub use archive::Archive;
pub use traits::*;
/// Derives [`Transfer`](trait@Transfer) for the labeled struct.
///
/// Fields are transferred in declaration order. Each transferred field type
/// gets a `Transfer` bound.
///
/// # Attributes
///
/// Container attributes, written `#[transfer(...)]` on the struct:
///
/// - `bound = "..."`: Adds additional where predicates to the generated
///   implementation.
/// - `crate = path`: Chooses an alternative path to import twoway from.
///
/// Field attributes, written `#[transfer(...)]` on a field:
///
/// - `skip`: Leaves the field out of the stream. It keeps whatever value it
///   had when decoding.
/// - `omit_bounds`: Suppresses the `Transfer` bound for the field. Recursive
///   types need this to avoid overflowing trait evaluation.
///
/// Enums and unions are rejected.
pub use twoway_derive::Transfer;
