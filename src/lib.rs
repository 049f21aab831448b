//! Foundation value types built on one shared ownership model 🧱
//!
//! * copy-on-write **strings** in two widths, with reference-counted sharing
//! * no-alloc **inline storage** for small payloads
//! * no-copy `const` **literal wrapping**
//! * owner-scoped **string references** checked at compile time
//! * a type-erased **value container** with the same inline fast path
//!
//! # Examples
//!
//! ```rust
//! use plinth::ByteString;
//!
//! let greeting = ByteString::borrowed(b"hello");
//! let copy = greeting.clone(); // no copy, shared storage
//! assert!(greeting.is_shared_with(&copy));
//!
//! let mut copy = copy;
//! copy.push_slice(b" world"); // detaches before writing
//! assert!(!greeting.is_shared_with(&copy));
//! assert_eq!(greeting, b"hello");
//! assert_eq!(copy, b"hello world");
//! ```
//!
//! ```rust
//! use plinth::AnyValue;
//!
//! let mut v = AnyValue::new(42_i32);
//! assert_eq!(v.downcast_ref::<i32>(), Some(&42));
//! v = AnyValue::new(String::from("x"));
//! assert_eq!(v.downcast_ref::<i32>(), None);
//! ```
//!
//! # The Types
//!
//! - [`ByteString`](crate::bytes::ByteString) \
//!   an owning sequence of 8-bit code units
//! - [`UString`](crate::ustring::UString) \
//!   an owning sequence of wide (`char`) code units
//! - [`ByteStringRef`]/[`UStringRef`] \
//!   non-owning windows into one specific owning string
//! - [`AsciiStr`] \
//!   a validated, ownerless ASCII view
//! - [`AnyValue`] \
//!   one value of any type, stored inline when small enough
//!
//! # Three Representations
//!
//! Each owning string has three internal representations:
//!
//! - Borrowed literal data, constructed with `borrowed` — persistent, never
//!   freed, never mutated in place
//! - Inline sequence (up to the type's `inline_capacity()`)
//! - Shared reference-counted heap buffer
//!
//! Any mutation first *detaches*: shared or persistent storage is replaced
//! by an exclusive copy, so clones are O(1) and copies happen only when a
//! write actually requires one.
//!
//! # Two Backends
//!
//! The reference count is a plain cell by default ([`Local`]), so handles
//! sharing a buffer must stay on one thread; the compiler enforces this
//! (`Local`-backed strings are neither `Send` nor `Sync`). The [`Atomic`]
//! backend opts into cross-thread sharing of handles. Neither backend makes
//! concurrent mutation of a single handle safe; wrap the whole handle in a
//! lock for that.
//!
//! The crate root provides convenience aliases: [`ByteString`]/[`UString`]
//! use `Local`, [`AtomicByteString`]/[`AtomicUString`] use `Atomic`.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(not(feature = "std"))]
pub(crate) extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std as alloc;

mod any;
mod ascii;
pub mod backend;
pub mod bytes;
mod common;
mod macros;
mod raw;
mod smart;
pub mod ustring;
pub mod view;

pub use any::{AnyValue, TypeMismatchError};
pub use ascii::{AsciiError, AsciiStr};
pub use backend::{Atomic, Backend, Local};
pub use common::RangeError;
pub use view::{ByteStringRef, UStringRef};

/// Thread-local copy-on-write byte string.
pub type ByteString<'borrow> = bytes::ByteString<'borrow, Local>;

/// Thread-local copy-on-write wide string.
pub type UString<'borrow> = ustring::UString<'borrow, Local>;

/// Byte string whose shared storage may cross threads.
pub type AtomicByteString<'borrow> = bytes::ByteString<'borrow, Atomic>;

/// Wide string whose shared storage may cross threads.
pub type AtomicUString<'borrow> = ustring::UString<'borrow, Atomic>;
