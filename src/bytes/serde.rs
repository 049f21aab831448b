//! `serde` support for `ByteString`.
//!
//! `ByteString` serializes as a byte sequence. Deserialization accepts byte
//! sequences, strings, and sequences of integers; use
//! [`borrow_deserialize`] to borrow from the input where the format allows.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alloc::vec::Vec;
use crate::backend::Backend;

use super::ByteString;

impl<B: Backend> Serialize for ByteString<'_, B> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_slice())
    }
}

struct BytesVisitor<'borrow, B>(PhantomData<ByteString<'borrow, B>>);

impl<'de, 'borrow, B: Backend> Visitor<'de> for BytesVisitor<'borrow, B> {
    type Value = ByteString<'borrow, B>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a byte sequence")
    }

    fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(ByteString::from(v))
    }

    fn visit_byte_buf<E: Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(ByteString::from(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ByteString::from(v.as_bytes()))
    }

    fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut bytes = ByteString::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(bytes)
    }
}

impl<'de, B: Backend> Deserialize<'de> for ByteString<'_, B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(BytesVisitor(PhantomData))
    }
}

/// Deserializes a `ByteString` as a borrow of the input if possible.
///
/// ```
/// # use serde::Deserialize;
/// # use plinth::bytes::ByteString;
/// # use plinth::Local;
/// #[derive(Deserialize)]
/// struct MyStruct<'a> {
///     #[serde(borrow, deserialize_with = "plinth::bytes::serde::borrow_deserialize")]
///     field: ByteString<'a, Local>,
/// }
///
/// let s: MyStruct = serde_json::from_str(r#"{"field": "abc"}"#).unwrap();
/// assert!(s.field.is_borrowed());
/// ```
///
/// # Errors
///
/// Returns a deserializer error if the input is not a byte sequence.
pub fn borrow_deserialize<'de: 'a, 'a, D, B>(deserializer: D) -> Result<ByteString<'a, B>, D::Error>
where
    D: Deserializer<'de>,
    B: Backend,
{
    struct BorrowingVisitor<'borrow, B>(PhantomData<ByteString<'borrow, B>>);

    impl<'de: 'borrow, 'borrow, B: Backend> Visitor<'de> for BorrowingVisitor<'borrow, B> {
        type Value = ByteString<'borrow, B>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a byte sequence")
        }

        fn visit_borrowed_bytes<E: Error>(self, v: &'de [u8]) -> Result<Self::Value, E> {
            Ok(ByteString::borrowed(v))
        }

        fn visit_borrowed_str<E: Error>(self, v: &'de str) -> Result<Self::Value, E> {
            Ok(ByteString::borrowed(v.as_bytes()))
        }

        fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            Ok(ByteString::from(v))
        }

        fn visit_byte_buf<E: Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
            Ok(ByteString::from(v))
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(ByteString::from(v.as_bytes()))
        }
    }

    deserializer.deserialize_bytes(BorrowingVisitor(PhantomData))
}
