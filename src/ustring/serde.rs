//! `serde` support for `UString`.
//!
//! A `UString` serializes as a UTF-8 string and deserializes from one,
//! transcoding at both boundaries.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alloc::string::String;
use crate::backend::Backend;

use super::UString;

impl<B: Backend> Serialize for UString<'_, B> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from(self))
    }
}

struct UnitsVisitor<'borrow, B>(PhantomData<UString<'borrow, B>>);

impl<'de, 'borrow, B: Backend> Visitor<'de> for UnitsVisitor<'borrow, B> {
    type Value = UString<'borrow, B>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string")
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(UString::from(v))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(UString::from(v))
    }
}

impl<'de, B: Backend> Deserialize<'de> for UString<'_, B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(UnitsVisitor(PhantomData))
    }
}
