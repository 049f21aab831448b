//! Conversion trait implementations for `ByteString`.

use crate::alloc::borrow::Cow;
use crate::alloc::boxed::Box;
use crate::alloc::vec::Vec;
use crate::backend::Backend;
use crate::raw::Raw;

use super::ByteString;

impl<B: Backend> AsRef<[u8]> for ByteString<'_, B> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

// Infallible conversions

impl<B: Backend> From<&[u8]> for ByteString<'_, B> {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Self(Raw::from_slice(value))
    }
}

impl<B: Backend, const N: usize> From<&[u8; N]> for ByteString<'_, B> {
    #[inline]
    fn from(value: &[u8; N]) -> Self {
        Self(Raw::from_slice(value))
    }
}

impl<B: Backend> From<Vec<u8>> for ByteString<'_, B> {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self(Raw::from_vec(value))
    }
}

impl<B: Backend> From<Box<[u8]>> for ByteString<'_, B> {
    #[inline]
    fn from(value: Box<[u8]>) -> Self {
        Self(Raw::from_vec(value.into_vec()))
    }
}

impl<'borrow, B: Backend> From<Cow<'borrow, [u8]>> for ByteString<'borrow, B> {
    #[inline]
    fn from(value: Cow<'borrow, [u8]>) -> Self {
        match value {
            Cow::Borrowed(borrow) => Self::borrowed(borrow),
            Cow::Owned(owned) => Self::from(owned),
        }
    }
}

impl<B: Backend> From<ByteString<'_, B>> for Vec<u8> {
    #[inline]
    fn from(value: ByteString<B>) -> Self {
        value.into_vec()
    }
}

impl<B: Backend> FromIterator<u8> for ByteString<'_, B> {
    #[inline]
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self(Raw::from_vec(iter.into_iter().collect()))
    }
}

impl<B: Backend> Extend<u8> for ByteString<'_, B> {
    #[inline]
    fn extend<T: IntoIterator<Item = u8>>(&mut self, iter: T) {
        for byte in iter {
            self.push(byte);
        }
    }
}

impl<'a, B: Backend> Extend<&'a u8> for ByteString<'_, B> {
    #[inline]
    fn extend<T: IntoIterator<Item = &'a u8>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied());
    }
}
