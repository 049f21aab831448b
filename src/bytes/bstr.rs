//! `bstr` integration for `ByteString`.
//!
//! With the `bstr` feature, `ByteString` dereferences to [`bstr::BStr`],
//! which brings string-like inspection methods to non-guaranteed-UTF-8
//! data, and becomes displayable.

use bstr::{BStr, BString, ByteSlice};

use crate::alloc::fmt;
use crate::alloc::vec::Vec;
use crate::backend::Backend;

use super::ByteString;

impl<B: Backend> AsRef<BStr> for ByteString<'_, B> {
    #[inline]
    fn as_ref(&self) -> &BStr {
        BStr::new(self.as_slice())
    }
}

impl<'borrow, B: Backend> From<&'borrow BStr> for ByteString<'borrow, B> {
    #[inline]
    fn from(value: &'borrow BStr) -> Self {
        Self::from(value.as_bytes())
    }
}

impl<B: Backend> From<BString> for ByteString<'_, B> {
    #[inline]
    fn from(value: BString) -> Self {
        Self::from(Vec::from(value))
    }
}

impl<B: Backend> fmt::Display for ByteString<'_, B> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.as_slice()), f)
    }
}
