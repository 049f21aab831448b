//! Validated ASCII views.
//!
//! [`AsciiStr`] is an ownerless view: a plain slice wrapper with no owner
//! relationship at all, valid exactly as long as the memory it points to.
//! Its single invariant — every byte is ASCII — makes it convertible for
//! free to `&str` and cheaply to either owning string width.

use core::{error, fmt};

use crate::backend::Backend;
use crate::bytes::ByteString;
use crate::ustring::UString;

/// Borrowed byte slice validated to be pure ASCII.
///
/// # Examples
///
/// ```
/// # use plinth::AsciiStr;
/// let a = AsciiStr::from_bytes(b"plain ascii").unwrap();
/// assert_eq!(a.as_str(), "plain ascii");
/// assert!(AsciiStr::from_bytes(b"caf\xC3\xA9").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AsciiStr<'a>(&'a [u8]);

impl<'a> AsciiStr<'a> {
    /// Creates an `AsciiStr` from a byte slice, validating it.
    ///
    /// # Errors
    ///
    /// Returns an [`AsciiError`] locating the first non-ASCII byte.
    #[inline]
    pub const fn from_bytes(bytes: &'a [u8]) -> Result<Self, AsciiError> {
        let mut i = 0;
        while i < bytes.len() {
            if !bytes[i].is_ascii() {
                return Err(AsciiError {
                    position: i,
                    byte: bytes[i],
                });
            }
            i += 1;
        }
        Ok(Self(bytes))
    }

    /// Creates an `AsciiStr` from a string slice, validating it.
    ///
    /// # Errors
    ///
    /// Returns an [`AsciiError`] locating the first non-ASCII byte.
    #[inline]
    pub const fn from_str(str: &'a str) -> Result<Self, AsciiError> {
        Self::from_bytes(str.as_bytes())
    }

    /// Creates an `AsciiStr` without validating.
    ///
    /// # Safety
    ///
    /// Every byte of `bytes` must be ASCII (`< 0x80`).
    #[inline]
    #[must_use]
    pub const unsafe fn from_bytes_unchecked(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    /// Returns the view as a byte slice.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the view as a string slice, for free.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        // SAFETY: type invariant, ASCII is valid UTF-8
        unsafe { core::str::from_utf8_unchecked(self.0) }
    }

    /// Returns the length of the view.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the view is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wraps the view into a [`ByteString`] without copying.
    ///
    /// The result borrows the same persistent data.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plinth::AsciiStr;
    /// let a = AsciiStr::from_bytes(b"hello").unwrap();
    /// let s = a.to_byte_string::<plinth::Local>();
    /// assert!(s.is_borrowed());
    /// ```
    #[inline]
    #[must_use]
    pub const fn to_byte_string<B: Backend>(&self) -> ByteString<'a, B> {
        ByteString::borrowed(self.0)
    }

    /// Widens the view into a [`UString`].
    ///
    /// A copy: the unit widths differ, so the buffer cannot be shared.
    #[inline]
    #[must_use]
    pub fn to_ustring<B: Backend>(&self) -> UString<'static, B> {
        self.0.iter().map(|&b| char::from(b)).collect()
    }
}

impl fmt::Display for AsciiStr<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for AsciiStr<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<'a> TryFrom<&'a [u8]> for AsciiStr<'a> {
    type Error = AsciiError;

    #[inline]
    fn try_from(bytes: &'a [u8]) -> Result<Self, AsciiError> {
        Self::from_bytes(bytes)
    }
}

impl<'a> TryFrom<&'a str> for AsciiStr<'a> {
    type Error = AsciiError;

    #[inline]
    fn try_from(str: &'a str) -> Result<Self, AsciiError> {
        Self::from_str(str)
    }
}

impl PartialEq<[u8]> for AsciiStr<'_> {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<str> for AsciiStr<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for AsciiStr<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AsciiStr<'_> {
    #[inline]
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de: 'a, 'a> serde::Deserialize<'de> for AsciiStr<'a> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BorrowedVisitor;

        impl<'de> serde::de::Visitor<'de> for BorrowedVisitor {
            type Value = AsciiStr<'de>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a borrowed ASCII string")
            }

            fn visit_borrowed_str<E: serde::de::Error>(
                self,
                v: &'de str,
            ) -> Result<Self::Value, E> {
                AsciiStr::from_str(v).map_err(E::custom)
            }

            fn visit_borrowed_bytes<E: serde::de::Error>(
                self,
                v: &'de [u8],
            ) -> Result<Self::Value, E> {
                AsciiStr::from_bytes(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BorrowedVisitor)
    }
}

/// A possible error value when validating an ASCII view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiError {
    position: usize,
    byte: u8,
}

impl AsciiError {
    /// Returns the position of the first non-ASCII byte.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the value of the first non-ASCII byte.
    #[inline]
    #[must_use]
    pub const fn byte(&self) -> u8 {
        self.byte
    }
}

impl error::Error for AsciiError {}

impl fmt::Display for AsciiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "non-ASCII byte 0x{:02X} at position {}",
            self.byte, self.position
        )
    }
}
